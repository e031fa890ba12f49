use std::collections::VecDeque;

use dash_engine::coords::Rect;
use dash_engine::core::{Flow, Game, GameLogic};
use dash_engine::graphics::{self, Graphics};
use dash_engine::input::{Input, Key, PointerButton};
use dash_engine::paint::Color;
use dash_engine::resources::ResourceManager;
use dash_engine::sprite::{Axis, Sprite};
use dash_engine::time::FrameTime;

use crate::assets;

const PLAYER_W: i32 = 64;
const BALL_SIZE: f32 = 32.0;
/// Distance from the bottom edge to the player's top.
const PLAYER_BOTTOM_GAP: f32 = 150.0;

const SPAWN_INTERVAL: f32 = 0.9;
const START_SPEED: f32 = 180.0;
const SPEED_STEP: f32 = 12.0;
const BAR_FULL_AT: u32 = 20;

const BACKDROP: Color = Color::from_argb(0xFF20_2028);

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Tone {
    White,
    Black,
}

impl Tone {
    fn flip(self) -> Self {
        match self {
            Tone::White => Tone::Black,
            Tone::Black => Tone::White,
        }
    }

    fn frame(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
struct Ball {
    y: f32,
    tone: Tone,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Phase {
    Playing,
    Over,
}

struct Sprites {
    background: Sprite,
    logo: Sprite,
    players: Vec<Sprite>,
    balls: Vec<Sprite>,
    arrow: Sprite,
    bar: Sprite,
    game_over: Sprite,
}

/// Balls fall down the middle lane; switch the player's colour to match each
/// one before it lands. Space or a left click switches, Escape quits.
pub struct SwitchDash {
    sprites: Option<Sprites>,
    phase: Phase,
    player: Tone,
    balls: VecDeque<Ball>,
    speed: f32,
    spawn_in: f32,
    score: u32,
    best: u32,
    fade: f32,
    seed: u32,
}

impl SwitchDash {
    pub fn new() -> Self {
        Self {
            sprites: None,
            phase: Phase::Playing,
            player: Tone::White,
            balls: VecDeque::new(),
            speed: START_SPEED,
            spawn_in: SPAWN_INTERVAL,
            score: 0,
            best: 0,
            fade: 0.0,
            seed: 0x9E37_79B9,
        }
    }

    fn restart(&mut self) {
        log::info!("restart (best {})", self.best);
        self.phase = Phase::Playing;
        self.balls.clear();
        self.speed = START_SPEED;
        self.spawn_in = SPAWN_INTERVAL;
        self.score = 0;
        self.fade = 0.0;
    }

    // xorshift32
    fn next_tone(&mut self) -> Tone {
        let mut x = self.seed;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.seed = x;
        if x & 1 == 0 { Tone::White } else { Tone::Black }
    }

    fn step(&mut self, dt: f32, surface_height: f32) {
        self.spawn_in -= dt;
        if self.spawn_in <= 0.0 {
            let tone = self.next_tone();
            self.balls.push_back(Ball { y: -BALL_SIZE, tone });
            self.spawn_in += SPAWN_INTERVAL;
        }

        for ball in &mut self.balls {
            ball.y += self.speed * dt;
        }

        let landing = player_y(surface_height) as f32 - BALL_SIZE;
        while let Some(ball) = self.balls.front().copied() {
            if ball.y < landing {
                break;
            }
            self.balls.pop_front();

            if ball.tone != self.player {
                self.best = self.best.max(self.score);
                log::info!("game over: score {}", self.score);
                self.phase = Phase::Over;
                self.fade = 0.0;
                return;
            }
            self.score += 1;
            self.speed += SPEED_STEP;
        }
    }
}

impl Default for SwitchDash {
    fn default() -> Self {
        Self::new()
    }
}

fn player_y(surface_height: f32) -> i32 {
    (surface_height - PLAYER_BOTTOM_GAP) as i32
}

impl GameLogic for SwitchDash {
    fn init(&mut self, game: &mut dyn Game, resources: &mut ResourceManager) -> anyhow::Result<()> {
        resources.load_all(game.graphics(), assets::ALL)?;

        self.sprites = Some(Sprites {
            background: resources.sprite_full(assets::BACKGROUND)?,
            logo: resources.sprite_full(assets::LOGO)?,
            players: resources.sprite_sheet(assets::PLAYERS, 2, 1)?,
            balls: resources.sprite_sheet(assets::BALLS, 2, 1)?,
            arrow: resources.sprite_full(assets::ARROW)?,
            // A single pixel; only ever drawn scaled.
            bar: resources.sprite(assets::BAR, Rect::new(0, 0, 1, 1))?,
            game_over: resources.sprite_full(assets::GAME_OVER)?,
        });
        Ok(())
    }

    fn update(&mut self, game: &mut dyn Game, time: FrameTime) -> Flow {
        let input = game.input();
        if input.key_pressed(Key::Escape) {
            return Flow::Exit;
        }
        let switch = input.key_pressed(Key::Space) || input.button_pressed(PointerButton::Left);

        let height = game.graphics().height() as f32;

        match self.phase {
            Phase::Playing => {
                if switch {
                    self.player = self.player.flip();
                }
                self.step(time.dt, height);
            }
            Phase::Over => {
                self.fade = (self.fade + time.dt * 2.0).min(1.0);
                if switch && self.fade >= 1.0 {
                    self.restart();
                }
            }
        }
        Flow::Continue
    }

    fn render(&mut self, g: &mut dyn Graphics) -> graphics::Result<()> {
        g.clear(BACKDROP);
        let Some(s) = self.sprites.as_ref() else {
            return Ok(());
        };

        let size = g.size();
        let cx = (size.width / 2) as i32;

        s.background.draw_scaled(g, size.to_rect(), 1.0)?;
        s.logo.draw_centered_axis(g, cx, Axis::X, 1.0)?;
        s.arrow.draw_centered_axis(g, (size.height / 2) as i32, Axis::Y, 0.5)?;

        for ball in &self.balls {
            let half = BALL_SIZE as i32 / 2;
            s.balls[ball.tone.frame()].draw(g, cx - half, ball.y as i32, 1.0)?;
        }
        s.players[self.player.frame()].draw(g, cx - PLAYER_W / 2, player_y(size.height as f32), 1.0)?;

        let filled = size.width * self.score.min(BAR_FULL_AT) / BAR_FULL_AT;
        s.bar.draw_scaled(g, Rect::new(0, size.height as i32 - 8, filled, 8), 0.8)?;

        if self.phase == Phase::Over {
            s.game_over.draw_centered(g, self.fade)?;
        }
        Ok(())
    }
}
