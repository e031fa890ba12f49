//! Built-in artwork, generated at startup so the demo runs without an asset
//! directory. Passing a directory on the command line replaces all of it; the
//! files there must use the same names and layouts.

use std::io::Cursor;

use anyhow::{Context, Result};
use image::{ImageFormat, Rgba, RgbaImage};

use dash_engine::resources::MemorySource;

pub const BACKGROUND: &str = "background.png";
pub const LOGO: &str = "logo.png";
/// Two 64x32 frames: white, black.
pub const PLAYERS: &str = "players.png";
/// Two 32x32 frames: white, black.
pub const BALLS: &str = "balls.png";
pub const ARROW: &str = "arrow.png";
pub const BAR: &str = "bar.png";
pub const GAME_OVER: &str = "gameover.png";

pub const ALL: [&str; 7] = [BACKGROUND, LOGO, PLAYERS, BALLS, ARROW, BAR, GAME_OVER];

const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);
const WHITE: Rgba<u8> = Rgba([240, 240, 240, 255]);
const BLACK: Rgba<u8> = Rgba([16, 16, 16, 255]);
const EDGE: Rgba<u8> = Rgba([128, 128, 128, 255]);

pub fn builtin() -> Result<MemorySource> {
    let mut source = MemorySource::new();
    for (name, img) in [
        (BACKGROUND, background()),
        (LOGO, logo()),
        (PLAYERS, players()),
        (BALLS, balls()),
        (ARROW, arrow()),
        (BAR, RgbaImage::from_pixel(1, 1, WHITE)),
        (GAME_OVER, game_over()),
    ] {
        source.insert(name, encode(&img).with_context(|| format!("encoding {name}"))?);
    }
    Ok(source)
}

fn encode(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}

fn background() -> RgbaImage {
    RgbaImage::from_fn(16, 16, |x, y| {
        if (x / 8 + y / 8) % 2 == 0 {
            Rgba([36, 38, 48, 255])
        } else {
            Rgba([44, 46, 58, 255])
        }
    })
}

fn logo() -> RgbaImage {
    framed(256, 48, Rgba([255, 213, 79, 255]), Rgba([191, 144, 0, 255]))
}

fn game_over() -> RgbaImage {
    framed(320, 80, Rgba([198, 40, 40, 255]), Rgba([120, 20, 20, 255]))
}

fn players() -> RgbaImage {
    RgbaImage::from_fn(128, 32, |x, y| {
        let lx = x % 64;
        if lx == 0 || lx == 63 || y == 0 || y == 31 {
            EDGE
        } else if x < 64 {
            WHITE
        } else {
            BLACK
        }
    })
}

fn balls() -> RgbaImage {
    RgbaImage::from_fn(64, 32, |x, y| {
        let dx = (x % 32) as i32 - 16;
        let dy = y as i32 - 16;
        let d2 = dx * dx + dy * dy;
        if d2 > 15 * 15 {
            CLEAR
        } else if d2 > 13 * 13 {
            EDGE
        } else if x < 32 {
            WHITE
        } else {
            BLACK
        }
    })
}

/// Right-pointing triangle.
fn arrow() -> RgbaImage {
    RgbaImage::from_fn(32, 64, |x, y| {
        let half = (32 - y as i32).unsigned_abs();
        if x < 32 - half { WHITE } else { CLEAR }
    })
}

fn framed(width: u32, height: u32, fill: Rgba<u8>, border: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        if x < 3 || y < 3 || x >= width - 3 || y >= height - 3 {
            border
        } else {
            fill
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dash_engine::resources::AssetSource;

    #[test]
    fn every_asset_is_present_and_decodes() {
        let source = builtin().unwrap();
        assert_eq!(source.len(), ALL.len());
        for name in ALL {
            let bytes = source.read(name).unwrap();
            assert!(image::load_from_memory(&bytes).is_ok(), "{name}");
        }
    }

    #[test]
    fn sheets_have_documented_layout() {
        assert_eq!(players().dimensions(), (128, 32));
        assert_eq!(balls().dimensions(), (64, 32));
        assert_eq!(balls().get_pixel(0, 0), &CLEAR);
        assert_eq!(balls().get_pixel(16, 16), &WHITE);
        assert_eq!(balls().get_pixel(48, 16), &BLACK);
    }
}
