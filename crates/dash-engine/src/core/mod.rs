//! Contracts between the platform loop and game logic.
//!
//! A backend implements [`Game`] (it owns the surface and the input feed) and
//! drives a [`GameLogic`] once per frame. Game logic never names a backend
//! type, so the same game runs on any platform whose entry point wires it up.

mod game;
mod logic;

pub use game::Game;
pub use logic::{Flow, GameLogic};
