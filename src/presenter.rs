#![warn(clippy::all, clippy::pedantic)]

use std::time::Duration;

use crate::board::Board;

/// Presentation hooks the engine calls while it mutates the board.
///
/// `render` runs after every visible step (selection change, swap, run clear, bonus,
/// refill). `wait_visible` asks for a pause so the player can follow the cascade.
pub trait Presenter {
    fn render(&mut self, board: &Board);

    fn wait_visible(&mut self, duration: Duration);
}

/// Presenter for tests and headless runs: draws nothing and never sleeps.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl Presenter for Headless {
    fn render(&mut self, _board: &Board) {}

    fn wait_visible(&mut self, _duration: Duration) {}
}
