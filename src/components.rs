#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow sign loss when going from signed to unsigned types since we validate values are non-negative before casting
    clippy::cast_sign_loss,
    // Allow potential wrapping when casting between types as board coordinates are within reasonable ranges
    clippy::cast_possible_wrap
)]

use bevy_ecs::prelude::*;

use crate::game::{BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GemColor {
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
}

impl GemColor {
    pub const ALL: [GemColor; crate::game::COLOR_COUNT] = [
        GemColor::Red,
        GemColor::Green,
        GemColor::Blue,
        GemColor::Yellow,
        GemColor::Magenta,
    ];

    #[must_use]
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        Self::ALL[rng.usize(..Self::ALL.len())]
    }

    #[must_use]
    pub fn get_color(self) -> ratatui::style::Color {
        match self {
            GemColor::Red => ratatui::style::Color::Red,
            GemColor::Green => ratatui::style::Color::Green,
            GemColor::Blue => ratatui::style::Color::Blue,
            GemColor::Yellow => ratatui::style::Color::Yellow,
            GemColor::Magenta => ratatui::style::Color::Magenta,
        }
    }
}

/// Special marker riding on a gem, triggered when the gem is cleared as part of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bonus {
    Bomb,
    /// Paints its color onto two diagonal neighbors.
    Brush(GemColor),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub color: Option<GemColor>,
    pub bonus: Option<Bonus>,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        color: None,
        bonus: None,
    };

    #[must_use]
    pub fn gem(color: GemColor) -> Self {
        Self {
            color: Some(color),
            bonus: None,
        }
    }

    #[must_use]
    pub fn with_bonus(color: GemColor, bonus: Bonus) -> Self {
        Self {
            color: Some(color),
            bonus: Some(bonus),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[must_use]
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn in_bounds(self) -> bool {
        self.x < BOARD_WIDTH && self.y < BOARD_HEIGHT
    }

    /// Returns the neighboring position at the given offset, or `None` if it falls off the board.
    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Position> {
        let x = self.x as i64 + i64::from(dx);
        let y = self.y as i64 + i64::from(dy);

        if x < 0 || y < 0 || x >= BOARD_WIDTH as i64 || y >= BOARD_HEIGHT as i64 {
            return None;
        }

        Some(Position {
            x: x as usize,
            y: y as usize,
        })
    }

    /// True when the two positions share a row or column and are one step apart.
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

// Input state collected from the terminal between system runs
#[derive(Resource, Debug, Clone, Default)]
pub struct Input {
    pub tap: Option<Position>, // Cell tapped by mouse or keyboard, consumed by the tap system
    pub cursor: Position,      // Keyboard cursor
    pub restart: bool,
}

impl Input {
    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        if let Some(next) = self.cursor.offset(dx, dy) {
            self.cursor = next;
        }
    }

    pub fn tap_cursor(&mut self) {
        self.tap = Some(self.cursor);
    }
}

// Statistics for the current session; the score itself lives on the board
#[derive(Debug, Resource, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    pub moves: u32,
    pub reverted_swaps: u32,
    pub runs_cleared: u32,
    pub cells_cleared: u32,
    pub bombs_triggered: u32,
    pub brushes_triggered: u32,
    pub bonuses_dropped: u32,
    pub longest_cascade: u32,
}

impl GameState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
