use std::sync::Mutex;
use std::time::Duration;

use bevy_ecs::prelude::*;

use crate::board::{Board, Rules};
use crate::components::{Cell, GameState, GemColor, Input, Position};
use crate::game::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::presenter::Presenter;

/// Serializes tests that point the config loader somewhere through the environment.
pub static CONFIG_ENV_LOCK: Mutex<()> = Mutex::new(());

/// Colors laid out so that no row or column holds three equal gems in a row.
#[must_use]
pub fn stable_rows() -> [[GemColor; BOARD_WIDTH]; BOARD_HEIGHT] {
    let mut rows = [[GemColor::Red; BOARD_WIDTH]; BOARD_HEIGHT];
    for (y, row) in rows.iter_mut().enumerate() {
        for (x, color) in row.iter_mut().enumerate() {
            *color = GemColor::ALL[(x + 2 * y) % GemColor::ALL.len()];
        }
    }
    rows
}

/// Default rules without bonus drops, so tests control every bonus on the board.
#[must_use]
pub fn quiet_rules() -> Rules {
    Rules {
        bonus_drop_percent: 0,
        ..Rules::default()
    }
}

#[must_use]
pub fn stable_board(seed: u64) -> Board {
    Board::from_colors(stable_rows(), quiet_rules(), fastrand::Rng::with_seed(seed))
}

pub fn paint(board: &mut Board, cells: &[(usize, usize)], color: GemColor) {
    for &(x, y) in cells {
        board.set_cell(Position::new(x, y), Cell::gem(color));
    }
}

#[must_use]
pub fn snapshot(board: &Board) -> Vec<Cell> {
    board.iter().map(|(_, cell)| cell).collect()
}

// Helper function to create a test world around a given board
#[must_use]
pub fn create_test_world(board: Board) -> World {
    let mut world = World::new();
    world.insert_resource(board);
    world.insert_resource(GameState::default());
    world.insert_resource(Input::default());
    world
}

/// Presenter that remembers every frame and pause it was asked for.
#[derive(Debug, Default)]
pub struct Recorder {
    pub frames: Vec<Vec<Cell>>,
    pub scores: Vec<u32>,
    pub waits: Vec<Duration>,
    pub cascade_steps: Vec<Option<u32>>,
}

impl Presenter for Recorder {
    fn render(&mut self, board: &Board) {
        self.frames.push(snapshot(board));
        self.scores.push(board.score());
        self.cascade_steps
            .push(board.cascade_in_progress().map(|report| report.steps));
    }

    fn wait_visible(&mut self, duration: Duration) {
        self.waits.push(duration);
    }
}
