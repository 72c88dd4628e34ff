#![warn(clippy::all, clippy::pedantic)]

pub mod bonus;
pub mod cascade;
pub mod gravity;
pub mod matching;

use std::time::Duration;

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::{Cell, GemColor, Position};
use crate::game::{
    BOARD_HEIGHT, BOARD_WIDTH, BOMB_BLAST_COUNT, BONUS_DROP_PERCENT, BONUS_TRIGGERED_MS,
    RUN_CLEARED_MS, SWAP_REVERT_MS,
};

pub use bonus::BonusEffect;
pub use cascade::{CascadeReport, RunReport, TapOutcome};
pub use matching::{Orientation, Run};

/// Pauses the engine requests from the presenter between visible steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub swap_revert: Duration,
    pub run_cleared: Duration,
    pub bonus_triggered: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            swap_revert: Duration::from_millis(SWAP_REVERT_MS),
            run_cleared: Duration::from_millis(RUN_CLEARED_MS),
            bonus_triggered: Duration::from_millis(BONUS_TRIGGERED_MS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Chance out of 100 that a new bonus appears after a run is cleared.
    pub bonus_drop_percent: u8,
    pub bomb_blast_count: usize,
    pub pacing: Pacing,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            bonus_drop_percent: BONUS_DROP_PERCENT,
            bomb_blast_count: BOMB_BLAST_COUNT,
            pacing: Pacing::default(),
        }
    }
}

/// The board engine: grid of gems, score, current selection and the random source
/// feeding refills and bonus effects.
#[derive(Resource, Debug, Clone)]
pub struct Board {
    cells: Vec<Cell>,
    score: u32,
    selection: Option<Position>,
    rules: Rules,
    rng: fastrand::Rng,
    // Running totals while `resolve_cascade` is on the stack
    cascade: Option<CascadeReport>,
}

impl Board {
    /// Seeds every cell at random, then removes any runs the seeding produced.
    #[must_use]
    pub fn new(rules: Rules, rng: fastrand::Rng) -> Self {
        let mut board = Self {
            cells: vec![Cell::EMPTY; BOARD_WIDTH * BOARD_HEIGHT],
            score: 0,
            selection: None,
            rules,
            rng,
            cascade: None,
        };
        board.refill();
        board.normalize();
        debug!("Board seeded without runs");
        board
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Rules::default(), fastrand::Rng::with_seed(seed))
    }

    /// Builds a board from explicit colors given row by row (`rows[y][x]`).
    /// The layout is taken as-is; existing runs are left in place.
    #[must_use]
    pub fn from_colors(
        rows: [[GemColor; BOARD_WIDTH]; BOARD_HEIGHT],
        rules: Rules,
        rng: fastrand::Rng,
    ) -> Self {
        let mut cells = Vec::with_capacity(BOARD_WIDTH * BOARD_HEIGHT);
        for row in rows {
            cells.extend(row.into_iter().map(Cell::gem));
        }

        Self {
            cells,
            score: 0,
            selection: None,
            rules,
            rng,
            cascade: None,
        }
    }

    fn index(position: Position) -> usize {
        assert!(
            position.in_bounds(),
            "position ({}, {}) is outside the board",
            position.x,
            position.y
        );
        position.x + position.y * BOARD_WIDTH
    }

    #[must_use]
    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    #[must_use]
    pub fn height(&self) -> usize {
        BOARD_HEIGHT
    }

    #[must_use]
    pub fn cell(&self, position: Position) -> Cell {
        self.cells[Self::index(position)]
    }

    #[must_use]
    pub fn color_at(&self, position: Position) -> Option<GemColor> {
        self.cell(position).color
    }

    pub fn set_cell(&mut self, position: Position, cell: Cell) {
        let index = Self::index(position);
        self.cells[index] = cell;
    }

    /// Iterates over every cell with its position, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(index, cell)| {
            (
                Position::new(index % BOARD_WIDTH, index / BOARD_WIDTH),
                *cell,
            )
        })
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Totals of the cascade being resolved, up to the last completed step. `None` outside
    /// of `resolve_cascade`.
    #[must_use]
    pub fn cascade_in_progress(&self) -> Option<&CascadeReport> {
        self.cascade.as_ref()
    }

    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Exchanges the gem colors of two orthogonally adjacent cells. Bonuses stay on their
    /// cells. Swapping the same pair again undoes the exchange.
    pub fn swap_cells(&mut self, a: Position, b: Position) {
        assert!(
            a.is_adjacent(b),
            "cells ({}, {}) and ({}, {}) are not adjacent",
            a.x,
            a.y,
            b.x,
            b.y
        );
        let (a_index, b_index) = (Self::index(a), Self::index(b));
        let a_color = self.cells[a_index].color;
        self.cells[a_index].color = self.cells[b_index].color;
        self.cells[b_index].color = a_color;
    }

    fn empty_cell(&mut self, position: Position) {
        self.set_cell(position, Cell::EMPTY);
    }

    fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}
