#![warn(clippy::all, clippy::pedantic)]

use log::trace;

use super::Board;
use crate::components::{Cell, GemColor, Position};
use crate::game::{BOARD_HEIGHT, BOARD_WIDTH};

impl Board {
    /// Lets gems fall into the gaps below them. Each column is compacted on its own,
    /// keeps the order of its gems, and ends with all of its empty cells at the top.
    pub fn compact(&mut self) {
        for x in 0..BOARD_WIDTH {
            let mut shift = 0;
            for y in (0..BOARD_HEIGHT).rev() {
                let position = Position::new(x, y);
                let cell = self.cell(position);

                if cell.is_empty() {
                    shift += 1;
                    continue;
                }

                if shift > 0 {
                    self.set_cell(Position::new(x, y + shift), cell);
                    self.empty_cell(position);
                }
            }
        }
    }

    /// Fills every empty cell with a fresh random gem. Returns how many cells were filled.
    pub fn refill(&mut self) -> usize {
        let mut filled = 0;
        for index in 0..self.cells.len() {
            if self.cells[index].is_empty() {
                self.cells[index] = Cell::gem(GemColor::random(&mut self.rng));
                filled += 1;
            }
        }
        filled
    }

    /// Clears runs without scoring or bonus effects until none are left. Used to make a
    /// freshly seeded board playable.
    pub fn normalize(&mut self) {
        let mut passes = 0;
        while let Some(run) = self.find_first_run() {
            for &position in &run.cells {
                self.empty_cell(position);
            }
            self.compact();
            self.refill();
            passes += 1;
        }
        trace!("Normalization finished after {passes} passes");
    }
}
