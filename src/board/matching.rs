#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when casting from usize to i32 since run lengths are always small enough to fit in i32
    clippy::cast_possible_truncation,
    // Allow potential wrapping when casting between types as run lengths are within reasonable ranges
    clippy::cast_possible_wrap
)]

use super::Board;
use crate::components::{GemColor, Position};
use crate::game::{BOARD_HEIGHT, BOARD_WIDTH, MIN_RUN_LENGTH, run_points};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// Three or more contiguous gems of one color in a row or column.
///
/// `cells` keeps collection order: the detected triple first, then the gems found
/// extending backwards (left or up), then forwards (right or down).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub color: GemColor,
    pub orientation: Orientation,
    pub cells: Vec<Position>,
}

impl Run {
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        run_points(self.len())
    }

    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }
}

impl Board {
    /// True if any row or column holds three consecutive gems of the same color.
    #[must_use]
    pub fn has_any_run(&self) -> bool {
        self.find_triple().is_some()
    }

    /// Finds the first run scanning rows top to bottom, then columns left to right,
    /// and extends it in both directions until the color changes.
    #[must_use]
    pub fn find_first_run(&self) -> Option<Run> {
        let (start, orientation, color) = self.find_triple()?;
        Some(self.extend_run(start, orientation, color))
    }

    fn find_triple(&self) -> Option<(Position, Orientation, GemColor)> {
        for y in 0..BOARD_HEIGHT {
            for x in 0..=BOARD_WIDTH - MIN_RUN_LENGTH {
                let position = Position::new(x, y);
                if let Some(color) = self.triple_color_at(position, Orientation::Horizontal) {
                    return Some((position, Orientation::Horizontal, color));
                }
            }
        }

        for x in 0..BOARD_WIDTH {
            for y in 0..=BOARD_HEIGHT - MIN_RUN_LENGTH {
                let position = Position::new(x, y);
                if let Some(color) = self.triple_color_at(position, Orientation::Vertical) {
                    return Some((position, Orientation::Vertical, color));
                }
            }
        }

        None
    }

    fn triple_color_at(&self, start: Position, orientation: Orientation) -> Option<GemColor> {
        let color = self.color_at(start)?;
        let (dx, dy) = orientation.step();

        let matches = (1..MIN_RUN_LENGTH as i32).all(|i| {
            start
                .offset(dx * i, dy * i)
                .is_some_and(|next| self.color_at(next) == Some(color))
        });

        matches.then_some(color)
    }

    fn extend_run(&self, start: Position, orientation: Orientation, color: GemColor) -> Run {
        let (dx, dy) = orientation.step();

        let mut cells: Vec<Position> = (0..MIN_RUN_LENGTH as i32)
            .filter_map(|i| start.offset(dx * i, dy * i))
            .collect();

        // Backwards, stopping at the first gem of another color
        let mut cursor = start.offset(-dx, -dy);
        while let Some(position) = cursor {
            if self.color_at(position) != Some(color) {
                break;
            }
            cells.push(position);
            cursor = position.offset(-dx, -dy);
        }

        // Forwards past the triple, same rule
        let past = MIN_RUN_LENGTH as i32;
        let mut cursor = start.offset(dx * past, dy * past);
        while let Some(position) = cursor {
            if self.color_at(position) != Some(color) {
                break;
            }
            cells.push(position);
            cursor = position.offset(dx, dy);
        }

        Run {
            color,
            orientation,
            cells,
        }
    }
}
