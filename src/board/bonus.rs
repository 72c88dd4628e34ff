#![warn(clippy::all, clippy::pedantic)]

use log::{debug, trace};

use super::{Board, Run};
use crate::components::{Bonus, GemColor, Position};
use crate::game::{BOARD_HEIGHT, BOARD_WIDTH, POINTS_BOMB};

// Diagonal pairs a brush can paint, relative to the brush gem
const BRUSH_PATTERNS: [[(i32, i32); 2]; 2] = [[(-1, -1), (1, 1)], [(1, -1), (-1, 1)]];

/// What a triggered bonus did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BonusEffect {
    /// Cells emptied by a bomb, in the order they were hit. May repeat.
    Blast(Vec<Position>),
    /// Cells a brush painted with its color. Off-board neighbors are not listed.
    Paint {
        color: GemColor,
        cells: Vec<Position>,
    },
}

impl Board {
    /// Removes and returns the bonuses riding on the run's gems, in run order.
    pub(crate) fn take_run_bonuses(&mut self, run: &Run) -> Vec<(Position, Bonus)> {
        let mut bonuses = Vec::new();
        for &position in &run.cells {
            let mut cell = self.cell(position);
            if let Some(bonus) = cell.bonus.take() {
                self.set_cell(position, cell);
                bonuses.push((position, bonus));
            }
        }
        bonuses
    }

    /// Applies a bonus that was consumed at `origin`. Bombs also add their points to the score.
    pub fn trigger_bonus(&mut self, origin: Position, bonus: Bonus) -> BonusEffect {
        match bonus {
            Bonus::Bomb => {
                self.add_score(POINTS_BOMB);
                let targets = self.detonate_bomb();
                debug!(
                    "Bomb at ({}, {}) destroyed {} cells",
                    origin.x,
                    origin.y,
                    targets.len()
                );
                BonusEffect::Blast(targets)
            }
            Bonus::Brush(color) => {
                let cells = self.paint_diagonals(origin, color);
                debug!(
                    "Brush at ({}, {}) painted {} cells {color:?}",
                    origin.x,
                    origin.y,
                    cells.len()
                );
                BonusEffect::Paint { color, cells }
            }
        }
    }

    // Independent targets anywhere on the board; repeats are allowed
    fn detonate_bomb(&mut self) -> Vec<Position> {
        let mut targets = Vec::with_capacity(self.rules.bomb_blast_count);
        for _ in 0..self.rules.bomb_blast_count {
            let target = Position::new(
                self.rng.usize(..BOARD_WIDTH),
                self.rng.usize(..BOARD_HEIGHT),
            );
            self.empty_cell(target);
            targets.push(target);
        }
        targets
    }

    fn paint_diagonals(&mut self, origin: Position, color: GemColor) -> Vec<Position> {
        let pattern = BRUSH_PATTERNS[self.rng.usize(..BRUSH_PATTERNS.len())];
        let mut painted = Vec::with_capacity(pattern.len());

        for (dx, dy) in pattern {
            // Neighbors past the edge are skipped
            let Some(target) = origin.offset(dx, dy) else {
                continue;
            };
            let mut cell = self.cell(target);
            cell.color = Some(color);
            self.set_cell(target, cell);
            painted.push(target);
        }

        painted
    }

    /// Rolls the post-run bonus drop. On success a bomb or a brush of a random color is
    /// planted on a random gem, replacing any bonus already there.
    ///
    /// The target is drawn from occupied cells only, not from the whole grid: cells the run
    /// just emptied are never picked, so an empty cell never holds a bonus.
    pub fn roll_bonus_drop(&mut self) -> Option<(Position, Bonus)> {
        let roll = self.rng.u8(1..=100);
        if roll > self.rules.bonus_drop_percent {
            return None;
        }

        let bonus = if self.rng.bool() {
            Bonus::Bomb
        } else {
            Bonus::Brush(GemColor::random(&mut self.rng))
        };

        let occupied: Vec<Position> = self
            .iter()
            .filter(|(_, cell)| !cell.is_empty())
            .map(|(position, _)| position)
            .collect();
        if occupied.is_empty() {
            return None;
        }
        let position = occupied[self.rng.usize(..occupied.len())];

        self.plant_bonus(position, bonus);
        trace!("Bonus {bonus:?} dropped at ({}, {})", position.x, position.y);
        Some((position, bonus))
    }

    /// Puts a bonus on the gem at `position`. Empty cells cannot carry a bonus, so
    /// planting on one does nothing and returns `false`.
    pub fn plant_bonus(&mut self, position: Position, bonus: Bonus) -> bool {
        let mut cell = self.cell(position);
        if cell.is_empty() {
            return false;
        }
        cell.bonus = Some(bonus);
        self.set_cell(position, cell);
        true
    }
}
