#![warn(clippy::all, clippy::pedantic)]

use log::{debug, trace};

use super::{Board, BonusEffect, Run};
use crate::components::Position;
use crate::presenter::Presenter;

/// Result of a single tap on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapOutcome {
    Selected(Position),
    Deselected,
    /// A non-adjacent cell was tapped while another was selected.
    SelectionMoved(Position),
    /// The swap formed no run and was undone.
    SwapReverted,
    SwapResolved(CascadeReport),
}

/// Scoring and bonus effects of clearing one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub run_points: u32,
    pub bonus_points: u32,
    pub effects: Vec<(Position, BonusEffect)>,
}

impl RunReport {
    #[must_use]
    pub fn points(&self) -> u32 {
        self.run_points + self.bonus_points
    }

    /// Every cell hit by a bomb during this run, repeats included.
    #[must_use]
    pub fn blasted(&self) -> Vec<Position> {
        self.effects
            .iter()
            .filter_map(|(_, effect)| match effect {
                BonusEffect::Blast(targets) => Some(targets.iter().copied()),
                BonusEffect::Paint { .. } => None,
            })
            .flatten()
            .collect()
    }

    #[must_use]
    pub fn bombs(&self) -> usize {
        self.effects
            .iter()
            .filter(|(_, effect)| matches!(effect, BonusEffect::Blast(_)))
            .count()
    }

    #[must_use]
    pub fn brushes(&self) -> usize {
        self.effects
            .iter()
            .filter(|(_, effect)| matches!(effect, BonusEffect::Paint { .. }))
            .count()
    }
}

/// Totals for a whole cascade, from the first run after a swap to the stable board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeReport {
    pub steps: u32,
    pub points: u32,
    pub cells_cleared: u32,
    pub bombs: u32,
    pub brushes: u32,
    pub drops: u32,
}

impl CascadeReport {
    fn absorb(&mut self, run: &Run, step: &RunReport) {
        self.steps += 1;
        self.points += step.points();
        self.cells_cleared += u32::try_from(run.len()).unwrap_or(u32::MAX);
        self.bombs += u32::try_from(step.bombs()).unwrap_or(u32::MAX);
        self.brushes += u32::try_from(step.brushes()).unwrap_or(u32::MAX);
    }
}

impl Board {
    /// Handles a tap on `position`: selects, deselects, moves the selection, or swaps with
    /// the selected neighbor and resolves whatever the swap produced.
    ///
    /// # Panics
    ///
    /// Panics if `position` is outside the board.
    pub fn handle_tap(&mut self, position: Position, presenter: &mut impl Presenter) -> TapOutcome {
        assert!(
            position.in_bounds(),
            "tap at ({}, {}) is outside the board",
            position.x,
            position.y
        );

        let selection = self.selection;
        let outcome = match selection {
            None => {
                self.selection = Some(position);
                TapOutcome::Selected(position)
            }
            Some(selected) if selected == position => {
                self.selection = None;
                TapOutcome::Deselected
            }
            Some(selected) if selected.is_adjacent(position) => {
                self.selection = None;
                self.swap_cells(selected, position);
                presenter.render(self);

                if self.has_any_run() {
                    debug!(
                        "Swap ({}, {}) <-> ({}, {}) formed a run",
                        selected.x, selected.y, position.x, position.y
                    );
                    TapOutcome::SwapResolved(self.resolve_cascade(presenter))
                } else {
                    presenter.wait_visible(self.rules.pacing.swap_revert);
                    self.swap_cells(selected, position);
                    trace!("Swap reverted, no run formed");
                    TapOutcome::SwapReverted
                }
            }
            Some(_) => {
                self.selection = Some(position);
                TapOutcome::SelectionMoved(position)
            }
        };

        presenter.render(self);
        outcome
    }

    /// Resolves runs one at a time until the board is stable. Each step scores the first
    /// run found, fires its bonuses, clears it, may drop a new bonus, then lets the gems
    /// fall and refills the gaps before scanning the whole board again.
    pub fn resolve_cascade(&mut self, presenter: &mut impl Presenter) -> CascadeReport {
        self.cascade = Some(CascadeReport::default());

        while let Some(run) = self.find_first_run() {
            trace!(
                "Resolving {:?} run of {} {:?} gems",
                run.orientation,
                run.len(),
                run.color
            );

            let step = self.resolve_run(&run, presenter);
            let dropped = self.roll_bonus_drop().is_some();
            if let Some(report) = self.cascade.as_mut() {
                report.absorb(&run, &step);
                if dropped {
                    report.drops += 1;
                }
            }

            self.compact();
            self.refill();
            presenter.render(self);
        }

        let report = self.cascade.take().unwrap_or_default();
        debug!(
            "Cascade settled after {} steps for {} points",
            report.steps, report.points
        );
        report
    }

    /// Scores `run`, triggers the bonuses riding on it in run order, and empties its cells.
    /// The board is left with gaps; compaction and refill are up to the caller.
    pub fn resolve_run(&mut self, run: &Run, presenter: &mut impl Presenter) -> RunReport {
        let mut report = RunReport {
            run_points: run.points(),
            ..RunReport::default()
        };
        self.add_score(report.run_points);

        // All bonuses on the run are consumed up front, then fired in run order
        let score_before_bonuses = self.score;
        for (origin, bonus) in self.take_run_bonuses(run) {
            let effect = self.trigger_bonus(origin, bonus);
            report.effects.push((origin, effect));
            presenter.render(self);
            presenter.wait_visible(self.rules.pacing.bonus_triggered);
        }
        report.bonus_points = self.score - score_before_bonuses;

        for &position in &run.cells {
            self.empty_cell(position);
        }
        presenter.render(self);
        presenter.wait_visible(self.rules.pacing.run_cleared);

        report
    }
}
