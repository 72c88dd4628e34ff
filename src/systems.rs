use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::board::{Board, CascadeReport, TapOutcome};
use crate::components::{GameState, Input};
use crate::presenter::Presenter;

/// Feeds the pending tap, if any, to the board and folds the outcome into the session
/// statistics. Returns the outcome so callers can react to it.
pub fn tap_system(world: &mut World, presenter: &mut impl Presenter) -> Option<TapOutcome> {
    let tap = world.resource_mut::<Input>().tap.take()?;

    let outcome = {
        let mut board = world.resource_mut::<Board>();
        board.handle_tap(tap, presenter)
    };
    debug!("Tap at ({}, {}): {outcome:?}", tap.x, tap.y);

    let mut game_state = world.resource_mut::<GameState>();
    record_outcome(&mut game_state, &outcome);

    Some(outcome)
}

pub fn record_outcome(game_state: &mut GameState, outcome: &TapOutcome) {
    match outcome {
        TapOutcome::SwapReverted => game_state.reverted_swaps += 1,
        TapOutcome::SwapResolved(report) => {
            apply_cascade(game_state, report);

            if report.steps > 1 {
                info!(
                    "Cascade of {} runs scored {} points",
                    report.steps, report.points
                );
            }
        }
        TapOutcome::Selected(_) | TapOutcome::Deselected | TapOutcome::SelectionMoved(_) => {}
    }
}

/// Counts one productive move and folds its cascade totals into the statistics.
pub fn apply_cascade(game_state: &mut GameState, report: &CascadeReport) {
    game_state.moves += 1;
    game_state.runs_cleared += report.steps;
    game_state.cells_cleared += report.cells_cleared;
    game_state.bombs_triggered += report.bombs;
    game_state.brushes_triggered += report.brushes;
    game_state.bonuses_dropped += report.drops;
    game_state.longest_cascade = game_state.longest_cascade.max(report.steps);
}
