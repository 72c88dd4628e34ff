#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::board::{Board, Rules, TapOutcome};
    use crate::components::{GameState, Input, Position};
    use crate::presenter::Headless;
    use crate::systems::tap_system;
    use crate::tests::test_utils::Recorder;

    // First adjacent pair whose swap forms a run, scanning rows then columns
    fn find_productive_swap(board: &Board) -> Option<(Position, Position)> {
        for (position, _) in board.iter() {
            for neighbor in [position.offset(1, 0), position.offset(0, 1)]
                .into_iter()
                .flatten()
            {
                let mut probe = board.clone();
                probe.swap_cells(position, neighbor);
                if probe.has_any_run() {
                    return Some((position, neighbor));
                }
            }
        }
        None
    }

    fn tap(app: &mut App, position: Position) -> Option<TapOutcome> {
        app.world.resource_mut::<Input>().tap = Some(position);
        tap_system(&mut app.world, &mut Headless)
    }

    #[test]
    fn test_play_session() {
        let mut app = App::with_rules(Rules::default(), fastrand::Rng::with_seed(314));
        let mut moves = 0;

        for _ in 0..25 {
            let Some((first, second)) = find_productive_swap(app.board()) else {
                break;
            };
            let score_before = app.board().score();

            tap(&mut app, first);
            let outcome = tap(&mut app, second);

            let Some(TapOutcome::SwapResolved(report)) = outcome else {
                panic!("swap {first:?} <-> {second:?} should resolve, got {outcome:?}");
            };
            moves += 1;
            assert!(report.steps >= 1);
            assert!(report.points >= 30);
            assert_eq!(app.board().score(), score_before + report.points);

            // The board settles after every move
            assert!(!app.board().has_any_run());
            assert_eq!(app.board().empty_count(), 0);
            assert_eq!(app.board().selection(), None);
        }

        assert!(moves > 0);
        let game_state = app.game_state();
        assert_eq!(game_state.moves, moves);
        assert!(game_state.runs_cleared >= moves);
        assert!(game_state.cells_cleared >= 3 * moves);
    }

    #[test]
    fn test_bonus_heavy_session_settles() {
        let rules = Rules {
            bonus_drop_percent: 100,
            ..Rules::default()
        };
        let mut board = Board::new(rules, fastrand::Rng::with_seed(27));

        for _ in 0..10 {
            let Some((first, second)) = find_productive_swap(&board) else {
                break;
            };
            let mut recorder = Recorder::default();
            board.handle_tap(first, &mut recorder);
            let outcome = board.handle_tap(second, &mut recorder);

            let TapOutcome::SwapResolved(report) = outcome else {
                panic!("expected the swap to resolve, got {outcome:?}");
            };
            assert_eq!(report.drops, report.steps);
            assert!(!board.has_any_run());
            assert_eq!(board.empty_count(), 0);
            assert!(recorder.scores.windows(2).all(|pair| pair[0] <= pair[1]));
        }
    }

    #[test]
    fn test_restart_mid_session() {
        let mut app = App::with_rules(Rules::default(), fastrand::Rng::with_seed(55));
        if let Some((first, second)) = find_productive_swap(app.board()) {
            tap(&mut app, first);
            tap(&mut app, second);
        }

        app.world.resource_mut::<Input>().restart = true;
        app.on_tick();

        assert_eq!(app.board().score(), 0);
        assert_eq!(*app.game_state(), GameState::default());
        assert!(!app.board().has_any_run());
    }
}
