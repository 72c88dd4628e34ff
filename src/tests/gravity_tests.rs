#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::components::{Bonus, Cell, GemColor, Position};
    use crate::game::{BOARD_HEIGHT, BOARD_WIDTH};
    use crate::tests::test_utils::{quiet_rules, snapshot, stable_board};

    fn column(board: &Board, x: usize) -> Vec<Cell> {
        (0..board.height())
            .map(|y| board.cell(Position::new(x, y)))
            .collect()
    }

    #[test]
    fn test_compact_keeps_column_order() {
        let mut board = stable_board(3);
        let before = column(&board, 2);
        board.set_cell(Position::new(2, 4), Cell::EMPTY);
        board.set_cell(Position::new(2, 6), Cell::EMPTY);

        board.compact();

        let after = column(&board, 2);
        assert_eq!(&after[..2], &[Cell::EMPTY, Cell::EMPTY]);
        let survivors: Vec<Cell> = before
            .iter()
            .enumerate()
            .filter(|(y, _)| *y != 4 && *y != 6)
            .map(|(_, cell)| *cell)
            .collect();
        assert_eq!(&after[2..], survivors.as_slice());
    }

    #[test]
    fn test_compact_leaves_other_columns_alone() {
        let mut board = stable_board(3);
        let before = snapshot(&board);
        board.set_cell(Position::new(5, 7), Cell::EMPTY);

        board.compact();

        for x in (0..BOARD_WIDTH).filter(|&x| x != 5) {
            for y in 0..BOARD_HEIGHT {
                assert_eq!(board.cell(Position::new(x, y)), before[x + y * BOARD_WIDTH]);
            }
        }
        assert!(board.cell(Position::new(5, 0)).is_empty());
    }

    #[test]
    fn test_bonus_falls_with_its_gem() {
        let mut board = stable_board(3);
        board.plant_bonus(Position::new(1, 2), Bonus::Bomb);
        let gem = board.cell(Position::new(1, 2));
        board.set_cell(Position::new(1, 5), Cell::EMPTY);
        board.set_cell(Position::new(1, 6), Cell::EMPTY);

        board.compact();

        assert_eq!(board.cell(Position::new(1, 4)), gem);
        assert_eq!(board.cell(Position::new(1, 2)).bonus, None);
    }

    #[test]
    fn test_compact_full_column_is_noop() {
        let mut board = stable_board(3);
        let before = snapshot(&board);

        board.compact();

        assert_eq!(snapshot(&board), before);
    }

    #[test]
    fn test_compact_empty_column() {
        let mut board = stable_board(3);
        for y in 0..BOARD_HEIGHT {
            board.set_cell(Position::new(0, y), Cell::EMPTY);
        }

        board.compact();

        assert!(column(&board, 0).iter().all(Cell::is_empty));
    }

    #[test]
    fn test_refill_counts_filled_cells() {
        let mut board = stable_board(7);
        for position in [(0, 0), (3, 0), (3, 1), (7, 7)] {
            board.set_cell(Position::new(position.0, position.1), Cell::EMPTY);
        }

        assert_eq!(board.refill(), 4);
        assert_eq!(board.empty_count(), 0);
        assert_eq!(board.refill(), 0);
    }

    #[test]
    fn test_refilled_gems_carry_no_bonus() {
        let mut board = stable_board(7);
        for x in 0..BOARD_WIDTH {
            board.set_cell(Position::new(x, 0), Cell::EMPTY);
        }

        board.refill();

        for x in 0..BOARD_WIDTH {
            let cell = board.cell(Position::new(x, 0));
            assert!(cell.color.is_some());
            assert_eq!(cell.bonus, None);
        }
    }

    #[test]
    fn test_normalize_removes_every_run() {
        let rows = [[GemColor::Red; BOARD_WIDTH]; BOARD_HEIGHT];
        let mut board = Board::from_colors(rows, quiet_rules(), fastrand::Rng::with_seed(8));
        assert!(board.has_any_run());

        board.normalize();

        assert!(!board.has_any_run());
        assert_eq!(board.empty_count(), 0);
        assert_eq!(board.score(), 0);
    }

    #[test]
    fn test_new_board_is_playable() {
        for seed in 0..50 {
            let board = Board::with_seed(seed);
            assert!(!board.has_any_run(), "seed {seed}");
            assert_eq!(board.empty_count(), 0, "seed {seed}");
            assert_eq!(board.score(), 0, "seed {seed}");
            assert_eq!(board.selection(), None, "seed {seed}");
            assert!(board.iter().all(|(_, cell)| cell.bonus.is_none()));
        }
    }

    #[test]
    fn test_same_seed_same_board() {
        let first = Board::with_seed(99);
        let second = Board::with_seed(99);
        assert_eq!(snapshot(&first), snapshot(&second));
    }
}
