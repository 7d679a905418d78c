use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use tictactoe::{Board, BoardState, Cell, GameResult, Mark, Move, LINES};

fn random_board(seed: u64, moves: usize) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut mark = if rng.random_bool(0.5) {
        Mark::Player
    } else {
        Mark::Computer
    };
    for _ in 0..moves {
        if board.is_over() {
            break;
        }
        let empty: Vec<Move> = board.empty_cells().collect();
        let mv = empty[rng.random_range(0..empty.len())];
        board.place(mv.row, mv.col, mark).unwrap();
        mark = mark.opponent();
    }
    board
}

fn line_held_by(board: &Board, mark: Mark) -> bool {
    LINES.iter().any(|line| {
        line.cells()
            .iter()
            .all(|&(r, c)| board.cell(r, c).unwrap() == Cell::Marked(mark))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn check_win_matches_line_scan(seed in any::<u64>(), moves in 0..=9usize) {
        let board = random_board(seed, moves);
        for mark in [Mark::Player, Mark::Computer] {
            prop_assert_eq!(board.check_win(mark).is_some(), line_held_by(&board, mark));
        }
    }

    #[test]
    fn full_iff_every_place_fails(seed in any::<u64>(), moves in 0..=9usize) {
        let board = random_board(seed, moves);
        prop_assume!(!matches!(
            board.game_result(),
            GameResult::PlayerWins(_) | GameResult::ComputerWins(_)
        ));
        let all_fail = (0..3).all(|r| {
            (0..3).all(|c| {
                let mut probe = board;
                probe.place(r, c, Mark::Player).is_err()
            })
        });
        prop_assert_eq!(board.is_full(), all_fail);
    }

    #[test]
    fn place_changes_exactly_one_cell(
        seed in any::<u64>(),
        moves in 0..9usize,
        row in 0..3usize,
        col in 0..3usize,
    ) {
        let mut board = random_board(seed, moves);
        let before = BoardState::from(&board);
        if board.place(row, col, Mark::Computer).is_ok() {
            let after = BoardState::from(&board);
            for r in 0..3 {
                for c in 0..3 {
                    if (r, c) == (row, col) {
                        prop_assert_eq!(before.cells[r][c], Cell::Empty);
                        prop_assert_eq!(after.cells[r][c], Cell::Marked(Mark::Computer));
                    } else {
                        prop_assert_eq!(before.cells[r][c], after.cells[r][c]);
                    }
                }
            }
        } else {
            prop_assert_eq!(BoardState::from(&board), before);
        }
    }

    #[test]
    fn board_state_roundtrip(seed in any::<u64>(), moves in 0..=9usize) {
        let board = random_board(seed, moves);
        let state = BoardState::from(&board);
        let restored = Board::try_from(state).unwrap();
        prop_assert_eq!(restored, board);
    }

    #[test]
    fn occupied_cells_only_grow(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        let mut mark = Mark::Player;
        while !board.is_over() {
            let before = board.occupied();
            let empty: Vec<Move> = board.empty_cells().collect();
            let mv = empty[rng.random_range(0..empty.len())];
            board.place(mv.row, mv.col, mark).unwrap();
            prop_assert!(board.occupied().contains_all(before));
            prop_assert_eq!(board.move_count(), before.count_ones() + 1);
            mark = mark.opponent();
        }
    }
}
