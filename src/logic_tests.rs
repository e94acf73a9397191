#[cfg(test)]
mod tests {
    use crate::core::{Board, GameOutcome, Mark};
    use crate::logic::{apply_move, board_key, evaluate, legal_moves, WIN_LINES};

    // Build a board from a 9-char layout: 'X', 'O', '.' = empty
    fn board_from(layout: &str) -> Board {
        assert_eq!(layout.len(), 9);
        let mut board = Board::new();
        for (i, c) in layout.chars().enumerate() {
            match c {
                'X' => board.cells[i] = Some(Mark::X),
                'O' => board.cells[i] = Some(Mark::O),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_each_win_line_detected() {
        for line in WIN_LINES {
            for mark in [Mark::X, Mark::O] {
                let mut board = Board::new();
                for idx in line {
                    board.cells[idx] = Some(mark);
                }
                assert_eq!(
                    evaluate(&board),
                    GameOutcome::Won { winner: mark, line },
                    "line {:?} filled with {} not detected",
                    line,
                    mark
                );
            }
        }
    }

    #[test]
    fn test_draw_on_full_board_without_line() {
        // X O X / X O O / O X X
        let board = board_from("XOXXOOOXX");
        assert_eq!(evaluate(&board), GameOutcome::Draw);
    }

    #[test]
    fn test_in_progress_without_complete_line() {
        assert_eq!(evaluate(&Board::new()), GameOutcome::InProgress);
        assert_eq!(evaluate(&board_from("XX.OO....")), GameOutcome::InProgress);

        // One cell short of the draw board: still open
        assert_eq!(evaluate(&board_from("XOXXOOOX.")), GameOutcome::InProgress);
    }

    #[test]
    fn test_first_matching_line_in_scan_order_reported() {
        // Two complete rows (unreachable in real play, but evaluate is total):
        // the row scan comes first, so [0,1,2] must be reported
        let board = board_from("XXXXXX...");
        assert_eq!(
            evaluate(&board),
            GameOutcome::Won {
                winner: Mark::X,
                line: [0, 1, 2]
            }
        );
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let board = board_from("XOXXO.O..");
        let snapshot = board.clone();

        let first = evaluate(&board);
        let second = evaluate(&board);

        assert_eq!(first, second);
        assert_eq!(board, snapshot, "evaluate must not mutate the board");
    }

    #[test]
    fn test_apply_move_does_not_mutate_input_board() {
        let board = Board::new();
        let next = apply_move(&board, 4, Mark::X);

        assert!(board.is_vacant(4));
        assert_eq!(board.last_move, None);
        assert_eq!(board.count(Mark::X), 0);
        assert_eq!(next.get(4), Some(Mark::X));
        assert_eq!(next.last_move, Some(4));
        assert_eq!(next.count(Mark::X), 1);
    }

    #[test]
    fn test_legal_moves_skips_occupied_cells() {
        let board = board_from("X.O......");
        assert_eq!(legal_moves(&board), vec![1, 3, 4, 5, 6, 7, 8]);
        assert!(legal_moves(&board_from("XOXXOOOXX")).is_empty());
    }

    #[test]
    fn test_board_key_distinguishes_positions() {
        assert_eq!(board_key(&Board::new()), 0);

        let a = board_from("X........");
        let b = board_from("O........");
        let c = board_from("........X");
        assert_ne!(board_key(&a), board_key(&b));
        assert_ne!(board_key(&a), board_key(&c));
        assert_eq!(board_key(&a), board_key(&a.clone()));
    }
}
