//! Properties checked over every position reachable by legal alternating play.

use std::collections::HashSet;

use tictactoe_core::{Board, BoardError, LINES, Mark, Player};

/// Collects every distinct board reachable from the empty board, stopping
/// each line of play at a win or a full board.
fn reachable_boards() -> Vec<Board> {
    fn visit(board: &Board, to_move: Player, seen: &mut HashSet<Board>) {
        if !seen.insert(board.clone()) {
            return;
        }
        if board.winner().is_some() || board.is_full() {
            return;
        }
        for index in board.moves() {
            let mut next = board.clone();
            next.make_move(index, to_move).unwrap();
            visit(&next, to_move.opponent(), seen);
        }
    }

    let mut seen = HashSet::new();
    visit(&Board::new(), Player::X, &mut seen);
    seen.into_iter().collect()
}

#[test]
fn test_reachable_position_count() {
    // Well-known count of legal tic-tac-toe positions, empty board included.
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_winner_matches_a_completed_line() {
    for board in reachable_boards() {
        let cells = board.cells();
        let completed: Vec<_> = LINES
            .iter()
            .filter(|[a, b, c]| {
                !cells[*a].is_empty() && cells[*a] == cells[*b] && cells[*a] == cells[*c]
            })
            .collect();

        match board.winner() {
            Some(player) => {
                assert!(!completed.is_empty());
                // Two lines can complete at once, but only for the same player.
                assert!(completed.iter().all(|[a, _, _]| cells[*a] == Mark::from(player)));
                assert_eq!(board.winning_line().as_ref(), completed.first().copied());
            }
            None => assert!(completed.is_empty(), "missed win on\n{board}"),
        }
    }
}

#[test]
fn test_full_iff_no_moves() {
    for board in reachable_boards() {
        assert_eq!(board.is_full(), board.moves().is_empty());
        assert_eq!(board.moves().len(), board.count(Mark::Empty));
    }
}

#[test]
fn test_moves_are_ascending_empty_cells() {
    for board in reachable_boards() {
        let moves = board.moves();
        assert!(moves.windows(2).all(|w| w[0] < w[1]));
        assert!(moves.iter().all(|&i| board.cell(i) == Some(Mark::Empty)));
    }
}

#[test]
fn test_players_alternate() {
    for board in reachable_boards() {
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        assert!(x == o || x == o + 1, "x={x} o={o}\n{board}");
    }
}

#[test]
fn test_occupied_placement_never_mutates() {
    for board in reachable_boards() {
        for index in 0..9 {
            if board.cell(index) == Some(Mark::Empty) {
                continue;
            }
            for player in [Player::X, Player::O] {
                let mut copy = board.clone();
                assert_eq!(
                    copy.make_move(index, player),
                    Err(BoardError::CellOccupied(index))
                );
                assert_eq!(copy, board);
            }
        }
    }
}

#[test]
fn test_reset_restores_empty_board() {
    for mut board in reachable_boards() {
        board.reset();
        assert_eq!(board, Board::new());
        assert_eq!(board.moves().len(), 9);
        assert_eq!(board.winner(), None);
        board.reset();
        assert_eq!(board, Board::new());
    }
}
