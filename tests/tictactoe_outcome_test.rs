//! Exhaustive checks of board evaluation over every 9-cell arrangement.

use strictly_tictactoe::{Board, Outcome, Player, Position, Square, evaluate_outcome};

const LINE_INDICES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Every board, including unreachable ones, as base-3 digits.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(9)).map(|mut code| {
        let mut squares = [Square::Empty; 9];
        for square in squares.iter_mut() {
            *square = match code % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Player::X),
                _ => Square::Occupied(Player::O),
            };
            code /= 3;
        }
        Board::from_squares(squares)
    })
}

fn first_line(board: &Board) -> Option<(Player, [usize; 3])> {
    LINE_INDICES.iter().find_map(|&[a, b, c]| {
        let sq = board.square(a)?;
        let player = sq.player()?;
        (board.square(b) == Some(sq) && board.square(c) == Some(sq)).then_some((player, [a, b, c]))
    })
}

#[test]
fn test_every_board_with_a_line_reports_first_line() {
    let mut wins = 0;
    for board in all_boards() {
        if let Some((player, line)) = first_line(&board) {
            wins += 1;
            let outcome = evaluate_outcome(&board);
            assert_eq!(outcome.winner(), Some(player), "board:\n{}", board);
            let reported: Vec<usize> = outcome.winning_line().iter().map(|p| p.to_index()).collect();
            assert_eq!(reported, line.to_vec(), "board:\n{}", board);
        }
    }
    assert!(wins > 0);
}

#[test]
fn test_every_full_board_without_line_is_draw() {
    for board in all_boards() {
        if board.occupied_count() == 9 && first_line(&board).is_none() {
            let outcome = evaluate_outcome(&board);
            assert_eq!(outcome, Outcome::Draw, "board:\n{}", board);
            assert!(outcome.winning_line().is_empty());
        }
    }
}

#[test]
fn test_every_open_board_without_line_is_in_progress() {
    for board in all_boards() {
        if board.occupied_count() < 9 && first_line(&board).is_none() {
            assert_eq!(evaluate_outcome(&board), Outcome::InProgress, "board:\n{}", board);
        }
    }
}

#[test]
fn test_double_line_prefers_row_over_diagonal() {
    // Top row and main diagonal both belong to O.
    let mut board = Board::new();
    for pos in [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::Center,
        Position::BottomRight,
    ] {
        board.set(pos, Square::Occupied(Player::O));
    }
    let outcome = evaluate_outcome(&board);
    assert_eq!(
        outcome.winning_line(),
        &[Position::TopLeft, Position::TopCenter, Position::TopRight]
    );
}
