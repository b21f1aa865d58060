use super::*;
use crate::board::{annotation::SquareAnnotation, error::MoveError};
use crate::chess_move::Move;

const POSITIONS: [&str; 4] = [
    STARTING_POSITION,
    "rnbq1rk1/ppp2ppp/5n2/3p4/2PN4/3Q2P1/PP1NPPBP/R3K2R",
    "3brrb1/2N4B/8/2p4Q/2p2k2/5P2/4P1KR/2N2RB1",
    "6K1/pN2R1PQ/p7/r2k3r/N2n4/1P2p3/BB5p/2Rb2bQ",
];

fn sq(algebraic: &str) -> Coordinate {
    Coordinate::from_algebraic(algebraic).unwrap()
}

#[test]
fn test_synchronize_is_idempotent() {
    for layout in POSITIONS {
        let board = Board::from_layout(layout, None).unwrap();
        let mut resynchronized = board.clone();
        resynchronized.synchronize(None);
        resynchronized.synchronize(None);
        assert_eq!(board, resynchronized, "{}", layout);
    }
}

#[test]
fn test_material_is_the_sum_of_piece_values() {
    for layout in POSITIONS {
        let board = Board::from_layout(layout, None).unwrap();
        for color in Color::ALL {
            let expected: u32 = board
                .pieces()
                .iter()
                .filter(|piece| piece.kind().color() == color)
                .map(|piece| piece.kind().material_value())
                .sum();
            assert_eq!(expected, board.material(color), "{} {}", layout, color);
        }
    }

    let board = Board::starting_position();
    assert_eq!(39, board.material(Color::White));
    assert_eq!(39, board.material(Color::Black));
}

#[test]
fn test_occupancy_matches_pieces() {
    for layout in POSITIONS {
        let board = Board::from_layout(layout, None).unwrap();
        let occupied = Coordinate::all()
            .filter(|square| board.kind_at(*square).is_some())
            .count();
        assert_eq!(board.pieces().len(), occupied);
        for piece in board.pieces() {
            assert_eq!(Some(piece.kind()), board.kind_at(piece.location()));
            assert_eq!(
                SquareAnnotation::Origin,
                piece.annotation_at(piece.location())
            );
        }
    }
}

#[test]
fn test_starting_position() {
    let board = Board::starting_position();
    assert_eq!(32, board.pieces().len());
    assert_eq!(Some(sq("e1")), board.king_location(Color::White));
    assert_eq!(Some(sq("e8")), board.king_location(Color::Black));
    assert!(!board.is_checked(Color::White));
    assert!(!board.is_checked(Color::Black));
    assert_eq!(STARTING_POSITION, board.to_string());

    let knight = board.piece_at(sq("g1")).unwrap();
    assert!(knight.can_move_to(sq("f3")));
    assert!(knight.can_move_to(sq("h3")));
    assert!(!knight.can_move_to(sq("e2")));
}

#[test]
fn test_check_flags() {
    let board = Board::from_layout("4k3/8/8/8/8/8/8/4KR1r", None).unwrap();
    assert!(!board.is_checked(Color::White));
    assert!(!board.is_checked(Color::Black));

    let board = Board::from_layout("4k3/8/8/8/8/8/8/4K2r", None).unwrap();
    assert!(board.is_checked(Color::White));
    assert_eq!(Some(sq("e1")), board.checked_king(Color::White));
    assert_eq!(None, board.checked_king(Color::Black));
    assert_eq!(
        SquareAnnotation::Check,
        board.piece_at(sq("h1")).unwrap().annotation_at(sq("e1"))
    );
}

#[test]
fn test_missing_king_is_not_an_error() {
    let board = Board::from_layout("8/8/8/8/8/8/8/R7", None).unwrap();
    assert_eq!(None, board.king_location(Color::White));
    assert_eq!(None, board.king_location(Color::Black));
    assert!(!board.is_checked(Color::Black));
}

#[test]
fn test_rejected_move_leaves_board_untouched() {
    let mut board = Board::from_layout("4k3/8/8/8/8/8/4r3/4K3", None).unwrap();
    let before = board.clone();

    // d2 is on the rook's rank. The rook itself is undefended.
    let error = board
        .apply_move(&Move::new(PieceKind::WhiteKing, sq("d2")), None)
        .unwrap_err();
    assert_eq!(MoveError::SelfCheckNotAllowed, error);
    assert_eq!(before, board);

    board
        .apply_move(&Move::new(PieceKind::WhiteKing, sq("e2")).capturing(), None)
        .unwrap();
    assert_eq!("4k3/8/8/8/8/8/4K3/8", board.layout());
}

#[test]
#[should_panic(expected = "board out of sync")]
fn test_two_pieces_on_one_square_panics() {
    let pieces = vec![
        Piece::new(PieceKind::WhiteRook, sq("a1")),
        Piece::new(PieceKind::BlackRook, sq("a1")),
    ];
    Board::from_pieces(pieces, None, RuleOptions::default());
}

#[test]
fn test_moves_in_starting_position() {
    let board = Board::starting_position();
    for color in Color::ALL {
        let moves = board.moves(color);
        assert_eq!(20, moves.len(), "{}", color);
        assert!(moves
            .iter()
            .all(|(_, _, annotation)| *annotation == SquareAnnotation::Move));
    }

    let moves = board.moves(Color::White);
    assert!(moves.contains(&(sq("e2"), sq("e4"), SquareAnnotation::Move)));
    assert!(moves.contains(&(sq("g1"), sq("f3"), SquareAnnotation::Move)));
    assert!(!moves.contains(&(sq("e2"), sq("e5"), SquareAnnotation::Move)));
}

#[test]
fn test_moves_list_captures_but_not_checks() {
    let board = Board::from_layout("4k3/8/8/8/8/8/4r3/4K3", None).unwrap();

    let white = board.moves(Color::White);
    assert_eq!(5, white.len());
    assert_eq!(
        vec![(sq("e1"), sq("e2"), SquareAnnotation::Capture)],
        white
            .iter()
            .filter(|(_, _, annotation)| *annotation == SquareAnnotation::Capture)
            .copied()
            .collect::<Vec<_>>()
    );

    let black = board.moves(Color::Black);
    assert_eq!(17, black.len());
    assert!(!black.iter().any(|(_, target, _)| *target == sq("e1")));
}

#[test]
fn test_derived_state_ignores_piece_order() {
    for layout in POSITIONS
        .iter()
        .copied()
        .chain(["4k3/8/8/8/8/8/8/4K2r", "1k1r3r/1p3p1p/p1P5/4n3/8/3B2P1/N1PP1P1p/5RK1"])
    {
        let pieces = layout::parse_layout(layout).unwrap();
        let parsed = Board::from_pieces(pieces.clone(), None, RuleOptions::default());

        let mut reversed = pieces.clone();
        reversed.reverse();
        let mut rotated = pieces;
        let half = rotated.len() / 2;
        rotated.rotate_left(half);

        for pieces in [reversed, rotated] {
            let board = Board::from_pieces(pieces, None, RuleOptions::default());
            assert_eq!(layout, board.layout());
            assert_eq!(parsed.layout(), board.layout());
            for color in Color::ALL {
                assert_eq!(parsed.material(color), board.material(color), "{}", layout);
                assert_eq!(parsed.is_checked(color), board.is_checked(color), "{}", layout);
                assert_eq!(parsed.king_location(color), board.king_location(color));
            }
            for piece in parsed.pieces() {
                assert_eq!(
                    piece.reachability(),
                    board.piece_at(piece.location()).unwrap().reachability()
                );
            }
        }
    }
}
