mod common;

use chess_rules::prelude::*;
use common::{Replay, ReplayError};

#[test]
fn test_rights_are_revoked_by_captures_and_moves() {
    let mut replay = Replay::new("rnbqkbnr/2pppppp/1p6/p7/8/P5P1/1PPPPPBP/RNBQK1NR w KQkq - 0 4");
    let expected = [
        ("Bxa8", "Bnbqkbnr/2pppppp/1p6/p7/8/P5P1/1PPPPP1P/RNBQK1NR b KQk - 0 4"),
        ("e6", "Bnbqkbnr/2pp1ppp/1p2p3/p7/8/P5P1/1PPPPP1P/RNBQK1NR w KQk - 0 5"),
        ("Ra2", "Bnbqkbnr/2pp1ppp/1p2p3/p7/8/P5P1/RPPPPP1P/1NBQK1NR b Kk - 1 5"),
        ("Bxa3", "Bnbqk1nr/2pp1ppp/1p2p3/p7/8/b5P1/RPPPPP1P/1NBQK1NR w Kk - 0 6"),
        ("Nf3", "Bnbqk1nr/2pp1ppp/1p2p3/p7/8/b4NP1/RPPPPP1P/1NBQK2R b Kk - 1 6"),
        ("Kf8", "Bnbq1knr/2pp1ppp/1p2p3/p7/8/b4NP1/RPPPPP1P/1NBQK2R w K - 2 7"),
        ("0-0", "Bnbq1knr/2pp1ppp/1p2p3/p7/8/b4NP1/RPPPPP1P/1NBQ1RK1 b - - 3 7"),
    ];

    for (notation, fen) in expected {
        replay.play(notation).unwrap();
        assert_eq!(fen, replay.fen(), "after {}", notation);
        assert!(!replay.is_checked(), "after {}", notation);
    }
}

#[test]
fn test_castling_into_check() {
    let mut replay = Replay::new("5k2/3p2pp/4p3/8/8/P5P1/1PP4P/3QK2R w K - 0 1");
    let rebound = replay.play("0-0+").unwrap();

    assert!(rebound.opponent_checked());
    assert_eq!(CastleRights::for_color(Color::White), rebound.revoked_castling());
    assert_eq!("5k2/3p2pp/4p3/8/8/P5P1/1PP4P/3Q1RK1 b - - 1 1", replay.fen());
    assert!(replay.is_checked());
}

#[test]
fn test_queenside_castling() {
    let mut replay = Replay::new("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
    replay.play("O-O-O").unwrap();
    assert_eq!("2kr3r/8/8/8/8/8/8/R3K2R w KQ - 1 2", replay.fen());
}

#[test]
fn test_castling_failures_leave_the_position_alone() {
    let cases = [
        (
            "r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1",
            "O-O",
            MoveError::CastlingNotPossible,
        ),
        (
            "r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1",
            "O-O-O",
            MoveError::CastlingRequiresVacantSquares {
                square: Coordinate::from_algebraic("b1").unwrap(),
            },
        ),
        (
            "r3kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1",
            "O-O",
            MoveError::KingMustHaveSafePassage {
                square: Coordinate::from_algebraic("f1").unwrap(),
            },
        ),
        (
            "r3k2r/8/8/8/8/8/8/R3K3 w KQkq - 0 1",
            "O-O",
            MoveError::UnableToCastle,
        ),
    ];

    for (fen, notation, error) in cases {
        let mut replay = Replay::new(fen);
        assert_eq!(Err(ReplayError::Move(error)), replay.play(notation), "{}", fen);
        assert_eq!(fen, replay.fen());
    }
}

#[test]
fn test_queenside_rook_may_pass_an_attacked_square() {
    // b1 is attacked, but only the king's squares must be safe.
    let mut replay = Replay::new("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
    replay.play("O-O-O").unwrap();
    assert_eq!("1r2k3/8/8/8/8/8/8/2KR4 b - - 1 1", replay.fen());
}
