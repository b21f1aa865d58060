mod common;

use chess_rules::prelude::*;
use common::{Replay, ReplayError};

#[test]
fn test_king_hunt_ends_in_mate() {
    let mut replay = Replay::new("8/KN6/8/8/1k6/4B3/8/3Q4");
    for notation in ["Qd6+", "Kc3", "Qd4+", "Kb3", "Nc5+", "Ka3", "Bc1+", "Ka2", "Qb2#"] {
        replay.play(notation).unwrap();
        let claims_check = notation.ends_with('+') || notation.ends_with('#');
        assert_eq!(claims_check, replay.is_checked(), "{}", notation);
    }

    let before = replay.fen();
    assert_eq!(
        Err(ReplayError::Move(MoveError::SelfCheckNotAllowed)),
        replay.play("Ka1")
    );
    assert_eq!(before, replay.fen());
}

#[test]
fn test_false_check_claim_is_rejected() {
    let mut replay = Replay::new("8/KN6/8/8/1k6/4B3/8/3Q4");
    assert_eq!(
        Err(ReplayError::Move(MoveError::CheckClaimMismatch {
            claimed: false,
            actual: true
        })),
        replay.play("Qd6")
    );
    assert_eq!(
        Err(ReplayError::Move(MoveError::CheckClaimMismatch {
            claimed: true,
            actual: false
        })),
        replay.play("Qd5+")
    );
    assert_eq!("8/KN6/8/8/1k6/4B3/8/3Q4 w - - 0 1", replay.fen());
}

#[test]
fn test_pinned_piece_cannot_move() {
    let mut replay = Replay::new("4k3/4r3/8/8/8/8/4N3/4K3 w - - 0 1");
    assert_eq!(
        Err(ReplayError::Move(MoveError::SelfCheckNotAllowed)),
        replay.play("Nc3")
    );
}
