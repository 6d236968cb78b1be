//! Property-based tests tying move generation to move application

use chess_core::{Board, MailboxBoard, Move, Square};
use proptest::prelude::*;

const FENS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
];

/// Plays `plies` pseudo-random legal moves from one of the sample positions.
fn random_position() -> impl Strategy<Value = MailboxBoard> {
    (prop::sample::select(FENS), 0..12usize, any::<u64>()).prop_map(|(fen, plies, seed)| {
        let mut board = MailboxBoard::from_fen(fen).unwrap();
        let mut state = seed | 1;
        for _ in 0..plies {
            let moves = board.valid_moves();
            if moves.is_empty() {
                break;
            }
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let pick = (state % moves.len() as u64) as usize;
            board = moves.into_values().nth(pick).unwrap();
        }
        board
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_update_board_accepts_exactly_the_valid_moves(board in random_position()) {
        let valid = board.valid_moves();
        let mut accepted = 0;
        for from in Square::all() {
            for to in Square::all() {
                let mv = Move::new(from, to);
                match (board.update_board(mv), valid.get(&mv)) {
                    (Some(played), Some(listed)) => {
                        accepted += 1;
                        prop_assert_eq!(&played, listed);
                    }
                    (None, None) => {}
                    (played, listed) => prop_assert!(
                        false,
                        "{mv}: update_board {} but valid_moves {}",
                        if played.is_some() { "accepts" } else { "rejects" },
                        if listed.is_some() { "lists it" } else { "omits it" },
                    ),
                }
            }
        }
        prop_assert_eq!(accepted, valid.len());
        prop_assert_eq!(board.valid_move_count(), valid.len());
    }

    #[test]
    fn test_successors_hand_the_move_to_the_opponent(board in random_position()) {
        for next in board.valid_moves().values() {
            prop_assert_eq!(next.who_plays_next(), board.who_plays_next().other());
        }
    }
}
