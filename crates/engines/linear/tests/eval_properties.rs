//! Property-based tests for the evaluators

use chess_core::{Board, Color, MailboxBoard, Piece, Square};
use linear_engine::{material_score, positional_score, WeightTable};
use proptest::prelude::*;

const FENS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "1n1qk1nr/8/8/4NP2/3P4/1pP3Pp/rB5P/3Q1RKB w - - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
];

/// Plays `plies` pseudo-random legal moves from one of the sample positions.
fn random_position() -> impl Strategy<Value = MailboxBoard> {
    (prop::sample::select(FENS), 0..10usize, any::<u64>()).prop_map(|(fen, plies, seed)| {
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

fn mirror(board: &MailboxBoard) -> MailboxBoard {
    let mut out = MailboxBoard::empty(board.who_plays_next().other());
    for sq in Square::all() {
        let flipped = Square::new(7 - sq.rank, sq.file);
        let piece = board
            .piece(sq)
            .map(|p| Piece::new(p.piece_type, p.color.other()));
        out = out.with_piece(flipped, piece);
    }
    out
}

fn weights() -> impl Strategy<Value = WeightTable> {
    prop::array::uniform5(1u8..20)
        .prop_map(|w| WeightTable::from_slice(&w.map(f64::from)).unwrap())
}

proptest! {
    #[test]
    fn test_mirroring_negates_material(board in random_position(), w in weights()) {
        let m = mirror(&board);
        prop_assert_eq!(material_score(&m, &w), -material_score(&board, &w));
    }

    #[test]
    fn test_mirroring_negates_positional(board in random_position(), w in weights()) {
        let m = mirror(&board);
        prop_assert_eq!(positional_score(&m, &w), -positional_score(&board, &w));
    }

    #[test]
    fn test_scores_are_finite_and_deterministic(board in random_position(), w in weights()) {
        let a = positional_score(&board, &w);
        prop_assert!(a.is_finite());
        prop_assert_eq!(a, positional_score(&board.clone(), &w));
        prop_assert_eq!(material_score(&board, &w), material_score(&board, &w));
    }
}

#[test]
fn test_mirror_of_start_is_start_with_black_to_move() {
    let start = MailboxBoard::starting_board();
    let m = mirror(&start);
    assert_eq!(m.who_plays_next(), Color::Black);
    for sq in Square::all() {
        assert_eq!(start.piece(sq), m.piece(sq));
    }
}
