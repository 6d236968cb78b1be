use super::*;
use chess_core::MailboxBoard;
use serde_json::json;

fn board(fen: &str) -> MailboxBoard {
    MailboxBoard::from_fen(fen).unwrap()
}

fn m(txt: &str) -> Move {
    txt.parse().unwrap()
}

fn algo() -> AlgoLinearDepthOne {
    AlgoLinearDepthOne::new(&[1.0, 5.0, 4.0, 4.0, 10.0]).unwrap()
}

#[test]
fn test_opening_move_is_legal() {
    let start = MailboxBoard::starting_board();
    let mv = algo().best_move(&start);
    assert!(start.valid_moves().contains_key(&mv));
    assert!(start.update_board(mv).is_some());
    // Nothing can be captured, so the tie falls to the smallest move
    assert_eq!(mv, m("b1a3"));
}

#[test]
fn test_white_maximises() {
    // The rook can win the queen on a6
    let b = board("4k3/8/q7/8/8/8/8/R3K3 w - - 0 1");
    assert_eq!(algo().best_move(&b), m("a1a6"));
}

#[test]
fn test_black_minimises() {
    // Black queen can take the rook on d1 or the pawn on h4
    let b = board("3qk3/8/8/8/7P/8/8/3RK3 b - - 0 1");
    let mv = algo().best_move(&b);
    assert_eq!(mv, m("d8d1"));
}

#[test]
fn test_no_moves_returns_sentinel() {
    let stale = board("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1");
    assert!(algo().best_move(&stale).is_none());

    let mate = board("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1");
    let mut selector: Box<dyn MoveSelector<MailboxBoard>> = Box::new(algo());
    assert_eq!(selector.next_move(&mate).unwrap(), Move::NONE);
}

#[test]
fn test_single_legal_move_is_played() {
    // Black king on a8 boxed in; only a8-b8 is legal
    let b = board("k7/8/1K6/8/8/8/8/2R5 b - - 0 1");
    assert_eq!(b.valid_move_count(), 1);
    let only = *b.valid_moves().keys().next().unwrap();
    assert_eq!(algo().best_move(&b), only);
}

#[test]
fn test_factory_uses_config_record() {
    let selector =
        AlgoLinearDepthOne::create_from_config::<MailboxBoard>(&json!({ "QueenWeight": 20.0 }))
            .unwrap();
    assert_eq!(selector.name(), AlgoLinearDepthOne::NAME);

    assert!(
        AlgoLinearDepthOne::create_from_config::<MailboxBoard>(&json!({ "PawnWeight": 0.0 }))
            .is_err()
    );
}

#[test]
fn test_deterministic() {
    let b = board("1n1qk1nr/8/8/4NP2/3P4/1pP3Pp/rB5P/3Q1RKB w - - 0 1");
    let a = algo();
    assert_eq!(a.best_move(&b), a.best_move(&b));
    assert_ne!(a.best_move(&b), Move::NONE);
}

#[test]
fn test_config_weights_reach_the_selector() {
    let a = AlgoLinearDepthOne::from_config(&DepthOneConfig::default()).unwrap();
    assert_eq!(a.weights().queen, 9.0);
    assert_eq!(a.weights().rook, 5.0);

    let custom = DepthOneConfig { queen_weight: 20.0, ..Default::default() };
    let a = AlgoLinearDepthOne::from_config(&custom).unwrap();
    assert_eq!(a.weights().queen, 20.0);
}
