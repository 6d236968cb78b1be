use super::*;

#[test]
fn test_move_ordering_follows_field_order() {
    let a = Move::new(Square::new(1, 4), Square::new(3, 4));
    let b = Move::new(Square::new(1, 5), Square::new(2, 5));
    let c = Move::new(Square::new(0, 6), Square::new(2, 7));
    let mut moves = vec![a, b, c];
    moves.sort();
    assert_eq!(moves, vec![c, a, b]);
}

#[test]
fn test_sentinel_move() {
    assert!(Move::default().is_none());
    assert_eq!(Move::NONE.to_string(), "0000");
    let mv = Move::new(Square::new(1, 0), Square::new(2, 0));
    assert!(!mv.is_none());
}

#[test]
fn test_move_coordinate_notation() {
    let mv: Move = "e2e4".parse().unwrap();
    assert_eq!(mv.source(), Square::new(1, 4));
    assert_eq!(mv.destination(), Square::new(3, 4));
    assert_eq!(mv.to_string(), "e2e4");

    let promo: Move = "a7a8q".parse().unwrap();
    assert_eq!(promo.to_string(), "a7a8");

    assert!("e2".parse::<Move>().is_err());
    assert!("i2e4".parse::<Move>().is_err());
    assert!("e9e4".parse::<Move>().is_err());
}

#[test]
fn test_color_sign_and_other() {
    assert_eq!(Color::White.sign(), 1);
    assert_eq!(Color::Black.sign(), -1);
    assert_eq!(Color::White.other(), Color::Black);
    assert_eq!(Color::Black.other().other(), Color::Black);
}

#[test]
fn test_square_iteration_covers_board() {
    let squares: Vec<Square> = Square::all().collect();
    assert_eq!(squares.len(), 64);
    assert_eq!(squares[0], Square::new(0, 0));
    assert_eq!(squares[63], Square::new(7, 7));
    for (i, sq) in squares.iter().enumerate() {
        assert_eq!(sq.idx(), i);
        assert_eq!(Square::from_idx(i as u8), *sq);
    }
}

#[test]
fn test_en_passant_marker_is_a_pawn() {
    assert!(PieceType::Pawn.is_pawn());
    assert!(PieceType::EnPassantCapturablePawn.is_pawn());
    assert!(!PieceType::Queen.is_pawn());
}
