use super::*;
use chess_core::MailboxBoard;

const WEIGHTS: [f64; 5] = [1.0, 5.0, 4.0, 4.0, 10.0];

fn table() -> WeightTable {
    WeightTable::from_slice(&WEIGHTS).unwrap()
}

fn board(fen: &str) -> MailboxBoard {
    MailboxBoard::from_fen(fen).unwrap()
}

#[test]
fn test_weight_table_needs_five_entries() {
    let err = WeightTable::from_slice(&[1.0, 2.0, 3.0]).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::WrongWeightCount {
            expected: 5,
            actual: 3
        }
    ));
    assert!(WeightTable::from_slice(&[1.0, 5.0, 3.0, 3.0, 9.0, 0.0]).is_err());
    assert!(WeightTable::from_slice(&[1.0, 5.0, -3.0, 3.0, 9.0]).is_err());
}

#[test]
fn test_starting_position_is_balanced() {
    let start = MailboxBoard::starting_board();
    assert_eq!(material_score(&start, &table()), 0.0);
    assert_eq!(positional_score(&start, &table()), 0.0);
}

#[test]
fn test_material_counts_sign_and_ignores_kings() {
    // White rook and knight against a black queen
    let b = board("3qk3/8/8/8/8/8/8/R2NK3 w - - 0 1");
    assert_eq!(material_score(&b, &table()), 5.0 + 4.0 - 10.0);
}

#[test]
fn test_positional_rewards_advanced_pawns() {
    let weights = WeightTable::from_slice(&[0.5, 5.0, 3.0, 3.0, 9.0]).unwrap();
    // White pawn on e6 (advanced 4 ranks), black pawn on a7 (home)
    let b = board("4k3/p7/4P3/8/8/8/8/4K3 w - - 0 1");
    let expected = (1.0 + 0.5 * 4.0) - 1.0;
    assert_eq!(positional_score(&b, &weights), expected);

    // A black pawn on d3 has advanced 4 ranks the other way
    let b = board("4k3/8/8/8/8/3p4/8/4K3 w - - 0 1");
    assert_eq!(positional_score(&b, &weights), -(1.0 + 0.5 * 4.0));
}

#[test]
fn test_en_passant_pawn_keeps_its_weight() {
    let b = board("4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1");
    assert_eq!(material_score(&b, &table()), 1.0);
    assert_eq!(positional_score(&b, &table()), 1.0 + 2.0);
}

#[test]
fn test_prefers_is_directional() {
    assert!(prefers(Color::White, 2.0, 1.0));
    assert!(!prefers(Color::White, 1.0, 1.0));
    assert!(prefers(Color::Black, -2.0, 1.0));
    assert!(!prefers(Color::Black, 3.0, 1.0));
}
