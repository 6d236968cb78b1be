use super::*;
use chess_core::MailboxBoard;
use std::io::Cursor;

fn m(txt: &str) -> Move {
    txt.parse().unwrap()
}

fn player(input: &str) -> CliAlgo<Cursor<Vec<u8>>, Vec<u8>> {
    CliAlgo::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn transcript(p: &CliAlgo<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(p.output().clone()).unwrap()
}

#[test]
fn test_reads_a_legal_move() {
    let mut p = player("e2e4\n");
    let start = MailboxBoard::starting_board();
    assert_eq!(p.next_move(&start), Ok(m("e2e4")));
    assert_eq!(transcript(&p), "White to move: ");
}

#[test]
fn test_reprompts_on_garbage_and_illegal_moves() {
    let mut p = player("hello\n\ne2e5\n  g1f3  \n");
    let start = MailboxBoard::starting_board();
    assert_eq!(p.next_move(&start), Ok(m("g1f3")));
    let out = transcript(&p);
    assert_eq!(out.matches("White to move: ").count(), 4);
    assert!(out.contains("cannot parse \"hello\""));
    assert!(out.contains("e2e5 is not a legal move here"));
}

#[test]
fn test_promotion_suffix_is_accepted() {
    let b = MailboxBoard::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
    let mut p = player("a7a8q\n");
    assert_eq!(p.next_move(&b), Ok(m("a7a8")));
}

#[test]
fn test_end_of_input_yields_sentinel() {
    let mut p = player("nonsense\n");
    let start = MailboxBoard::starting_board();
    assert_eq!(p.next_move(&start), Ok(Move::NONE));
}

#[test]
fn test_black_prompt() {
    let b = MailboxBoard::starting_board()
        .update_board(m("e2e4"))
        .unwrap();
    let mut p = player("e7e5\n");
    assert_eq!(p.next_move(&b), Ok(m("e7e5")));
    assert_eq!(transcript(&p), "Black to move: ");
}

#[test]
fn test_missing_input_file_is_a_config_error() {
    let config = CliAlgoConfig {
        input_file: Some(PathBuf::from("/nonexistent/space-chess/moves.txt")),
        output_file: None,
    };
    assert!(matches!(
        StdioCliAlgo::from_config(&config),
        Err(ConfigError::InvalidOption { field: "InputFile", .. })
    ));
}
