use super::*;

#[test]
fn test_defaults() {
    let config = GameConfig::from_json_str("{}").unwrap();
    assert_eq!(config, GameConfig::default());
    assert_eq!(config.white_algo[ALGO_NAME_FIELD], "AlgoLinearDepthTwoExt");
    assert_eq!(config.black_algo[ALGO_NAME_FIELD], "CliAlgo");
    assert_eq!(config.max_moves, None);
}

#[test]
fn test_json_records_keep_their_options() {
    let config = GameConfig::from_json_str(
        r#"{
            "WhiteAlgo": { "AlgoName": "AlgoDumbo", "MaxDepth": 3 },
            "MaxMoves": 40
        }"#,
    )
    .unwrap();
    assert_eq!(config.white_algo["AlgoName"], "AlgoDumbo");
    assert_eq!(config.white_algo["MaxDepth"], 3);
    assert_eq!(config.black_algo["AlgoName"], "CliAlgo");
    assert_eq!(config.max_moves, Some(40));
}

#[test]
fn test_toml() {
    let config = GameConfig::from_toml_str(
        r#"
MaxMoves = 12
Unicode = true

[WhiteAlgo]
AlgoName = "AlgoLinearDepthOne"
QueenWeight = 10.0

[BlackAlgo]
AlgoName = "AlgoLinearDepthTwoExt"
Breadth = 3
"#,
    )
    .unwrap();
    assert_eq!(config.white_algo["AlgoName"], "AlgoLinearDepthOne");
    assert_eq!(config.white_algo["QueenWeight"], 10.0);
    assert_eq!(config.black_algo["Breadth"], 3);
    assert_eq!(config.max_moves, Some(12));
    assert!(config.unicode);
}

#[test]
fn test_override_keeps_options() {
    let mut config =
        GameConfig::from_json_str(r#"{ "BlackAlgo": { "AlgoName": "AlgoDumbo", "MaxDepth": 2 } }"#)
            .unwrap();
    config.set_black_algo("AlgoLinearDepthTwoExt");
    assert_eq!(config.black_algo["AlgoName"], "AlgoLinearDepthTwoExt");
    assert_eq!(config.black_algo["MaxDepth"], 2);
}

#[test]
fn test_record_must_be_an_object() {
    assert!(matches!(
        GameConfig::from_json_str(r#"{ "WhiteAlgo": "AlgoDumbo" }"#),
        Err(GameConfigError::NotARecord("WhiteAlgo"))
    ));
}

#[test]
fn test_load_by_extension() {
    let dir = std::env::temp_dir().join(format!("space-chess-config-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();

    let toml_path = dir.join("game.toml");
    fs::write(&toml_path, "MaxMoves = 3\n").unwrap();
    assert_eq!(GameConfig::load(&toml_path).unwrap().max_moves, Some(3));

    let json_path = dir.join("game.json");
    fs::write(&json_path, r#"{ "MaxMoves": 4 }"#).unwrap();
    assert_eq!(GameConfig::load(&json_path).unwrap().max_moves, Some(4));

    assert!(matches!(
        GameConfig::load(&dir.join("missing.json")),
        Err(GameConfigError::Io { .. })
    ));
    fs::remove_dir_all(&dir).unwrap();
}
