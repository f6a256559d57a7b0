use super::*;

#[test]
fn test_defaults() {
    let config = PlayConfig::default();
    assert_eq!(config.depth, 3);
    assert_eq!(config.samples(), 3);
    assert_eq!(config.white, PlayerKind::Minimax);
    assert_eq!(config.black, PlayerKind::Random);
    assert_eq!(config.move_ordering, MoveOrdering::EnumerationOrder);
    assert_eq!(config.sample_keying, SampleKeying::ScoreKeyed);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = PlayConfig::from_toml(
        r#"
        depth = 2
        black = "minimax"
        move_ordering = "by_move_value"
        "#,
    )
    .unwrap();

    assert_eq!(config.depth, 2);
    assert_eq!(config.black, PlayerKind::Minimax);
    assert_eq!(config.white, PlayerKind::Minimax);
    assert_eq!(config.move_ordering, MoveOrdering::ByMoveValue);
    assert_eq!(config.samples(), 2);
}

#[test]
fn test_full_toml() {
    let config = PlayConfig::from_toml(
        r#"
        depth = 4
        samples = 10
        white = "human"
        black = "random"
        max_moves = 80
        move_ordering = "enumeration_order"
        sample_keying = "all_samples"
        seed = 99
        fen = "8/8/8/4k3/8/4K3/8/R7 w - - 0 1"
        log_level = "debug"
        "#,
    )
    .unwrap();

    assert_eq!(config.samples(), 10);
    assert_eq!(config.white, PlayerKind::Human);
    assert_eq!(config.max_moves, Some(80));
    assert_eq!(config.sample_keying, SampleKeying::AllSamples);
    assert_eq!(config.seed, Some(99));
    assert_eq!(config.fen.as_deref(), Some("8/8/8/4k3/8/4K3/8/R7 w - - 0 1"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_unknown_keys_are_rejected() {
    assert!(PlayConfig::from_toml("depht = 3").is_err());
    assert!(PlayConfig::from_toml(r#"white = "stockfish""#).is_err());
}

#[test]
fn test_validation() {
    let config = PlayConfig {
        depth: 0,
        samples: Some(2),
        ..Default::default()
    };
    assert!(config.validate().is_err());

    let config = PlayConfig {
        samples: Some(0),
        ..Default::default()
    };
    assert!(config.validate().is_err());

    let config = PlayConfig {
        log_level: "loud".into(),
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_flags_override_defaults() {
    let cli = Cli::try_parse_from([
        "chess_play",
        "--depth",
        "2",
        "--white",
        "random",
        "--black",
        "minimax",
        "--ordered",
        "--all-samples",
        "--seed",
        "5",
        "--max-moves",
        "40",
    ])
    .unwrap();
    let config = cli.resolve().unwrap();

    assert_eq!(config.depth, 2);
    assert_eq!(config.white, PlayerKind::Random);
    assert_eq!(config.black, PlayerKind::Minimax);
    assert_eq!(config.move_ordering, MoveOrdering::ByMoveValue);
    assert_eq!(config.sample_keying, SampleKeying::AllSamples);
    assert_eq!(config.seed, Some(5));
    assert_eq!(config.max_moves, Some(40));
}

#[test]
fn test_flags_override_file() {
    let path = std::env::temp_dir().join(format!("chess_play_config_{}.toml", std::process::id()));
    std::fs::write(&path, "depth = 5\nsamples = 7\nblack = \"minimax\"\n").unwrap();

    let args: Vec<std::ffi::OsString> = vec![
        "chess_play".into(),
        "--config".into(),
        path.clone().into_os_string(),
        "--depth".into(),
        "1".into(),
    ];
    let cli = Cli::try_parse_from(args).unwrap();
    let config = cli.resolve().unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.depth, 1);
    assert_eq!(config.samples(), 7);
    assert_eq!(config.black, PlayerKind::Minimax);
}

#[test]
fn test_missing_config_file_is_an_error() {
    let cli = Cli {
        config: Some(PathBuf::from("/nonexistent/chess_play.toml")),
        ..Default::default()
    };
    let err = cli.resolve().unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}
