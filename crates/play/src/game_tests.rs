use super::*;
use chess_core::MAX_SCORE;

fn board_from(fen: &str) -> ScoreBoard<CozyPosition> {
    ScoreBoard::new(CozyPosition::from_fen(fen).unwrap())
}

#[test]
fn test_outcome_detection() {
    let mated = CozyPosition::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
    assert_eq!(
        Outcome::of(&mated),
        Some(Outcome::Checkmate {
            winner: Color::Black
        })
    );

    let stalemate = CozyPosition::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();
    assert_eq!(Outcome::of(&stalemate), Some(Outcome::Stalemate));

    // King and bishop against a stalemated king: both rules apply.
    let stalled = CozyPosition::from_fen("7k/5K2/6B1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(stalled.is_insufficient_material());
    assert_eq!(Outcome::of(&stalled), Some(Outcome::Stalemate));

    let bare = CozyPosition::from_fen("8/8/8/4k3/8/4K3/8/8 w - - 0 1").unwrap();
    assert_eq!(Outcome::of(&bare), Some(Outcome::InsufficientMaterial));

    let fifty = CozyPosition::from_fen("8/8/8/4k3/8/4K3/8/R7 w - - 100 80").unwrap();
    assert_eq!(Outcome::of(&fifty), Some(Outcome::ClaimableDraw));

    assert_eq!(Outcome::of(&CozyPosition::startpos()), None);
}

#[test]
fn test_result_strings() {
    assert_eq!(Outcome::Checkmate { winner: Color::White }.result(), "1-0");
    assert_eq!(Outcome::Checkmate { winner: Color::Black }.result(), "0-1");
    assert_eq!(Outcome::Stalemate.result(), "1/2-1/2");
    assert_eq!(Outcome::FivefoldRepetition.result(), "1/2-1/2");
    assert_eq!(Outcome::MoveLimit.result(), "*");
    assert_eq!(
        Outcome::Checkmate { winner: Color::White }.to_string(),
        "Checkmate, White wins"
    );
}

#[test]
fn test_decided_start_plays_no_moves() {
    let runner = GameRunner::new(None, false);
    let mut board = board_from("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1");
    let mut white = MinimaxEngine::new(1);
    let mut black = SamplingEngine::with_seed(2, 3);

    let report = runner.play(&mut board, &mut white, &mut black).unwrap();

    assert_eq!(report.moves, 0);
    assert_eq!(
        report.outcome,
        Outcome::Checkmate {
            winner: Color::White
        }
    );
}

#[test]
fn test_move_limit_stops_the_game() {
    let runner = GameRunner::new(Some(6), false);
    let mut board = ScoreBoard::new(CozyPosition::startpos());
    let mut white = MinimaxEngine::new(1);
    let mut black = SamplingEngine::with_seed(2, 11);

    let report = runner.play(&mut board, &mut white, &mut black).unwrap();

    assert_eq!(report.outcome, Outcome::MoveLimit);
    assert_eq!(report.moves, 6);
    assert_eq!(report.history.len(), 6);
    assert_eq!(board.position().move_count(), 6);
    assert_eq!(report.white_score, board.white_score());
    assert_eq!(report.black_score, board.black_score());
}

#[test]
fn test_random_self_play_reaches_a_result() {
    let runner = GameRunner::new(Some(400), false);
    let mut board = ScoreBoard::new(CozyPosition::startpos());
    let mut white = SamplingEngine::with_seed(1, 1);
    let mut black = SamplingEngine::with_seed(1, 2);

    let report = runner.play(&mut board, &mut white, &mut black).unwrap();

    assert!(report.moves <= 400);
    assert!(report.white_score <= MAX_SCORE && report.black_score <= MAX_SCORE);
    match report.outcome {
        Outcome::MoveLimit => assert_eq!(report.moves, 400),
        outcome => assert_eq!(Outcome::of(board.position()), Some(outcome)),
    }
}

#[test]
fn test_history_records_castling_in_standard_notation() {
    let runner = GameRunner::new(Some(2), false);
    let mut board = board_from("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let mut white = HumanPlayer::new(std::io::Cursor::new("e1g1\n"), Vec::new());
    let mut black = HumanPlayer::new(std::io::Cursor::new("e8c8\n"), Vec::new());

    let report = runner.play(&mut board, &mut white, &mut black).unwrap();

    assert_eq!(report.history, ["e1g1", "e8c8"]);
    assert_eq!(report.moves, 2);
}

#[test]
fn test_endgame_flag_is_refreshed_each_turn() {
    let runner = GameRunner::new(Some(1), false);
    let mut board = board_from("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
    assert!(!board.is_endgame());
    let mut white = MinimaxEngine::new(1);
    let mut black = MinimaxEngine::new(1);

    runner.play(&mut board, &mut white, &mut black).unwrap();

    assert!(board.is_endgame());
}

#[test]
fn test_create_players_from_config() {
    let config = PlayConfig {
        white: PlayerKind::Random,
        black: PlayerKind::Minimax,
        seed: Some(4),
        ..Default::default()
    };
    let white = create_player(config.white, Color::White, &config);
    let black = create_player(config.black, Color::Black, &config);
    assert_eq!(white.name(), "Sampling");
    assert_eq!(black.name(), "Minimax");
}

#[test]
fn test_starting_board_from_config() {
    let config = PlayConfig {
        fen: Some("8/8/8/4k3/8/4K3/8/R7 w - - 0 1".to_string()),
        ..Default::default()
    };
    let board = starting_board(&config).unwrap();
    assert_eq!(board.white_score(), MAX_SCORE - 3500);
    assert_eq!(board.black_score(), MAX_SCORE - 4000);
    assert_eq!(board.position().fen(), "8/8/8/4k3/8/4K3/8/R7 w - - 0 1");

    let board = starting_board(&PlayConfig::default()).unwrap();
    assert_eq!(board.white_score(), MAX_SCORE);
    assert_eq!(board.black_score(), MAX_SCORE);

    let config = PlayConfig {
        fen: Some("nonsense".to_string()),
        ..Default::default()
    };
    assert!(starting_board(&config).is_err());
}
