use super::*;
use chess_core::CozyPosition;

fn board_from(fen: &str) -> ScoreBoard<CozyPosition> {
    ScoreBoard::new(CozyPosition::from_fen(fen).unwrap())
}

#[test]
fn minimax_engine_returns_legal_move() {
    let mut engine = MinimaxEngine::new(2);
    let mut board = ScoreBoard::new(CozyPosition::startpos());

    let mv = engine.choose_move(&mut board).unwrap();

    assert!(board.legal_moves().contains(&mv));
    assert_eq!(board.position().move_count(), 0);
    assert!(engine.nodes() > 0);
}

#[test]
fn minimax_engine_plays_the_searched_move() {
    let mut engine = MinimaxEngine::new(2).with_ordering(MoveOrdering::ByMoveValue);
    let mut board = board_from("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1");

    let mv = engine.play_move(&mut board).unwrap();

    assert_eq!(board.position().uci(mv), "d1d5");
    assert_eq!(board.position().move_count(), 1);
    assert_eq!(board.black_score(), chess_core::MAX_SCORE - 900);
}

#[test]
fn minimax_engine_handles_checkmate() {
    let mut engine = MinimaxEngine::new(3);
    let mut board =
        board_from("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1");

    let err = engine.choose_move(&mut board).unwrap_err();

    assert!(matches!(err, EngineError::NoMoveAvailable));
}

#[test]
fn minimax_engine_handles_stalemate() {
    let mut engine = MinimaxEngine::new(3);
    let mut board = board_from("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1");

    assert!(matches!(
        engine.choose_move(&mut board),
        Err(EngineError::NoMoveAvailable)
    ));
}

#[test]
fn minimax_engine_searches_for_black() {
    let mut engine = MinimaxEngine::new(2);
    let mut board = board_from("3rk3/8/8/8/3Q4/8/8/4K3 b - - 0 1");

    let mv = engine.choose_move(&mut board).unwrap();

    assert_eq!(board.position().uci(mv), "d8d4");
}

#[test]
fn minimax_engine_metadata() {
    let mut engine = MinimaxEngine::new(1);
    assert_eq!(engine.depth(), 1);
    assert_eq!(Engine::<CozyPosition>::name(&engine), "Minimax");

    let mut board = ScoreBoard::new(CozyPosition::startpos());
    engine.choose_move(&mut board).unwrap();
    Engine::<CozyPosition>::new_game(&mut engine);
    assert_eq!(engine.nodes(), 0);
}
