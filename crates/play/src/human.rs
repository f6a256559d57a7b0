//! Moves typed at the terminal

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use chess_core::{CozyPosition, Engine, EngineError, Result, RulesEngine, ScoreBoard};
use tracing::debug;

/// Reads moves in UCI notation (`e2e4`, `e7e8q`), one per line, asking again
/// until the line names a legal move.
///
/// Every prompt is preceded by the sorted list of legal moves.
pub struct HumanPlayer<I = BufReader<Stdin>, W = Stdout> {
    input: I,
    output: W,
}

impl HumanPlayer {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<I: BufRead, W: Write> HumanPlayer<I, W> {
    pub fn new(input: I, output: W) -> Self {
        Self { input, output }
    }

    /// Everything written to the player so far.
    pub fn output(&self) -> &W {
        &self.output
    }

    fn prompt(&mut self, board: &ScoreBoard<CozyPosition>) -> io::Result<()> {
        let position = board.position();
        let mut moves: Vec<String> = position
            .legal_moves()
            .into_iter()
            .map(|mv| position.uci(mv))
            .collect();
        moves.sort();

        writeln!(self.output, "Legal moves: {}", moves.join(" "))?;
        write!(self.output, "Your move ({}): ", board.side_to_move().name())?;
        self.output.flush()
    }
}

impl<I, W> Engine<CozyPosition> for HumanPlayer<I, W>
where
    I: BufRead + Send,
    W: Write + Send,
{
    fn choose_move(
        &mut self,
        board: &mut ScoreBoard<CozyPosition>,
    ) -> Result<<CozyPosition as RulesEngine>::Move> {
        loop {
            self.prompt(board)?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(EngineError::Io(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input ended before a move was entered",
                )));
            }

            match board.position().parse_uci(line.trim()) {
                Ok(mv) => return Ok(mv),
                Err(err) => {
                    debug!(input = line.trim(), "rejected move");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Color, Piece, PieceKind};
    use std::io::Cursor;

    fn player(input: &'static str) -> HumanPlayer<Cursor<&'static str>, Vec<u8>> {
        HumanPlayer::new(Cursor::new(input), Vec::new())
    }

    fn printed(player: &HumanPlayer<Cursor<&'static str>, Vec<u8>>) -> String {
        String::from_utf8(player.output().clone()).unwrap()
    }

    #[test]
    fn test_retries_until_a_legal_move() {
        let mut player = player("e2e5\n\nhello\n e2e4 \n");
        let mut board = ScoreBoard::new(CozyPosition::startpos());

        let mv = player.choose_move(&mut board).unwrap();

        assert_eq!(board.position().uci(mv), "e2e4");
        assert_eq!(board.position().move_count(), 0);
        let printed = printed(&player);
        assert_eq!(printed.matches("Your move (White): ").count(), 4);
        assert!(printed.contains("cannot parse move 'e2e5'"));
    }

    #[test]
    fn test_lists_sorted_legal_moves_before_each_prompt() {
        let mut player = player("e2e4\n");
        let mut board = ScoreBoard::new(CozyPosition::startpos());

        player.choose_move(&mut board).unwrap();

        let printed = printed(&player);
        let mut lines = printed.lines();
        let listing = lines.next().unwrap();
        assert!(listing.starts_with("Legal moves: a2a3 a2a4 b1a3 b1c3 b2b3 b2b4 "));
        assert!(listing.ends_with(" g2g3 g2g4 h2h3 h2h4"));
        assert_eq!(listing.split(' ').count(), 2 + 20);
        assert_eq!(lines.next(), Some("Your move (White): "));
    }

    #[test]
    fn test_listing_shows_castling_in_standard_notation() {
        let mut player = player("e1g1\n");
        let mut board =
            ScoreBoard::new(CozyPosition::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap());

        player.choose_move(&mut board).unwrap();

        let printed = printed(&player);
        assert!(printed.contains(" e1c1 "));
        assert!(printed.contains(" e1g1 "));
        assert!(!printed.contains("e1h1"));
    }

    #[test]
    fn test_end_of_input_is_an_io_error() {
        let mut player = player("e2e5\n");
        let mut board = ScoreBoard::new(CozyPosition::startpos());

        match player.choose_move(&mut board) {
            Err(EngineError::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("expected an input error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_failure_is_an_io_error() {
        struct Broken;

        impl io::Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal closed"))
            }
        }

        let mut player = HumanPlayer::new(BufReader::new(Broken), Vec::new());
        let mut board = ScoreBoard::new(CozyPosition::startpos());

        assert!(matches!(
            player.choose_move(&mut board),
            Err(EngineError::Io(err)) if err.kind() == io::ErrorKind::BrokenPipe
        ));
    }

    #[test]
    fn test_castling_notation() {
        let mut player = player("e1g1\n");
        let mut board =
            ScoreBoard::new(CozyPosition::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap());

        let mv = player.choose_move(&mut board).unwrap();
        assert_eq!(board.position().uci(mv), "e1g1");

        board.push(mv).unwrap();
        assert_eq!(board.position().move_count(), 1);
        let king = Piece::new(Color::White, PieceKind::King);
        let rook = Piece::new(Color::White, PieceKind::Rook);
        assert_eq!(board.position().piece_at(6), Some(king));
        assert_eq!(board.position().piece_at(5), Some(rook));
    }
}
