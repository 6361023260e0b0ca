use std::io::{self, BufRead, Write};

use tictactoe_engine::tictactoe::{MatchPhase, Position, TicTacToeMatch};
use tictactoe_engine::{debug_log, log, SessionRng};

use crate::ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(Position),
    Reset,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    match line.trim().to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "r" | "reset" | "new" => Ok(Command::Reset),
        "h" | "help" | "?" => Ok(Command::Help),
        other => other
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(Position::new)
            .map(Command::Place)
            .ok_or_else(|| format!("Unknown input '{}'. {}", other, ui::HELP_TEXT)),
    }
}

/// Drives one match over a line-based terminal, letting the bot answer
/// whenever it is its turn.
pub struct TerminalRunner<R, W> {
    input: R,
    output: W,
    game: TicTacToeMatch,
    rng: SessionRng,
}

impl<R: BufRead, W: Write> TerminalRunner<R, W> {
    pub fn new(input: R, output: W, game: TicTacToeMatch, rng: SessionRng) -> Self {
        Self {
            input,
            output,
            game,
            rng,
        }
    }

    pub fn game(&self) -> &TicTacToeMatch {
        &self.game
    }

    pub fn run(&mut self) -> io::Result<()> {
        log!(
            "Starting {} game at {} difficulty, seed {}",
            self.game.mode(),
            self.game.difficulty(),
            self.rng.seed()
        );
        writeln!(self.output, "{}", ui::HELP_TEXT)?;

        loop {
            if self.game.phase() == MatchPhase::WaitingForAi {
                self.play_ai_turn()?;
                continue;
            }

            write!(self.output, "\n{}> ", ui::render(&self.game))?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };

            match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::Reset) => {
                    self.game.reset();
                    log!("Game reset");
                }
                Ok(Command::Help) => writeln!(self.output, "{}", ui::HELP_TEXT)?,
                Ok(Command::Place(position)) => self.place_mark(position)?,
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }

        log!("Leaving game");
        Ok(())
    }

    fn place_mark(&mut self, position: Position) -> io::Result<()> {
        let mark = self.game.current_mark();
        match self.game.place_mark(position) {
            Ok(()) => {
                debug_log!("{} placed at {}", mark, position);
                self.log_if_over();
                Ok(())
            }
            Err(err) => writeln!(self.output, "{}", err),
        }
    }

    fn play_ai_turn(&mut self) -> io::Result<()> {
        let position = self.game.play_ai_turn(&mut self.rng).map_err(io::Error::other)?;
        writeln!(self.output, "AI plays {}", position)?;
        self.log_if_over();
        Ok(())
    }

    fn log_if_over(&self) {
        if self.game.phase() == MatchPhase::GameOver {
            log!("Game over: {}", ui::status_text(&self.game));
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe_engine::tictactoe::{Difficulty, GameMode, GameStatus, Mark};

    fn run(game: TicTacToeMatch, input: &str) -> (TicTacToeMatch, String) {
        let mut output = Vec::new();
        let game = {
            let input = Cursor::new(input.to_string());
            let mut runner = TerminalRunner::new(input, &mut output, game, SessionRng::new(0));
            runner.run().unwrap();
            runner.game().clone()
        };
        (game, String::from_utf8(output).unwrap())
    }

    fn pvp() -> TicTacToeMatch {
        TicTacToeMatch::new(GameMode::PlayerVsPlayer, Difficulty::Hard, Mark::X)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("q\n"), Ok(Command::Quit));
        assert_eq!(parse_command(" Reset "), Ok(Command::Reset));
        assert_eq!(parse_command("?"), Ok(Command::Help));
        assert_eq!(parse_command("5"), Ok(Command::Place(Position::new(4).unwrap())));
        assert!(parse_command("0").is_err());
        assert!(parse_command("10").is_err());
        assert!(parse_command("center").is_err());
    }

    #[test]
    fn test_pvp_moves_are_applied() {
        let (game, _) = run(pvp(), "5\n1\nq\n");

        assert_eq!(game.board().get(Position::new(4).unwrap()), Mark::X);
        assert_eq!(game.board().get(Position::new(0).unwrap()), Mark::O);
    }

    #[test]
    fn test_occupied_cell_reports_error() {
        let (game, output) = run(pvp(), "5\n5\nq\n");

        assert!(output.contains("already marked"));
        assert_eq!(game.board().moves_played(), 1);
    }

    #[test]
    fn test_end_of_input_stops_runner() {
        let (game, _) = run(pvp(), "");

        assert_eq!(game.board().moves_played(), 0);
    }

    #[test]
    fn test_ai_opens_when_human_plays_o() {
        let game = TicTacToeMatch::new(GameMode::PlayerVsAi, Difficulty::Hard, Mark::O);

        let (game, output) = run(game, "q\n");

        assert!(output.contains("AI plays 1"));
        assert_eq!(game.board().get(Position::new(0).unwrap()), Mark::X);
    }

    #[test]
    fn test_reset_clears_board() {
        let (game, _) = run(pvp(), "1\n2\nr\nq\n");

        assert_eq!(game.board().moves_played(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_hard_ai_wins_scripted_game() {
        let game = TicTacToeMatch::new(GameMode::PlayerVsAi, Difficulty::Hard, Mark::X);

        let (game, output) = run(game, "4\n6\n8\n");

        assert_eq!(game.status(), GameStatus::OWon);
        assert!(output.contains("The AI wins."));
    }
}
