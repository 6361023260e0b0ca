use tictactoe_engine::tictactoe::{GameMode, GameStatus, MatchPhase, TicTacToeMatch};

pub const HELP_TEXT: &str = "Enter 1-9 to place a mark, r to reset, h for help, q to quit.";

pub fn status_text(game: &TicTacToeMatch) -> String {
    match game.status() {
        GameStatus::Draw => "The game is a draw.".to_string(),
        status @ (GameStatus::XWon | GameStatus::OWon) => match (game.mode(), status.winner()) {
            (GameMode::PlayerVsAi, winner) if winner == game.ai_mark() => "The AI wins.".to_string(),
            (GameMode::PlayerVsAi, _) => "You win!".to_string(),
            (GameMode::PlayerVsPlayer, Some(winner)) => format!("{} wins!", winner),
            (GameMode::PlayerVsPlayer, None) => String::new(),
        },
        GameStatus::InProgress => match game.phase() {
            MatchPhase::WaitingForAi => "AI is thinking...".to_string(),
            _ => format!("{}'s turn", game.current_mark()),
        },
    }
}

pub fn render(game: &TicTacToeMatch) -> String {
    let mut text = game.board().to_string();
    if let Some(line) = game.winning_line() {
        let cells: Vec<String> = line.cells.iter().map(|p| p.to_string()).collect();
        text.push_str(&format!("Winning line: {}\n", cells.join("-")));
    }
    text.push_str(&status_text(game));
    text.push('\n');
    text
}
