mod config;
mod runner;
mod ui;

use std::io;

use clap::Parser;
use tictactoe_engine::tictactoe::{Difficulty, GameMode, Mark, TicTacToeMatch};
use tictactoe_engine::{log, logger, SessionRng};

use config::{get_config_manager, ClientConfig};
use runner::TerminalRunner;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a friend or a minimax AI")]
struct Args {
    /// pvp or ai
    #[arg(long)]
    mode: Option<GameMode>,

    /// easy, medium or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// x or o; X always moves first
    #[arg(long)]
    human_mark: Option<Mark>,

    /// Seed for the AI's random tie-breaks
    #[arg(long)]
    seed: Option<u64>,

    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    use_log_prefix: bool,

    /// Log every move and the bot's search summary
    #[arg(long)]
    verbose: bool,
}

fn effective_config(mut config: ClientConfig, args: &Args) -> ClientConfig {
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(human_mark) = args.human_mark {
        config.human_mark = human_mark;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_manager = get_config_manager(args.config.as_deref());
    let config = effective_config(config_manager.get_config()?, &args);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved");
    }

    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let game = TicTacToeMatch::new(config.mode, config.difficulty, config.human_mark);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut runner = TerminalRunner::new(stdin.lock(), stdout.lock(), game, rng);
    runner.run()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_override_config() {
        let args = Args::parse_from([
            "tictactoe_client",
            "--difficulty",
            "hard",
            "--human-mark",
            "o",
            "--seed",
            "11",
        ]);

        let config = effective_config(ClientConfig::default(), &args);

        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.human_mark, Mark::O);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.mode, GameMode::PlayerVsAi);
    }

    #[test]
    fn test_no_args_keep_config() {
        let stored = ClientConfig {
            mode: GameMode::PlayerVsPlayer,
            seed: Some(3),
            ..ClientConfig::default()
        };
        let args = Args::parse_from(["tictactoe_client"]);

        assert_eq!(effective_config(stored.clone(), &args), stored);
    }

    #[test]
    fn test_invalid_difficulty_is_rejected() {
        let result = Args::try_parse_from(["tictactoe_client", "--difficulty", "impossible"]);

        assert!(result.is_err());
    }
}
