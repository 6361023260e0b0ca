use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::types::CELL_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    /// First of the equally scored moves in ascending cell order.
    LowestIndex,
    /// Uniform pick among the equally scored moves, drawn from the session rng.
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Plies searched, counting the bot's own candidate move as ply 1.
    pub max_depth: usize,
    pub tie_break: TieBreak,
}

/// | Level  | max_depth | tie-break    | play                                  |
/// |--------|-----------|--------------|---------------------------------------|
/// | Easy   | 1         | random       | takes a win in one, otherwise random  |
/// | Medium | 3         | random       | wins and blocks, misses deeper forks  |
/// | Hard   | 9         | lowest index | full search, never loses              |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn policy(&self) -> SearchPolicy {
        match self {
            Difficulty::Easy => SearchPolicy {
                max_depth: 1,
                tie_break: TieBreak::Random,
            },
            Difficulty::Medium => SearchPolicy {
                max_depth: 3,
                tie_break: TieBreak::Random,
            },
            Difficulty::Hard => SearchPolicy {
                max_depth: CELL_COUNT,
                tie_break: TieBreak::LowestIndex,
            },
        }
    }

    pub fn is_deterministic(&self) -> bool {
        self.policy().tie_break == TieBreak::LowestIndex
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "Unknown difficulty '{}', expected easy, medium or hard",
                other
            )),
        }
    }
}
