//! Difficulty levels and their physics parameter bundles
//!
//! Exactly three levels exist. Selecting by label is a total lookup over a
//! closed alias set with an explicit "unrecognized" outcome; nothing here
//! panics or throws on bad input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The four physics parameters a difficulty level carries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    /// Scalar on drag displacement when computing the aim target
    pub aim_sensitivity: f32,
    /// Launch speed ceiling
    pub max_force: f32,
    /// Relative launch jitter, in [0, 1)
    pub launch_error: f32,
    /// Restitution for court walls (and the floor, captured at ball reset)
    pub wall_restitution: f32,
}

/// Difficulty level selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    /// Lively bounces, very sensitive aim, no jitter
    Easy,
    /// The baseline game
    #[default]
    Medium,
    /// Dead bounces, sluggish aim, 20% launch jitter
    Hard,
}

impl Difficulty {
    /// The fixed parameter bundle for this level
    pub const fn profile(self) -> Profile {
        match self {
            Difficulty::Easy => Profile {
                aim_sensitivity: 3.0,
                max_force: 50.0,
                launch_error: 0.0,
                wall_restitution: 0.95,
            },
            Difficulty::Medium => Profile {
                aim_sensitivity: 1.5,
                max_force: 35.0,
                launch_error: 0.0,
                wall_restitution: 0.7,
            },
            Difficulty::Hard => Profile {
                aim_sensitivity: 0.5,
                max_force: 20.0,
                launch_error: 0.2,
                wall_restitution: 0.4,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A difficulty label that matched nothing in the closed set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDifficultyError {
    label: String,
}

impl ParseDifficultyError {
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized difficulty label: {:?}", self.label)
    }
}

impl std::error::Error for ParseDifficultyError {}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" | "med" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError {
                label: s.to_string(),
            }),
        }
    }
}
