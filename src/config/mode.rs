//! @acp:module "Search Modes"
//! @acp:summary "Selection modes and their external names"
//! @acp:domain primes
//! @acp:layer model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::validation::invalid_mode;
use crate::error::PrimeError;

/// Which subset of the primes in range a search returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// First `quantity` primes in range
    #[default]
    FindX,
    /// Every prime in range
    All,
    /// Smallest prime in range
    First,
    /// Largest prime in range
    Last,
}

impl Mode {
    /// Get all modes, in their canonical order
    pub fn all() -> &'static [Mode] {
        &[Mode::FindX, Mode::All, Mode::First, Mode::Last]
    }

    /// Get the external name used in options files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::FindX => "find_x",
            Mode::All => "all",
            Mode::First => "first",
            Mode::Last => "last",
        }
    }

    /// One-line description for help output
    pub fn description(&self) -> &'static str {
        match self {
            Mode::FindX => "first `quantity` primes within from..=to",
            Mode::All => "all primes within from..=to (ignores quantity)",
            Mode::First => "smallest prime within from..=to (ignores quantity)",
            Mode::Last => "largest prime within from..=to (ignores quantity)",
        }
    }

    /// Whether the mode returns a sequence rather than a single value
    pub fn is_collection(&self) -> bool {
        matches!(self, Mode::FindX | Mode::All)
    }

    /// Parse mode name from string
    pub fn from_name(name: &str) -> Option<Mode> {
        match name {
            "find_x" => Some(Mode::FindX),
            "all" => Some(Mode::All),
            "first" => Some(Mode::First),
            "last" => Some(Mode::Last),
            _ => None,
        }
    }

    /// Comma-separated list of the valid names
    pub fn names() -> String {
        Mode::all()
            .iter()
            .map(Mode::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = PrimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::from_name(s).ok_or_else(|| invalid_mode(s))
    }
}
