//! @acp:module "Configuration"
//! @acp:summary "Search options, their defaults, and options-file loading"
//! @acp:domain primes
//! @acp:layer config
//!
//! Options arrive as an [`OptionsBuilder`], a set of named fields that are
//! all optional and fall back to defaults. [`OptionsBuilder::build`] runs
//! the validation checks and yields an immutable [`Options`].

pub mod mode;
pub mod validation;

pub use mode::Mode;
pub use validation::CheckOptions;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Default options file name
pub const DEFAULT_OPTIONS_FILE: &str = ".primes.json";

fn default_mode() -> String {
    Mode::default().as_str().to_string()
}

fn default_quantity() -> usize {
    100
}

fn default_from() -> i64 {
    1
}

fn default_to() -> i64 {
    1000
}

/// @acp:summary "Unvalidated search options with defaults (options-file schema)"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsBuilder {
    /// Selection mode name (find_x, all, first, last)
    #[serde(default = "default_mode")]
    pub mode: String,

    /// How many primes find_x returns
    #[serde(default = "default_quantity")]
    pub quantity: usize,

    /// Inclusive lower bound
    #[serde(default = "default_from")]
    pub from: i64,

    /// Inclusive upper bound
    #[serde(default = "default_to")]
    pub to: i64,
}

impl Default for OptionsBuilder {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            quantity: default_quantity(),
            from: default_from(),
            to: default_to(),
        }
    }
}

impl OptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn quantity(mut self, quantity: usize) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn from(mut self, from: i64) -> Self {
        self.from = from;
        self
    }

    pub fn to(mut self, to: i64) -> Self {
        self.to = to;
        self
    }

    /// @acp:summary "Load options from a JSON file"
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// @acp:summary "Save options to a JSON file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate and freeze the options
    pub fn build(&self) -> Result<Options> {
        self.check_options_validity()?;
        let mode = self.mode.parse::<Mode>()?;
        Options::new(mode, self.quantity, self.from, self.to)
    }
}

impl CheckOptions for OptionsBuilder {
    fn bounds(&self) -> (i64, i64) {
        (self.from, self.to)
    }

    fn mode_name(&self) -> Option<&str> {
        Some(&self.mode)
    }
}

/// @acp:summary "Validated, immutable search options"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Options {
    mode: Mode,
    quantity: usize,
    from: i64,
    to: i64,
}

impl Options {
    /// Create options, failing with `InvalidOptions` if `from > to`
    pub fn new(mode: Mode, quantity: usize, from: i64, to: i64) -> Result<Self> {
        let options = Self {
            mode,
            quantity,
            from,
            to,
        };
        options.check_options_validity()?;
        Ok(options)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn quantity(&self) -> usize {
        self.quantity
    }

    pub fn from(&self) -> i64 {
        self.from
    }

    pub fn to(&self) -> i64 {
        self.to
    }

    /// Whether `n` lies inside the inclusive range
    pub fn contains(&self, n: i64) -> bool {
        n >= self.from && n <= self.to
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            quantity: default_quantity(),
            from: default_from(),
            to: default_to(),
        }
    }
}

impl CheckOptions for Options {
    fn bounds(&self) -> (i64, i64) {
        (self.from, self.to)
    }

    fn mode_name(&self) -> Option<&str> {
        Some(self.mode.as_str())
    }
}
