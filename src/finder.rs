//! @acp:module "Finder"
//! @acp:summary "Entry point: validate options and dispatch to a strategy"
//! @acp:domain primes
//! @acp:layer api

use crate::config::{CheckOptions, Mode, Options, OptionsBuilder};
use crate::error::Result;
use crate::search::{FindAll, FindFirst, FindFirstX, FindLast, SearchResult, SearchStrategy};

/// @acp:summary "Runs the search selected by the options' mode"
#[derive(Debug, Clone, Copy, Default)]
pub struct Finder {
    options: Options,
}

impl Finder {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Validate named options and build a finder
    pub fn from_builder(builder: &OptionsBuilder) -> Result<Self> {
        Ok(Self::new(builder.build()?))
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Run the search. Every call starts from a fresh candidate pool, so
    /// repeated calls return the same result.
    pub fn find(&self) -> Result<SearchResult> {
        self.options.check_options_validity()?;

        match self.options.mode() {
            Mode::FindX => run::<FindFirstX>(self.options),
            Mode::All => run::<FindAll>(self.options),
            Mode::First => run::<FindFirst>(self.options),
            Mode::Last => run::<FindLast>(self.options),
        }
    }
}

fn run<S: SearchStrategy>(options: Options) -> Result<SearchResult> {
    let mode = S::MODE;
    tracing::debug!(
        mode = %mode,
        collection = mode.is_collection(),
        from = options.from(),
        to = options.to(),
        "Dispatching search"
    );
    let result: SearchResult = S::new(options)?.perform().into();
    tracing::debug!(mode = %mode, found = result.len(), "Search complete");
    Ok(result)
}
