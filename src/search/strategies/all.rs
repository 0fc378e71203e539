//! @acp:module "Find All"
//! @acp:summary "Every prime in range"
//! @acp:domain primes
//! @acp:layer service

use super::SearchStrategy;
use crate::config::{Mode, Options};
use crate::error::Result;
use crate::search::SearchState;

#[derive(Debug)]
pub struct FindAll {
    state: SearchState,
}

impl SearchStrategy for FindAll {
    type Output = Vec<i64>;
    const MODE: Mode = Mode::All;

    fn new(options: Options) -> Result<Self> {
        Ok(Self {
            state: SearchState::new(options)?,
        })
    }

    fn perform(mut self) -> Vec<i64> {
        self.state.primes_in_range().collect()
    }
}
