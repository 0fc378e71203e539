//! @acp:module "Find First"
//! @acp:summary "Smallest prime in range"
//! @acp:domain primes
//! @acp:layer service

use super::SearchStrategy;
use crate::config::{Mode, Options};
use crate::error::Result;
use crate::search::SearchState;

#[derive(Debug)]
pub struct FindFirst {
    state: SearchState,
}

impl SearchStrategy for FindFirst {
    type Output = Option<i64>;
    const MODE: Mode = Mode::First;

    fn new(options: Options) -> Result<Self> {
        Ok(Self {
            state: SearchState::new(options)?,
        })
    }

    fn perform(mut self) -> Option<i64> {
        self.state.primes_in_range().next()
    }
}
