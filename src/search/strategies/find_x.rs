//! @acp:module "Find First X"
//! @acp:summary "First `quantity` primes in range"
//! @acp:domain primes
//! @acp:layer service

use super::SearchStrategy;
use crate::config::{Mode, Options};
use crate::error::Result;
use crate::search::SearchState;

#[derive(Debug)]
pub struct FindFirstX {
    state: SearchState,
}

impl SearchStrategy for FindFirstX {
    type Output = Vec<i64>;
    const MODE: Mode = Mode::FindX;

    fn new(options: Options) -> Result<Self> {
        Ok(Self {
            state: SearchState::new(options)?,
        })
    }

    fn perform(mut self) -> Vec<i64> {
        let quantity = self.state.options().quantity();
        let result: Vec<i64> = self.state.primes_in_range().take(quantity).collect();

        if result.len() < quantity {
            tracing::warn!(
                "Range exhausted after {} of {} requested primes",
                result.len(),
                quantity
            );
        }
        result
    }
}
