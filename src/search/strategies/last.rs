//! @acp:module "Find Last"
//! @acp:summary "Largest prime in range, via FindAll"
//! @acp:domain primes
//! @acp:layer service

use super::{FindAll, SearchStrategy};
use crate::config::{Mode, Options};
use crate::error::Result;

#[derive(Debug)]
pub struct FindLast {
    all: FindAll,
}

impl SearchStrategy for FindLast {
    type Output = Option<i64>;
    const MODE: Mode = Mode::Last;

    fn new(options: Options) -> Result<Self> {
        Ok(Self {
            all: FindAll::new(options)?,
        })
    }

    fn perform(self) -> Option<i64> {
        self.all.perform().last().copied()
    }
}
