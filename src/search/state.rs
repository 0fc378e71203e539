//! @acp:module "Search State"
//! @acp:summary "Per-run candidate pool, driver range and range filter"
//! @acp:domain primes
//! @acp:layer model

use std::ops::RangeInclusive;

use super::pool::CandidatePool;
use crate::config::{CheckOptions, Options};
use crate::error::Result;

/// Last driver value for an upper bound of `to`.
///
/// There are never more than `ceil(to / 2)` primes up to `to`, and each
/// driver step extracts one, so `2..=ceil(to / 2) + 1` always suffices.
/// Written so it cannot overflow at `i64::MAX`.
pub fn driver_end(to: i64) -> i64 {
    to / 2 + to % 2 + 1
}

/// State owned by a single strategy run
#[derive(Debug)]
pub struct SearchState {
    options: Options,
    possibilities: CandidatePool,
    range: RangeInclusive<i64>,
}

impl SearchState {
    pub fn new(options: Options) -> Result<Self> {
        let state = Self {
            options,
            possibilities: CandidatePool::new(options.to())?,
            range: 2..=driver_end(options.to()),
        };
        state.check_options_validity()?;
        Ok(state)
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Iterate the primes inside `from..=to`, in ascending order
    pub fn primes_in_range(&mut self) -> PrimesInRange<'_> {
        PrimesInRange {
            range: self.range.clone(),
            possibilities: &mut self.possibilities,
            options: &self.options,
        }
    }
}

impl CheckOptions for SearchState {
    fn bounds(&self) -> (i64, i64) {
        (self.options.from(), self.options.to())
    }
}

/// Drives the elimination step over the driver range, skipping primes
/// below `from`. Ends when the driver range or the pool runs out.
pub struct PrimesInRange<'a> {
    range: RangeInclusive<i64>,
    possibilities: &'a mut CandidatePool,
    options: &'a Options,
}

impl Iterator for PrimesInRange<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        for i in self.range.by_ref() {
            let prime = self.possibilities.next_prime(i)?;
            if self.options.contains(prime) {
                return Some(prime);
            }
        }
        None
    }
}
