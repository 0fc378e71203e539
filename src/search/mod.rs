//! @acp:module "Prime Search"
//! @acp:summary "Sieve-by-elimination search and its result shapes"
//! @acp:domain primes
//! @acp:layer service
//!
//! # Algorithm
//!
//! A search walks a driver `i = 2, 3, 4, ...` up to `ceil(to / 2) + 1`. At
//! each step it removes the proper multiples of `i` from the candidate pool
//! and extracts the smallest survivor, which is the next prime. Primes
//! below `from` are extracted but not reported.

pub mod pool;
pub mod state;
pub mod strategies;

pub use pool::CandidatePool;
pub use state::{PrimesInRange, SearchState};
pub use strategies::{FindAll, FindFirst, FindFirstX, FindLast, SearchStrategy};

use serde::Serialize;
use std::fmt;

/// Result of a search: a sequence for find_x/all, a single optional
/// value for first/last
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SearchResult {
    Sequence(Vec<i64>),
    Single(Option<i64>),
}

impl SearchResult {
    pub fn as_sequence(&self) -> Option<&[i64]> {
        match self {
            SearchResult::Sequence(primes) => Some(primes.as_slice()),
            SearchResult::Single(_) => None,
        }
    }

    pub fn as_single(&self) -> Option<Option<i64>> {
        match self {
            SearchResult::Single(prime) => Some(*prime),
            SearchResult::Sequence(_) => None,
        }
    }

    /// Number of primes found
    pub fn len(&self) -> usize {
        match self {
            SearchResult::Sequence(primes) => primes.len(),
            SearchResult::Single(prime) => usize::from(prime.is_some()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<i64>> for SearchResult {
    fn from(primes: Vec<i64>) -> Self {
        SearchResult::Sequence(primes)
    }
}

impl From<Option<i64>> for SearchResult {
    fn from(prime: Option<i64>) -> Self {
        SearchResult::Single(prime)
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchResult::Sequence(primes) => {
                let joined = primes
                    .iter()
                    .map(i64::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                write!(f, "{}", joined)
            }
            SearchResult::Single(Some(prime)) => write!(f, "{}", prime),
            SearchResult::Single(None) => write!(f, "none"),
        }
    }
}
