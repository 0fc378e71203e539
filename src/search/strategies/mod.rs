//! @acp:module "Search Strategies"
//! @acp:summary "One strategy per selection mode"
//! @acp:domain primes
//! @acp:layer service
//!
//! Each strategy owns a fresh [`SearchState`](super::SearchState) and
//! consumes it in `perform`. Collection modes produce `Vec<i64>`, single
//! modes produce `Option<i64>`; both convert into
//! [`SearchResult`](super::SearchResult).

pub mod all;
pub mod find_x;
pub mod first;
pub mod last;

pub use all::FindAll;
pub use find_x::FindFirstX;
pub use first::FindFirst;
pub use last::FindLast;

use super::SearchResult;
use crate::config::{Mode, Options};
use crate::error::Result;

/// Strategy trait - implement for each selection mode
pub trait SearchStrategy: Sized {
    /// Shape of the result (sequence or optional scalar)
    type Output: Into<SearchResult>;

    /// The mode this strategy serves
    const MODE: Mode;

    /// Build the strategy, validating the options again
    fn new(options: Options) -> Result<Self>;

    /// Run the search to completion
    fn perform(self) -> Self::Output;
}
