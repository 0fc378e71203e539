#![forbid(unsafe_code)]

//! @acp:module "Prime Finder Library"
//! @acp:summary "Find primes in a bounded range by selection mode"
//! @acp:domain primes
//! @acp:layer api
//! @acp:stability stable
//!
//! # Prime Finder
//!
//! Sieve-by-elimination prime search over an inclusive range.
//!
//! ## Modes
//!
//! - **find_x**: the first `quantity` primes in range
//! - **all**: every prime in range
//! - **first**: the smallest prime in range, if any
//! - **last**: the largest prime in range, if any
//!
//! ## Example
//!
//! ```rust
//! use primes::{Finder, OptionsBuilder, SearchResult};
//!
//! fn main() -> primes::Result<()> {
//!     let options = OptionsBuilder::new().mode("all").from(1).to(10).build()?;
//!     let result = Finder::new(options).find()?;
//!
//!     assert_eq!(result, SearchResult::Sequence(vec![2, 3, 5, 7]));
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod finder;
pub mod search;

// Re-exports
pub use config::{CheckOptions, Mode, Options, OptionsBuilder};
pub use error::{PrimeError, Result};
pub use finder::Finder;
pub use search::{
    CandidatePool, FindAll, FindFirst, FindFirstX, FindLast, SearchResult, SearchState,
    SearchStrategy,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
