//! @acp:module "Options Validation"
//! @acp:summary "Consistency checks run before any search"
//! @acp:domain primes
//! @acp:layer service
//!
//! Checks run in a fixed order so the reported error is deterministic:
//! 1. `from` must not exceed `to`
//! 2. `mode`, when the value carries one, must name a known mode

use super::mode::Mode;
use crate::error::{PrimeError, Result};

/// Error for an unrecognised mode name
pub fn invalid_mode(mode: &str) -> PrimeError {
    PrimeError::InvalidOptions(format!(
        ":mode not recognised, available modes are {}, :mode is {}",
        Mode::names(),
        mode
    ))
}

/// Error for an inverted range
pub fn from_gt_to(from: i64, to: i64) -> PrimeError {
    PrimeError::InvalidOptions(format!(
        ":from cannot be larger than :to (from is {}, to is {})",
        from, to
    ))
}

/// Implemented by anything that carries search bounds
pub trait CheckOptions {
    /// Inclusive lower and upper bounds
    fn bounds(&self) -> (i64, i64);

    /// Mode name, for values that carry one
    fn mode_name(&self) -> Option<&str> {
        None
    }

    fn check_from_not_gt_to(&self) -> Result<()> {
        let (from, to) = self.bounds();
        if from > to {
            return Err(from_gt_to(from, to));
        }
        Ok(())
    }

    fn check_mode(&self) -> Result<()> {
        match self.mode_name() {
            Some(name) => name.parse::<Mode>().map(|_| ()),
            None => Ok(()),
        }
    }

    /// Run every check, in order
    fn check_options_validity(&self) -> Result<()> {
        self.check_from_not_gt_to()?;
        self.check_mode()
    }
}
