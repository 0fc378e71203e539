//! @acp:module "Candidate Pool"
//! @acp:summary "Array-backed set of integers not yet ruled out as composite"
//! @acp:domain primes
//! @acp:layer model
//!
//! The pool covers `2..=to`. Every value owns one slot in `live`, so removal
//! is by index and never requires scanning or shifting survivors. `cursor`
//! only moves forward, because extraction always takes the smallest
//! survivor.
//!
//! The pool is `O(to)` memory. The only limit on `to` is whether that
//! allocation succeeds; failure surfaces as [`PrimeError::PoolTooLarge`].

use crate::error::{PrimeError, Result};

/// Working set for one sieve-by-elimination run
#[derive(Debug, Clone)]
pub struct CandidatePool {
    /// `live[v]` is true while `v` is still a candidate
    live: Vec<bool>,
    /// Number of true slots in `live`
    remaining: usize,
    /// No survivor is smaller than this
    cursor: usize,
}

impl CandidatePool {
    /// Create a pool holding every integer in `2..=to` (empty if `to < 2`)
    pub fn new(to: i64) -> Result<Self> {
        let len = if to < 2 {
            0
        } else {
            usize::try_from(to)
                .ok()
                .and_then(|to| to.checked_add(1))
                .ok_or(PrimeError::PoolTooLarge { to })?
        };

        let mut live = Vec::new();
        live.try_reserve_exact(len).map_err(|_| PrimeError::PoolTooLarge { to })?;
        live.resize(len, true);
        for slot in live.iter_mut().take(2) {
            *slot = false;
        }

        Ok(Self {
            live,
            remaining: len.saturating_sub(2),
            cursor: 2,
        })
    }

    /// Number of candidates still in the pool
    pub fn len(&self) -> usize {
        self.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Whether `value` is still a candidate
    pub fn contains(&self, value: i64) -> bool {
        usize::try_from(value)
            .ok()
            .and_then(|v| self.live.get(v).copied())
            .unwrap_or(false)
    }

    /// Remove every proper multiple of `factor`; returns how many were removed
    pub fn remove_multiples_of(&mut self, factor: i64) -> usize {
        if factor < 2 {
            return 0;
        }
        let factor = factor as usize;
        let start = match factor.checked_mul(2) {
            Some(start) if start < self.live.len() => start,
            _ => return 0,
        };

        let mut removed = 0;
        for value in (start..self.live.len()).step_by(factor) {
            if self.live[value] {
                self.live[value] = false;
                removed += 1;
            }
        }
        self.remaining -= removed;
        removed
    }

    /// Remove and return the smallest candidate
    pub fn pop_smallest(&mut self) -> Option<i64> {
        if self.remaining == 0 {
            return None;
        }
        while !self.live[self.cursor] {
            self.cursor += 1;
        }
        self.live[self.cursor] = false;
        self.remaining -= 1;
        Some(self.cursor as i64)
    }

    /// Elimination step: drop proper multiples of `i`, then extract the
    /// smallest survivor. `None` once the pool is exhausted.
    ///
    /// Callers must drive `i` through `2, 3, 4, ...` in order; every value
    /// returned is then prime and values strictly increase.
    pub fn next_prime(&mut self, i: i64) -> Option<i64> {
        self.remove_multiples_of(i);
        self.pop_smallest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pool_excludes_zero_and_one() {
        let pool = CandidatePool::new(10).unwrap();
        assert_eq!(pool.len(), 9);
        assert!(!pool.contains(0));
        assert!(!pool.contains(1));
        assert!(pool.contains(2));
        assert!(pool.contains(10));
        assert!(!pool.contains(11));
    }

    #[test]
    fn test_degenerate_pools_are_empty() {
        for to in [-7, 0, 1] {
            let mut pool = CandidatePool::new(to).unwrap();
            assert!(pool.is_empty());
            assert_eq!(pool.next_prime(2), None);
        }
    }

    #[test]
    fn test_remove_multiples_keeps_factor() {
        let mut pool = CandidatePool::new(10).unwrap();
        assert_eq!(pool.remove_multiples_of(2), 4);
        assert!(pool.contains(2));
        assert!(!pool.contains(4));
        assert!(!pool.contains(10));
        assert_eq!(pool.len(), 5);
    }

    #[test]
    fn test_remove_multiples_ignores_small_factors() {
        let mut pool = CandidatePool::new(10).unwrap();
        assert_eq!(pool.remove_multiples_of(1), 0);
        assert_eq!(pool.remove_multiples_of(-3), 0);
        assert_eq!(pool.remove_multiples_of(6), 0);
        assert_eq!(pool.len(), 9);
    }

    #[test]
    fn test_next_prime_sequence() {
        let mut pool = CandidatePool::new(30).unwrap();
        let primes: Vec<i64> = (2..).map_while(|i| pool.next_prime(i)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_unallocatable_pool_is_error() {
        let err = CandidatePool::new(i64::MAX).unwrap_err();
        assert!(matches!(err, PrimeError::PoolTooLarge { to: i64::MAX }));
    }

    #[test]
    fn test_negative_values_never_contained() {
        let pool = CandidatePool::new(5).unwrap();
        assert!(!pool.contains(-2));
    }
}
