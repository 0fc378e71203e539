//! Finder integration tests
//!
//! End-to-end checks of option handling and the four selection modes.

use primes::{Finder, Mode, Options, OptionsBuilder, PrimeError, SearchResult};

fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    (2i64..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

fn find(mode: Mode, quantity: usize, from: i64, to: i64) -> SearchResult {
    Finder::new(Options::new(mode, quantity, from, to).unwrap())
        .find()
        .unwrap()
}

fn all(from: i64, to: i64) -> Vec<i64> {
    find(Mode::All, 100, from, to)
        .as_sequence()
        .unwrap()
        .to_vec()
}

const RANGES: &[(i64, i64)] = &[
    (1, 1),
    (1, 2),
    (1, 3),
    (1, 5),
    (1, 7),
    (1, 10),
    (-20, 30),
    (14, 16),
    (50, 120),
    (97, 97),
    (500, 1000),
];

// =============================================================================
// Concrete scenarios
// =============================================================================

mod scenario_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_one_to_ten() {
        assert_eq!(find(Mode::All, 100, 1, 10), SearchResult::Sequence(vec![2, 3, 5, 7]));
    }

    #[test]
    fn test_find_x_one_to_ten() {
        assert_eq!(find(Mode::FindX, 2, 1, 10), SearchResult::Sequence(vec![2, 3]));
    }

    #[test]
    fn test_first_one_to_ten() {
        assert_eq!(find(Mode::First, 100, 1, 10), SearchResult::Single(Some(2)));
    }

    #[test]
    fn test_last_one_to_ten() {
        assert_eq!(find(Mode::Last, 100, 1, 10), SearchResult::Single(Some(7)));
    }

    #[test]
    fn test_inverted_range_is_invalid() {
        let err = OptionsBuilder::new().mode("all").from(10).to(1).build().unwrap_err();
        assert!(matches!(err, PrimeError::InvalidOptions(_)));
        assert_eq!(
            err.to_string(),
            ":from cannot be larger than :to (from is 10, to is 1)"
        );
    }
}

// =============================================================================
// Option validation
// =============================================================================

mod validation_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unknown_mode_lists_valid_modes() {
        let err = OptionsBuilder::new().mode("middle").build().unwrap_err();
        assert!(err.is_invalid_options());
        assert!(err
            .to_string()
            .contains("available modes are find_x, all, first, last, :mode is middle"));
    }

    #[test]
    fn test_mode_names_must_match_exactly() {
        for name in ["FIND-X", "findx", " Last ", "ALL"] {
            let err = OptionsBuilder::new().mode(name).build().unwrap_err();
            assert!(err.is_invalid_options(), "{:?} was accepted", name);
        }
    }

    #[test]
    fn test_range_checked_before_mode() {
        let err = OptionsBuilder::new()
            .mode("middle")
            .from(3)
            .to(2)
            .build()
            .unwrap_err();
        assert!(err.to_string().starts_with(":from cannot be larger than :to"));
    }

    #[test]
    fn test_huge_upper_bound_is_error_not_panic() {
        for mode in Mode::all() {
            let options = Options::new(*mode, 1, i64::MAX - 5, i64::MAX).unwrap();
            let err = Finder::new(options).find().unwrap_err();
            assert!(
                matches!(err, PrimeError::PoolTooLarge { to: i64::MAX }),
                "{}: {}",
                mode,
                err
            );
        }
    }

    #[test]
    fn test_options_file_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(".primes.json");
        let builder = OptionsBuilder::new().mode("last").from(10).to(40);
        builder.save(&path).unwrap();

        let loaded = OptionsBuilder::load(&path).unwrap();
        assert_eq!(loaded, builder);
        let result = Finder::from_builder(&loaded).unwrap().find().unwrap();
        assert_eq!(result, SearchResult::Single(Some(37)));
    }

    #[test]
    fn test_invalid_options_file_is_json_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(".primes.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = OptionsBuilder::load(&path).unwrap_err();
        assert!(matches!(err, PrimeError::Json(_)));
    }
}

// =============================================================================
// Mode properties
// =============================================================================

mod property_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_is_sorted_unique_primes_in_range() {
        for &(from, to) in RANGES {
            let primes = all(from, to);
            let expected: Vec<i64> = (from..=to).filter(|&n| is_prime(n)).collect();
            assert_eq!(primes, expected, "range {}..={}", from, to);
        }
    }

    #[test]
    fn test_find_x_is_prefix_of_all() {
        for &(from, to) in RANGES {
            let everything = all(from, to);
            for quantity in [0, 1, 3, 1000] {
                let result = find(Mode::FindX, quantity, from, to);
                let prefix = result.as_sequence().unwrap();
                let expected_len = quantity.min(everything.len());
                assert_eq!(prefix, &everything[..expected_len]);
            }
        }
    }

    #[test]
    fn test_first_and_last_match_all() {
        for &(from, to) in RANGES {
            let everything = all(from, to);
            assert_eq!(
                find(Mode::First, 100, from, to),
                SearchResult::Single(everything.first().copied())
            );
            assert_eq!(
                find(Mode::Last, 100, from, to),
                SearchResult::Single(everything.last().copied())
            );
        }
    }

    #[test]
    fn test_find_is_idempotent() {
        for mode in Mode::all() {
            let finder = Finder::new(Options::new(*mode, 5, 1, 200).unwrap());
            assert_eq!(finder.find().unwrap(), finder.find().unwrap());
        }
    }
}
