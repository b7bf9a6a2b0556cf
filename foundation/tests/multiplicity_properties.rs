//! Property-based tests for multiplicity sequences and the penta chain.
//!
//! Uses proptest over short sequences with small non-negative entries, the
//! range in which the penta chain stays short enough to walk exhaustively.

use proptest::prelude::*;
use unirat_foundation::dimensions::{n, n0, r, r0};
use unirat_foundation::MultiplicitySequence;

fn sequence() -> impl Strategy<Value = MultiplicitySequence> {
    prop::collection::vec(0i64..=3, 0..=4).prop_map(MultiplicitySequence::new)
}

fn failed(err: unirat_foundation::Error) -> TestCaseError {
    TestCaseError::fail(err.to_string())
}

// =============================================================================
// Construction
// =============================================================================

proptest! {
    /// degree_to_mu(d) has length d and a single non-zero entry at the end.
    #[test]
    fn prop_from_degree_layout(d in 1usize..40, multiplicity in 1i64..10) {
        let mu = MultiplicitySequence::from_degree(d, multiplicity).map_err(failed)?;
        prop_assert_eq!(mu.len(), d);
        prop_assert_eq!(mu.entries()[d - 1], multiplicity);
        prop_assert!(mu.entries()[..d - 1].iter().all(|&m| m == 0));
    }

    /// trim is idempotent and never leaves a trailing zero.
    #[test]
    fn prop_trim_idempotent(mu in sequence()) {
        let once = mu.trimmed();
        prop_assert_eq!(once.trimmed(), once.clone());
        prop_assert!(once.entries().last() != Some(&0));
    }
}

// =============================================================================
// Transforms
// =============================================================================

proptest! {
    /// pointed_lines(mu)[i] = mu[i] + ... + mu[d-1].
    #[test]
    fn prop_pointed_lines_suffix_sums(mu in sequence()) {
        let lines = mu.pointed_lines().map_err(failed)?;
        prop_assert_eq!(lines.len(), mu.len());
        for i in 0..mu.len() {
            let expected: i64 = mu.entries()[i..].iter().sum();
            prop_assert_eq!(lines.entries()[i], expected);
        }
    }

    /// penta sends every linear sequence to the empty sequence.
    #[test]
    fn prop_penta_fixes_linear(head in 0i64..10, zeros in 0usize..4) {
        let mut entries = vec![head];
        entries.extend(std::iter::repeat(0).take(zeros));
        let mu = MultiplicitySequence::new(entries);
        prop_assert!(mu.penta().map_err(failed)?.is_empty());
    }

    /// Each penta step from a non-negative, non-linear sequence keeps the
    /// entries non-negative and either shortens the trimmed sequence or
    /// lowers its last entry by one, so the chain reaches a linear sequence.
    #[test]
    fn prop_penta_descends_to_linear(mu in sequence()) {
        let mut current = mu.trimmed();
        while !current.is_linear() {
            let len = current.len();
            let last = current.entries().last().copied().unwrap_or_default();
            let mut next = current.penta().map_err(failed)?;
            next.trim();
            prop_assert!(next.entries().iter().all(|&m| m >= 0));
            prop_assert!(
                next.len() < len
                    || (next.len() == len && next.entries().last() == Some(&(last - 1)))
            );
            current = next;
        }
    }
}

// =============================================================================
// Dimension functions
// =============================================================================

proptest! {
    /// r(mu) is at least r0(mu) for every non-zero multi-degree.
    #[test]
    fn prop_r_dominates_r0(mu in sequence()) {
        let trimmed = mu.trimmed();
        prop_assume!(!trimmed.is_empty());
        prop_assert!(r(&mu).map_err(failed)? >= r0(&trimmed));
    }

    /// n(mu, r) is at least n0(mu, r).
    #[test]
    fn prop_n_dominates_n0(mu in sequence()) {
        let radius = r(&mu).map_err(failed)?;
        prop_assert!(n(&mu, &radius).map_err(failed)? >= n0(&mu, &radius).map_err(failed)?);
    }
}
