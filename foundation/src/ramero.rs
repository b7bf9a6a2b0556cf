//! The bounds `e`, `w`, `r` and `m` from Ramero, "Effective estimates for
//! unirationality".
//!
//! These act on plain multi-degrees `(d_1, ..., d_c)` rather than
//! multiplicity sequences. `w` and `r` recurse through the multi-degree with
//! every entry lowered by one; the recursion is unrolled here into a
//! bottom-up pass over that chain, memoised per stage.

use std::collections::HashMap;

use num_bigint::BigInt;
use num_traits::{One, Zero};
use tracing::debug;

use crate::arith::{binomial, ceil_div};
use crate::error::{Error, Result};

/// `e(ds, q) = q + ceil(N / (q + 1))` with `N = sum_d binomial(d + q, q)`.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] for `q = -1`.
pub fn e(ds: &[u64], q: &BigInt) -> Result<BigInt> {
    let mut total = BigInt::zero();
    for &d in ds {
        total += binomial(&(BigInt::from(d) + q), q)?;
    }
    Ok(q + ceil_div(&total, &(q + 1))?)
}

#[derive(Debug, Clone)]
struct Stage {
    w: BigInt,
    r: BigInt,
}

/// Memoised evaluator for Ramero's `w`, `r` and `m`.
///
/// Multi-degrees are treated as multisets: they are sorted ascending before
/// evaluation, and every entry must be at least 1.
#[derive(Debug, Default)]
pub struct RameroFunctions {
    /// Keyed by sorted multi-degrees with no entry equal to 1.
    stages: HashMap<Vec<u64>, Stage>,
}

impl RameroFunctions {
    /// Creates an evaluator with an empty memo.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `w(ds)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] when an entry of `ds` is 0.
    pub fn w(&mut self, ds: &[u64]) -> Result<BigInt> {
        let ds = canonical(ds)?;
        let (core, _) = strip_ones(&ds);
        Ok(self.stage(core)?.w)
    }

    /// `r(ds)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] when an entry of `ds` is 0.
    pub fn r(&mut self, ds: &[u64]) -> Result<BigInt> {
        let ds = canonical(ds)?;
        let (core, ones) = strip_ones(&ds);
        Ok(self.stage(core)?.r + ones)
    }

    /// `m(d) = max(e((d), w((d))), r((d)))`, the bound of Ramero's
    /// Theorem 2 for a hypersurface of degree `d`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] for `d = 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use num_bigint::BigInt;
    /// use unirat_foundation::RameroFunctions;
    ///
    /// let mut ramero = RameroFunctions::new();
    /// assert_eq!(ramero.m(4).unwrap(), BigInt::from(20));
    /// ```
    pub fn m(&mut self, d: u64) -> Result<BigInt> {
        let ds = [d];
        let w = self.w(&ds)?;
        let bound = e(&ds, &w)?;
        let r = self.r(&ds)?;
        Ok(bound.max(r))
    }

    /// Evaluates the stage for `core` (sorted, no entry equal to 1) and every
    /// stage below it that is not memoised yet.
    fn stage(&mut self, core: &[u64]) -> Result<Stage> {
        let mut chain: Vec<Vec<u64>> = vec![core.to_vec()];
        loop {
            let last = &chain[chain.len() - 1];
            if is_base(last) || self.stages.contains_key(last) {
                break;
            }
            let lowered = lower(last);
            let (below, _) = strip_ones(&lowered);
            chain.push(below.to_vec());
        }

        for ds in chain.iter().rev() {
            if self.stages.contains_key(ds) {
                continue;
            }
            let stage = self.evaluate(ds)?;
            debug!(multidegree = ?ds, "evaluated Ramero stage");
            self.stages.insert(ds.clone(), stage);
        }
        Ok(self.stages[core].clone())
    }

    /// One stage, assuming the stage of `lower(ds)` is memoised.
    fn evaluate(&self, ds: &[u64]) -> Result<Stage> {
        match ds {
            [] => Ok(Stage {
                w: BigInt::zero(),
                r: BigInt::zero(),
            }),
            [2] => Ok(Stage {
                w: BigInt::zero(),
                r: BigInt::from(2),
            }),
            _ => {
                let lowered = lower(ds);
                let (below, ones) = strip_ones(&lowered);
                let prev = &self.stages[below];
                let r_lowered = &prev.r + ones;
                let w = (r_lowered - BigInt::one()).max(e(&lowered, &prev.w)?);

                let mut r = BigInt::one();
                for &d in ds {
                    let k = BigInt::from(d - 1);
                    r += binomial(&(&k + &w), &k)? - 1;
                }
                Ok(Stage { w, r })
            }
        }
    }
}

fn canonical(ds: &[u64]) -> Result<Vec<u64>> {
    if ds.contains(&0) {
        return Err(Error::domain(
            "ramero",
            "multi-degree entries must be at least 1",
        ));
    }
    let mut sorted = ds.to_vec();
    sorted.sort_unstable();
    Ok(sorted)
}

/// Splits off the leading run of 1s of a sorted multi-degree.
fn strip_ones(ds: &[u64]) -> (&[u64], usize) {
    let ones = ds.iter().take_while(|&&d| d == 1).count();
    (&ds[ones..], ones)
}

fn is_base(ds: &[u64]) -> bool {
    matches!(ds, [] | [2])
}

fn lower(ds: &[u64]) -> Vec<u64> {
    ds.iter().map(|&d| d - 1).collect()
}
