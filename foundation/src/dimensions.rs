//! The functions `r(mu)`, `n0(mu, r)`, `n(mu, r)` and `n_min(mu)`.
//!
//! `n_min(mu)` is the bound on `n` past which a general complete intersection
//! of multi-degree `mu` in `P^n` is unirational. `r` and `n` both walk the
//! penta chain `mu, penta(mu), penta(penta(mu)), ...` down to a linear
//! sequence and keep a running maximum along the way.

use num_bigint::BigInt;
use num_traits::{One, Zero};
use tracing::debug;

use crate::arith::{binomial, ceil_div};
use crate::error::{Error, Result};
use crate::multiplicity::MultiplicitySequence;

/// `r0(mu) = sum_i i * mu[i] - 1`.
#[must_use]
pub fn r0(mu: &MultiplicitySequence) -> BigInt {
    let weighted: BigInt = mu
        .entries()
        .iter()
        .enumerate()
        .map(|(i, &m)| BigInt::from(i) * m)
        .sum();
    weighted - 1
}

/// `r(mu)`, the maximum of `r0` along the penta chain, offset by depth.
///
/// The zero multi-degree gives the sentinel `-2`.
///
/// # Errors
///
/// Propagates [`Error::Overflow`] and [`Error::NoFixedPoint`] from the
/// penta walk.
///
/// # Example
///
/// ```
/// use num_bigint::BigInt;
/// use unirat_foundation::{dimensions::r, MultiplicitySequence};
///
/// let cubic = MultiplicitySequence::from_degree(3, 1).unwrap();
/// assert_eq!(r(&cubic).unwrap(), BigInt::from(1));
/// ```
pub fn r(mu: &MultiplicitySequence) -> Result<BigInt> {
    let mu = mu.trimmed();
    if mu.is_empty() {
        return Ok(BigInt::from(-2));
    }
    let mut r_max = r0(&mu);
    walk_to_linear(&mu, |depth, current| {
        let candidate = r0(current) + depth;
        if candidate > r_max {
            r_max = candidate;
        }
        Ok(())
    })?;
    Ok(r_max)
}

/// `n0(mu, r)`: the ceiling of the dimension count from the pointed-line
/// construction, extended to the base cases `r <= 0`.
///
/// # Errors
///
/// Propagates [`Error::Overflow`] from the pointed-line transform.
pub fn n0(mu: &MultiplicitySequence, r: &BigInt) -> Result<BigInt> {
    let minus_one = -BigInt::one();
    if *r < minus_one {
        return Ok(BigInt::zero());
    }
    if *r == minus_one {
        return Ok(mu.total() - 1);
    }
    if r.is_zero() {
        return Ok(mu.pointed_lines()?.total());
    }
    if mu.is_quadric() {
        return Ok(r * 2 + mu.total() + 1);
    }

    // Here r >= 1.
    let mut weighted = BigInt::zero();
    for (d, &m) in mu.entries().iter().enumerate() {
        if m == 0 {
            continue;
        }
        let top = BigInt::from(d + 1) + r;
        weighted += binomial(&top, r)? * m;
    }
    Ok(r + ceil_div(&(weighted - 1), r)?)
}

/// `n(mu, r)`: `n0(mu, r)` maximised against `n0(mu', r - 1) + 1` for every
/// `mu'` on the penta chain.
///
/// # Errors
///
/// Propagates [`Error::Overflow`] and [`Error::NoFixedPoint`] from the
/// penta walk.
pub fn n(mu: &MultiplicitySequence, r: &BigInt) -> Result<BigInt> {
    let mut n_max = n0(mu, r)?;
    let lowered = r - 1;
    walk_to_linear(mu, |_, current| {
        let candidate = n0(current, &lowered)? + 1;
        if candidate > n_max {
            n_max = candidate;
        }
        Ok(())
    })?;
    Ok(n_max)
}

/// `n_min(mu) = n(mu, r(mu))`.
///
/// # Errors
///
/// Propagates the errors of [`r`] and [`n`].
///
/// # Example
///
/// ```
/// use num_bigint::BigInt;
/// use unirat_foundation::{dimensions::n_min, MultiplicitySequence};
///
/// let quartic = MultiplicitySequence::from_degree(4, 1).unwrap();
/// assert_eq!(n_min(&quartic).unwrap(), BigInt::from(9));
/// ```
pub fn n_min(mu: &MultiplicitySequence) -> Result<BigInt> {
    let mu = mu.trimmed();
    let radius = r(&mu)?;
    n(&mu, &radius)
}

/// Applies `penta` until the sequence is linear, calling `visit(depth, mu')`
/// on every (trimmed) sequence produced. The starting sequence is not
/// visited.
///
/// There is no step cap: the chain for a degree-10 hypersurface is already
/// about `2 * 10^7` steps long. Termination follows from a descent measure.
/// Let the trimmed, non-linear sequence have length `L` and last entry
/// `e >= 1`. One step keeps `L` and lowers `e` to `e - 1`, or, when
/// `e = 1`, shortens the trimmed sequence. So `(L, e)` strictly decreases
/// lexicographically. Suffix sums of non-negative entries are non-negative,
/// and the two decremented slots hold `e - 1` and `mu[L-2] + e - 1`, so a
/// non-negative start keeps `e >= 1` along the whole chain.
///
/// A non-linear sequence that ends in a negative entry has no such measure
/// and is rejected with [`Error::NoFixedPoint`].
fn walk_to_linear<F>(mu: &MultiplicitySequence, mut visit: F) -> Result<()>
where
    F: FnMut(usize, &MultiplicitySequence) -> Result<()>,
{
    let mut current = mu.trimmed();
    let mut depth = 0usize;
    while !current.is_linear() {
        if current.entries().last().is_some_and(|&e| e < 0) {
            return Err(Error::NoFixedPoint(depth));
        }
        current = current.penta()?;
        current.trim();
        depth += 1;
        visit(depth, &current)?;
    }
    debug!(start = %mu, depth, "penta chain reached a linear sequence");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mu(entries: &[i64]) -> MultiplicitySequence {
        MultiplicitySequence::new(entries.to_vec())
    }

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn r0_weights_by_index() {
        assert_eq!(r0(&mu(&[0, 0, 1])), big(1));
        assert_eq!(r0(&mu(&[5])), big(-1));
        assert_eq!(r0(&mu(&[1, 2, 3])), big(7));
    }

    #[test]
    fn r_of_zero_multidegree_is_sentinel() -> Result<()> {
        assert_eq!(r(&mu(&[]))?, big(-2));
        assert_eq!(r(&mu(&[0, 0]))?, big(-2));
        Ok(())
    }

    #[test]
    fn r_of_small_degrees() -> Result<()> {
        // Hyperplane: already linear, r = r0 = -1.
        assert_eq!(r(&mu(&[1]))?, big(-1));
        // Quadric: (0,1) -> (0,0), r = max(0, -1 + 1) = 0.
        assert_eq!(r(&mu(&[0, 1]))?, big(0));
        assert_eq!(r(&mu(&[0, 0, 1]))?, big(1));
        assert_eq!(r(&mu(&[0, 0, 0, 1]))?, big(2));
        Ok(())
    }

    #[test]
    fn n0_base_cases() -> Result<()> {
        let seq = mu(&[1, 0, 2]);
        assert_eq!(n0(&seq, &big(-5))?, big(0));
        assert_eq!(n0(&seq, &big(-1))?, big(2));
        assert_eq!(n0(&seq, &big(0))?, big(7));
        Ok(())
    }

    #[test]
    fn n0_quadric_branch() -> Result<()> {
        assert_eq!(n0(&mu(&[0, 1]), &big(3))?, big(8));
        assert_eq!(n0(&mu(&[1, 1, 0, 0]), &big(1))?, big(5));
        Ok(())
    }

    #[test]
    fn n0_general_branch() -> Result<()> {
        // 1 + ceil((binomial(4, 1) - 1) / 1)
        assert_eq!(n0(&mu(&[0, 0, 1]), &big(1))?, big(4));
        // 2 + ceil((binomial(6, 2) - 1) / 2)
        assert_eq!(n0(&mu(&[0, 0, 0, 1]), &big(2))?, big(9));
        Ok(())
    }

    #[test]
    fn n_min_of_low_degrees() -> Result<()> {
        assert_eq!(n_min(&mu(&[0, 0, 1]))?, big(4));
        assert_eq!(n_min(&mu(&[0, 0, 0, 1]))?, big(9));
        Ok(())
    }

    #[test]
    fn n_min_ignores_trailing_zeros() -> Result<()> {
        assert_eq!(n_min(&mu(&[0, 0, 0, 1, 0, 0]))?, big(9));
        Ok(())
    }

    #[test]
    fn n_dominates_n0() -> Result<()> {
        let seq = mu(&[0, 1, 1]);
        let radius = r(&seq)?;
        assert!(n(&seq, &radius)? >= n0(&seq, &radius)?);
        Ok(())
    }

    #[test]
    fn walk_rejects_negative_tail() {
        assert_eq!(r(&mu(&[0, 0, 5, -1])), Err(Error::NoFixedPoint(0)));
        // A negative tail on a linear sequence is never walked.
        assert_eq!(r(&mu(&[2, 0, -1])), Ok(big(-3)));
    }
}
