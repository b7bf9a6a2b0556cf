//! Proposition 2.9: the bound `m(7,j) <= m(7,0)^(1+j/2)` that starts the
//! induction, and the estimates used along the way.
//!
//! Comparisons with fractional powers of integers are squared out and
//! checked exactly. The harmonic sum and the bound (*) mix logarithms and
//! quarter powers; those are evaluated in `f64` as the paper does.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;
use unirat_foundation::arith::{int_to_f64, ln, ratio, to_f64};

use crate::ledger::Ledger;
use crate::{Engine, VerifyError};

/// Number of terms in the harmonic-like sum `sum_{l=0}^{119} 1/(2+l)`.
const HARMONIC_TERMS: u32 = 120;

/// Strict upper bounds `b(7,j) < numer/denom`, as `(j, numer, denom)`.
const B_BOUNDS: [(usize, i64, i64); 3] = [(2, 2, 3), (3, 1, 4), (4, 1, 16)];

/// Checks every estimate of the proof.
///
/// # Errors
///
/// See [`super::verify`].
pub fn verify(engine: &mut Engine, ledger: &mut Ledger) -> Result<(), VerifyError> {
    verify_start(engine, ledger)?;
    verify_harmonic_sum(engine, ledger)?;
    verify_b_bounds(engine, ledger)?;
    for j in 1..=2 {
        verify_star(engine, ledger, j)?;
    }
    verify_explicit(ledger)
}

/// `m(7,1) < m(7,0)^(3/2)` and `m(7,2) < m(7,0)^2`.
fn verify_start(engine: &mut Engine, ledger: &mut Ledger) -> Result<(), VerifyError> {
    let lead = engine.table.m(7, 0)?;
    let first = engine.table.m(7, 1)?;
    let second = engine.table.m(7, 2)?;

    ledger.check(
        "proposition-2.9/m(7,1)",
        &first * &first < lead.pow(3),
        "m(7,1) < m(7,0)^(3/2)",
        &first,
    )?;
    ledger.check(
        "proposition-2.9/m(7,2)",
        second < lead.pow(2),
        "m(7,2) < m(7,0)^2",
        &second,
    )
}

fn verify_harmonic_sum(engine: &mut Engine, ledger: &mut Ledger) -> Result<(), VerifyError> {
    let lead = engine.table.m(7, 0)?;
    let half_log = ln(&lead).unwrap_or(f64::NAN) / 2.0;
    let sum: f64 = (0..HARMONIC_TERMS).map(|l| 1.0 / f64::from(2 + l)).sum();
    ledger.check(
        "proposition-2.9/harmonic-sum",
        half_log > sum,
        format!("ln(m(7,0))/2 > {sum}"),
        half_log,
    )
}

fn verify_b_bounds(engine: &mut Engine, ledger: &mut Ledger) -> Result<(), VerifyError> {
    let one = BigRational::one();
    for j in 0..=1 {
        let b = engine.table.b(7, j)?;
        ledger.check(format!("proposition-2.9/b(7,{j})"), b == one, "1", b)?;
    }
    for (j, numer, denom) in B_BOUNDS {
        let b = engine.table.b(7, j)?;
        let bound = ratio(BigInt::from(numer), BigInt::from(denom))?;
        ledger.check(
            format!("proposition-2.9/b(7,{j})"),
            b < bound,
            format!("b(7,{j}) < {bound}"),
            b,
        )?;
    }
    Ok(())
}

/// The bound (*) at `j`:
///
/// ```text
/// b(7,j)/(j+2) (1 + (j-1)(2 m(8,0))^(-1/2) + 1/m(8,0))
///   + sum_{k=0}^{j} b(7,j-k) (2 m(8,0))^(-(k+1)/4)  <  2^(-(j+1/2))
/// ```
fn verify_star(engine: &mut Engine, ledger: &mut Ledger, j: usize) -> Result<(), VerifyError> {
    let m8 = int_to_f64(&engine.table.m(8, 0)?, "m(8,0)")?;
    let twice = 2.0 * m8;
    let jf = j as f64;

    let head = to_f64(&engine.table.b(7, j)?, "b(7,j)")? / (jf + 2.0)
        * (1.0 + (jf - 1.0) * libm::pow(twice, -0.5) + 1.0 / m8);
    let mut tail = 0.0;
    for k in 0..=j {
        let b = to_f64(&engine.table.b(7, j - k)?, "b(7,j)")?;
        tail += b * libm::pow(twice, -((k + 1) as f64) / 4.0);
    }
    let lhs = head + tail;
    let rhs = libm::pow(2.0, -(jf + 0.5));
    ledger.check(
        format!("proposition-2.9/star(j={j})"),
        lhs < rhs,
        format!("< {rhs}"),
        lhs,
    )
}

/// `1/5 (1 + 2/4^6 + 1/4^12) + 1/60 + 2/(3 4^5) + 1/4^8 + 1/4^11 < 1/4`,
/// in exact rationals.
fn verify_explicit(ledger: &mut Ledger) -> Result<(), VerifyError> {
    let q = |numer: i64, denom: BigInt| ratio(BigInt::from(numer), denom);
    let four = |exponent: u32| BigInt::from(4).pow(exponent);

    let bracket = BigRational::one() + q(2, four(6))? + q(1, four(12))?;
    let lhs = q(1, BigInt::from(5))? * bracket
        + q(1, BigInt::from(60))?
        + q(2, four(5) * 3)?
        + q(1, four(8))?
        + q(1, four(11))?;
    let rhs = q(1, BigInt::from(4))?;
    ledger.check(
        "proposition-2.9/explicit",
        lhs < rhs,
        format!("< {rhs}"),
        lhs,
    )
}
