//! Exact arithmetic over arbitrary-precision integers and rationals.
//!
//! Every quantity the engine produces is a [`BigInt`] or an exact
//! [`BigRational`]. Floating point enters only through [`log2`], [`ln`] and
//! [`to_f64`], which exist for the paper's approximate bounds.

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::error::{Error, Result};

/// Number of leading bits kept when a huge integer is squeezed into an `f64`.
const F64_WINDOW_BITS: u64 = 64;

/// Binomial coefficient `binomial(n, k)` for any integer `n`.
///
/// Returns 0 when `k < 0`, and 0 when `n >= 0` and `k > n`. Otherwise the
/// value is the falling-factorial quotient `n (n-1) ... (n-k+1) / k!`, which
/// also covers a negative upper index (`binomial(-1, 0) = 1`).
///
/// For `n >= 0` the smaller of `k` and `n - k` is expanded, so
/// `binomial(d + r, r)` with a huge `r` costs `d` multiplications.
///
/// # Errors
///
/// Returns [`Error::Domain`] when the expanded lower index does not fit in
/// a `u64`.
///
/// # Example
///
/// ```
/// use num_bigint::BigInt;
/// use unirat_foundation::arith::binomial;
///
/// let c = binomial(&BigInt::from(10), &BigInt::from(3)).unwrap();
/// assert_eq!(c, BigInt::from(120));
/// ```
pub fn binomial(n: &BigInt, k: &BigInt) -> Result<BigInt> {
    if k.is_negative() {
        return Ok(BigInt::zero());
    }
    let mut k = k.clone();
    if !n.is_negative() {
        if k > *n {
            return Ok(BigInt::zero());
        }
        let complement = n - &k;
        if complement < k {
            k = complement;
        }
    }
    let steps = k.to_u64().ok_or_else(|| {
        Error::domain(
            "binomial",
            format!("lower index {k} is too large to expand"),
        )
    })?;

    // After step i, `acc` is binomial(n, i); every division is exact.
    let mut acc = BigInt::one();
    let mut factor = n.clone();
    for i in 1..=steps {
        acc = acc * &factor / BigInt::from(i);
        factor -= 1;
    }
    Ok(acc)
}

/// Builds the rational `numer / denom`.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] when `denom` is zero.
pub fn ratio(numer: BigInt, denom: BigInt) -> Result<BigRational> {
    if denom.is_zero() {
        return Err(Error::DivisionByZero);
    }
    Ok(BigRational::new(numer, denom))
}

/// Largest integer not greater than `q`.
#[must_use]
pub fn floor(q: &BigRational) -> BigInt {
    q.floor().to_integer()
}

/// Smallest integer not less than `q`.
#[must_use]
pub fn ceil(q: &BigRational) -> BigInt {
    q.ceil().to_integer()
}

/// `floor(a / b)` for integers.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] when `b` is zero.
pub fn floor_div(a: &BigInt, b: &BigInt) -> Result<BigInt> {
    if b.is_zero() {
        return Err(Error::DivisionByZero);
    }
    Ok(a.div_floor(b))
}

/// `ceil(a / b)` for integers.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] when `b` is zero.
pub fn ceil_div(a: &BigInt, b: &BigInt) -> Result<BigInt> {
    Ok(-floor_div(&-a, b)?)
}

/// Base-2 logarithm of a positive integer of any size.
///
/// Only the leading 64 bits take part in the floating-point step, so the
/// result stays finite for integers far beyond the `f64` range.
/// Returns `None` for zero and negative inputs.
#[must_use]
pub fn log2(n: &BigInt) -> Option<f64> {
    if !n.is_positive() {
        return None;
    }
    let shift = n.bits().saturating_sub(F64_WINDOW_BITS);
    let head = (n >> shift).to_f64()?;
    Some(libm::log2(head) + shift as f64)
}

/// Natural logarithm of a positive integer of any size.
#[must_use]
pub fn ln(n: &BigInt) -> Option<f64> {
    log2(n).map(|bits| bits * core::f64::consts::LN_2)
}

/// Nearest `f64` to an exact rational.
///
/// # Errors
///
/// Returns [`Error::NotFinite`] when the value overflows an `f64`.
pub fn to_f64(q: &BigRational, what: &'static str) -> Result<f64> {
    match q.to_f64() {
        Some(value) if value.is_finite() => Ok(value),
        _ => Err(Error::NotFinite(what)),
    }
}

/// Nearest `f64` to an integer.
///
/// # Errors
///
/// Returns [`Error::NotFinite`] when the value overflows an `f64`.
pub fn int_to_f64(n: &BigInt, what: &'static str) -> Result<f64> {
    match n.to_f64() {
        Some(value) if value.is_finite() => Ok(value),
        _ => Err(Error::NotFinite(what)),
    }
}
