//! The two sides of the polynomial identity in Remark 2.13.
//!
//! For a multi-degree with multiplicities `m_1, ..., m_4` the remark states
//!
//! ```text
//! sum_{d=1}^{4} m_d (binomial(d + x, x) - d x - 1)
//!   = (x/24) ( -(12 m_2 + 28 m_3 + 46 m_4)
//!              + (12 m_2 + 24 m_3 + 35 m_4) x
//!              + (4 m_3 + 10 m_4) x^2
//!              + m_4 x^3 )
//! ```
//!
//! Both sides are linear in the `m_d`, so each side is described here by its
//! contribution per degree `d`. Expanding the right side gives, for each `d`,
//! a polynomial in `x` of degree at most 4 whose coefficients are listed in
//! [`CLOSED_FORM`].

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use crate::arith::{binomial, ratio};
use crate::error::{Error, Result};

/// Largest degree the identity covers.
pub const MAX_DEGREE: usize = 4;

/// Common denominator of the closed form.
pub const CLOSED_FORM_DENOMINATOR: i64 = 24;

/// `CLOSED_FORM[d - 1][k]` is 24 times the coefficient of `m_d x^k` on the
/// right side.
pub const CLOSED_FORM: [[i64; MAX_DEGREE + 1]; MAX_DEGREE] = [
    [0, 0, 0, 0, 0],
    [0, -12, 12, 0, 0],
    [0, -28, 24, 4, 0],
    [0, -46, 35, 10, 1],
];

/// Left-side contribution of degree `d`: `binomial(d + x, x) - d x - 1`.
///
/// Only non-negative `x` is accepted: there the binomial agrees with the
/// polynomial `(x+1)(x+2)...(x+d)/d!`.
///
/// # Errors
///
/// Returns [`Error::Domain`] for `d` outside `1..=4` or negative `x`.
pub fn tangency_excess(d: usize, x: &BigInt) -> Result<BigInt> {
    check_degree(d)?;
    if x.is_negative() {
        return Err(Error::domain("remark 2.13", "x must be non-negative"));
    }
    let db = BigInt::from(d);
    Ok(binomial(&(&db + x), x)? - &db * x - 1)
}

/// Right-side contribution of degree `d`, evaluated at `x`.
///
/// # Errors
///
/// Returns [`Error::Domain`] for `d` outside `1..=4`.
pub fn closed_form(d: usize, x: &BigInt) -> Result<BigRational> {
    check_degree(d)?;
    let mut value = BigInt::zero();
    let mut power = BigInt::from(1);
    for &coefficient in &CLOSED_FORM[d - 1] {
        value += &power * coefficient;
        power *= x;
    }
    ratio(value, BigInt::from(CLOSED_FORM_DENOMINATOR))
}

fn check_degree(d: usize) -> Result<()> {
    if (1..=MAX_DEGREE).contains(&d) {
        Ok(())
    } else {
        Err(Error::domain(
            "remark 2.13",
            format!("degree {d} is outside 1..={MAX_DEGREE}"),
        ))
    }
}
