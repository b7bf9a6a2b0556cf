//! Remark 2.13: the polynomial identity
//! `sum_d m_d (binomial(d+x, x) - d x - 1) = (x/24)(...)`.
//!
//! Both sides are linear in `(m_1, ..., m_4)`, so it suffices to compare
//! them per degree. Per degree both sides are polynomials in `x` of degree
//! at most 4, so agreement at 5 points proves the identity.

use num_bigint::BigInt;
use num_rational::BigRational;
use unirat_foundation::identity::{closed_form, tangency_excess, MAX_DEGREE};

use crate::ledger::Ledger;
use crate::{Engine, VerifyError};

/// Sample points `x = 0..=SAMPLES`; one more than strictly needed.
const SAMPLES: i64 = 5;

/// Compares both sides for every degree at every sample point.
///
/// # Errors
///
/// See [`super::verify`].
pub fn verify(_engine: &mut Engine, ledger: &mut Ledger) -> Result<(), VerifyError> {
    for d in 1..=MAX_DEGREE {
        for x in 0..=SAMPLES {
            let x = BigInt::from(x);
            let lhs = BigRational::from_integer(tangency_excess(d, &x)?);
            let rhs = closed_form(d, &x)?;
            ledger.check(
                format!("remark-2.13/m_{d}(x={x})"),
                lhs == rhs,
                &rhs,
                &lhs,
            )?;
        }
    }
    Ok(())
}
