//! Proposition 2.14: `n_min(d) = n0(mu_d, R_d)` for small degrees, and the
//! inequalities checked by hand in Step 1 of the proof.

use num_bigint::BigInt;
use unirat_foundation::dimensions::{n0, n_min};

use super::hypersurface;
use crate::ledger::Ledger;
use crate::{Engine, VerifyError};

/// Checks the proposition for `3 <= d <= 7` and Step 1 for `8 <= d <= 11`.
///
/// # Errors
///
/// See [`super::verify`].
pub fn verify(engine: &mut Engine, ledger: &mut Ledger) -> Result<(), VerifyError> {
    for d in 3..=7 {
        let mu = hypersurface(d)?;
        let radius = engine.table.leading_sum(d - 1)?;
        let expected = n0(&mu, &radius)?;
        let actual = n_min(&mu)?;
        ledger.check(
            format!("proposition-2.14/n_min({d})"),
            actual == expected,
            &expected,
            &actual,
        )?;
    }

    for d in 8..=10 {
        let lhs = engine.table.m(d - 4, 3)?;
        let rhs = step_one_rhs(engine, d)?;
        ledger.check(
            format!("proposition-2.14/step-1(d={d})"),
            lhs <= rhs,
            format!("m({},3) <= {rhs}", d - 4),
            lhs,
        )?;
    }

    // d = 11: 4 m(9,0)^(5/8) <= rhs, raised to the 8th power.
    let d = 11;
    let lead = engine.table.m(d - 2, 0)?;
    let rhs = step_one_rhs(engine, d)?;
    let lhs = BigInt::from(4).pow(8) * lead.pow(5);
    ledger.check(
        format!("proposition-2.14/step-1(d={d})"),
        rhs > BigInt::from(0) && lhs <= rhs.pow(8),
        format!("4 m(9,0)^(5/8) <= {rhs}"),
        format!("4^8 m(9,0)^5 = {lhs}"),
    )
}

/// `m(d-4,0) + m(d-3,0) + m(d-2,0) - 2d - 1`.
fn step_one_rhs(engine: &mut Engine, d: usize) -> Result<BigInt, VerifyError> {
    let mut sum = BigInt::from(0);
    for i in d - 4..=d - 2 {
        sum += engine.table.m(i, 0)?;
    }
    Ok(sum - 2 * d - 1)
}
