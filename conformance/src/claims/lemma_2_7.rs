//! Lemma 2.7: `m(i,0)^2 < 2 m(i+1,0)` for `1 <= i <= 4`.

use crate::ledger::Ledger;
use crate::{Engine, VerifyError};

/// Checks the growth inequality for each `i`.
///
/// # Errors
///
/// See [`super::verify`].
pub fn verify(engine: &mut Engine, ledger: &mut Ledger) -> Result<(), VerifyError> {
    for i in 1..=4 {
        let lead = engine.table.m(i, 0)?;
        let lhs = &lead * &lead;
        let rhs = engine.table.m(i + 1, 0)? * 2;
        ledger.check(
            format!("lemma-2.7/i={i}"),
            lhs < rhs,
            format!("m({i},0)^2 < {rhs}"),
            lhs,
        )?;
    }
    Ok(())
}
