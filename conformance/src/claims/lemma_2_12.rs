//! Lemma 2.12 for `i = 6`.

use super::power_of_two;
use crate::ledger::Ledger;
use crate::{Engine, VerifyError};

/// Checks `sum_{k=0}^{6} m(k,0) <= 2^(2^3)`.
///
/// # Errors
///
/// See [`super::verify`].
pub fn verify(engine: &mut Engine, ledger: &mut Ledger) -> Result<(), VerifyError> {
    let sum = engine.table.leading_sum(7)?;
    let bound = power_of_two(1 << 3);
    ledger.check(
        "lemma-2.12/i=6",
        sum <= bound,
        format!("sum m(k,0) <= {bound}"),
        sum,
    )
}
