//! The introduction: the closed form `n(10)` and Ramero's bound for degree 10.

use unirat_foundation::arith::log2;

use crate::ledger::Ledger;
use crate::{Engine, VerifyError};

const N_TEN: &str = "192884152577980851363553858004926940342106493833715693762179";

/// Checks both headline numbers.
///
/// # Errors
///
/// See [`super::verify`].
pub fn verify(engine: &mut Engine, ledger: &mut Ledger) -> Result<(), VerifyError> {
    let n = engine.table.n(10)?;
    ledger.check_literal("introduction/n(10)", N_TEN, &n)?;

    let bits = log2(&n).unwrap_or(f64::NAN);
    ledger.check(
        "introduction/log2 n(10)",
        196.0 < bits && bits < 197.0,
        "196 < log2 n(10) < 197",
        bits,
    )?;

    let bits = log2(&engine.ramero.m(10)?).unwrap_or(f64::NAN);
    ledger.check(
        "introduction/log2 ramero m(10)",
        171_550.0 < bits && bits < 171_551.0,
        "171550 < log2 m(10) < 171551",
        bits,
    )
}
