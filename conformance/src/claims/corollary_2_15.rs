//! Corollary 2.15 for degrees 6 and 7.

use unirat_foundation::dimensions::n_min;

use super::{hypersurface, power_of_two};
use crate::ledger::Ledger;
use crate::{Engine, VerifyError};

/// Checks `n_min(d) <= 2^((d-1) 2^(d-5))`.
///
/// # Errors
///
/// See [`super::verify`].
pub fn verify(_engine: &mut Engine, ledger: &mut Ledger) -> Result<(), VerifyError> {
    for d in 6..=7usize {
        let value = n_min(&hypersurface(d)?)?;
        let exponent = (d - 1) << (d - 5);
        ledger.check(
            format!("corollary-2.15/d={d}"),
            value <= power_of_two(exponent),
            format!("n_min({d}) <= 2^{exponent}"),
            value,
        )?;
    }
    Ok(())
}
