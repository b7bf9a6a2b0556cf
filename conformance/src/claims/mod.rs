//! Claim checks, one module per paper section.
//!
//! Each module exposes `verify(engine, ledger)`, which computes the values
//! the section states and records one claim per statement.

pub mod corollary_2_15;
pub mod introduction;
pub mod lemma_2_12;
pub mod lemma_2_7;
pub mod proposition_2_14;
pub mod proposition_2_9;
pub mod remark_2_13;
pub mod values;

use num_bigint::BigInt;
use unirat_foundation::MultiplicitySequence;

use crate::config::Section;
use crate::ledger::Ledger;
use crate::{Engine, VerifyError};

/// Runs every claim of `section`.
///
/// # Errors
///
/// Returns [`VerifyError::Halted`] on the first failed claim in fail-fast
/// mode, and [`VerifyError::Engine`] if a computation is rejected.
pub fn verify(
    section: Section,
    engine: &mut Engine,
    ledger: &mut Ledger,
) -> Result<(), VerifyError> {
    match section {
        Section::Introduction => introduction::verify(engine, ledger),
        Section::Values => values::verify(engine, ledger),
        Section::Lemma2_7 => lemma_2_7::verify(engine, ledger),
        Section::Proposition2_9 => proposition_2_9::verify(engine, ledger),
        Section::Lemma2_12 => lemma_2_12::verify(engine, ledger),
        Section::Remark2_13 => remark_2_13::verify(engine, ledger),
        Section::Proposition2_14 => proposition_2_14::verify(engine, ledger),
        Section::Corollary2_15 => corollary_2_15::verify(engine, ledger),
    }
}

/// The multiplicity sequence of a general hypersurface of degree `d`.
pub(crate) fn hypersurface(d: usize) -> Result<MultiplicitySequence, VerifyError> {
    Ok(MultiplicitySequence::from_degree(d, 1)?)
}

/// `2^exponent`.
pub(crate) fn power_of_two(exponent: usize) -> BigInt {
    BigInt::from(1) << exponent
}
