//! Claim bookkeeping for a verification run.

use std::fmt::Display;

use tracing::warn;

use crate::config::Section;
use crate::report::{ClaimResult, VerificationReport};
use crate::VerifyError;

/// Records claim outcomes and enforces fail-fast.
#[derive(Debug)]
pub struct Ledger {
    report: VerificationReport,
    fail_fast: bool,
    section: Section,
}

impl Ledger {
    /// Creates an empty ledger, positioned at the first section.
    pub fn new(fail_fast: bool) -> Self {
        Self {
            report: VerificationReport::new(),
            fail_fast,
            section: Section::ALL[0],
        }
    }

    /// Attributes subsequent claims to `section`.
    pub fn enter(&mut self, section: Section) {
        self.section = section;
    }

    /// Records a claim whose truth the caller has already decided.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Halted`] when the claim fails in fail-fast mode.
    pub fn check(
        &mut self,
        claim: impl Into<String>,
        holds: bool,
        expected: impl Display,
        actual: impl Display,
    ) -> Result<(), VerifyError> {
        let claim = claim.into();
        let expected = expected.to_string();
        let actual = actual.to_string();
        if holds {
            self.report
                .push(ClaimResult::pass(self.section, claim, expected, actual));
            return Ok(());
        }

        warn!(section = %self.section, %claim, %expected, %actual, "claim failed");
        self.report.push(ClaimResult::fail(
            self.section,
            claim.clone(),
            expected.clone(),
            actual.clone(),
        ));
        if self.fail_fast {
            return Err(VerifyError::Halted {
                claim,
                expected,
                actual,
            });
        }
        Ok(())
    }

    /// Records that `actual` prints as the decimal literal `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Halted`] when the claim fails in fail-fast mode.
    pub fn check_literal(
        &mut self,
        claim: impl Into<String>,
        expected: &str,
        actual: impl Display,
    ) -> Result<(), VerifyError> {
        let actual = actual.to_string();
        self.check(claim, actual == expected, expected, actual)
    }

    /// The results recorded so far.
    pub fn report(&self) -> &VerificationReport {
        &self.report
    }

    /// Consumes the ledger, returning its report.
    pub fn into_report(self) -> VerificationReport {
        self.report
    }
}
