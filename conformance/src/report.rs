//! Verification report types: claim results, severity levels, and report aggregation.

use serde::Serialize;

use crate::config::Section;

/// Outcome of a single claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The claim holds.
    Pass,
    /// The claim does not hold.
    Failure,
}

/// A single verified claim.
#[derive(Debug, Clone, Serialize)]
pub struct ClaimResult {
    /// Paper section the claim belongs to.
    pub section: Section,
    /// Identifier of the claim, e.g. `figure-1/m(7,2)`.
    pub claim: String,
    /// One-line human-readable outcome.
    pub message: String,
    /// The expected value, or the relation that must hold.
    pub expected: String,
    /// The computed value.
    pub actual: String,
    /// Whether the claim holds.
    pub severity: Severity,
}

impl ClaimResult {
    /// Creates a passing result.
    pub fn pass(
        section: Section,
        claim: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        let actual = actual.into();
        Self {
            section,
            claim: claim.into(),
            message: format!("holds: {actual}"),
            expected: expected.into(),
            actual,
            severity: Severity::Pass,
        }
    }

    /// Creates a failure result.
    pub fn fail(
        section: Section,
        claim: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        let expected = expected.into();
        let actual = actual.into();
        Self {
            section,
            claim: claim.into(),
            message: format!("expected {expected}, got {actual}"),
            expected,
            actual,
            severity: Severity::Failure,
        }
    }

    /// Returns true if this result represents a failure.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// Aggregated results of a verification run.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    /// Every claim evaluated, in evaluation order.
    pub results: Vec<ClaimResult>,
}

impl VerificationReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    /// Appends a result to this report.
    pub fn push(&mut self, result: ClaimResult) {
        self.results.push(result);
    }

    /// Extends this report with results from another report.
    pub fn extend(&mut self, other: VerificationReport) {
        self.results.extend(other.results);
    }

    /// Returns the count of failed claims.
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    /// Returns true if every claim holds.
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }

    /// The first failed claim, if any.
    pub fn first_failure(&self) -> Option<&ClaimResult> {
        self.results.iter().find(|r| r.is_failure())
    }
}

impl Default for VerificationReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_failures() {
        let mut report = VerificationReport::new();
        report.push(ClaimResult::pass(Section::Values, "a", "1", "1"));
        report.push(ClaimResult::fail(Section::Values, "b", "2", "3"));
        assert_eq!(report.failure_count(), 1);
        assert!(!report.all_passed());
        assert_eq!(report.first_failure().map(|r| r.claim.as_str()), Some("b"));
        assert_eq!(
            report.first_failure().map(|r| r.message.as_str()),
            Some("expected 2, got 3")
        );
        assert_eq!(report.results[0].message, "holds: 1");
    }

    #[test]
    fn extend_keeps_order() {
        let mut first = VerificationReport::new();
        first.push(ClaimResult::pass(Section::Introduction, "a", "", ""));
        let mut second = VerificationReport::new();
        second.push(ClaimResult::pass(Section::Values, "b", "", ""));
        first.extend(second);
        let claims: Vec<_> = first.results.iter().map(|r| r.claim.as_str()).collect();
        assert_eq!(claims, ["a", "b"]);
        assert!(first.all_passed());
    }
}
