//! Verification suite for the numerical claims of
//! "Unirationality of hypersurfaces via highly tangent lines".
//!
//! Every number the paper states, and every inequality its proofs rely on,
//! is recomputed with the `unirat-foundation` engine and recorded as a
//! [`ClaimResult`].
//!
//! # Claim Catalogue
//!
//! | Section | Claims |
//! |---------|--------|
//! | `introduction` | `n(10)` and its size, Ramero's `m(10)` |
//! | `values` | `n_min` for degrees 3 to 9, the Figure 1 table |
//! | `lemma-2.7` | `m(i,0)^2 < 2 m(i+1,0)` |
//! | `proposition-2.9` | bounds on `m(7,j)`, `b(7,j)`, the estimate (*) |
//! | `lemma-2.12` | `sum m(k,0) <= 2^8` |
//! | `remark-2.13` | the polynomial identity |
//! | `proposition-2.14` | `n_min = n0` at the leading sum, Step 1 inequalities |
//! | `corollary-2.15` | `n_min(d) <= 2^((d-1) 2^(d-5))` |
//!
//! # Entry Point
//!
//! ```no_run
//! use unirat_conformance::{run_all, VerifyConfig};
//!
//! let report = run_all(&VerifyConfig::default()).expect("engine error");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod claims;
pub mod config;
pub mod ledger;
pub mod report;

use std::path::PathBuf;

use thiserror::Error;
use tracing::{info, warn};
use unirat_foundation::{CoefficientTable, RameroFunctions};

pub use config::{Section, VerifyConfig};
pub use ledger::Ledger;
pub use report::{ClaimResult, Severity, VerificationReport};

/// Errors raised while verifying claims.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The engine rejected a computation.
    #[error(transparent)]
    Engine(#[from] unirat_foundation::Error),

    /// A claim failed and the run stops there.
    #[error("claim {claim} failed: expected {expected}, got {actual}")]
    Halted {
        /// Identifier of the failed claim.
        claim: String,
        /// The expected value or relation.
        expected: String,
        /// The computed value.
        actual: String,
    },

    /// A section name that is not in the catalogue.
    #[error("unknown section `{0}`")]
    UnknownSection(String),

    /// The configuration file is not valid.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The configuration file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },
}

/// Engine state shared by all sections of one run.
///
/// Memo tables fill up as sections run, so later sections reuse the
/// coefficients computed by earlier ones.
#[derive(Debug, Default)]
pub struct Engine {
    /// `m(i,j)`, `b(i,j)` and `c(i,j)`.
    pub table: CoefficientTable,
    /// Ramero's bounds.
    pub ramero: RameroFunctions,
}

impl Engine {
    /// Creates an engine with empty memo tables.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Runs the selected sections and returns the report.
///
/// In fail-fast mode the run stops after the first failed claim; the report
/// then ends with that claim.
///
/// # Errors
///
/// Returns an error only if the engine rejects a computation.
pub fn run_all(config: &VerifyConfig) -> Result<VerificationReport, VerifyError> {
    let mut engine = Engine::new();
    let mut ledger = Ledger::new(config.fail_fast);

    for section in config.selected() {
        ledger.enter(section);
        info!(%section, "verifying section");
        match claims::verify(section, &mut engine, &mut ledger) {
            Ok(()) => {}
            Err(VerifyError::Halted { claim, .. }) => {
                warn!(%section, %claim, "stopping at first failed claim");
                break;
            }
            Err(err) => return Err(err),
        }
    }

    Ok(ledger.into_report())
}
