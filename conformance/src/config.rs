//! Verifier configuration and the catalogue of paper sections.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::VerifyError;

/// A group of claims, named after the part of the paper that states them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Section {
    /// The two headline numbers of the introduction.
    #[serde(rename = "introduction")]
    Introduction,
    /// `n_min` for small degrees and the Figure 1 table.
    #[serde(rename = "values")]
    Values,
    /// Growth of `m(i,0)`.
    #[serde(rename = "lemma-2.7")]
    Lemma2_7,
    /// Bounds on `m(7,j)`, `b(7,j)` and the estimate (*).
    #[serde(rename = "proposition-2.9")]
    Proposition2_9,
    /// The partial sum of `m(k,0)`.
    #[serde(rename = "lemma-2.12")]
    Lemma2_12,
    /// The polynomial identity.
    #[serde(rename = "remark-2.13")]
    Remark2_13,
    /// `n_min` against `n0` at the leading sum, and Step 1 of the proof.
    #[serde(rename = "proposition-2.14")]
    Proposition2_14,
    /// The doubly exponential bound on `n_min`.
    #[serde(rename = "corollary-2.15")]
    Corollary2_15,
}

impl Section {
    /// Every section, in paper order.
    pub const ALL: [Section; 8] = [
        Section::Introduction,
        Section::Values,
        Section::Lemma2_7,
        Section::Proposition2_9,
        Section::Lemma2_12,
        Section::Remark2_13,
        Section::Proposition2_14,
        Section::Corollary2_15,
    ];

    /// The name used in configuration files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Section::Introduction => "introduction",
            Section::Values => "values",
            Section::Lemma2_7 => "lemma-2.7",
            Section::Proposition2_9 => "proposition-2.9",
            Section::Lemma2_12 => "lemma-2.12",
            Section::Remark2_13 => "remark-2.13",
            Section::Proposition2_14 => "proposition-2.14",
            Section::Corollary2_15 => "corollary-2.15",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = VerifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.name() == s)
            .ok_or_else(|| VerifyError::UnknownSection(s.to_string()))
    }
}

/// Settings for a verification run.
///
/// ```toml
/// fail_fast = false
/// sections = ["values", "proposition-2.9"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerifyConfig {
    /// Stop at the first failed claim.
    pub fail_fast: bool,
    /// Sections to run. Empty means all of them.
    pub sections: Vec<Section>,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            fail_fast: true,
            sections: Vec::new(),
        }
    }
}

impl VerifyConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Config`] on malformed TOML, unknown keys or
    /// unknown section names.
    pub fn from_toml_str(text: &str) -> Result<Self, VerifyError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Io`] if the file cannot be read, otherwise the
    /// errors of [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: &Path) -> Result<Self, VerifyError> {
        let text = std::fs::read_to_string(path).map_err(|source| VerifyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// The sections to run, deduplicated and in paper order.
    pub fn selected(&self) -> Vec<Section> {
        if self.sections.is_empty() {
            return Section::ALL.to_vec();
        }
        let mut sections = self.sections.clone();
        sections.sort_unstable();
        sections.dedup();
        sections
    }
}
