//! Multiplicity sequences and the penta transform.
//!
//! A multi-degree `(d_1, ..., d_c)` is encoded as `mu` with `mu[i]` the
//! number of hypersurfaces of degree `i + 1`. The degree-`d` hypersurface is
//! therefore `(0, ..., 0, 1)` of length `d`.
//!
//! Entries are signed: [`MultiplicitySequence::penta`] may push an entry
//! below zero, and downstream formulas consume such entries algebraically.

use std::fmt;

use num_bigint::BigInt;

use crate::error::{Error, Result};

/// A multiplicity sequence `mu[0..d]`.
///
/// No normalisation happens on construction. Trailing zeros are allowed
/// and [`trim`](Self::trim) removes them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MultiplicitySequence(Vec<i64>);

impl MultiplicitySequence {
    /// Wraps raw entries.
    #[must_use]
    pub fn new(entries: Vec<i64>) -> Self {
        Self(entries)
    }

    /// The sequence `(0, ..., 0, multiplicity)` of length `d`, i.e. the
    /// multi-degree `(d^multiplicity)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] when `d` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use unirat_foundation::MultiplicitySequence;
    ///
    /// let mu = MultiplicitySequence::from_degree(3, 2).unwrap();
    /// assert_eq!(mu.entries(), &[0, 0, 2]);
    /// ```
    pub fn from_degree(d: usize, multiplicity: i64) -> Result<Self> {
        if d == 0 {
            return Err(Error::domain("degree_to_mu", "degree must be at least 1"));
        }
        let mut entries = vec![0; d];
        entries[d - 1] = multiplicity;
        Ok(Self(entries))
    }

    /// The raw entries.
    #[must_use]
    pub fn entries(&self) -> &[i64] {
        &self.0
    }

    /// Number of entries, trailing zeros included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the empty sequence (the zero multi-degree).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Removes trailing zeros in place.
    pub fn trim(&mut self) {
        while self.0.last() == Some(&0) {
            self.0.pop();
        }
    }

    /// A copy with trailing zeros removed.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        let mut copy = self.clone();
        copy.trim();
        copy
    }

    /// Sum of all entries.
    #[must_use]
    pub fn total(&self) -> BigInt {
        self.0.iter().map(|&m| BigInt::from(m)).sum()
    }

    /// True when no entry past index 0 is positive.
    ///
    /// Index 0 (hyperplanes) never disqualifies, and neither do the negative
    /// entries left behind by [`penta`](Self::penta).
    #[must_use]
    pub fn is_linear(&self) -> bool {
        self.0.iter().skip(1).all(|&m| m <= 0)
    }

    /// True for the quadric pattern: `mu[1] == 1` and nothing positive past
    /// index 1.
    ///
    /// Index 0 is not inspected, and a negative `mu[1]` is accepted.
    #[must_use]
    pub fn is_quadric(&self) -> bool {
        self.0.iter().enumerate().all(|(i, &m)| match i {
            1 => m != 0 && m <= 1,
            i if i > 1 => m <= 0,
            _ => true,
        })
    }

    /// Pointed-line transform: entry `i` becomes `mu[i] + ... + mu[d-1]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] when a suffix sum leaves the `i64` range.
    ///
    /// # Example
    ///
    /// ```
    /// use unirat_foundation::MultiplicitySequence;
    ///
    /// let mu = MultiplicitySequence::new(vec![1, 0, 2]);
    /// assert_eq!(mu.pointed_lines().unwrap().entries(), &[3, 2, 2]);
    /// ```
    pub fn pointed_lines(&self) -> Result<Self> {
        suffix_sums(&self.0, "pointed_lines").map(Self)
    }

    /// Penultimate tangent transform.
    ///
    /// A linear sequence maps to the empty sequence. Otherwise the trimmed
    /// sequence is replaced by its suffix sums, with 1 subtracted from the
    /// last entry and, when there are at least two entries, from the
    /// second-to-last as well. `self` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] when an entry leaves the `i64` range.
    pub fn penta(&self) -> Result<Self> {
        if self.is_linear() {
            return Ok(Self::default());
        }
        let trimmed = self.trimmed();
        let mut next = suffix_sums(&trimmed.0, "penta")?;
        let len = next.len();
        for slot in next.iter_mut().skip(len.saturating_sub(2)) {
            *slot = slot.checked_sub(1).ok_or(Error::Overflow("penta"))?;
        }
        Ok(Self(next))
    }
}

fn suffix_sums(entries: &[i64], what: &'static str) -> Result<Vec<i64>> {
    let mut sums = vec![0; entries.len()];
    let mut acc: i64 = 0;
    for (slot, &m) in sums.iter_mut().zip(entries).rev() {
        acc = acc.checked_add(m).ok_or(Error::Overflow(what))?;
        *slot = acc;
    }
    Ok(sums)
}

impl From<Vec<i64>> for MultiplicitySequence {
    fn from(entries: Vec<i64>) -> Self {
        Self(entries)
    }
}

impl fmt::Display for MultiplicitySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, m) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{m}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mu(entries: &[i64]) -> MultiplicitySequence {
        MultiplicitySequence::new(entries.to_vec())
    }

    #[test]
    fn from_degree_places_multiplicity_last() -> Result<()> {
        assert_eq!(MultiplicitySequence::from_degree(1, 1)?, mu(&[1]));
        assert_eq!(MultiplicitySequence::from_degree(4, 3)?, mu(&[0, 0, 0, 3]));
        assert!(matches!(
            MultiplicitySequence::from_degree(0, 1),
            Err(Error::Domain { .. })
        ));
        Ok(())
    }

    #[test]
    fn trim_drops_only_trailing_zeros() {
        let mut seq = mu(&[0, 2, 0, 0]);
        seq.trim();
        assert_eq!(seq, mu(&[0, 2]));

        let mut zero = mu(&[0, 0]);
        zero.trim();
        assert!(zero.is_empty());

        assert_eq!(mu(&[1, -1]).trimmed(), mu(&[1, -1]));
    }

    #[test]
    fn linearity_ignores_index_zero() {
        assert!(mu(&[]).is_linear());
        assert!(mu(&[5]).is_linear());
        assert!(mu(&[7, 0, 0]).is_linear());
        assert!(mu(&[3, -1]).is_linear());
        assert!(!mu(&[0, 1]).is_linear());
        assert!(!mu(&[0, 0, 1]).is_linear());
    }

    #[test]
    fn quadric_check_is_asymmetric() {
        assert!(mu(&[0, 1]).is_quadric());
        assert!(mu(&[4, 1, 0]).is_quadric());
        assert!(mu(&[0, -2]).is_quadric());
        assert!(!mu(&[0, 2]).is_quadric());
        assert!(!mu(&[1, 0]).is_quadric());
        assert!(!mu(&[0, 1, 1]).is_quadric());
        // No index 1 at all: nothing disqualifies.
        assert!(mu(&[3]).is_quadric());
    }

    #[test]
    fn pointed_lines_are_suffix_sums() -> Result<()> {
        assert_eq!(mu(&[1, 0, 2]).pointed_lines()?, mu(&[3, 2, 2]));
        assert_eq!(mu(&[]).pointed_lines()?, mu(&[]));
        Ok(())
    }

    #[test]
    fn penta_of_linear_is_empty() -> Result<()> {
        assert!(mu(&[4, 0, 0]).penta()?.is_empty());
        assert!(mu(&[]).penta()?.is_empty());
        Ok(())
    }

    #[test]
    fn penta_adjusts_last_two_entries() -> Result<()> {
        // (0,0,1) -> suffix sums (1,1,1) -> (1,0,0)
        assert_eq!(mu(&[0, 0, 1]).penta()?, mu(&[1, 0, 0]));
        // Trailing zeros are trimmed before the transform.
        assert_eq!(mu(&[1, 1, 0, 0]).penta()?, mu(&[1, 0]));
        assert_eq!(
            mu(&[7, 6, 5, 4, 3, 1]).penta()?,
            mu(&[26, 19, 13, 8, 3, 0])
        );
        Ok(())
    }

    #[test]
    fn penta_leaves_input_untouched() -> Result<()> {
        let seq = mu(&[0, 1, 0]);
        let _ = seq.penta()?;
        assert_eq!(seq, mu(&[0, 1, 0]));
        Ok(())
    }

    #[test]
    fn penta_may_go_negative() -> Result<()> {
        assert_eq!(mu(&[5, 1, -1]).penta()?, mu(&[5, -1, -2]));
        Ok(())
    }

    #[test]
    fn overflow_is_reported() {
        let seq = mu(&[0, i64::MAX, 1]);
        assert_eq!(seq.pointed_lines(), Err(Error::Overflow("pointed_lines")));
    }

    #[test]
    fn display_lists_entries() {
        assert_eq!(mu(&[0, 2, 1]).to_string(), "(0, 2, 1)");
    }
}
