//! The coefficient table `m(i,j)` and the derived bounds `b(i,j)`, `c(i,j)`.
//!
//! `m(i,j)` is the coefficient of `x^(i+j)` in the power series `F_i(x)`.
//! Lemma 2.6 of the paper gives the recurrence
//!
//! ```text
//! m(i+1,0) = (m(i,0)^2 - m(i,0)) / 2 + m(i,1)
//! m(i+1,j) = binomial(m(i,0)+j-1, j) (m(i,0)^2 + (j-1) m(i,0) + 2) / (j+2)
//!            + sum_{k=0}^{j} binomial(m(i,0)+j-k-1, j-k) m(i,k+1)
//! ```
//!
//! with `m(0,0) = 1` and `m(0,j) = 0` for `j >= 1`.

use std::collections::HashMap;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use tracing::debug;

use crate::arith::{binomial, ceil_div, int_to_f64, ratio, to_f64};
use crate::error::{Error, Result};

/// First row index for which `c(i,j)` is defined.
pub const C_FIRST_ROW: usize = 7;

/// Memoised evaluator for `m(i,j)`, `b(i,j)` and `c(i,j)`.
///
/// Entries are filled on first request and never invalidated. Rows are
/// computed bottom-up, so arbitrarily large indices never deepen the stack.
#[derive(Debug, Default)]
pub struct CoefficientTable {
    /// `rows[i - 1][j]` holds `m(i, j)` for every column filled so far.
    rows: Vec<Vec<BigInt>>,
    cs: HashMap<(usize, usize), f64>,
}

impl CoefficientTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The coefficient `m(i,j)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotIntegral`] if the recurrence ever produces a
    /// proper fraction, which would contradict Lemma 2.6.
    ///
    /// # Example
    ///
    /// ```
    /// use num_bigint::BigInt;
    /// use unirat_foundation::CoefficientTable;
    ///
    /// let mut table = CoefficientTable::new();
    /// assert_eq!(table.m(6, 1).unwrap(), BigInt::from(1106));
    /// ```
    pub fn m(&mut self, i: usize, j: usize) -> Result<BigInt> {
        if i == 0 {
            return Ok(base_row(j));
        }
        self.fill(i, j)?;
        Ok(self.known(i, j))
    }

    /// `b(i,j) = binomial(m(i,0)+j-1, j) / m(i,0)^j`, exactly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] when `m(i,0) = 0` and `j >= 1`.
    pub fn b(&mut self, i: usize, j: usize) -> Result<BigRational> {
        let lead = self.m(i, 0)?;
        let jb = BigInt::from(j);
        let numer = binomial(&(&lead + &jb - 1), &jb)?;
        let denom = num_traits::pow(lead, j);
        ratio(numer, denom)
    }

    /// The constant `c(i,j)` that should satisfy
    /// `m(i,j) <= c(i,j) m(i,0)^(1+j/2)` for `i >= 7` and `j >= 1`.
    ///
    /// Row 7 is the constant 1. Later rows follow the recurrence from the
    /// proof of Proposition 2.9, evaluated in `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] for `i <= 6` or `j == 0`, and
    /// [`Error::NotFinite`] if an intermediate value overflows an `f64`.
    pub fn c(&mut self, i: usize, j: usize) -> Result<f64> {
        if j == 0 {
            return Err(Error::domain("c", "column index must be at least 1"));
        }
        if i < C_FIRST_ROW {
            return Err(Error::domain(
                "c",
                format!("row index {i} is below {C_FIRST_ROW}"),
            ));
        }
        if i == C_FIRST_ROW {
            return Ok(1.0);
        }
        // Row t needs row t - 1 up to column j_t + 1.
        for row in C_FIRST_ROW + 1..=i {
            let width = j + (i - row);
            for col in 1..=width {
                if !self.cs.contains_key(&(row, col)) {
                    let value = self.next_c(row, col)?;
                    self.cs.insert((row, col), value);
                }
            }
        }
        Ok(self.known_c(i, j))
    }

    /// `n(d) = R + ceil((binomial(d+R, d) - 1) / R)` with
    /// `R = sum_{i<d-1} m(i,0)`: the closed form for `n_min` of a degree-`d`
    /// hypersurface quoted in the introduction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] for `d < 2`.
    pub fn n(&mut self, d: usize) -> Result<BigInt> {
        if d < 2 {
            return Err(Error::domain("n", "degree must be at least 2"));
        }
        let radius = self.leading_sum(d - 1)?;
        let db = BigInt::from(d);
        let count = binomial(&(&db + &radius), &db)? - 1;
        Ok(&radius + ceil_div(&count, &radius)?)
    }

    /// `sum_{i < count} m(i,0)`.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`m`](Self::m).
    pub fn leading_sum(&mut self, count: usize) -> Result<BigInt> {
        let mut total = BigInt::zero();
        for i in 0..count {
            total += self.m(i, 0)?;
        }
        Ok(total)
    }

    /// Ensures every entry the recurrence needs for `m(i,j)` is stored.
    fn fill(&mut self, i: usize, j: usize) -> Result<()> {
        if self.rows.len() < i {
            self.rows.resize_with(i, Vec::new);
        }
        for row in 1..=i {
            let columns = j + (i - row) + 1;
            let filled = self.rows[row - 1].len();
            for col in filled..columns {
                let value = self.next_m(row, col)?;
                self.rows[row - 1].push(value);
            }
            if columns > filled {
                debug!(row, columns, "filled coefficient row");
            }
        }
        Ok(())
    }

    /// `m(i,j)` from row `i - 1`, which must already hold columns `0..=j+1`.
    fn next_m(&self, i: usize, j: usize) -> Result<BigInt> {
        let p = self.known(i - 1, 0);
        let value = if j == 0 {
            ratio(&p * &p - &p, BigInt::from(2))? + BigRational::from_integer(self.known(i - 1, 1))
        } else {
            let jb = BigInt::from(j);
            let lead = binomial(&(&p + &jb - 1), &jb)? * (&p * &p + (&jb - 1) * &p + 2);
            let mut tail = BigInt::zero();
            for k in 0..=j {
                let top = &p + BigInt::from(j - k) - 1;
                tail += binomial(&top, &BigInt::from(j - k))? * self.known(i - 1, k + 1);
            }
            ratio(lead, BigInt::from(j + 2))? + BigRational::from_integer(tail)
        };
        if !value.is_integer() {
            return Err(Error::NotIntegral {
                function: "m",
                value: value.to_string(),
            });
        }
        Ok(value.to_integer())
    }

    fn known(&self, i: usize, j: usize) -> BigInt {
        match i {
            0 => base_row(j),
            _ => self.rows[i - 1][j].clone(),
        }
    }

    /// `c(i,j)` from row `i - 1`, which must already hold columns `1..=j+1`.
    fn next_c(&mut self, i: usize, j: usize) -> Result<f64> {
        let r = int_to_f64(&self.m(i, 0)?, "m(i,0)")?;
        let two_r = 2.0 * r;
        let jf = j as f64;

        let lead = to_f64(&self.b(i - 1, j)?, "b(i,j)")? / (jf + 2.0)
            * (1.0 + (jf - 1.0) / libm::sqrt(two_r) + 1.0 / r);
        let mut tail = 0.0;
        for k in 0..=j {
            let b = to_f64(&self.b(i - 1, j - k)?, "b(i,j)")?;
            tail += b * self.known_c(i - 1, k + 1) / libm::pow(two_r, (k as f64 + 1.0) / 4.0);
        }
        let value = libm::pow(2.0, 1.0 + jf / 2.0) * (lead + tail);
        if !value.is_finite() {
            return Err(Error::NotFinite("c(i,j)"));
        }
        Ok(value)
    }

    fn known_c(&self, i: usize, j: usize) -> f64 {
        if i == C_FIRST_ROW {
            1.0
        } else {
            self.cs[&(i, j)]
        }
    }
}

fn base_row(j: usize) -> BigInt {
    if j == 0 {
        BigInt::one()
    } else {
        BigInt::zero()
    }
}
