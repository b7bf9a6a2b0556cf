//! Exact-arithmetic engine for the numerical claims of
//! "Unirationality of hypersurfaces via highly tangent lines".
//!
//! # Layers
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`arith`] | binomials over any integer upper index, floor/ceil division, big-integer logarithms |
//! | [`multiplicity`] | [`MultiplicitySequence`], trimming, the pointed-line and penta transforms |
//! | [`dimensions`] | `r0`, `r`, `n0`, `n`, `n_min` over multiplicity sequences |
//! | [`power_series`] | [`CoefficientTable`]: memoised `m(i,j)`, exact `b(i,j)`, approximate `c(i,j)` |
//! | [`ramero`] | [`RameroFunctions`]: Ramero's `e`, `w`, `r`, `m` over multi-degrees |
//! | [`identity`] | both sides of the polynomial identity in Remark 2.13 |
//!
//! All values are exact [`num_bigint::BigInt`]s or
//! [`num_rational::BigRational`]s. Only `c(i,j)` and the logarithmic sanity
//! bounds use `f64`, matching the approximations in the paper.
//!
//! # Example
//!
//! ```
//! use num_bigint::BigInt;
//! use unirat_foundation::{dimensions, CoefficientTable, MultiplicitySequence};
//!
//! let quintic = MultiplicitySequence::from_degree(5, 1).unwrap();
//! assert_eq!(dimensions::n_min(&quintic).unwrap(), BigInt::from(22));
//!
//! let mut table = CoefficientTable::new();
//! assert_eq!(table.m(5, 0).unwrap(), BigInt::from(11));
//! ```

pub mod arith;
pub mod dimensions;
pub mod error;
pub mod identity;
pub mod multiplicity;
pub mod power_series;
pub mod ramero;

pub use error::{Error, Result};
pub use multiplicity::MultiplicitySequence;
pub use power_series::CoefficientTable;
pub use ramero::RameroFunctions;
