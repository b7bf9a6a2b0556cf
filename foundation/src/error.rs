//! Error type shared by every engine module.

use thiserror::Error;

/// Errors raised by the numeric engine.
///
/// All of them are fatal for the computation that raised them: the engine
/// never retries or substitutes a fallback value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A function was called outside its documented input domain.
    #[error("{function} is undefined here: {reason}")]
    Domain {
        /// Name of the function that rejected its arguments.
        function: &'static str,
        /// Which precondition was violated.
        reason: String,
    },

    /// A rational number was constructed with a zero denominator.
    #[error("division by zero")]
    DivisionByZero,

    /// A recurrence that must produce integers produced a proper fraction.
    #[error("{function} produced the non-integral value {value}")]
    NotIntegral {
        /// Name of the recurrence.
        function: &'static str,
        /// The offending value, rendered as `p/q`.
        value: String,
    },

    /// A multiplicity entry left the `i64` range.
    #[error("multiplicity overflow while computing {0}")]
    Overflow(&'static str),

    /// The penta walk reached a non-linear sequence ending in a negative
    /// entry, after the given number of steps.
    #[error("penta walk left the non-negative sequences after {0} steps")]
    NoFixedPoint(usize),

    /// A floating-point approximation overflowed or was not a number.
    #[error("{0} is not representable as a finite f64")]
    NotFinite(&'static str),
}

impl Error {
    pub(crate) fn domain(function: &'static str, reason: impl Into<String>) -> Self {
        Self::Domain {
            function,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, Error>;
