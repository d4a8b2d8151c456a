//! Error types for the urlaub engine.
//!
//! A single `thiserror`-derived enum covers every failure that is a
//! programming or input error. Domain rejections (a blocked period, an
//! overlapping request, an exhausted budget) are *not* errors; they are
//! returned as values by the ledger crate.

use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error (raised by `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error: unparsable string, impossible day, year out of range.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument, e.g. an unknown status string from storage.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The engine configuration could not be read or is inconsistent.
    #[error("configuration error: {0}")]
    Config(String),

    /// A record the caller asked for does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A request lifecycle transition that is not allowed.
    #[error("invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
    },
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use urlaub_core::{ensure, errors::Error};
/// fn positive(x: i64) -> urlaub_core::errors::Result<i64> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use urlaub_core::{fail, errors::Error};
/// fn always_err() -> urlaub_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
