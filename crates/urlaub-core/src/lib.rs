//! # urlaub-core
//!
//! Core types, identifiers, and error definitions for the vacation-day
//! accounting engine.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace: the error hierarchy with its `ensure!` /
//! `fail!` macros, the opaque employee and request identifiers, and the
//! string parsers used to read calendar dates from storage.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Opaque identifiers (`EmployeeId`, `RequestId`).
pub mod ids;

/// Miscellaneous utilities.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A calendar year (Gregorian).
pub type Year = i32;

/// A count of whole days (working days, entitlement, carry-over).
pub type Days = u32;

/// A signed day balance; negative values signal over-commitment.
pub type DayBalance = i64;

/// A utilisation level in whole percent.
pub type Percent = u32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use ids::{EmployeeId, RequestId};
