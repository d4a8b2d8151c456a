//! Miscellaneous utilities.

/// Parsers for date strings as they arrive from storage and forms.
pub mod data_parsers;
