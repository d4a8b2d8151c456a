//! Concrete calendar implementations.

/// The fixed German holiday set.
pub mod germany;

/// Calendar driven by configured [`HolidayRule`](crate::holiday::HolidayRule)s.
pub mod rule_calendar;
