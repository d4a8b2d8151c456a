//! # urlaub
//!
//! A vacation-day accounting engine for a German-language leave planner.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `urlaub-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! urlaub = "0.1"
//! ```
//!
//! ```rust
//! use urlaub::time::{Calendar, Date, Germany};
//!
//! // Mon 10.06. .. Sat 15.06.2024: Saturdays are working days
//! let start = Date::from_ymd(2024, 6, 10).unwrap();
//! let end = Date::from_ymd(2024, 6, 15).unwrap();
//! assert_eq!(Germany.count_working_days(start, end), 6);
//! ```
//!
//! A whole submission, from configuration to stored request:
//!
//! ```rust
//! use chrono::Utc;
//! use urlaub::ledger::{Candidate, Engine, EngineConfig, InMemoryStore};
//! use urlaub::time::Date;
//!
//! let engine = Engine::from_config(EngineConfig::from_json_str("{}").unwrap()).unwrap();
//! let mut store = InMemoryStore::new();
//! let candidate = Candidate::new(
//!     7u32,
//!     Date::from_ymd(2025, 12, 10).unwrap(),
//!     Date::from_ymd(2025, 12, 12).unwrap(),
//! );
//! let verdict = engine.submit(&mut store, 1u32, &candidate, None, Utc::now()).unwrap();
//! assert!(verdict.rejection().unwrap().reason().contains("Dezember"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Errors, identifiers, and shared aliases.
pub use urlaub_core as core;

/// Dates, Easter, holiday calendars, and working-day counting.
pub use urlaub_time as time;

/// Requests, budgets, blocked periods, and coverage status.
pub use urlaub_ledger as ledger;
