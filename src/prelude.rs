//! Prelude module for the cycle_calendar crate.
//!
//! Re-exports the derive_more Display macro and the chrono types every
//! module works in.

#[allow(unused_imports)]
pub use chrono::{Datelike, Duration, NaiveDate, Weekday};
#[allow(unused_imports)]
pub use derive_more::Display;
