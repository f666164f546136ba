//! Recurring work/rest calendar cycles.
//!
//! A [`CycleConfig`] describes a pattern of `work_weeks` work weeks followed by
//! `rest_weeks` rest weeks (6+1 by default), anchored on a start date.
//! [`generate_year_blocks`] lays that pattern over a calendar year as one
//! [`Block`] per week, and the functions in [`query`] answer point and
//! aggregate questions about the result.
//!
//! ```
//! use chrono::NaiveDate;
//! use cycle_calendar::{CycleConfig, Year, generate_year_blocks, query};
//!
//! let anchor = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
//! let config = CycleConfig::six_plus_one(anchor);
//! let blocks = generate_year_blocks(&config, Year::new(2026).unwrap()).unwrap();
//!
//! let day = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
//! assert!(query::is_rest_week(day, &blocks));
//! ```

mod block;
mod calendar;
mod config;
mod consts;
mod generator;
mod naming;
mod prelude;
pub mod query;
mod types;

#[cfg(test)]
mod test_utils;

pub use block::{Block, BlockType};
pub use calendar::YearCalendar;
pub use config::CycleConfig;
pub use consts::*;
pub use generator::generate_year_blocks;
pub use naming::{CycleNameStore, CycleNames};
pub use query::{
    BlockFilter, CycleGroup, count_distinct_cycles, cycle_number_for_date, filter_by_cycle, filter_by_type,
    find_block_for_date, is_rest_week, is_work_week,
};
pub use types::{WeekCount, WeekStart, Year};

/// Errors raised while building configurations or generating blocks.
///
/// Failed lookups are not errors; queries return `None` or an empty list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CycleError {
    /// A cycle needs at least one work week and one rest week.
    #[error("Invalid configuration: {work_weeks} work + {rest_weeks} rest weeks (both must be at least 1)")]
    InvalidConfiguration { work_weeks: u16, rest_weeks: u16 },

    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(u16),

    #[error(
        "Invalid week start: {0} (must be {sunday} for Sunday or {monday} for Monday)",
        sunday = SUNDAY_CODE,
        monday = MONDAY_CODE
    )]
    InvalidWeekStart(u8),

    /// Date arithmetic left the representable range.
    #[error("Date out of range")]
    DateOutOfRange,
}
