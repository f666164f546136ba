//! Cycle configuration
//!
//! Describes the repeating "N work weeks + M rest weeks" pattern and the date
//! it is anchored on.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ANCHOR_YEAR, DEFAULT_REST_WEEKS, DEFAULT_WORK_WEEKS, JANUARY, MIN_DAY};
use crate::prelude::*;
use crate::{CycleError, WeekCount, WeekStart};

/// Immutable description of a repeating work/rest pattern.
///
/// Every instance is valid: both week counts are at least one, so a cycle
/// always has a work period and a rest period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawCycleConfig")]
pub struct CycleConfig {
    cycle_start_date: NaiveDate,
    work_weeks:       WeekCount,
    rest_weeks:       WeekCount,
    week_starts_on:   WeekStart,
}

/// Wire shape of [`CycleConfig`] before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCycleConfig {
    cycle_start_date: NaiveDate,
    #[serde(default = "default_work_count")]
    work_weeks:       u16,
    #[serde(default = "default_rest_count")]
    rest_weeks:       u16,
    #[serde(default)]
    week_starts_on:   WeekStart,
}

impl TryFrom<RawCycleConfig> for CycleConfig {
    type Error = CycleError;

    fn try_from(raw: RawCycleConfig) -> Result<Self, Self::Error> {
        Self::new(raw.cycle_start_date, raw.work_weeks, raw.rest_weeks, raw.week_starts_on)
    }
}

const fn default_work_count() -> u16 {
    DEFAULT_WORK_WEEKS
}

const fn default_rest_count() -> u16 {
    DEFAULT_REST_WEEKS
}

const fn default_work_weeks() -> WeekCount {
    match WeekCount::new(DEFAULT_WORK_WEEKS) {
        Some(count) => count,
        None => panic!("default work weeks must be non-zero"),
    }
}

const fn default_rest_weeks() -> WeekCount {
    match WeekCount::new(DEFAULT_REST_WEEKS) {
        Some(count) => count,
        None => panic!("default rest weeks must be non-zero"),
    }
}

impl CycleConfig {
    /// Creates a configuration, validating both week counts.
    ///
    /// # Errors
    /// Returns `CycleError::InvalidConfiguration` if `work_weeks` or
    /// `rest_weeks` is zero.
    pub fn new(
        cycle_start_date: NaiveDate,
        work_weeks: u16,
        rest_weeks: u16,
        week_starts_on: WeekStart,
    ) -> Result<Self, CycleError> {
        match (WeekCount::new(work_weeks), WeekCount::new(rest_weeks)) {
            (Some(work), Some(rest)) => Ok(Self {
                cycle_start_date,
                work_weeks: work,
                rest_weeks: rest,
                week_starts_on,
            }),
            _ => {
                log::warn!("rejecting cycle configuration {work_weeks}+{rest_weeks}: both counts must be positive");
                Err(CycleError::InvalidConfiguration { work_weeks, rest_weeks })
            },
        }
    }

    /// Default 6+1 pattern with Monday weeks, anchored on `cycle_start_date`.
    pub const fn six_plus_one(cycle_start_date: NaiveDate) -> Self {
        Self {
            cycle_start_date,
            work_weeks: default_work_weeks(),
            rest_weeks: default_rest_weeks(),
            week_starts_on: WeekStart::Monday,
        }
    }

    pub const fn cycle_start_date(&self) -> NaiveDate {
        self.cycle_start_date
    }

    pub const fn work_weeks(&self) -> u16 {
        self.work_weeks.get()
    }

    pub const fn rest_weeks(&self) -> u16 {
        self.rest_weeks.get()
    }

    pub const fn week_starts_on(&self) -> WeekStart {
        self.week_starts_on
    }

    /// Total weeks in one cycle (`work_weeks + rest_weeks`)
    pub fn cycle_length(&self) -> NonZeroU32 {
        let work = NonZeroU32::from(self.work_weeks.get_non_zero());
        work.saturating_add(u32::from(self.rest_weeks.get()))
    }

    /// Returns a copy anchored on a different date
    #[must_use]
    pub fn with_cycle_start_date(mut self, cycle_start_date: NaiveDate) -> Self {
        self.cycle_start_date = cycle_start_date;
        self
    }

    /// Returns a copy whose weeks begin on `week_starts_on`
    #[must_use]
    pub fn with_week_starts_on(mut self, week_starts_on: WeekStart) -> Self {
        self.week_starts_on = week_starts_on;
        self
    }
}

impl Default for CycleConfig {
    fn default() -> Self {
        let anchor = NaiveDate::from_ymd_opt(DEFAULT_ANCHOR_YEAR, JANUARY, MIN_DAY).unwrap_or_default();
        Self::six_plus_one(anchor)
    }
}
