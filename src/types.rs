use crate::CycleError;
use crate::consts::{JANUARY, MAX_YEAR, MIN_DAY, MIN_YEAR, MONDAY_CODE, SUNDAY_CODE};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `CycleError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, CycleError> {
        let non_zero = NonZeroU16::new(value).ok_or(CycleError::InvalidYear(value))?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(CycleError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// First day of the year, the inclusive lower bound of its blocks.
    ///
    /// # Errors
    /// Returns `CycleError::DateOutOfRange` if the date is not representable.
    pub fn first_day(self) -> Result<NaiveDate, CycleError> {
        NaiveDate::from_ymd_opt(i32::from(self.get()), JANUARY, MIN_DAY).ok_or(CycleError::DateOutOfRange)
    }

    /// First day of the following year, the exclusive upper bound of its blocks.
    ///
    /// # Errors
    /// Returns `CycleError::DateOutOfRange` if the date is not representable.
    pub fn end_exclusive(self) -> Result<NaiveDate, CycleError> {
        NaiveDate::from_ymd_opt(i32::from(self.get()) + 1, JANUARY, MIN_DAY).ok_or(CycleError::DateOutOfRange)
    }
}

impl TryFrom<u16> for Year {
    type Error = CycleError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A count of weeks guaranteed to be at least one.
///
/// Only [`CycleConfig`](crate::CycleConfig) builds these from raw input, so a
/// zero count always surfaces as `CycleError::InvalidConfiguration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u16")]
pub struct WeekCount(NonZeroU16);

impl WeekCount {
    /// Creates a new `WeekCount`, returning `None` for zero
    pub const fn new(value: u16) -> Option<Self> {
        match NonZeroU16::new(value) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    #[inline]
    pub const fn get_non_zero(self) -> NonZeroU16 {
        self.0
    }
}

impl From<WeekCount> for u16 {
    fn from(count: WeekCount) -> Self {
        count.0.get()
    }
}

impl fmt::Display for WeekCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The weekday a week begins on.
/// Serialized as `0` (Sunday) or `1` (Monday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum WeekStart {
    #[display(fmt = "Sunday")]
    Sunday,
    #[default]
    #[display(fmt = "Monday")]
    Monday,
}

impl WeekStart {
    /// The chrono weekday this variant stands for
    pub const fn weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }

    /// Days between the start of the week containing `date` and `date` itself.
    pub fn offset_of(self, date: NaiveDate) -> u32 {
        date.weekday().days_since(self.weekday())
    }

    /// First day of the week containing `date`.
    ///
    /// # Errors
    /// Returns `CycleError::DateOutOfRange` if that day precedes the earliest
    /// representable date.
    pub fn start_of_week(self, date: NaiveDate) -> Result<NaiveDate, CycleError> {
        date.checked_sub_signed(Duration::days(i64::from(self.offset_of(date))))
            .ok_or(CycleError::DateOutOfRange)
    }
}

impl TryFrom<u8> for WeekStart {
    type Error = CycleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            SUNDAY_CODE => Ok(Self::Sunday),
            MONDAY_CODE => Ok(Self::Monday),
            other => Err(CycleError::InvalidWeekStart(other)),
        }
    }
}

impl From<WeekStart> for u8 {
    fn from(start: WeekStart) -> Self {
        match start {
            WeekStart::Sunday => SUNDAY_CODE,
            WeekStart::Monday => MONDAY_CODE,
        }
    }
}
