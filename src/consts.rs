/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;

/// Number of days in one week block
pub const DAYS_PER_WEEK: i64 = 7;

/// Consecutive work weeks per cycle when none is configured
pub const DEFAULT_WORK_WEEKS: u16 = 6;

/// Consecutive rest weeks per cycle when none is configured
pub const DEFAULT_REST_WEEKS: u16 = 1;

/// Week-start code for Sunday
pub const SUNDAY_CODE: u8 = 0;
/// Week-start code for Monday
pub const MONDAY_CODE: u8 = 1;

/// Month number for January
pub const JANUARY: u32 = 1;

/// First day of month
pub const MIN_DAY: u32 = 1;

/// Year the default configuration anchors on
pub const DEFAULT_ANCHOR_YEAR: i32 = 2026;

/// Label prefix used when a cycle has no custom name
pub const CYCLE_LABEL_PREFIX: &str = "Cycle";
