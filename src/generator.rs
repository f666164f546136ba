//! Block generation
//!
//! Walks the configured pattern week by week across a calendar year and emits
//! one [`Block`] per week that overlaps the year, clipped to the year's bounds.

use crate::consts::DAYS_PER_WEEK;
use crate::prelude::*;
use crate::{Block, BlockType, CycleConfig, CycleError, Year};

/// Generates the ordered week blocks covering `year`.
///
/// The anchor is the start of the week containing the configured cycle start
/// date. An anchor after January 1st is rewound in whole cycles until it is on
/// or before it, so a cycle that began in the previous year contributes its
/// in-year weeks. Cycle numbers count from 1 at the (possibly rewound) anchor.
///
/// The returned blocks tile `[Jan 1, Jan 1 of the next year)` without gaps or
/// overlaps, in chronological order.
///
/// # Errors
/// Returns `CycleError::DateOutOfRange` if the anchor cannot be moved to the
/// year without leaving chrono's representable dates.
pub fn generate_year_blocks(config: &CycleConfig, year: Year) -> Result<Vec<Block>, CycleError> {
    let year_start = year.first_day()?;
    let year_end = year.end_exclusive()?;

    let work_weeks = u32::from(config.work_weeks());
    let cycle_weeks = config.cycle_length().get();
    let cycle_days = i64::from(cycle_weeks) * DAYS_PER_WEEK;

    let anchor = config.week_starts_on().start_of_week(config.cycle_start_date())?;
    let mut cursor = rewind(anchor, year_start, cycle_days)?;

    // Cycles that end on or before January 1st contribute nothing; step over
    // them in one jump but keep counting them.
    let skipped = (year_start - cursor).num_days() / cycle_days;
    cursor = add_days(cursor, skipped * cycle_days)?;
    let mut cycle_number = u32::try_from(skipped + 1).map_err(|_| CycleError::DateOutOfRange)?;
    log::trace!("generation for {year} starts at {cursor} in cycle {cycle_number} (anchor {anchor})");

    let mut blocks = Vec::new();

    while cursor < year_end {
        for week_in_cycle in 1..=cycle_weeks {
            if cursor >= year_end {
                break;
            }
            let week_end = add_days(cursor, DAYS_PER_WEEK)?;
            if week_end > year_start {
                let block_type = if week_in_cycle <= work_weeks {
                    BlockType::Work
                } else {
                    BlockType::Rest
                };
                blocks.push(Block::new(
                    block_type,
                    cycle_number,
                    week_in_cycle,
                    cursor.max(year_start),
                    week_end.min(year_end),
                ));
            }
            cursor = week_end;
        }
        cycle_number = cycle_number.saturating_add(1);
    }

    log::debug!(
        "generated {} blocks in {} cycles for {year} ({}+{} from {}, weeks start {})",
        blocks.len(),
        blocks.first().zip(blocks.last()).map_or(0, |(f, l)| l.cycle_number() - f.cycle_number() + 1),
        config.work_weeks(),
        config.rest_weeks(),
        config.cycle_start_date(),
        config.week_starts_on(),
    );

    Ok(blocks)
}

/// Moves `anchor` back in whole cycles until it is no later than `year_start`.
/// An anchor already on or before `year_start` is returned unchanged.
fn rewind(anchor: NaiveDate, year_start: NaiveDate, cycle_days: i64) -> Result<NaiveDate, CycleError> {
    if anchor <= year_start {
        return Ok(anchor);
    }
    let ahead = (anchor - year_start).num_days();
    let cycles = (ahead + cycle_days - 1) / cycle_days;
    log::trace!("rewinding anchor {anchor} by {cycles} cycles");
    add_days(anchor, -cycles * cycle_days)
}

fn add_days(date: NaiveDate, days: i64) -> Result<NaiveDate, CycleError> {
    date.checked_add_signed(Duration::days(days))
        .ok_or(CycleError::DateOutOfRange)
}
