use chrono::Months;

use crate::prelude::*;
use crate::query::{self, BlockFilter, CycleGroup};
use crate::{Block, CycleConfig, CycleError, Year, generate_year_blocks};

/// Blocks for one `(config, year)` pair, generated once and queried many
/// times. Regenerate by building a new `YearCalendar`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCalendar {
    config:       CycleConfig,
    year:         Year,
    blocks:       Vec<Block>,
    total_cycles: usize,
}

impl YearCalendar {
    /// # Errors
    /// Propagates `CycleError` from block generation.
    pub fn new(config: CycleConfig, year: Year) -> Result<Self, CycleError> {
        let blocks = generate_year_blocks(&config, year)?;
        let total_cycles = query::count_distinct_cycles(&blocks);
        Ok(Self {
            config,
            year,
            blocks,
            total_cycles,
        })
    }

    pub const fn config(&self) -> &CycleConfig {
        &self.config
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub const fn total_cycles(&self) -> usize {
        self.total_cycles
    }

    pub fn block_for_date(&self, date: NaiveDate) -> Option<&Block> {
        query::find_block_for_date(date, &self.blocks)
    }

    /// Block containing `today`; the caller supplies the clock.
    pub fn current_block(&self, today: NaiveDate) -> Option<&Block> {
        self.block_for_date(today)
    }

    pub fn is_work_week(&self, date: NaiveDate) -> bool {
        query::is_work_week(date, &self.blocks)
    }

    pub fn is_rest_week(&self, date: NaiveDate) -> bool {
        query::is_rest_week(date, &self.blocks)
    }

    pub fn filtered(&self, filter: &BlockFilter) -> Vec<Block> {
        filter.apply(&self.blocks)
    }

    pub fn cycles(&self) -> Vec<CycleGroup<'_>> {
        query::group_by_cycle(&self.blocks)
    }

    /// Cycle numbers touching the given month, for month-grid legends.
    /// Returns an empty list for an invalid month.
    pub fn cycles_in_month(&self, month: u32) -> Vec<u32> {
        let from = NaiveDate::from_ymd_opt(i32::from(self.year.get()), month, 1);
        let to = from.and_then(|from| from.checked_add_months(Months::new(1)));
        match from.zip(to) {
            Some((from, to)) => query::cycles_in_range(&self.blocks, from, to),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BlockType;
    use crate::test_utils::{blocks_2026, date, six_plus_one_2026, year};

    fn calendar() -> YearCalendar {
        YearCalendar::new(six_plus_one_2026(), year(2026)).expect("valid calendar")
    }

    #[test]
    fn test_matches_free_functions() {
        let cal = calendar();
        assert_eq!(cal.blocks(), blocks_2026().as_slice());
        assert_eq!(cal.total_cycles(), 8);
        assert_eq!(cal.year(), year(2026));
        assert_eq!(cal.config(), &six_plus_one_2026());
    }

    #[test]
    fn test_date_queries() {
        let cal = calendar();
        let today = date(2026, 2, 10);

        let current = cal.current_block(today).expect("today is in 2026");
        assert_eq!(current.block_type(), BlockType::Rest);
        assert!(cal.is_rest_week(today));
        assert!(!cal.is_work_week(today));
        assert!(cal.block_for_date(date(2030, 1, 1)).is_none());
    }

    #[test]
    fn test_filtered_and_cycles() {
        let cal = calendar();
        let rest = cal.filtered(&BlockFilter::all().with_type(BlockType::Rest));
        assert_eq!(rest.len(), 7);

        let cycles = cal.cycles();
        assert_eq!(cycles.len(), cal.total_cycles());
    }

    #[test]
    fn test_cycles_in_month() {
        let cal = calendar();
        assert_eq!(cal.cycles_in_month(1), vec![1]);
        assert_eq!(cal.cycles_in_month(2), vec![1, 2]);
        assert_eq!(cal.cycles_in_month(12), vec![7, 8]);
        assert!(cal.cycles_in_month(13).is_empty());
        assert!(cal.cycles_in_month(0).is_empty());
    }
}
