use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Work or rest designation of a week block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    #[display(fmt = "work")]
    Work,
    #[display(fmt = "rest")]
    Rest,
}

/// One week of a cycle, covering the half-open interval `[start, end)`.
///
/// `end` is the first day *not* in the block. Blocks at the edges of a
/// generated year may be clipped and cover fewer than seven days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{block_type} {cycle_number}.{week_in_cycle} [{start}, {end})")]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(rename = "type")]
    block_type:    BlockType,
    cycle_number:  u32,
    week_in_cycle: u32,
    start:         NaiveDate,
    end:           NaiveDate,
}

impl Block {
    pub(crate) const fn new(
        block_type: BlockType,
        cycle_number: u32,
        week_in_cycle: u32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        Self {
            block_type,
            cycle_number,
            week_in_cycle,
            start,
            end,
        }
    }

    pub const fn block_type(&self) -> BlockType {
        self.block_type
    }

    /// 1-indexed repetition of the pattern this block belongs to
    pub const fn cycle_number(&self) -> u32 {
        self.cycle_number
    }

    /// 1-indexed position inside the cycle; work weeks come first
    pub const fn week_in_cycle(&self) -> u32 {
        self.week_in_cycle
    }

    /// Inclusive first day
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Exclusive end, the first day after the block
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn is_work(&self) -> bool {
        self.block_type == BlockType::Work
    }

    pub fn is_rest(&self) -> bool {
        self.block_type == BlockType::Rest
    }

    /// Checks if `date` falls in `[start, end)`
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Checks if this block shares at least one day with `[from, to)`
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.start < to && from < self.end
    }

    /// Number of calendar days covered
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    fn sample() -> Block {
        Block::new(BlockType::Work, 1, 3, date(2026, 1, 12), date(2026, 1, 19))
    }

    #[test]
    fn test_accessors() {
        let block = sample();
        assert_eq!(block.block_type(), BlockType::Work);
        assert_eq!(block.cycle_number(), 1);
        assert_eq!(block.week_in_cycle(), 3);
        assert_eq!(block.start(), date(2026, 1, 12));
        assert_eq!(block.end(), date(2026, 1, 19));
        assert!(block.is_work());
        assert!(!block.is_rest());
        assert_eq!(block.days(), 7);
    }

    #[test]
    fn test_contains_is_half_open() {
        let block = sample();
        assert!(block.contains(date(2026, 1, 12)));
        assert!(block.contains(date(2026, 1, 18)));
        assert!(!block.contains(date(2026, 1, 19)));
        assert!(!block.contains(date(2026, 1, 11)));
    }

    #[test]
    fn test_overlaps() {
        let block = sample();
        assert!(block.overlaps(date(2026, 1, 1), date(2026, 2, 1)));
        assert!(block.overlaps(date(2026, 1, 18), date(2026, 1, 19)));
        assert!(!block.overlaps(date(2026, 1, 19), date(2026, 1, 26)));
        assert!(!block.overlaps(date(2026, 1, 5), date(2026, 1, 12)));
    }

    #[test]
    fn test_clipped_block_days() {
        let block = Block::new(BlockType::Work, 1, 1, date(2026, 1, 1), date(2026, 1, 5));
        assert_eq!(block.days(), 4);
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "work 1.3 [2026-01-12, 2026-01-19)");
        assert_eq!(BlockType::Rest.to_string(), "rest");
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_string(&sample()).expect("serialize block");
        assert_eq!(
            json,
            r#"{"type":"work","cycleNumber":1,"weekInCycle":3,"start":"2026-01-12","end":"2026-01-19"}"#
        );
        let parsed: Block = serde_json::from_str(&json).expect("deserialize block");
        assert_eq!(parsed, sample());
    }
}
