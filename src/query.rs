//! Queries over generated blocks
//!
//! All functions take blocks in generation order and never reorder them.
//! "No match" is `None` or an empty `Vec`, never an error.

use std::collections::BTreeSet;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::{Block, BlockType};

/// Returns the block whose `[start, end)` contains `date`.
pub fn find_block_for_date(date: NaiveDate, blocks: &[Block]) -> Option<&Block> {
    blocks.iter().find(|block| block.contains(date))
}

/// Projects `date` onto the cycle grid starting at `cycle_start_date`,
/// without consulting any generated blocks.
///
/// Whole weeks elapsed are truncated toward zero, then divided by the cycle
/// length rounding down. Dates before `cycle_start_date` can yield values
/// `<= 0`; such cycles never appear in generated output.
pub fn cycle_number_for_date(date: NaiveDate, cycle_start_date: NaiveDate, cycle_length: NonZeroU32) -> i64 {
    let weeks = (date - cycle_start_date).num_weeks();
    weeks.div_euclid(i64::from(cycle_length.get())) + 1
}

pub fn filter_by_type(blocks: &[Block], block_type: BlockType) -> Vec<Block> {
    blocks.iter().filter(|b| b.block_type() == block_type).copied().collect()
}

pub fn filter_by_cycle(blocks: &[Block], cycle_number: u32) -> Vec<Block> {
    blocks.iter().filter(|b| b.cycle_number() == cycle_number).copied().collect()
}

/// Number of distinct cycle numbers among `blocks`
pub fn count_distinct_cycles(blocks: &[Block]) -> usize {
    blocks.iter().map(Block::cycle_number).collect::<BTreeSet<_>>().len()
}

pub fn is_work_week(date: NaiveDate, blocks: &[Block]) -> bool {
    find_block_for_date(date, blocks).is_some_and(Block::is_work)
}

pub fn is_rest_week(date: NaiveDate, blocks: &[Block]) -> bool {
    find_block_for_date(date, blocks).is_some_and(Block::is_rest)
}

/// Sorted distinct cycle numbers of blocks overlapping `[from, to)`
pub fn cycles_in_range(blocks: &[Block], from: NaiveDate, to: NaiveDate) -> Vec<u32> {
    blocks
        .iter()
        .filter(|b| b.overlaps(from, to))
        .map(Block::cycle_number)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Consecutive blocks sharing one cycle number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleGroup<'a> {
    pub cycle_number: u32,
    pub blocks:       &'a [Block],
}

impl CycleGroup<'_> {
    /// First day of the cycle's first in-range block
    pub fn start(&self) -> Option<NaiveDate> {
        self.blocks.first().map(Block::start)
    }

    /// Exclusive end of the cycle's last in-range block
    pub fn end(&self) -> Option<NaiveDate> {
        self.blocks.last().map(Block::end)
    }

    pub fn rest_block(&self) -> Option<&Block> {
        self.blocks.iter().find(|b| b.is_rest())
    }
}

/// Splits `blocks` into runs of equal cycle number, in input order.
pub fn group_by_cycle(blocks: &[Block]) -> Vec<CycleGroup<'_>> {
    blocks
        .chunk_by(|a, b| a.cycle_number() == b.cycle_number())
        .map(|run| CycleGroup {
            cycle_number: run[0].cycle_number(),
            blocks:       run,
        })
        .collect()
}

/// Optional type and cycle criteria; `None` means "all".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_type:   Option<BlockType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_number: Option<u32>,
}

impl BlockFilter {
    pub const fn all() -> Self {
        Self {
            block_type:   None,
            cycle_number: None,
        }
    }

    #[must_use]
    pub fn with_type(mut self, block_type: BlockType) -> Self {
        self.block_type = Some(block_type);
        self
    }

    #[must_use]
    pub fn with_cycle(mut self, cycle_number: u32) -> Self {
        self.cycle_number = Some(cycle_number);
        self
    }

    pub fn matches(&self, block: &Block) -> bool {
        self.block_type.is_none_or(|t| block.block_type() == t)
            && self.cycle_number.is_none_or(|c| block.cycle_number() == c)
    }

    /// Blocks that satisfy every set criterion, in their original order.
    pub fn apply(&self, blocks: &[Block]) -> Vec<Block> {
        blocks.iter().filter(|b| self.matches(b)).copied().collect()
    }
}
