//! Shared fixtures for unit tests.

use crate::prelude::*;
use crate::{Block, CycleConfig, Year, generate_year_blocks};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture date must be valid")
}

pub fn year(y: u16) -> Year {
    Year::new(y).expect("fixture year must be valid")
}

/// 6+1 with Monday weeks, anchored on Thursday 2026-01-01
pub fn six_plus_one_2026() -> CycleConfig {
    CycleConfig::six_plus_one(date(2026, 1, 1))
}

pub fn blocks_2026() -> Vec<Block> {
    generate_year_blocks(&six_plus_one_2026(), year(2026)).expect("fixture generation must succeed")
}
