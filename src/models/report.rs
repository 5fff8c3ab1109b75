//! Run report
//!
//! Summary of a simulation, rendered as text or serialized to JSON.

use std::fmt;

use serde::Serialize;

use crate::cache::{LevelStats, Stats};

const RULE: &str = "..............................";

/// Counters and hit ratio for one section of the report.
#[derive(Debug, Clone, Serialize)]
pub struct SectionReport {
    /// Cache size in entries, absent for the global section
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    pub references: u64,
    pub hits: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evictions: Option<u64>,
    pub hit_ratio: f64,
}

impl SectionReport {
    fn level(size: usize, stats: &LevelStats) -> Self {
        Self {
            size: Some(size),
            references: stats.references,
            hits: stats.hits,
            evictions: Some(stats.evictions),
            hit_ratio: stats.hit_ratio(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    Single,
    TwoLevel,
}

/// Complete report for a simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub mode: RunMode,
    pub global: SectionReport,
    pub l1: SectionReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l2: Option<SectionReport>,
    /// Time the report was produced, in RFC 3339 format
    pub generated_at: String,
}

impl Report {
    /// Builds a report from run statistics and the configured sizes.
    pub fn new(stats: &Stats, l1_size: usize, l2_size: Option<usize>) -> Self {
        let l2 = match (stats.l2.as_ref(), l2_size) {
            (Some(l2_stats), Some(size)) => Some(SectionReport::level(size, l2_stats)),
            _ => None,
        };
        Self {
            mode: if l2.is_some() {
                RunMode::TwoLevel
            } else {
                RunMode::Single
            },
            global: SectionReport {
                size: None,
                references: stats.global_references(),
                hits: stats.global_hits(),
                evictions: None,
                hit_ratio: stats.global_hit_ratio(),
            },
            l1: SectionReport::level(l1_size, &stats.l1),
            l2,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RULE)?;
        match &self.l2 {
            None => {
                writeln!(f, "The number of references: {}", self.global.references)?;
                writeln!(f, "The number of cache hits: {}", self.global.hits)?;
                write!(f, "The hit ratio: {}", self.global.hit_ratio)
            }
            Some(l2) => {
                writeln!(f, "The number of global references: {}", self.global.references)?;
                writeln!(f, "The number of global cache hits: {}", self.global.hits)?;
                writeln!(f, "The global hit ratio: {}", self.global.hit_ratio)?;
                writeln!(f)?;
                writeln!(f, "The number of 1st-level references: {}", self.l1.references)?;
                writeln!(f, "The number of 1st-level cache hits: {}", self.l1.hits)?;
                writeln!(f, "The 1st-level hit ratio: {}", self.l1.hit_ratio)?;
                writeln!(f)?;
                writeln!(f, "The number of 2nd-level references: {}", l2.references)?;
                writeln!(f, "The number of 2nd-level cache hits: {}", l2.hits)?;
                write!(f, "The 2nd-level hit ratio: {}", l2.hit_ratio)
            }
        }
    }
}
