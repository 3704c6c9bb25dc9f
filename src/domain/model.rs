use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Position parity of a line, counted from 1.
/// Odd lines go to sink A, even lines to sink B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    /// `position` is 1-based.
    pub fn of_position(position: usize) -> Self {
        if position % 2 == 1 {
            Parity::Odd
        } else {
            Parity::Even
        }
    }

    /// `index` is 0-based.
    pub fn of_index(index: usize) -> Self {
        Self::of_position(index + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchJob {
    pub input: PathBuf,
    pub sink_a: PathBuf,
    pub sink_b: PathBuf,
}

impl BatchJob {
    pub fn new(
        input: impl Into<PathBuf>,
        sink_a: impl Into<PathBuf>,
        sink_b: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input: input.into(),
            sink_a: sink_a.into(),
            sink_b: sink_b.into(),
        }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn sink_a(&self) -> &Path {
        &self.sink_a
    }

    pub fn sink_b(&self) -> &Path {
        &self.sink_b
    }
}

/// Sinks are truncated on open, so neither may be the input (or each other).
impl Validate for BatchJob {
    fn validate(&self) -> Result<()> {
        validate_path("job.input", &self.input)?;
        validate_path("job.sink_a", &self.sink_a)?;
        validate_path("job.sink_b", &self.sink_b)?;

        validate_distinct_paths("job.sink_a", &self.sink_a, &[("job.input", &self.input)])?;
        validate_distinct_paths(
            "job.sink_b",
            &self.sink_b,
            &[("job.input", &self.input), ("job.sink_a", &self.sink_a)],
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionCounts {
    /// Non-empty lines read from the input.
    pub lines_read: usize,
    /// Empty segments dropped while splitting.
    pub blank_skipped: usize,
    pub sink_a_lines: usize,
    pub sink_b_lines: usize,
}

impl DistributionCounts {
    pub fn record(&mut self, parity: Parity) {
        self.lines_read += 1;
        match parity {
            Parity::Odd => self.sink_a_lines += 1,
            Parity::Even => self.sink_b_lines += 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionReport {
    pub job: BatchJob,
    pub counts: DistributionCounts,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u64,
}
