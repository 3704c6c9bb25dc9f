use crate::adapters::{FileLineSink, FileLineSource};
use crate::core::distributor::distribute;
use crate::domain::model::{BatchJob, DistributionReport};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use crate::utils::validation::Validate;
use chrono::Utc;
use std::path::Path;
use std::time::Instant;

pub struct BatchEngine {
    monitor: SystemMonitor,
}

impl BatchEngine {
    pub fn new() -> Self {
        Self::new_with_monitoring(false)
    }

    pub fn new_with_monitoring(monitor_enabled: bool) -> Self {
        Self {
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn run(&self, job: &BatchJob) -> Result<DistributionReport> {
        job.validate()?;

        let started_at = Utc::now();
        let timer = Instant::now();

        tracing::info!(
            "🚀 Distributing {} -> A: {}, B: {}",
            job.input().display(),
            job.sink_a().display(),
            job.sink_b().display()
        );
        self.monitor.log_stats("Start");

        // 先讀完輸入檔再開輸出檔, 輸入不存在時不要截斷既有的輸出檔
        let mut source = FileLineSource::open(job.input())?;
        let mut sink_a = FileLineSink::create(job.sink_a())?;
        let mut sink_b = FileLineSink::create(job.sink_b())?;

        let counts = distribute(&mut source, &mut sink_a, &mut sink_b)?;
        self.monitor.log_stats("Distribute");

        tracing::info!(
            "✅ {} lines: {} -> {}, {} -> {}",
            counts.lines_read,
            counts.sink_a_lines,
            job.sink_a().display(),
            counts.sink_b_lines,
            job.sink_b().display()
        );
        if counts.blank_skipped > 0 {
            tracing::debug!("Dropped {} blank lines", counts.blank_skipped);
        }
        self.monitor.log_final_stats();

        Ok(DistributionReport {
            job: job.clone(),
            counts,
            started_at,
            elapsed_ms: timer.elapsed().as_millis() as u64,
        })
    }

    pub fn is_monitoring(&self) -> bool {
        self.monitor.is_enabled()
    }
}

impl Default for BatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Distributes `input` into `sink_a` (odd lines) and `sink_b` (even lines).
pub fn process_batch(
    input: impl AsRef<Path>,
    sink_a: impl AsRef<Path>,
    sink_b: impl AsRef<Path>,
) -> Result<DistributionReport> {
    let job = BatchJob::new(input.as_ref(), sink_a.as_ref(), sink_b.as_ref());
    BatchEngine::new().run(&job)
}
