#[cfg(feature = "cli")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "cli")]
use std::time::Instant;
#[cfg(feature = "cli")]
use sysinfo::{Pid, ProcessesToUpdate, System};

/// Logs this process's CPU and resident memory at each phase of a batch run.
#[cfg(feature = "cli")]
pub struct SystemMonitor {
    // 未啟用時為 None, 不做任何系統掃描
    probe: Option<(RefCell<System>, Pid)>,
    started: Instant,
    peak_memory_mb: Cell<u64>,
}

#[cfg(feature = "cli")]
impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        let probe = if enabled {
            match sysinfo::get_current_pid() {
                Ok(pid) => Some((RefCell::new(System::new()), pid)),
                Err(e) => {
                    tracing::warn!("System monitoring unavailable: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Self {
            probe,
            started: Instant::now(),
            peak_memory_mb: Cell::new(0),
        }
    }

    /// Returns (cpu %, memory MB) for this process only.
    fn sample(&self) -> Option<(f32, u64)> {
        let (system, pid) = self.probe.as_ref()?;
        let mut system = system.borrow_mut();
        system.refresh_processes(ProcessesToUpdate::Some(&[*pid]), true);

        let process = system.process(*pid)?;
        let memory_mb = process.memory() / 1024 / 1024;
        self.peak_memory_mb.set(self.peak_memory_mb.get().max(memory_mb));
        Some((process.cpu_usage(), memory_mb))
    }

    pub fn log_stats(&self, phase: &str) {
        if let Some((cpu, memory_mb)) = self.sample() {
            tracing::info!(
                "📊 {} - CPU: {:.1}%, Memory: {}MB, Time: {:?}",
                phase,
                cpu,
                memory_mb,
                self.started.elapsed()
            );
        }
    }

    pub fn log_final_stats(&self) {
        if self.sample().is_some() {
            tracing::info!(
                "📊 Final Stats - Total Time: {:?}, Peak Memory: {}MB",
                self.started.elapsed(),
                self.peak_memory_mb.get()
            );
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.probe.is_some()
    }
}

// 為非CLI環境提供空實現
#[cfg(not(feature = "cli"))]
pub struct SystemMonitor;

#[cfg(not(feature = "cli"))]
impl SystemMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn log_stats(&self, _phase: &str) {}

    pub fn log_final_stats(&self) {}

    pub fn is_enabled(&self) -> bool {
        false
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_monitor_never_samples() {
        let monitor = SystemMonitor::new(false);
        assert!(!monitor.is_enabled());
        assert!(monitor.sample().is_none());
    }

    #[test]
    fn test_enabled_monitor_tracks_peak_memory() {
        let monitor = SystemMonitor::new(true);
        if !monitor.is_enabled() {
            return;
        }

        if let Some((_, memory_mb)) = monitor.sample() {
            assert!(monitor.peak_memory_mb.get() >= memory_mb);
        }
    }
}
