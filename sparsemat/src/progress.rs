//! Progress observer that reports through `tracing`

use sparsemat_core::ProgressObserver;
use tracing::info;

/// Logs completion of a long-running operation as `info` events
#[derive(Debug, Clone)]
pub struct LogProgress {
    label: String,
    steps: u32,
    reports: usize,
}

impl LogProgress {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            steps: 10,
            reports: 0,
        }
    }

    /// Set the maximum number of intermediate reports
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    /// Number of reports received so far
    pub fn reports(&self) -> usize {
        self.reports
    }
}

impl ProgressObserver for LogProgress {
    fn on_progress(&mut self, fraction: f64) {
        self.reports += 1;
        info!(
            operation = %self.label,
            percent = (fraction * 100.0).round() as u32,
            "progress"
        );
    }

    fn report_steps(&self) -> u32 {
        self.steps
    }
}
