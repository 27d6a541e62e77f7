//! Registration progress indicator

use super::forms::ProgressSink;

/// Percentage shown before the registration step is done
pub const INITIAL_PROGRESS_PERCENT: u16 = 33;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressIndicator {
    percent: u16,
}

impl ProgressIndicator {
    pub fn percent(&self) -> u16 {
        self.percent
    }

    /// Ratio for gauge widgets
    pub fn ratio(&self) -> f64 {
        f64::from(self.percent) / 100.0
    }
}

impl Default for ProgressIndicator {
    fn default() -> Self {
        Self {
            percent: INITIAL_PROGRESS_PERCENT,
        }
    }
}

impl ProgressSink for ProgressIndicator {
    fn set_percent(&mut self, percent: u16) {
        self.percent = percent.min(100);
    }
}
