//! Per-run skip statistics.
//!
//! Counts why lines were skipped during one pipeline run. The stats are owned
//! by the run that produced them and returned inside its report.

use std::collections::HashMap;

use log::info;
use strum::IntoEnumIterator;

use super::types::SkipReason;

/// Skip counters for one ingestion run.
///
/// Every [`SkipReason`] is initialized to zero on creation so lookups never
/// miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestStats {
    skips: HashMap<SkipReason, usize>,
}

impl Default for IngestStats {
    fn default() -> Self {
        Self::new()
    }
}

impl IngestStats {
    /// Creates stats with every reason at zero.
    pub fn new() -> Self {
        let skips = SkipReason::iter().map(|reason| (reason, 0)).collect();
        IngestStats { skips }
    }

    /// Increment the counter for `reason`.
    pub fn record_skip(&mut self, reason: SkipReason) {
        *self.skips.entry(reason).or_insert(0) += 1;
    }

    /// Get the count for a skip reason.
    pub fn skip_count(&self, reason: SkipReason) -> usize {
        self.skips.get(&reason).copied().unwrap_or(0)
    }

    /// Get total skip count across all reasons.
    pub fn total_skips(&self) -> usize {
        SkipReason::iter().map(|r| self.skip_count(r)).sum()
    }

    /// Logs a breakdown of non-zero skip counters.
    pub fn log_summary(&self) {
        let total = self.total_skips();
        if total == 0 {
            return;
        }
        info!("Skipped {} malformed line(s):", total);
        for reason in SkipReason::iter() {
            let count = self.skip_count(reason);
            if count > 0 {
                info!("   {}: {}", reason, count);
            }
        }
    }
}
