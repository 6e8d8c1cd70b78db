//! Per-batch processing statistics

/// Accounting for one batch run.
///
/// Each orchestrator owns exactly one instance per run and returns it to
/// the caller; nothing here is shared or static, so independent batches
/// can run side by side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    /// Items eligible for processing, counted before the run starts
    pub total: usize,
    /// Items whose artifact was written
    pub successful: usize,
    /// Items that recorded a failure
    pub failed: usize,
    /// Human-readable failure descriptions, in occurrence order
    pub errors: Vec<String>,
}

impl ProcessingStats {
    /// Empty statistics for a batch of `total` eligible items.
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Record a successfully processed item.
    pub fn record_success(&mut self) {
        self.successful += 1;
    }

    /// Record a failed item with its description.
    pub fn record_failure(&mut self, description: impl Into<String>) {
        self.failed += 1;
        self.errors.push(description.into());
    }

    /// One-line summary for end-of-batch logging.
    pub fn summary(&self) -> String {
        format!(
            "{} total, {} successful, {} failed",
            self.total, self.successful, self.failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_accumulate() {
        let mut stats = ProcessingStats::new(3);
        stats.record_success();
        stats.record_success();
        stats.record_failure("Failed to process a.pdf: broken");

        assert_eq!(stats.total, 3);
        assert_eq!(stats.successful, 2);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.errors.len(), 1);
    }

    #[test]
    fn test_errors_keep_occurrence_order() {
        let mut stats = ProcessingStats::new(2);
        stats.record_failure("first");
        stats.record_failure("second");
        assert_eq!(stats.errors, vec!["first", "second"]);
    }

    #[test]
    fn test_summary_format() {
        let mut stats = ProcessingStats::new(5);
        stats.record_success();
        assert_eq!(stats.summary(), "5 total, 1 successful, 0 failed");
    }
}
