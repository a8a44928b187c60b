//! Default observer writing batch events through the `log` facade

use super::traits::BatchObserver;
use analyzer_types::{BatchSummary, RowStatus};

#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl BatchObserver for LogObserver {
    fn batch_started(&self, total_rows: usize) {
        log::info!("Loaded file with {} rows", total_rows);
    }

    fn row_started(&self, index: usize, total_rows: usize) {
        log::info!("Processing row {}/{}", index + 1, total_rows);
    }

    fn row_finished(&self, index: usize, status: &RowStatus) {
        match status {
            RowStatus::Analyzed => log::debug!("Row {} analyzed", index + 1),
            RowStatus::ContentEmpty => log::debug!("Row {} has no content, skipped model call", index + 1),
            RowStatus::ModelFailed { error } => {
                log::error!("Error in content analysis for row {}: {}", index + 1, error)
            }
        }
    }

    fn batch_finished(&self, summary: &BatchSummary) {
        log::info!(
            "Batch {} finished: {} rows ({} analyzed, {} empty, {} failed)",
            summary.run_id,
            summary.total_rows,
            summary.analyzed_rows,
            summary.empty_rows,
            summary.failed_rows
        );
    }
}
