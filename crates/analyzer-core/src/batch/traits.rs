//! Collaborator traits for batch processing

use crate::error::Result;
use analyzer_types::{BatchSummary, RowStatus};
use async_trait::async_trait;

/// Opaque text-in/text-out generative model.
///
/// Any `Fn(&str) -> Result<String>` is a model too, which keeps tests free of
/// HTTP plumbing.
#[async_trait]
pub trait ContentModel: Send + Sync {
    async fn generate_content(&self, prompt: &str) -> Result<String>;
}

#[async_trait]
impl<F> ContentModel for F
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    async fn generate_content(&self, prompt: &str) -> Result<String> {
        self(prompt)
    }
}

/// Sink for batch progress events.
///
/// Row indices are zero-based; implementations decide how to present them.
pub trait BatchObserver: Send + Sync {
    fn batch_started(&self, _total_rows: usize) {}

    fn row_started(&self, _index: usize, _total_rows: usize) {}

    fn row_finished(&self, _index: usize, _status: &RowStatus) {}

    fn batch_finished(&self, _summary: &BatchSummary) {}
}
