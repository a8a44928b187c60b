//! File-to-file entry point: read rows, run the batch, write the results

use crate::batch::{BatchObserver, BatchOrchestrator, BatchReport, ContentModel};
use crate::clients::spreadsheet;
use crate::error::Result;
use std::path::Path;

/// Analyze every row of `input` and write the results to `output`.
///
/// Reading or writing the spreadsheet is fatal; per-row model failures are
/// absorbed by the orchestrator and only show up in the report.
pub async fn analyze_file<M, O>(
    orchestrator: &BatchOrchestrator<M, O>,
    input: &Path,
    output: &Path,
) -> Result<BatchReport>
where
    M: ContentModel,
    O: BatchObserver,
{
    let rows = spreadsheet::read_records(input)?;
    log::debug!("Read {} rows from {}", rows.len(), input.display());

    let report = orchestrator.run(&rows).await;

    spreadsheet::write_records(output, &report.rows)?;
    log::info!("Wrote {} rows to {}", report.rows.len(), output.display());

    Ok(report)
}
