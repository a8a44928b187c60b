//! Batch orchestrator with per-row failure isolation

use super::observer::LogObserver;
use super::traits::{BatchObserver, ContentModel};
use crate::error::Result;
use crate::services::{build_analysis_prompt, ContactExtractor, RecordAssembler, ResponseParser};
use analyzer_types::{AnalysisResult, BatchSummary, InputRecord, OutputRecord, RowStatus};

/// Outcome of a single row: the assembled fields plus how they were reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAnalysis {
    pub result: AnalysisResult,
    pub status: RowStatus,
}

/// Everything a run produced, in input order
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub rows: Vec<OutputRecord>,
    pub statuses: Vec<RowStatus>,
    pub summary: BatchSummary,
}

/// Runs every row through model, parser, extractor and assembler.
///
/// Rows are processed strictly one after another. A model failure only
/// empties the service fields of that row; it never stops the batch.
pub struct BatchOrchestrator<M: ContentModel, O: BatchObserver = LogObserver> {
    model: M,
    observer: O,
    extractor: ContactExtractor,
}

impl<M: ContentModel> BatchOrchestrator<M, LogObserver> {
    pub fn new(model: M) -> Self {
        Self::with_observer(model, LogObserver)
    }
}

impl<M: ContentModel, O: BatchObserver> BatchOrchestrator<M, O> {
    pub fn with_observer(model: M, observer: O) -> Self {
        Self {
            model,
            observer,
            extractor: ContactExtractor::new(),
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Process all rows and collect one output record per input row
    pub async fn run(&self, rows: &[InputRecord]) -> BatchReport {
        let total_rows = rows.len();
        self.observer.batch_started(total_rows);

        let mut summary = BatchSummary::start();
        let mut output = Vec::with_capacity(total_rows);
        let mut statuses = Vec::with_capacity(total_rows);

        for (index, row) in rows.iter().enumerate() {
            self.observer.row_started(index, total_rows);

            let RowAnalysis { result, status } = self.process_row(index, row).await;

            self.observer.row_finished(index, &status);
            summary.record(&status);
            output.push(OutputRecord::from_parts(row, result));
            statuses.push(status);
        }

        summary.finish();
        self.observer.batch_finished(&summary);

        BatchReport {
            rows: output,
            statuses,
            summary,
        }
    }

    /// Analyze one row. Never fails: model errors become `ModelFailed`.
    pub async fn process_row(&self, _index: usize, row: &InputRecord) -> RowAnalysis {
        // Contacts come from the raw content whatever the model does
        let contacts = self.extractor.extract(&row.all_content);

        if row.all_content.trim().is_empty() {
            return RowAnalysis {
                result: RecordAssembler::assemble(AnalysisResult::default(), contacts),
                status: RowStatus::ContentEmpty,
            };
        }

        let (parsed, status) = match self.analyze_content(&row.all_content).await {
            Ok(parsed) => (parsed, RowStatus::Analyzed),
            Err(e) => (
                AnalysisResult::default(),
                RowStatus::ModelFailed {
                    error: e.to_string(),
                },
            ),
        };

        RowAnalysis {
            result: RecordAssembler::assemble(parsed, contacts),
            status,
        }
    }

    async fn analyze_content(&self, content: &str) -> Result<AnalysisResult> {
        let prompt = build_analysis_prompt(content);
        let response = self.model.generate_content(&prompt).await?;
        Ok(ResponseParser::parse(&response))
    }
}
