//! Analysis engine - orchestrates one end-to-end run
//!
//! The engine is the session controller: it collects a validated request
//! from raw input, fetches and tabulates the statements, and hands the
//! narrative to the summarizer. Rendering stays with the interface layer,
//! which is why fetching and summarizing are separate steps; `run` glues
//! them together for callers that do not interleave output.

use crate::error::Result;
use crate::narrative::render_document;
use crate::summarizer::SummaryGenerator;
use finsight_data::{
    FmpClient, ReportPeriod, StatementKind, StatementRequest, StatementTable,
};
use tracing::{debug, info};

/// Raw, per-action user input before validation
///
/// Unlike `StatementRequest` this may carry an empty ticker, which means
/// "take no action".
#[derive(Debug, Clone)]
pub struct AnalysisInput {
    pub ticker: String,
    pub kind: StatementKind,
    pub period: ReportPeriod,
    pub limit: u8,
}

impl AnalysisInput {
    pub fn new(
        ticker: impl Into<String>,
        kind: StatementKind,
        period: ReportPeriod,
        limit: u8,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            kind,
            period,
            limit,
        }
    }
}

/// Engine behavior switches
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Whether an empty table still goes to the LLM
    ///
    /// Defaults to true, reproducing the original behavior of summarizing
    /// an empty document after a failed fetch.
    pub summarize_empty: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            summarize_empty: true,
        }
    }
}

/// Result of the fetch-and-tabulate stage
///
/// Fetch failures never escape as errors here; they become an empty table
/// plus a user-visible notice.
#[derive(Debug, Clone)]
pub struct TableOutcome {
    pub table: StatementTable,
    pub notice: Option<String>,
}

/// A generated summary, labeled with its ticker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSummary {
    pub heading: String,
    pub text: String,
}

/// Everything one run produced
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub request: StatementRequest,
    pub table: StatementTable,
    pub notice: Option<String>,
    pub summary: Option<AnalysisSummary>,
}

/// Session controller for the fetch -> tabulate -> format -> summarize run
pub struct AnalysisEngine {
    client: FmpClient,
    summarizer: SummaryGenerator,
    options: EngineOptions,
}

impl AnalysisEngine {
    pub fn new(client: FmpClient, summarizer: SummaryGenerator) -> Self {
        Self {
            client,
            summarizer,
            options: EngineOptions::default(),
        }
    }

    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    /// Validate raw input into a statement request
    ///
    /// An empty or whitespace ticker yields `None`: the action is silently
    /// ignored, with no fetch, no LLM call, and no error shown.
    pub fn prepare(&self, input: &AnalysisInput) -> Option<StatementRequest> {
        if input.ticker.trim().is_empty() {
            debug!("Empty ticker; taking no action");
            return None;
        }
        Some(StatementRequest::new(
            input.ticker.clone(),
            input.kind,
            input.period,
            input.limit,
        ))
    }

    /// Fetch and tabulate, absorbing failures into an empty table + notice
    pub async fn fetch_table(&self, request: &StatementRequest) -> TableOutcome {
        match self.client.statements(request).await {
            Ok(table) => {
                info!(
                    ticker = request.ticker(),
                    rows = table.len(),
                    "Fetched statements"
                );
                TableOutcome {
                    table,
                    notice: None,
                }
            }
            Err(e) => TableOutcome {
                table: StatementTable::empty(),
                notice: Some(e.to_string()),
            },
        }
    }

    /// Whether `summarize_table` would call the LLM for this table
    pub fn will_summarize(&self, table: &StatementTable) -> bool {
        !table.is_empty() || self.options.summarize_empty
    }

    /// Format the table and request a summary
    ///
    /// With default options an empty table is still summarized (as an empty
    /// document), matching the original pipeline; `summarize_empty = false`
    /// skips the LLM call instead and returns `Ok(None)`.
    pub async fn summarize_table(
        &self,
        request: &StatementRequest,
        table: &StatementTable,
    ) -> Result<Option<AnalysisSummary>> {
        if !self.will_summarize(table) {
            debug!("Empty table and summarize_empty disabled; skipping LLM call");
            return Ok(None);
        }

        let document = render_document(table, request.kind());
        let text = self.summarizer.summarize(&document).await?;
        Ok(Some(AnalysisSummary {
            heading: format!("Summary for {}:", request.ticker()),
            text,
        }))
    }

    /// One end-to-end run; `Ok(None)` means the input was idle (empty ticker)
    pub async fn run(&self, input: &AnalysisInput) -> Result<Option<AnalysisOutcome>> {
        let Some(request) = self.prepare(input) else {
            return Ok(None);
        };

        let TableOutcome { table, notice } = self.fetch_table(&request).await;
        let summary = self.summarize_table(&request, &table).await?;

        Ok(Some(AnalysisOutcome {
            request,
            table,
            notice,
            summary,
        }))
    }
}
