//! Statement analysis for finsight
//!
//! This crate turns a tabulated financial statement into a narrative
//! document, sends it to a completion provider for analysis, and
//! orchestrates the whole fetch -> tabulate -> format -> summarize -> display
//! pipeline on behalf of the interface layer. The pipeline is strictly
//! linear and synchronous: each stage completes before the next starts.
//!
//! # Example
//!
//! ```rust,ignore
//! use finsight_analyst::{AnalysisEngine, AnalysisInput, SummaryGenerator, SummarizerOptions};
//! use finsight_data::{FmpClient, FmpConfig, ReportPeriod, StatementKind};
//! use finsight_llm::providers::OpenAiProvider;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = FmpClient::new(FmpConfig::from_env()?)?;
//!     let provider = Arc::new(OpenAiProvider::from_env()?);
//!     let summarizer = SummaryGenerator::new(provider, SummarizerOptions::from_env());
//!     let engine = AnalysisEngine::new(client, summarizer);
//!
//!     let input = AnalysisInput::new(
//!         "AAPL",
//!         StatementKind::IncomeStatement,
//!         ReportPeriod::Annual,
//!         4,
//!     );
//!     if let Some(outcome) = engine.run(&input).await? {
//!         println!("{}", outcome.summary.map(|s| s.text).unwrap_or_default());
//!     }
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod error;
pub mod narrative;
pub mod prompts;
pub mod summarizer;

// Re-export main types for convenience
pub use engine::{AnalysisEngine, AnalysisInput, AnalysisOutcome, AnalysisSummary, EngineOptions, TableOutcome};
pub use error::{AnalystError, Result};
pub use narrative::render_document;
pub use summarizer::{SummarizerOptions, SummaryGenerator};
