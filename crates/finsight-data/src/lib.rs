//! Financial statements data layer for finsight
//!
//! This crate talks to the Financial Modeling Prep REST API and turns its
//! JSON responses into tabular statement data:
//!
//! - Statement kinds, reporting periods, and validated requests
//! - Endpoint URL construction (one lookup table, three path segments)
//! - A fetch-and-tabulate client that absorbs network failures into
//!   "no data" rather than propagating them
//!
//! # Example
//!
//! ```rust,ignore
//! use finsight_data::{FmpClient, FmpConfig, ReportPeriod, StatementKind, StatementRequest};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = FmpClient::new(FmpConfig::from_env()?)?;
//!     let request = StatementRequest::new(
//!         "AAPL",
//!         StatementKind::IncomeStatement,
//!         ReportPeriod::Annual,
//!         4,
//!     );
//!     let table = client.statements(&request).await?;
//!     println!("{} periods", table.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod statement;
pub mod table;

// Re-export main types for convenience
pub use client::FmpClient;
pub use config::FmpConfig;
pub use error::{DataError, Result};
pub use statement::{ReportPeriod, StatementKind, StatementRequest, statement_url};
pub use table::{RawStatementRecord, StatementTable};
