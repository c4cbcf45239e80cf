//! Financial Modeling Prep statements client

use crate::config::FmpConfig;
use crate::error::{DataError, Result};
use crate::statement::{StatementRequest, statement_url};
use crate::table::StatementTable;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

/// Statements client
///
/// Issues exactly one GET per lookup; there is no retry, caching, or rate
/// limiting.
#[derive(Debug, Clone)]
pub struct FmpClient {
    client: Client,
    config: FmpConfig,
}

impl FmpClient {
    /// Create a new client from explicit configuration
    pub fn new(config: FmpConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    /// Create a client from environment variables (`FMP_API_KEY`, optional
    /// `FMP_API_BASE`)
    pub fn from_env() -> Result<Self> {
        Self::new(FmpConfig::from_env()?)
    }

    /// Get the current configuration
    pub fn config(&self) -> &FmpConfig {
        &self.config
    }

    /// Fetch and parse one JSON document
    ///
    /// Every failure mode - non-200 status, transport error, malformed body -
    /// collapses to `None` with a diagnostic log line; nothing propagates to
    /// the caller.
    pub async fn fetch_json(&self, url: Url) -> Option<serde_json::Value> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Request error: {e}");
                return None;
            }
        };

        if response.status() != reqwest::StatusCode::OK {
            warn!("Request failed with status code: {}", response.status());
            return None;
        }

        match response.json().await {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Failed to parse response body: {e}");
                None
            }
        }
    }

    /// Fetch the requested statements and tabulate them
    ///
    /// Any no-data or unexpected-shape outcome surfaces as
    /// `DataError::NoStatements`, whose display text is the user-visible
    /// notification.
    pub async fn statements(&self, request: &StatementRequest) -> Result<StatementTable> {
        let url = statement_url(&self.config.api_base, request, &self.config.api_key)?;
        debug!(
            ticker = request.ticker(),
            kind = %request.kind(),
            period = request.period().as_query(),
            limit = request.limit(),
            "Fetching financial statements"
        );

        let table = self
            .fetch_json(url)
            .await
            .and_then(StatementTable::from_json);

        match table {
            Some(table) => {
                debug!(rows = table.len(), "Tabulated statements");
                Ok(table)
            }
            None => Err(DataError::NoStatements {
                ticker: request.ticker().to_string(),
            }),
        }
    }
}
