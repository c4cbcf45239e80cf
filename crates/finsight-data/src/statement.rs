//! Statement kinds, reporting periods, and request construction

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// The three standard financial reports served by the provider
///
/// Each kind maps to one fixed path segment and one display label; all other
/// behavior is identical across kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatementKind {
    /// Income statement
    IncomeStatement,
    /// Balance sheet
    BalanceSheet,
    /// Cash-flow statement
    CashFlow,
}

impl StatementKind {
    /// All kinds, in the order the selector lists them
    pub const ALL: [StatementKind; 3] = [
        StatementKind::IncomeStatement,
        StatementKind::BalanceSheet,
        StatementKind::CashFlow,
    ];

    /// Endpoint path segment for this kind
    pub fn path_segment(self) -> &'static str {
        match self {
            StatementKind::IncomeStatement => "income-statement",
            StatementKind::BalanceSheet => "balance-sheet-statement",
            StatementKind::CashFlow => "cash-flow-statement",
        }
    }

    /// Human-readable label for this kind
    pub fn label(self) -> &'static str {
        match self {
            StatementKind::IncomeStatement => "Income Statement",
            StatementKind::BalanceSheet => "Balance Sheet",
            StatementKind::CashFlow => "Cash Flow",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatementKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income statement" | "income-statement" | "income" => {
                Ok(StatementKind::IncomeStatement)
            }
            "balance sheet" | "balance-sheet" | "balance" => Ok(StatementKind::BalanceSheet),
            "cash flow" | "cash-flow" | "cashflow" => Ok(StatementKind::CashFlow),
            other => Err(format!("unknown statement type: {other}")),
        }
    }
}

/// Reporting cadence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportPeriod {
    /// Annual reports (default: the first-listed selector option)
    #[default]
    Annual,
    /// Quarterly reports
    Quarterly,
}

impl ReportPeriod {
    /// Lower-cased query parameter value
    pub fn as_query(self) -> &'static str {
        match self {
            ReportPeriod::Annual => "annual",
            ReportPeriod::Quarterly => "quarterly",
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportPeriod::Annual => f.write_str("Annual"),
            ReportPeriod::Quarterly => f.write_str("Quarterly"),
        }
    }
}

impl FromStr for ReportPeriod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "annual" | "a" => Ok(ReportPeriod::Annual),
            "quarterly" | "quarter" | "q" => Ok(ReportPeriod::Quarterly),
            other => Err(format!("unknown period: {other}")),
        }
    }
}

/// Bounds for the lookback count
pub const MIN_LIMIT: u8 = 1;
pub const MAX_LIMIT: u8 = 10;

/// One user-triggered statement lookup, immutable once constructed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRequest {
    ticker: String,
    kind: StatementKind,
    period: ReportPeriod,
    limit: u8,
}

impl StatementRequest {
    /// Build a request, normalizing the ticker to uppercase and clamping
    /// the limit to 1..=10
    pub fn new(
        ticker: impl Into<String>,
        kind: StatementKind,
        period: ReportPeriod,
        limit: u8,
    ) -> Self {
        Self {
            ticker: ticker.into().trim().to_uppercase(),
            kind,
            period,
            limit: limit.clamp(MIN_LIMIT, MAX_LIMIT),
        }
    }

    /// Uppercased ticker symbol
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    pub fn period(&self) -> ReportPeriod {
        self.period
    }

    pub fn limit(&self) -> u8 {
        self.limit
    }
}

/// Build the statements endpoint URL
///
/// `{base}/{segment}/{TICKER}?period={annual|quarterly}&limit={1..10}&apikey={key}`;
/// ticker, period, limit, and key pass through verbatim.
pub fn statement_url(api_base: &str, request: &StatementRequest, api_key: &str) -> Result<Url> {
    let mut url = Url::parse(&format!(
        "{}/{}/{}",
        api_base.trim_end_matches('/'),
        request.kind().path_segment(),
        request.ticker()
    ))?;

    url.query_pairs_mut()
        .append_pair("period", request.period().as_query())
        .append_pair("limit", &request.limit().to_string())
        .append_pair("apikey", api_key);

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://financialmodelingprep.com/api/v3";

    #[test]
    fn test_path_segments() {
        assert_eq!(
            StatementKind::IncomeStatement.path_segment(),
            "income-statement"
        );
        assert_eq!(
            StatementKind::BalanceSheet.path_segment(),
            "balance-sheet-statement"
        );
        assert_eq!(StatementKind::CashFlow.path_segment(), "cash-flow-statement");
    }

    #[test]
    fn test_labels() {
        assert_eq!(StatementKind::IncomeStatement.label(), "Income Statement");
        assert_eq!(StatementKind::BalanceSheet.label(), "Balance Sheet");
        assert_eq!(StatementKind::CashFlow.label(), "Cash Flow");
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(
            "Income Statement".parse::<StatementKind>().unwrap(),
            StatementKind::IncomeStatement
        );
        assert_eq!(
            "balance".parse::<StatementKind>().unwrap(),
            StatementKind::BalanceSheet
        );
        assert_eq!(
            "cash-flow".parse::<StatementKind>().unwrap(),
            StatementKind::CashFlow
        );
        assert!("profit and loss".parse::<StatementKind>().is_err());
    }

    #[test]
    fn test_period_query_value_is_lowercase() {
        assert_eq!(ReportPeriod::Annual.as_query(), "annual");
        assert_eq!(ReportPeriod::Quarterly.as_query(), "quarterly");
    }

    #[test]
    fn test_period_default_is_annual() {
        assert_eq!(ReportPeriod::default(), ReportPeriod::Annual);
    }

    #[test]
    fn test_request_normalizes_ticker() {
        let req = StatementRequest::new(
            " googl ",
            StatementKind::IncomeStatement,
            ReportPeriod::Annual,
            4,
        );
        assert_eq!(req.ticker(), "GOOGL");
    }

    #[test]
    fn test_request_clamps_limit() {
        let req =
            StatementRequest::new("AAPL", StatementKind::CashFlow, ReportPeriod::Quarterly, 0);
        assert_eq!(req.limit(), 1);
        let req =
            StatementRequest::new("AAPL", StatementKind::CashFlow, ReportPeriod::Quarterly, 99);
        assert_eq!(req.limit(), 10);
    }

    #[test]
    fn test_url_selects_correct_segment_for_all_kinds() {
        for kind in StatementKind::ALL {
            let req = StatementRequest::new("AAPL", kind, ReportPeriod::Annual, 4);
            let url = statement_url(BASE, &req, "secret").unwrap();
            assert!(
                url.path().starts_with(&format!("/api/v3/{}/", kind.path_segment())),
                "unexpected path for {kind:?}: {}",
                url.path()
            );
        }
    }

    #[test]
    fn test_url_passes_parameters_through() {
        let req = StatementRequest::new(
            "aapl",
            StatementKind::BalanceSheet,
            ReportPeriod::Quarterly,
            2,
        );
        let url = statement_url(BASE, &req, "secret-key").unwrap();

        assert_eq!(
            url.path(),
            "/api/v3/balance-sheet-statement/AAPL"
        );
        let query: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            query,
            vec![
                ("period".to_string(), "quarterly".to_string()),
                ("limit".to_string(), "2".to_string()),
                ("apikey".to_string(), "secret-key".to_string()),
            ]
        );
    }
}
