//! Tabular view of provider statement data
//!
//! Rows are reporting periods in the order the provider returned them
//! (typically most-recent-first); columns are line items. Field order inside
//! a record is preserved as-is (serde_json is built with `preserve_order`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One reporting period as returned by the provider
///
/// An ordered field-name to scalar mapping; unknown fields pass through
/// opaquely.
pub type RawStatementRecord = serde_json::Map<String, Value>;

/// Ordered sequence of statement records
///
/// An empty table is a valid, representable state (failed or empty query),
/// not an error by itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementTable {
    records: Vec<RawStatementRecord>,
}

impl StatementTable {
    /// The empty table
    pub fn empty() -> Self {
        Self::default()
    }

    /// Tabulate a provider response
    ///
    /// Returns `Some` only for a non-empty JSON array whose elements are all
    /// objects. Any other shape (object, empty array, null, scalar, mixed
    /// array) is a shape failure and yields `None`.
    pub fn from_json(value: Value) -> Option<Self> {
        let Value::Array(items) = value else {
            return None;
        };
        if items.is_empty() {
            return None;
        }

        let mut records = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::Object(map) => records.push(map),
                _ => return None,
            }
        }

        Some(Self { records })
    }

    /// Number of reporting periods
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in provider order
    pub fn records(&self) -> &[RawStatementRecord] {
        &self.records
    }

    /// Column names, taken from the first record in its native order
    pub fn column_names(&self) -> Vec<&str> {
        self.records
            .first()
            .map(|record| record.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// The distinguished period-end date of record `i`, if present
    pub fn date_of(&self, i: usize) -> Option<&str> {
        self.records.get(i).and_then(|r| r.get("date")).and_then(Value::as_str)
    }
}

/// Render a scalar cell for display (strings bare, everything else as JSON)
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!([
            {"date": "2023-12-31", "symbol": "AAPL", "revenue": 383_285_000_000_u64},
            {"date": "2022-12-31", "symbol": "AAPL", "revenue": 394_328_000_000_u64}
        ])
    }

    #[test]
    fn test_from_json_array_of_objects() {
        let table = StatementTable::from_json(sample()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.column_names(), vec!["date", "symbol", "revenue"]);
        assert_eq!(table.date_of(0), Some("2023-12-31"));
        assert_eq!(table.date_of(1), Some("2022-12-31"));
    }

    #[test]
    fn test_from_json_preserves_field_order() {
        let table = StatementTable::from_json(json!([
            {"zeta": 1, "alpha": 2, "mid": 3}
        ]))
        .unwrap();
        // Native provider order, not alphabetical
        assert_eq!(table.column_names(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_from_json_rejects_other_shapes() {
        assert!(StatementTable::from_json(json!([])).is_none());
        assert!(StatementTable::from_json(json!({})).is_none());
        assert!(StatementTable::from_json(json!(null)).is_none());
        assert!(StatementTable::from_json(json!(42)).is_none());
        assert!(StatementTable::from_json(json!("oops")).is_none());
        // Error-object response from the provider
        assert!(StatementTable::from_json(json!({"Error Message": "invalid ticker"})).is_none());
        // Mixed array
        assert!(StatementTable::from_json(json!([{"date": "2023-12-31"}, 7])).is_none());
    }

    #[test]
    fn test_empty_table() {
        let table = StatementTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(table.column_names().is_empty());
        assert_eq!(table.date_of(0), None);
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&json!("2023-12-31")), "2023-12-31");
        assert_eq!(cell_text(&json!(125_000_000)), "125000000");
        assert_eq!(cell_text(&json!(null)), "null");
        assert_eq!(cell_text(&json!(1.5)), "1.5");
    }
}
