//! Narrative rendering of statement tables
//!
//! Each reporting period becomes one text block annotated with its
//! period-end date; blocks are joined with a single blank line. Rendering is
//! deterministic: identical tables produce byte-identical documents.

use finsight_data::{RawStatementRecord, StatementKind, StatementTable, table::cell_text};

/// Render one record as `name: value` lines, every field in native order
fn render_record(record: &RawStatementRecord) -> String {
    record
        .iter()
        .map(|(name, value)| format!("{name}: {}", cell_text(value)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one reporting period as a text block
fn render_block(record: &RawStatementRecord) -> String {
    let date = record
        .get("date")
        .and_then(serde_json::Value::as_str)
        .unwrap_or("unknown");
    format!(
        "For the period ending {date}, the company reported the following:\n{}",
        render_record(record)
    )
}

/// Render a whole table as one document
///
/// All three statement kinds currently produce identically shaped text; the
/// kind parameter is the seam where per-statement wording would hang.
pub fn render_document(table: &StatementTable, _kind: StatementKind) -> String {
    table
        .records()
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}
