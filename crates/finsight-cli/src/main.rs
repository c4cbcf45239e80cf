//! Financial statements analyst CLI
//!
//! An interactive terminal front end for the fetch -> tabulate -> summarize
//! pipeline: pick a statement type, period, lookback count, and ticker, and
//! get the raw table plus a generated narrative.
//!
//! # Usage
//!
//! ```bash
//! # Set up environment variables
//! export FMP_API_KEY="your-financial-data-key"
//! export OPENAI_API_KEY="your-llm-key"
//!
//! # Interactive session
//! cargo run --bin finsight
//!
//! # One-shot run
//! cargo run --bin finsight -- --statement income --ticker AAPL --period annual --limit 2
//! ```

use anyhow::Context;
use clap::Parser;
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use finsight_analyst::{
    AnalysisEngine, AnalysisInput, EngineOptions, SummarizerOptions, SummaryGenerator,
    TableOutcome,
};
use finsight_data::{
    FmpClient, FmpConfig, ReportPeriod, StatementKind, StatementTable, table::cell_text,
};
use finsight_llm::providers::{OpenAiConfig, OpenAiProvider};
use std::env;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

const DEFAULT_TICKER: &str = "googl";
const DEFAULT_LIMIT: u8 = 4;

#[derive(Parser, Debug)]
#[command(name = "finsight")]
#[command(about = "Fetch financial statements and ask an LLM to analyze them", long_about = None)]
struct Args {
    /// Run once with the given statement type instead of starting the REPL
    #[arg(long)]
    statement: Option<StatementKind>,

    /// Ticker symbol for one-shot runs
    #[arg(long, default_value = DEFAULT_TICKER)]
    ticker: String,

    /// Reporting period for one-shot runs
    #[arg(long, default_value_t = ReportPeriod::default())]
    period: ReportPeriod,

    /// Number of past statements to analyze (1-10)
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    limit: u8,

    /// Override the completion model (also: OPENAI_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Cap the document size sent to the LLM, in characters
    #[arg(long)]
    max_document_chars: Option<usize>,

    /// Skip the LLM call when the fetched table is empty
    #[arg(long)]
    no_empty_summary: bool,
}

fn print_banner() {
    println!(
        r"
╔══════════════════════════════════════════════════════════════╗
║                 Financial Statements Analyst                 ║
║                                                              ║
║  Pick a statement type, period, lookback count, and ticker;  ║
║  the raw table is shown together with an LLM-written         ║
║  analysis of how the figures changed over the period.        ║
║                                                              ║
║  /exit at any prompt quits.                                  ║
╚══════════════════════════════════════════════════════════════╝
"
    );
}

fn build_engine(args: &Args) -> anyhow::Result<AnalysisEngine> {
    let fmp_config = FmpConfig::from_env().context("financial data API configuration")?;
    let client = FmpClient::new(fmp_config)?;

    let openai_config = OpenAiConfig::from_env()
        .context("LLM API configuration")?
        .with_timeout(180);
    let provider = Arc::new(OpenAiProvider::with_config(openai_config)?);

    let mut options = SummarizerOptions::from_env()
        .with_max_document_chars(args.max_document_chars);
    if let Some(model) = &args.model {
        options = options.with_model(model);
    }
    let summarizer = SummaryGenerator::new(provider, options);

    Ok(AnalysisEngine::new(client, summarizer).with_options(EngineOptions {
        summarize_empty: !args.no_empty_summary,
    }))
}

/// Render the statement table, periods as rows and line items as columns
fn render_table(table: &StatementTable) -> String {
    if table.is_empty() {
        return "(no statement data)".to_string();
    }

    let columns = table.column_names();
    let mut out = Table::new();
    out.load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(columns.clone());

    for record in table.records() {
        out.add_row(
            columns
                .iter()
                .map(|name| record.get(*name).map(cell_text).unwrap_or_default()),
        );
    }

    out.to_string()
}

/// One end-to-end user action: fetch, show the table, then the summary
async fn run_action(engine: &AnalysisEngine, input: &AnalysisInput) {
    let Some(request) = engine.prepare(input) else {
        // Empty ticker: silently take no action
        return;
    };

    let TableOutcome { table, notice } = engine.fetch_table(&request).await;

    println!("\n─── {} · {} ───", request.kind().label(), request.ticker());
    println!("{}", render_table(&table));
    if let Some(notice) = &notice {
        println!("❌ {notice}");
    }

    if engine.will_summarize(&table) {
        println!("\nGenerating summary...");
    }
    match engine.summarize_table(&request, &table).await {
        Ok(Some(summary)) => {
            println!("\n{}\n{}\n", summary.heading, summary.text);
        }
        Ok(None) => {
            println!("Skipped: no statement data to summarize.\n");
        }
        Err(e) => {
            println!("❌ Summary failed: {e}\n");
        }
    }
}

/// Read one trimmed line; `None` means EOF or an explicit /exit
fn prompt_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let line = line.trim().to_string();
    if line.eq_ignore_ascii_case("/exit") {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Statement type selector: three options, no default
fn select_statement() -> io::Result<Option<StatementKind>> {
    println!("Select financial statement type:");
    for (i, kind) in StatementKind::ALL.iter().enumerate() {
        println!("  {}) {}", i + 1, kind.label());
    }
    loop {
        let Some(line) = prompt_line("> ")? else {
            return Ok(None);
        };
        let choice = match line.as_str() {
            "1" => Some(StatementKind::IncomeStatement),
            "2" => Some(StatementKind::BalanceSheet),
            "3" => Some(StatementKind::CashFlow),
            other => other.parse().ok(),
        };
        match choice {
            Some(kind) => return Ok(Some(kind)),
            None => println!("Please choose 1, 2, or 3."),
        }
    }
}

/// Period selector: empty input takes the first-listed option (Annual)
fn select_period() -> io::Result<Option<ReportPeriod>> {
    loop {
        let Some(line) = prompt_line("Select period [Annual/Quarterly] (default Annual): ")?
        else {
            return Ok(None);
        };
        if line.is_empty() {
            return Ok(Some(ReportPeriod::default()));
        }
        match line.parse() {
            Ok(period) => return Ok(Some(period)),
            Err(_) => println!("Please enter Annual or Quarterly."),
        }
    }
}

/// Lookback count input: bounded 1-10, default 4
fn read_limit() -> io::Result<Option<u8>> {
    let Some(line) = prompt_line("Number of past financial statements to analyze [4]: ")? else {
        return Ok(None);
    };
    let limit = line.parse::<u8>().unwrap_or(DEFAULT_LIMIT).clamp(1, 10);
    Ok(Some(limit))
}

/// Ticker input: default "googl", uppercased downstream
fn read_ticker() -> io::Result<Option<String>> {
    let Some(line) = prompt_line("Please enter the company ticker [googl]: ")? else {
        return Ok(None);
    };
    if line.is_empty() {
        return Ok(Some(DEFAULT_TICKER.to_string()));
    }
    Ok(Some(line))
}

async fn repl(engine: &AnalysisEngine) -> io::Result<()> {
    loop {
        let Some(kind) = select_statement()? else { break };
        let Some(period) = select_period()? else { break };
        let Some(limit) = read_limit()? else { break };
        let Some(ticker) = read_ticker()? else { break };

        let input = AnalysisInput::new(ticker, kind, period, limit);
        run_action(engine, &input).await;
    }
    println!("\nGoodbye!");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "warn,finsight=info".to_string()))
        .init();

    let args = Args::parse();
    let engine = build_engine(&args)?;

    if let Some(kind) = args.statement {
        // One-shot mode: everything comes from flags
        let input = AnalysisInput::new(args.ticker.clone(), kind, args.period, args.limit);
        run_action(&engine, &input).await;
        return Ok(());
    }

    print_banner();
    repl(&engine).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_table_empty() {
        assert_eq!(render_table(&StatementTable::empty()), "(no statement data)");
    }

    #[test]
    fn test_render_table_has_all_columns_and_rows() {
        let table = StatementTable::from_json(json!([
            {"date": "2023-12-31", "revenue": 1},
            {"date": "2022-12-31", "revenue": 2}
        ]))
        .unwrap();

        let rendered = render_table(&table);
        assert!(rendered.contains("date"));
        assert!(rendered.contains("revenue"));
        assert!(rendered.contains("2023-12-31"));
        assert!(rendered.contains("2022-12-31"));
    }
}
