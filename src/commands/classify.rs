//! tierlabel classify コマンド
//!
//! 引数ごとに記述子を解釈し、ティアラベルを表示する。

use crate::config::{OutputFormat, Settings};
use crate::error::{Result, TierError};
use crate::instance::parse_input;
use crate::label::classify;
use crate::output::{debug, CommandSummary};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(
    after_help = "EXAMPLES:\n  tierlabel classify '{\"type\":\"top\"}'\n  tierlabel classify '{\"type\":\"broken\",\"unusable\":true}' '{\"type\":\"low\"}'"
)]
pub struct Args {
    /// Instance descriptors as JSON; text that is not JSON is read as a plain string
    #[arg(required = true)]
    pub instances: Vec<String>,

    /// Output format (falls back to TIERLABEL_FORMAT, then table)
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<OutputFormat>,
}

/// 1 件分の分類結果（出力用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelRow {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LabelRow {
    fn new(input: &str, result: &Result<String>) -> Self {
        match result {
            Ok(label) => Self {
                input: input.to_string(),
                label: Some(label.clone()),
                error: None,
            },
            Err(e) => Self {
                input: input.to_string(),
                label: None,
                error: Some(e.to_string()),
            },
        }
    }
}

pub fn run(args: Args, verbose: bool) -> Result<()> {
    let settings = Settings::resolve(verbose, args.format)?;
    debug(settings.verbose, format_args!("{:?}", settings));

    let mut results: Vec<Result<String>> = args
        .instances
        .iter()
        .map(|raw| classify_input(raw, settings.verbose))
        .collect();

    // 単一入力の失敗はそのエラーをそのまま返す
    if results.len() == 1 && results[0].is_err() {
        if let Some(Err(e)) = results.pop() {
            return Err(e);
        }
    }

    let rows: Vec<LabelRow> = args
        .instances
        .iter()
        .zip(&results)
        .map(|(input, result)| LabelRow::new(input, result))
        .collect();

    match settings.format {
        OutputFormat::Table => println!("{}", render_table(&rows)),
        OutputFormat::Json => println!("{}", render_json(&rows)?),
        OutputFormat::Plain => print_plain(&rows),
    }

    let failed = rows.iter().filter(|r| r.error.is_some()).count();
    let summary = CommandSummary::format(rows.len() - failed, failed);
    eprintln!("{} {}", summary.prefix, summary.message);

    if failed > 0 {
        return Err(TierError::PartialFailure {
            failed,
            total: rows.len(),
        });
    }

    Ok(())
}

fn classify_input(raw: &str, verbose: bool) -> Result<String> {
    let value = parse_input(raw)?;
    debug(verbose, format_args!("parsed {raw:?} as {value}"));
    classify(&value)
}

fn render_table(rows: &[LabelRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Input", "Label"]);

    for row in rows {
        let cell = match (&row.label, &row.error) {
            (Some(label), _) => Cell::new(label),
            (None, Some(error)) => Cell::new(error).fg(Color::Red),
            (None, None) => Cell::new("-"),
        };
        table.add_row(vec![Cell::new(&row.input), cell]);
    }

    table
}

fn render_json(rows: &[LabelRow]) -> Result<String> {
    serde_json::to_string_pretty(rows).map_err(|e| TierError::Output(e.to_string()))
}

fn print_plain(rows: &[LabelRow]) {
    for row in rows {
        match (&row.label, &row.error) {
            (Some(label), _) => println!("{label}"),
            (None, Some(error)) => eprintln!("{}: {}", row.input, error),
            (None, None) => {}
        }
    }
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
