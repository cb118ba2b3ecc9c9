use anyhow::Result;
use clap::ValueEnum;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use weekparser_core::DayRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bracketed record dump, one record per line
    Pretty,
    Json,
    Table,
}

pub fn render(week: &[DayRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(render_pretty(week)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(week)?),
        OutputFormat::Table => Ok(render_table(week)),
    }
}

const PRETTY_WIDTH: usize = 80;

/// Bracketed dump of the records, keys sorted: day, description, double|square,
/// value. The list stays on one line when it fits in `PRETTY_WIDTH`, otherwise
/// each record gets its own line, and a record too long for its line has its
/// keys split one per line. Long string values are never broken up.
fn render_pretty(week: &[DayRecord]) -> String {
    let records: Vec<Vec<String>> = week.iter().map(pretty_fields).collect();
    let one_line: Vec<String> = records
        .iter()
        .map(|fields| format!("{{{}}}", fields.join(", ")))
        .collect();

    let flat = format!("[{}]", one_line.join(", "));
    if flat.chars().count() <= PRETTY_WIDTH {
        return flat;
    }

    // Records sit after "[" or " " and are followed by "," or "]".
    let record_width = PRETTY_WIDTH - 2;
    let lines: Vec<String> = records
        .iter()
        .zip(one_line)
        .map(|(fields, line)| {
            if line.chars().count() <= record_width {
                line
            } else {
                format!("{{{}}}", fields.join(",\n  "))
            }
        })
        .collect();
    format!("[{}]", lines.join(",\n "))
}

fn pretty_fields(record: &DayRecord) -> Vec<String> {
    let mut fields = vec![format!("'day': {}", quote(record.day.name()))];
    if let Some(description) = &record.description {
        fields.push(format!("'description': {}", quote(description)));
    }
    if let Some(double) = record.double() {
        fields.push(format!("'double': {}", double));
    }
    if let Some(square) = record.square() {
        fields.push(format!("'square': {}", square));
    }
    fields.push(format!("'value': {}", record.value));
    fields
}

/// Single-quoted string literal; double quotes are used instead when the text
/// holds a single quote and no double quote.
fn quote(s: &str) -> String {
    let delimiter = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(delimiter);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(delimiter);
    out
}

#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "Value")]
    value: i64,
    #[tabled(rename = "Square")]
    square: String,
    #[tabled(rename = "Double")]
    double: String,
    #[tabled(rename = "Description")]
    description: String,
}

fn render_table(week: &[DayRecord]) -> String {
    let dash = || "-".to_string();
    let rows: Vec<DayRow> = week
        .iter()
        .map(|record| DayRow {
            day: record.day.to_string(),
            value: record.value,
            square: record.square().map(|v| v.to_string()).unwrap_or_else(dash),
            double: record.double().map(|v| v.to_string()).unwrap_or_else(dash),
            description: record.description.clone().unwrap_or_else(dash),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table.to_string()
}
