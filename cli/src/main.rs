mod render;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::debug;
use weekparser_core::{parse_week, WeekError};

use render::{render, OutputFormat};

#[derive(Parser)]
#[command(name = "week_parser")]
#[command(about = "WeekParser utility", long_about = None)]
struct Cli {
    /// Input CSV file
    filename: PathBuf,

    /// How to print the parsed week
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,

    /// Log more (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: &Cli) -> Result<()> {
    let week = parse_week(&cli.filename)?;
    let output = render(&week, cli.format)?;
    debug!("Rendered {} day(s) as {:?}", week.len(), cli.format);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output)?;
    Ok(())
}

/// Message printed on stderr for a failed run.
fn error_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<WeekError>() {
        Some(WeekError::Io(e)) => os_reason(e),
        Some(e) => format!("Invalid file format: {}", e),
        None => format!("Error: {:#}", err),
    }
}

// "No such file or directory (os error 2)" -> "No such file or directory"
fn os_reason(err: &io::Error) -> String {
    let msg = err.to_string();
    match msg.rfind(" (os error ") {
        Some(pos) => msg[..pos].to_string(),
        None => msg,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_message(&err));
            ExitCode::FAILURE
        }
    }
}
