use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use serde::Serialize;

use lab_scheduler::domain::booking_emitter::DEFAULT_CREATED_BY_USER_ID;
use lab_scheduler::domain::clock::{Clock, FixedClock, LocalClock};
use lab_scheduler::domain::schedule::calendar::parse_reference_date;
use lab_scheduler::logger::{self, LoggerConfig};
use lab_scheduler::{SchedulerConfig, run_from_input};

/// Assigns weekly lab sessions to course sections without double-booking labs or faculty.
#[derive(Debug, Parser)]
#[command(name = "lab-scheduler", version, about)]
struct Cli {
    /// Input document; read from stdin when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write the result document here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Date treated as "today" (YYYY-MM-DD) when choosing the week to schedule.
    #[arg(long)]
    reference_date: Option<String>,

    /// Creator id stamped on every proposed booking.
    #[arg(long, default_value_t = DEFAULT_CREATED_BY_USER_ID)]
    created_by: i64,

    /// Emit single-line JSON.
    #[arg(long)]
    compact: bool,

    /// Also write logs to <LOG_DIR>/scheduler.log.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log at debug level regardless of RUST_LOG.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logger::init(LoggerConfig { level: cli.verbose.then_some(LevelFilter::Debug), log_dir: cli.log_dir.clone() });

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let clock: Box<dyn Clock> = match cli.reference_date.as_deref().map(parse_reference_date).transpose() {
        Ok(Some(date)) => Box::new(FixedClock::new(date)),
        Ok(None) => Box::new(LocalClock),
        Err(e) => {
            log::error!("{}", e);
            write_document(cli, &e.to_error_document())?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let config = SchedulerConfig { created_by_user_id: cli.created_by };

    match run_from_input(cli.input.as_deref(), clock.as_ref(), &config) {
        Ok(document) => {
            log::info!("Emitting {} proposed bookings.", document.proposed_bookings.len());
            write_document(cli, &document)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            log::error!("Scheduling run rejected: {}", e);
            write_document(cli, &e.to_error_document())?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn write_document<T: Serialize>(cli: &Cli, document: &T) -> anyhow::Result<()> {
    let mut rendered = if cli.compact { serde_json::to_string(document)? } else { to_pretty_json(document)? };
    rendered.push('\n');

    match &cli.output {
        Some(path) => fs::write(path, rendered).with_context(|| format!("Failed to write output to '{}'", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes()).context("Failed to write output to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(())
}

/// Pretty JSON with four-space indentation.
fn to_pretty_json<T: Serialize>(document: &T) -> anyhow::Result<String> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    document.serialize(&mut serializer)?;
    Ok(String::from_utf8(buffer)?)
}
