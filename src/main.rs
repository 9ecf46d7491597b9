//! CLI entry point for the grade topper report.
//!
//! Loads a CSV of student test scores, grades every student, and prints the
//! overall topper followed by the topper of each institution.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use grade_topper::analyzers::aggregate::{overall_topper, toppers_by_institution};
use grade_topper::loader::load_students;
use grade_topper::output::{Report, write_json, write_roster, write_text};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "grade_topper")]
#[command(about = "Grade students from a CSV and report the toppers", long_about = None)]
struct Cli {
    /// CSV file with FirstName,LastName,Institution and four score columns
    #[arg(value_name = "INPUT", env = "GRADES_CSV", default_value = "grades.csv")]
    input: PathBuf,

    /// Report format written to stdout
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Optional: write every graded student to this CSV file
    #[arg(short, long, value_name = "PATH")]
    export: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok(); // Load .env file

    let _log_guard = init_logging()?;
    let cli = Cli::parse();

    run(&cli, &mut std::io::stdout().lock(), &mut std::io::stderr())
}

/// Warnings go to stderr; setting `LOG_FILE_PATH` adds a daily JSON log file.
fn init_logging() -> Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse()?));

    let (json_layer, guard) = match std::env::var("LOG_FILE_PATH") {
        Ok(log_file_path) => {
            let path = Path::new(&log_file_path);
            let dir = path.parent().unwrap_or(Path::new("."));
            let name = path.file_name().unwrap_or(path.as_os_str());
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, name));
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(guard)
}

/// Loads, grades, and reports. A load failure writes one line to `err`,
/// nothing to `out`, and returns a failure exit code.
fn run<W: Write, E: Write>(cli: &Cli, out: &mut W, err: &mut E) -> Result<ExitCode> {
    let students = match load_students(&cli.input) {
        Ok(students) => students,
        Err(e) => {
            error!(path = %cli.input.display(), error = %e, "Failed to load students");
            writeln!(err, "Error reading CSV: {e}")?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let overall = overall_topper(&students);
    let toppers = toppers_by_institution(&students);

    match cli.format {
        Format::Text => write_text(out, overall, &toppers)?,
        Format::Json => {
            let report = Report::new(students.len(), overall, &toppers);
            write_json(out, &report)?;
        }
    }

    if let Some(path) = &cli.export {
        write_roster(path, &students)?;
        info!(path = %path.display(), "Roster exported");
    }

    Ok(ExitCode::SUCCESS)
}
