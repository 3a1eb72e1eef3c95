//! parts-labels: printable component label sheets
//!
//! Reads a JSON job document and writes a PDF sheet of labels, each with a
//! schematic symbol, a package outline and the part's key specifications.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use regex::Regex;
use serde::Serialize;
use tracing::{error, info, warn, Level};
use tracing_subscriber::EnvFilter;

use parts_labels::backend::write_output;
use parts_labels::config;
use parts_labels::error::{BackendError, RenderError};
use parts_labels::{Catalog, PdfBackend, RenderEngine, RenderSummary};

const EXIT_RUNTIME: u8 = 1;
const EXIT_CONFIG: u8 = 3;
const EXIT_IO: u8 = 4;

const FALLBACK_STEM: &str = "component_labels";

/// Printable label sheets for electronic component storage.
///
/// Each label shows the schematic symbol, a JEDEC-aligned package outline and
/// the part number with key specifications.
#[derive(Parser, Debug)]
#[command(name = "parts-labels")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the job file
    #[arg(value_name = "CONFIG_FILE")]
    config: PathBuf,

    /// Output PDF path (default: out/<yymmdd_HHMM>_<title>.pdf)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN, // Default to warn for unknown levels
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Turns a job title into a safe file name stem.
fn slugify(title: &str) -> Result<String, regex::Error> {
    let lower = title.trim().to_lowercase();
    let s = Regex::new(r"\s+")?.replace_all(&lower, "_");
    let s = Regex::new(r"[^a-z0-9._-]")?.replace_all(&s, "");
    let s = Regex::new(r"_+")?.replace_all(&s, "_");
    let s = s.trim_matches(|c| matches!(c, '.' | '_' | '-'));

    Ok(if s.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        s.to_string()
    })
}

/// `out/<yymmdd_HHMM>_<slug>.pdf` for the current local time.
fn default_output_path(title: &str) -> PathBuf {
    let timestamp = chrono::Local::now().format("%y%m%d_%H%M");
    let stem = slugify(title).unwrap_or_else(|_| FALLBACK_STEM.to_string());
    Path::new("out").join(format!("{timestamp}_{stem}.pdf"))
}

#[derive(Serialize)]
struct SuccessReport {
    ok: bool,
    output: String,
    #[serde(flatten)]
    summary: RenderSummary,
}

#[derive(Serialize)]
struct ErrorReport {
    ok: bool,
    exit_code: u8,
    message: String,
}

/// Reports a fatal error and returns its exit code.
fn fail(json: bool, exit_code: u8, message: String) -> ExitCode {
    if json {
        let report = ErrorReport {
            ok: false,
            exit_code,
            message,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("Error: {} ({e})", report.message),
        }
    } else {
        eprintln!("Error: {message}");
    }
    ExitCode::from(exit_code)
}

/// Error message including every source in the chain.
fn describe(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

fn print_success(json: bool, output: &Path, summary: RenderSummary) -> ExitCode {
    if json {
        let report = SuccessReport {
            ok: true,
            output: output.display().to_string(),
            summary,
        };
        return match serde_json::to_string_pretty(&report) {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => fail(false, EXIT_RUNTIME, format!("failed to encode summary: {e}")),
        };
    }

    for skipped in &summary.skipped {
        eprintln!("Warning: label {} skipped: {}", skipped.index, skipped.reason);
    }
    for warning in &summary.warnings {
        eprintln!(
            "Warning: label {} ({}) truncated: {} lines dropped, {} shortened",
            warning.index, warning.title, warning.dropped_lines, warning.elided_lines
        );
    }
    println!(
        "Rendered {} labels on {} page(s) using {} -> {}",
        summary.rendered,
        summary.pages,
        summary.layout,
        output.display()
    );
    if !summary.skipped.is_empty() {
        println!("Skipped {} label(s)", summary.skipped.len());
    }
    ExitCode::SUCCESS
}

/// Entry point for the parts-labels tool.
fn main() -> ExitCode {
    let args = Args::parse();

    // Load the job
    let job = match config::load_job(&args.config) {
        Ok(job) => job,
        Err(e) => {
            let code = if e.is_io() { EXIT_IO } else { EXIT_CONFIG };
            return fail(args.json, code, describe(&e));
        }
    };

    // Initialise logging
    let log_level = get_log_level(args.verbose, args.quiet, &job.logging.level);
    init_tracing(log_level);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %args.config.display(),
        "Starting parts-labels"
    );

    let catalog = Catalog::builtin();
    let engine = RenderEngine::new(&catalog);
    let (report, bytes) = match engine.render_to(&job, &PdfBackend::new()) {
        Ok(result) => result,
        Err(e) => {
            error!(error = %e, "Render failed");
            let code = match e {
                RenderError::Config(_) => EXIT_CONFIG,
                RenderError::Backend(_) => EXIT_RUNTIME,
            };
            return fail(args.json, code, describe(&e));
        }
    };

    if !report.is_complete() {
        warn!(skipped = report.skipped.len(), "Some labels were left off the sheet");
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&job.title));
    if let Err(e) = write_output(&output, &bytes) {
        let code = match e {
            BackendError::WriteError { .. } => EXIT_IO,
            BackendError::Serialize { .. } => EXIT_RUNTIME,
        };
        return fail(args.json, code, describe(&e));
    }

    print_success(args.json, &output, report.summary())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn parse_output_and_json_flags() {
        let args = Args::try_parse_from(["parts-labels", "job.json", "-o", "sheet.pdf", "--json", "-vv"])
            .unwrap();
        assert_eq!(args.config, PathBuf::from("job.json"));
        assert_eq!(args.output, Some(PathBuf::from("sheet.pdf")));
        assert!(args.json);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn config_file_is_required() {
        assert!(Args::try_parse_from(["parts-labels"]).is_err());
    }

    #[test]
    fn log_level_precedence() {
        assert_eq!(get_log_level(0, true, "trace"), Level::ERROR);
        assert_eq!(get_log_level(0, false, "debug"), Level::DEBUG);
        assert_eq!(get_log_level(0, false, "nonsense"), Level::WARN);
        assert_eq!(get_log_level(1, false, "error"), Level::INFO);
        assert_eq!(get_log_level(5, false, "warn"), Level::TRACE);
    }

    #[test]
    fn slugify_titles() {
        assert_eq!(slugify("  Drawer 3: Diodes ").unwrap(), "drawer_3_diodes");
        assert_eq!(slugify("Small   signal / TO-92").unwrap(), "small_signal_to-92");
        assert_eq!(slugify("***").unwrap(), FALLBACK_STEM);
        assert_eq!(slugify("").unwrap(), FALLBACK_STEM);
    }

    #[test]
    fn default_output_is_timestamped_under_out() {
        let path = default_output_path("Component Labels");
        assert!(path.starts_with("out"));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.ends_with("_component_labels.pdf"));
        // yymmdd_HHMM_
        assert_eq!(name.find("_component"), Some(11));
    }
}
