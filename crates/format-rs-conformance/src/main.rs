//! CLI entrypoint for format_rust conformance tooling.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand};

use format_rs_conformance::report::render_diff_report;
use format_rs_conformance::{builtin_vectors, run_all, ConformanceReport};

/// CLI for the conformance vector suite around format-rs-core.
#[derive(Debug, Parser)]
#[command(name = "format-rs-conformance")]
#[command(about = "Conformance tooling for format_rust")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Supported CLI subcommands.
#[derive(Debug, Subcommand)]
enum Command {
    /// Run the built-in vector table and optionally write reports.
    Run {
        /// Output markdown report path.
        #[arg(long)]
        report_md: Option<PathBuf>,
        /// Output JSON report path.
        #[arg(long)]
        report_json: Option<PathBuf>,
    },
    /// List the built-in vectors.
    List,
    /// Render a diff report between expected and actual text values.
    Diff {
        /// Expected text payload.
        #[arg(long)]
        expected: String,
        /// Actual text payload.
        #[arg(long)]
        actual: String,
    },
}

fn main() -> std::io::Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            report_md,
            report_json,
        } => {
            let summary = run_all(&builtin_vectors());
            let failed = summary.failed;
            let report = ConformanceReport {
                title: "format_rust conformance".into(),
                engine: "format-rs-core (fp, grouping)".into(),
                timestamp: SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_secs())
                    .unwrap_or(0),
                summary,
            };
            if let Some(path) = report_md {
                fs::write(path, report.to_markdown())?;
            }
            if let Some(path) = report_json {
                fs::write(path, report.to_json())?;
            }
            println!(
                "{} cases, {} passed, {} failed",
                report.summary.total, report.summary.passed, report.summary.failed
            );
            for r in report.summary.results.iter().filter(|r| !r.passed) {
                println!("FAIL {}: {}", r.case_name, r.detail.as_deref().unwrap_or(""));
            }
            Ok(if failed == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::List => {
            for v in builtin_vectors() {
                println!("{:<24} {:<12} {:?}", v.name, v.family, v.template);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Diff { expected, actual } => {
            println!("{}", render_diff_report(&expected, &actual));
            Ok(ExitCode::SUCCESS)
        }
    }
}
