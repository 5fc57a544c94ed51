//! Review export classifier binary
//!
//! Reads a Technical Due Diligence review CSV export from a file or
//! stdin, runs the parsing and classification pipeline, and writes the
//! classified report to stdout as JSON. Diagnostics go to stderr.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use review_engine::summary::extract_executive_summary;
use review_engine::ReviewEngine;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "review-cli")]
#[command(version, about = "Classify a Technical Due Diligence review CSV export")]
struct Args {
    /// Path to the CSV export; reads stdin when omitted
    input: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Also extract the executive summary from the content rows
    #[arg(long)]
    summary: bool,
}

fn main() -> anyhow::Result<()> {
    // Keep stdout clean for the JSON report
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let csv_text = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    let engine = ReviewEngine::new();
    let report = engine.parse_report(&csv_text);

    tracing::info!(
        rag = report.data.rag_suggestions.len(),
        tone = report.data.tone_changes.len(),
        content = report.data.content_edits.len(),
        diagnostics = report.diagnostics.len(),
        "classified review rows"
    );

    let stdout = std::io::stdout();
    if args.summary {
        let summary = extract_executive_summary(&report.data.content_edits);
        let output = serde_json::json!({
            "report": report,
            "executive_summary": summary,
        });
        write_json(stdout.lock(), &output, args.pretty)?;
    } else {
        write_json(stdout.lock(), &report, args.pretty)?;
    }

    Ok(())
}

fn write_json<W: std::io::Write, T: serde::Serialize>(
    mut writer: W,
    value: &T,
    pretty: bool,
) -> anyhow::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, value)?;
    } else {
        serde_json::to_writer(&mut writer, value)?;
    }
    writeln!(writer)?;
    Ok(())
}
