//! DiskAudit: two-pass disk space audit.
//!
//! Thin binary entry point. All audit logic lives in the `diskaudit-core`
//! crate; this file parses arguments, prints progress and the report, and
//! writes the export files.

mod cli;
mod render;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use diskaudit_core::export::{export_csv, export_json};
use diskaudit_core::AuditError;
use signal_hook::consts::SIGINT;
use std::io::{self, Write};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the report.
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let config = cli.audit_config();
    let root = config.root.clone();
    tracing::debug!("Audit configuration: {config:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render::banner(&mut out, &root)?;

    let handle = diskaudit_core::start_audit(config.clone())
        .context("failed to start audit")?;
    register_interrupt(handle.cancel_flag());
    for msg in handle.progress_rx.iter() {
        render::progress(&mut out, &msg)?;
        out.flush()?;
    }
    let report = match handle.wait() {
        Ok(report) => report,
        Err(AuditError::Cancelled) => {
            render::interrupted(&mut out)?;
            out.flush()?;
            std::process::exit(1);
        }
        Err(err) => {
            return Err(err).with_context(|| format!("audit of {} failed", root.display()))
        }
    };

    render::report(&mut out, &report, &config)?;

    if let Some(csv_path) = cli.csv_path() {
        if report.totals.file_count() == 0 {
            render::nothing_to_export(&mut out)?;
        } else {
            let rows = export_csv(&report, csv_path)
                .with_context(|| format!("failed to export {}", csv_path.display()))?;
            render::csv_exported(&mut out, csv_path, rows)?;
        }
    }

    if let Some(json_path) = &cli.json {
        export_json(&report, json_path)
            .with_context(|| format!("failed to export {}", json_path.display()))?;
        render::json_exported(&mut out, json_path)?;
    }

    render::finished(&mut out, &report)?;
    Ok(())
}

/// First Ctrl-C cancels the audit between folders; a second one terminates
/// the process immediately.
fn register_interrupt(cancel: Arc<AtomicBool>) {
    if let Err(e) = signal_hook::flag::register_conditional_shutdown(SIGINT, 1, Arc::clone(&cancel)) {
        tracing::warn!("failed to register SIGINT shutdown: {e}");
    }
    if let Err(e) = signal_hook::flag::register(SIGINT, cancel) {
        tracing::warn!("failed to register SIGINT: {e}");
    }
}
