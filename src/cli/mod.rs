use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::application::{LedgerOptions, ReservationLedger};
use crate::domain::ItemMatching;
use crate::io::{ExportFormat, Exporter};
use crate::logger::init_logger;
use crate::session::Session;

/// Location - interactive rental reservation tracker
#[derive(Parser, Debug)]
#[command(name = "location")]
#[command(about = "Book named items over date ranges and check them for overlaps")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Treat item names that differ only in case as the same item
    #[arg(short, long)]
    pub ignore_case: bool,

    /// Write all reservations to this file when the session ends
    #[arg(short, long)]
    pub export: Option<PathBuf>,

    /// Export format: csv, json (default: from the file extension, else csv)
    #[arg(short, long, requires = "export")]
    pub format: Option<String>,
}

impl Cli {
    pub fn ledger_options(&self) -> LedgerOptions {
        LedgerOptions {
            item_matching: if self.ignore_case {
                ItemMatching::CaseInsensitive
            } else {
                ItemMatching::Exact
            },
        }
    }

    /// Resolve the export target before the session starts so a bad
    /// `--format` fails fast instead of after the user has typed everything.
    pub fn export_target(&self) -> Result<Option<(&Path, ExportFormat)>> {
        let Some(path) = self.export.as_deref() else {
            return Ok(None);
        };

        let format = match self.format.as_deref() {
            Some(f) => ExportFormat::from_str(f).ok_or_else(|| {
                anyhow::anyhow!("Invalid export format '{}'. Valid formats: csv, json", f)
            })?,
            None => ExportFormat::from_path(path),
        };
        Ok(Some((path, format)))
    }

    pub fn run(self) -> Result<()> {
        init_logger(self.verbose);
        let export_target = self.export_target()?;

        let mut ledger = ReservationLedger::with_options(self.ledger_options());

        let stdin = io::stdin();
        let stdout = io::stdout();
        let summary = Session::new(&mut ledger, stdin.lock(), stdout.lock()).run()?;
        info!(
            attempts = summary.attempts,
            confirmed = summary.confirmed,
            "session finished"
        );

        if let Some((path, format)) = export_target {
            let count = export_to_file(&ledger, path, format)?;
            eprintln!("Exported {} reservation(s) to {}", count, path.display());
        }

        Ok(())
    }
}

/// Write the ledger to `path`, replacing any existing file.
pub fn export_to_file(ledger: &ReservationLedger, path: &Path, format: ExportFormat) -> Result<usize> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create export file '{}'", path.display()))?;

    let count = Exporter::new(ledger)
        .export(format, BufWriter::new(file))
        .with_context(|| format!("Failed to export reservations as {}", format))?;

    info!(count, path = %path.display(), %format, "reservations exported");
    Ok(count)
}
