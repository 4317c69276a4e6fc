//! eidscan - Embedded product identifier scanner CLI
//!
//! Scan binary files for the embedded identifier header and report the
//! vendor/product/version evidence that follows it.

use anyhow::Result;
use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;

use eidscan::{EmbeddedIdAnalyzer, Evidence};

#[derive(Parser, Debug)]
#[command(name = "eidscan")]
#[command(
    author,
    version,
    about = "Scan binary files for embedded product identifiers"
)]
#[command(long_about = "
eidscan searches arbitrary binary files for the embedded product
identifier header (EID:50CA347E-88EF4066:) and reports the
vendor/product/version evidence that follows it, from either the
key-value form or the CPE 2.3 form. Files without the header produce
no output. Multiple files are scanned in parallel.

EXAMPLES:
    eidscan firmware.bin             # Scan one file
    eidscan --json build/*.o         # JSON output for tooling
    eidscan --filter build/*.o       # Only list files carrying the header
")]
struct Cli {
    /// Target files to scan
    #[arg(required = true)]
    targets: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Only print the paths of files containing the header
    #[arg(long)]
    filter: bool,
}

/// Per-file scan outcome for reporting.
#[derive(Debug, Serialize)]
struct FileReport {
    path: PathBuf,
    evidence: Vec<Evidence>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    for target in &cli.targets {
        if !target.exists() {
            anyhow::bail!("File does not exist: {}", target.display());
        }
    }

    let analyzer = EmbeddedIdAnalyzer::new();

    if cli.filter {
        let hits: Vec<&PathBuf> = cli
            .targets
            .par_iter()
            .filter(|path| analyzer.accept(path))
            .collect();
        for path in hits {
            println!("{}", path.display());
        }
        return Ok(());
    }

    let reports: Vec<FileReport> = cli
        .targets
        .par_iter()
        .map(|path| {
            let mut evidence = Vec::new();
            if let Err(e) = analyzer.analyze(path, &mut evidence) {
                log::warn!("problem analyzing {}: {e}", path.display());
            }
            FileReport {
                path: path.clone(),
                evidence,
            }
        })
        .collect();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in reports.iter().filter(|r| !r.evidence.is_empty()) {
            println!("{}", report.path.display());
            for e in &report.evidence {
                println!("  [{}] {} {} = {}", e.confidence, e.source, e.name, e.value);
            }
        }
    }

    Ok(())
}
