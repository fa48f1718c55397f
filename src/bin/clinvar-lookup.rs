// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! clinvar-lookup CLI
//!
//! Interactive lookup of a single HGVS variant: validates it against
//! VariantValidator, queries ClinVar, and prints the classification report.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use clinvar_lookup::logging::init_logging;
use clinvar_lookup::{run_lookup, ClinVarClient, GenomeBuild, VariantQuery, VariantValidatorClient};
use tracing::info;

#[derive(Parser)]
#[command(name = "clinvar-lookup")]
#[command(author, version, about = "HGVS variant validation and ClinVar classification lookup")]
#[command(
    long_about = "Validate an HGVS variant and report its ClinVar classifications.

Prompts for the variant and genome build when they are not given.

Examples:
  clinvar-lookup
  clinvar-lookup --variant 'NM_000518.5:c.92+1G>A' --build GRCh38"
)]
struct Cli {
    /// HGVS variant (e.g. NM_000518.5:c.92+1G>A); prompted for when omitted
    #[arg(long)]
    variant: Option<String>,

    /// Genome build (GRCh38 or GRCh37); prompted for when omitted
    #[arg(long)]
    build: Option<String>,

    /// Directory for the rotating log file
    #[arg(long, default_value = ".")]
    log_dir: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    // Logging failures must not block a lookup; keep the guard alive for the
    // whole run so buffered events are flushed.
    let _guard = match init_logging(&cli.log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    };
    info!("starting ClinVar lookup");

    match run(cli) {
        Ok(report) => println!("{}", report),
        Err(e) => {
            eprintln!("Input error: {}", e);
            std::process::exit(1);
        }
    }
    info!("ClinVar lookup complete");
}

fn run(cli: Cli) -> Result<String, String> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let hgvs = match cli.variant {
        Some(v) => v,
        None => prompt(
            &mut lines,
            "Enter the HGVS variant (e.g., NM_000518.5:c.92+1G>A): ",
        )?,
    };
    let build_input = match cli.build {
        Some(b) => b,
        None => prompt(&mut lines, "Enter the genome build (GRCh38 or GRCh37): ")?,
    };

    let build: GenomeBuild = build_input.parse()?;
    let query = VariantQuery::new(hgvs, build)?;

    let validator = VariantValidatorClient::new().map_err(|e| e.to_string())?;
    let clinvar = ClinVarClient::new().map_err(|e| e.to_string())?;

    Ok(run_lookup(&validator, &clinvar, &query))
}

fn prompt<B: BufRead>(lines: &mut io::Lines<B>, message: &str) -> Result<String, String> {
    print!("{}", message);
    io::stdout().flush().map_err(|e| e.to_string())?;
    match lines.next() {
        Some(Ok(line)) => Ok(line.trim().to_string()),
        Some(Err(e)) => Err(e.to_string()),
        None => Err("no input provided".to_string()),
    }
}
