// src/bin/log-scout.rs
//! Log Scout CLI binary.

#![deny(missing_docs)]

use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};

use log_scout::catalog::Catalog;
use log_scout::cli;
use log_scout::config::Config;
use log_scout::detect::ServiceDetector;
use log_scout::error::ScoutError;
use log_scout::generate::generate_acquis;

fn main() -> ScoutError<()> {
    let args = cli::Cli::parse();
    let verbosity = args.verbose;
    let quiet = args.quiet;

    match args.command {
        // init: writes the default project config.
        cli::Commands::Init { path, force } => {
            let mut root: PathBuf = path.unwrap_or_else(|| PathBuf::from("."));
            if root.is_file()
                && let Some(parent) = root.parent()
            {
                root = parent.to_path_buf();
            }
            let path_written = Config::write_default_config_at(root.as_path(), force)?;
            if !quiet {
                println!(
                    "{} .log-scout.toml at {}",
                    if force { "Overwrote" } else { "Initialized" },
                    path_written.display()
                );
            }
        }
        // detect: probes the host and reports findings, writes nothing.
        cli::Commands::Detect { catalog } => {
            let cfg = Config::load_or_default(Path::new("."))?;
            let catalog_path = catalog.unwrap_or_else(|| PathBuf::from(&cfg.catalog));
            let catalog = Catalog::load(&catalog_path)?;
            let mut sd = ServiceDetector::from_catalog(&catalog);
            sd.detect()?;
            if !quiet {
                for record in sd.records() {
                    if record.existing.is_empty() {
                        if verbosity > 0 {
                            println!("{}: no log files found", record.name.yellow());
                        }
                        continue;
                    }
                    println!("{}:", record.name.green());
                    for file in &record.existing {
                        println!("  {file}");
                    }
                    if verbosity > 1 && !record.patterns.is_empty() {
                        println!("  patterns: {}", record.patterns.join(", "));
                    }
                    if verbosity > 0
                        && let Some(collections) = sd.collections(&record.name)
                        && !collections.is_empty()
                    {
                        println!("  collections: {}", collections.join(", "));
                    }
                }
            }
        }
        // generate: probes the host and appends acquisition records.
        cli::Commands::Generate { catalog, output } => {
            let cfg = Config::load_or_default(Path::new("."))?;
            let catalog_path = catalog.unwrap_or_else(|| PathBuf::from(&cfg.catalog));
            let output_path = output.unwrap_or_else(|| PathBuf::from(&cfg.output));
            let catalog = Catalog::load(&catalog_path)?;
            let mut sd = ServiceDetector::from_catalog(&catalog);
            sd.detect()?;
            let written = generate_acquis(&sd, &output_path)?;
            if !quiet {
                println!(
                    "{} '{}' ({} {})",
                    "Generated".green(),
                    output_path.display(),
                    written,
                    if written == 1 { "record" } else { "records" }
                );
            }
        }
    }
    Ok(())
}
