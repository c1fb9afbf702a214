//! slotlab — reel cadence tables and line scanning from the console
//!
//! Usage:
//!   slotlab cadence [--fixture rounds.yaml] [--json]
//!   slotlab scan 5 0 5 [--json]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use rf_slot_core::{CadenceBuilder, CadenceFixture, SymbolCode, WinningCombinations};

#[derive(Parser)]
#[command(name = "slotlab", about = "Slot reel cadence and line tools")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the stop cadence of every round
    Cadence {
        /// JSON or YAML fixture (defaults to the built-in rounds)
        #[arg(short, long)]
        fixture: Option<PathBuf>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Find winning combinations on a line of symbol codes
    Scan {
        /// Symbol codes, left to right
        #[arg(allow_negative_numbers = true)]
        codes: Vec<SymbolCode>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Cadence { fixture, json } => print_cadences(fixture, json),
        Commands::Scan { codes, json } => print_scan(codes, json),
    }
}

fn print_cadences(fixture: Option<PathBuf>, json: bool) -> Result<()> {
    let fixture = match fixture {
        Some(path) => CadenceFixture::load(&path)
            .with_context(|| format!("Failed to load fixture {}", path.display()))?,
        None => CadenceFixture::default(),
    };

    let cadences = CadenceBuilder::new(fixture.config).round_cadences(&fixture.rounds);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&cadences).context("Failed to serialize cadences")?
        );
    } else {
        println!("CADENCES: {:?}", cadences);
    }
    Ok(())
}

fn print_scan(mut codes: Vec<SymbolCode>, json: bool) -> Result<()> {
    let original = codes.clone();
    let matches = WinningCombinations::call(&mut codes);

    if codes != original {
        log::info!("Wildcards resolved: {:?} -> {:?}", original, codes);
    }

    if json {
        let value = serde_json::json!({ "matches": matches, "line": codes });
        println!(
            "{}",
            serde_json::to_string_pretty(&value).context("Failed to serialize matches")?
        );
    } else {
        for m in &matches {
            println!("{} {:?}", m.symbol, m.indices);
        }
        if matches.is_empty() {
            println!("no winning combinations");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_scan_accepts_negative_codes() {
        let cli = Cli::try_parse_from(["slotlab", "scan", "5", "-3", "0"]).unwrap();
        match cli.command {
            Commands::Scan { codes, json } => {
                assert_eq!(codes, vec![5, -3, 0]);
                assert!(!json);
            }
            _ => panic!("expected scan"),
        }
    }

    #[test]
    fn test_cadence_fixture_flag() {
        let cli = Cli::try_parse_from(["slotlab", "-v", "cadence", "--fixture", "rounds.yaml", "--json"])
            .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Cadence { fixture, json } => {
                assert_eq!(fixture, Some(PathBuf::from("rounds.yaml")));
                assert!(json);
            }
            _ => panic!("expected cadence"),
        }
    }
}
