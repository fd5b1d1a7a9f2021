//! Verify blocks loaded from a block-explorer JSON file

use anyhow::{Context, Result};
use block_integrity::{BlockLookup, BlockSource, BlockVerifier, MemoryBlockSource, VerifierConfig};
use clap::Parser;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "verify-block", version, about = "Check block hashes and merkle roots")]
struct Args {
    /// JSON file holding one explorer block object or an array of them
    #[arg(long, short = 'b')]
    blocks: PathBuf,

    /// Block hash or height; every block in the file is checked when omitted
    lookup: Option<String>,

    /// Print results as JSON lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let file = File::open(&args.blocks)
        .with_context(|| format!("opening {}", args.blocks.display()))?;
    let source = MemoryBlockSource::from_reader(BufReader::new(file))
        .with_context(|| format!("reading blocks from {}", args.blocks.display()))?;

    let verifier = BlockVerifier::with_config(
        VerifierConfig::try_from_env().context("loading configuration from environment")?,
    );

    let blocks = match &args.lookup {
        Some(key) => vec![source.retrieve(&BlockLookup::parse(key)?)?],
        None => source.blocks().into_iter().cloned().collect(),
    };

    let mut all_valid = true;
    for block in &blocks {
        let result = verifier
            .verify(block)
            .with_context(|| format!("verifying block {}", block))?;
        all_valid &= result.is_valid();

        if args.json {
            println!(
                "{}",
                serde_json::json!({
                    "hash": block.hash,
                    "height": block.height,
                    "result": result,
                })
            );
        } else {
            let entries: Vec<String> = result
                .entries()
                .iter()
                .map(|(key, ok)| format!("{}={}", key, ok))
                .collect();
            println!("{}: {}", block, entries.join(" "));
        }
    }

    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
