//! Analyze a single recognized-text transcript.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use benescan_core::{analyze_text, AnalysisType};

/// Arguments for the analyze command.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Transcript file, or "-" for stdin
    input: PathBuf,

    /// Benefit-type hint for the extractor
    #[arg(short = 't', long, default_value = "unknown")]
    benefit_type: AnalysisType,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let raw_text = if args.input.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(&args.input)?
    };

    debug!(chars = raw_text.len(), "read transcript");

    let result = analyze_text(&raw_text, args.benefit_type);

    let json = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{json}");

    Ok(())
}
