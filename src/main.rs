use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{ArgGroup, Parser};

mod config;
mod data;
mod graph;
mod storage;
mod viz;
mod weights;

use config::{Resolution, ThresholdMode};

#[derive(Parser, Debug)]
#[clap(
    name = "chain-weight-analyzer",
    about = "Chain weight analysis of video frame reference graphs",
    group(ArgGroup::new("mode").required(true).args(["relative", "absolute"]))
)]
struct Cli {
    /// Path to the edge-list file extracted from the bitstream
    input: PathBuf,

    /// Path for the per-frame weight list
    output: PathBuf,

    /// Minimum reference strength required to extend a chain, in percent
    threshold: f64,

    /// Interpret the threshold relative to the heaviest reference in the segment
    #[clap(long, short)]
    relative: bool,

    /// Vertical resolution (e.g., 144, 1080) of the analyzed video; the
    /// threshold is taken against that resolution's macroblock count
    #[clap(long, short, value_name = "RESOLUTION")]
    absolute: Option<u32>,

    /// Write a Graphviz rendering of the reference graph
    #[clap(long, value_name = "PATH")]
    dot: Option<PathBuf>,

    /// Write a JSON summary of the run
    #[clap(long, value_name = "PATH")]
    summary: Option<PathBuf>,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn basename(path: &Path) -> std::borrow::Cow<'_, str> {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    // Resolve the threshold mode before touching the input
    let mode = match args.absolute {
        Some(vertical) => ThresholdMode::Absolute(Resolution::try_from(vertical)?),
        None => ThresholdMode::Relative,
    };

    log::info!(
        "Input: {} Output: {}",
        basename(&args.input),
        basename(&args.output)
    );

    // 1. Load the reference graph
    let segment = data::edgelist::load_edge_list(&args.input)?;

    // 2. Resolve the macroblock threshold
    if mode == ThresholdMode::Relative {
        log::info!("Max weight: {}", segment.max_weight);
    }
    let mb_threshold = mode.macroblock_threshold(args.threshold, segment.max_weight);
    log::info!("Using threshold: {}", mb_threshold);

    // 3. Walk the chains
    let report = weights::calculate_weights(&segment, mb_threshold)?;

    // 4. Save results
    storage::write_weights(&args.output, &report.weights)?;

    if let Some(path) = &args.summary {
        let summary = storage::RunSummary {
            stats: segment.stats,
            max_weight: segment.max_weight,
            mb_threshold,
            max_chain_length: report.max_chain_length,
        };
        storage::write_summary(path, &summary)?;
    }

    // 5. Generate the graph rendering if requested
    if let Some(path) = &args.dot {
        viz::write_dot(path, &segment)?;
    }

    log::info!("Analysis complete. Weights saved to {}", args.output.display());

    Ok(())
}
