//! Results persistence module

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::graph::GraphStats;
use crate::weights::FrameWeight;

/// Summary of a single analysis run
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RunSummary {
    /// Counters gathered while reading the edge list
    pub stats: GraphStats,

    /// Heaviest single reference in the segment
    pub max_weight: u32,

    /// Macroblock threshold the chains were walked with
    pub mb_threshold: u32,

    /// Longest surviving chain across all frames
    pub max_chain_length: u32,
}

/// Write the per-frame weight list, one `<frame> <weight>` line per entry
pub fn write_weights(path: &Path, weights: &[FrameWeight]) -> Result<()> {
    log::info!("Writing {} frame weights to {}", weights.len(), path.display());

    let mut file = BufWriter::new(File::create(path)?);
    for entry in weights {
        writeln!(file, "{} {}", entry.frame, entry.weight)?;
    }
    file.flush()?;

    Ok(())
}

/// Write a JSON summary of the run
pub fn write_summary(path: &Path, summary: &RunSummary) -> Result<()> {
    log::info!("Writing run summary to {}", path.display());

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(summary)?.as_bytes())?;

    Ok(())
}
