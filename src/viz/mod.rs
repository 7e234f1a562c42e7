//! Graphviz export of the reference graph

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Result;

use crate::graph::SegmentGraph;

/// Pen width drawn for the heaviest reference in the segment
const MAX_PEN_WIDTH: f64 = 5.0;

/// Render the reference graph as a Graphviz digraph.
///
/// Each citation becomes an edge from the citing frame to the frame it
/// predicts from, labeled with its macroblock count; pen widths are scaled
/// against the heaviest reference in the segment.
pub fn write_dot(path: &Path, segment: &SegmentGraph) -> Result<()> {
    log::info!("Writing reference graph to {}", path.display());

    let mut file = BufWriter::new(File::create(path)?);
    writeln!(file, "digraph G {{")?;

    // Sorted for stable output; map iteration order is arbitrary.
    let mut frames: Vec<_> = segment.graph.iter().collect();
    frames.sort_by_key(|&(frame, _)| frame);

    for (frame, references) in frames {
        for reference in references {
            let pen_width =
                f64::from(reference.weight) / f64::from(segment.max_weight) * MAX_PEN_WIDTH;
            writeln!(
                file,
                "  {} -> {} [label=\"{}\",penwidth=\"{:.2}\"];",
                reference.by_frame, frame, reference.weight, pen_width
            )?;
        }
    }

    writeln!(file, "}}")?;
    file.flush()?;

    Ok(())
}
