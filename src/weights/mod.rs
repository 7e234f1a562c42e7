//! Chain weight calculation module

pub mod walker;

use serde::{Deserialize, Serialize};

use crate::graph::{FrameId, SegmentGraph};
use walker::{walk_chain, CycleError};

/// Accumulated chain weight for a single frame
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FrameWeight {
    /// Frame the chains were walked from
    pub frame: FrameId,

    /// Total capped reference strength reachable from the frame
    pub weight: u64,
}

/// Per-frame weights plus the longest chain seen across all of them
#[derive(Debug, Clone)]
pub struct WeightReport {
    /// One entry per bytestream-order frame, in the same order
    pub weights: Vec<FrameWeight>,

    /// Longest surviving chain across all walks
    pub max_chain_length: u32,
}

/// Walk every frame in bytestream order and collect its chain weight
pub fn calculate_weights(
    segment: &SegmentGraph,
    mb_threshold: u32,
) -> Result<WeightReport, CycleError> {
    let mut weights = Vec::with_capacity(segment.bytestream_order.len());
    let mut max_chain_length = 0;

    for &frame in &segment.bytestream_order {
        let walk = walk_chain(&segment.graph, frame, mb_threshold)?;
        max_chain_length = max_chain_length.max(walk.chain_length);
        weights.push(FrameWeight {
            frame,
            weight: walk.weight,
        });
    }

    log::info!("Maximum chain length: {}", max_chain_length);

    Ok(WeightReport {
        weights,
        max_chain_length,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn segment(records: &[(FrameId, u32, FrameId)]) -> SegmentGraph {
        let mut builder = GraphBuilder::new();
        for &(referenced, weight, referenced_by) in records {
            builder.record(referenced, weight, referenced_by);
        }
        builder.finish()
    }

    #[test]
    fn one_result_per_frame_in_bytestream_order() {
        let segment = segment(&[(3, 4, 5), (1, 2, 6), (2, 0, 0)]);
        let report = calculate_weights(&segment, 1).unwrap();

        let frames: Vec<FrameId> = report.weights.iter().map(|w| w.frame).collect();
        assert_eq!(frames, vec![3, 1, 2]);
    }

    #[test]
    fn sinks_score_zero_with_a_chain_of_one() {
        let segment = segment(&[(1, 5, 2), (2, 0, 3)]);
        let report = calculate_weights(&segment, 2).unwrap();

        assert_eq!(report.weights[0].weight, 5);
        assert_eq!(report.weights[1].weight, 0);
        assert_eq!(report.max_chain_length, 2);
    }

    #[test]
    fn raising_the_threshold_never_raises_a_weight() {
        let segment = segment(&[(1, 9, 2), (2, 4, 3), (3, 6, 4), (1, 2, 5)]);
        let mut previous: Option<WeightReport> = None;

        for mb_threshold in [0, 2, 4, 6, 10] {
            let report = calculate_weights(&segment, mb_threshold).unwrap();
            if let Some(prev) = &previous {
                assert!(report.max_chain_length <= prev.max_chain_length);
                for (current, older) in report.weights.iter().zip(&prev.weights) {
                    assert!(current.weight <= older.weight);
                }
            }
            previous = Some(report);
        }
    }

    #[test]
    fn cycle_anywhere_fails_the_calculation() {
        let segment = segment(&[(1, 5, 2), (2, 5, 1)]);
        assert!(calculate_weights(&segment, 1).is_err());
    }
}
