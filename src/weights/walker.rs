//! Threshold-pruned traversal of reference chains

use thiserror::Error;

use crate::graph::{FrameId, ReferenceGraph};

/// The reference graph must be acyclic; a cycle strong enough to be followed
/// would otherwise keep a walk alive forever
#[derive(Debug, Error, PartialEq, Eq)]
#[error("reference cycle detected while walking chains from frame {root}")]
pub struct CycleError {
    /// Frame the walk started from
    pub root: FrameId,
}

/// Outcome of walking the chains rooted at one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainWalk {
    /// Sum of capped reference strengths over every citation touched
    pub weight: u64,

    /// Nodes on the longest surviving chain, counting the root
    pub chain_length: u32,
}

/// Accumulate the reference strength flowing out of `root`.
///
/// The influence carried along a chain is capped by its weakest link so far.
/// Every citation contributes its capped strength once, but the walk only
/// descends through citations whose capped strength reaches `mb_threshold`;
/// a weaker link is counted and then ends its chain. Shared subchains are
/// re-walked once per surviving path, so cost follows the number of paths,
/// not the number of edges.
pub fn walk_chain(
    graph: &ReferenceGraph,
    root: FrameId,
    mb_threshold: u32,
) -> Result<ChainWalk, CycleError> {
    // An acyclic chain passes through each keyed frame at most once before
    // ending in a terminal node, so any deeper walk proves a cycle.
    let depth_limit = graph.len() as u32 + 1;

    let mut weight = 0u64;
    let mut chain_length = 0u32;
    let mut stack = vec![(root, u32::MAX, 0u32)];

    while let Some((frame, influence_cap, depth)) = stack.pop() {
        let reached = depth + 1;
        if reached > depth_limit {
            return Err(CycleError { root });
        }
        chain_length = chain_length.max(reached);

        // Pushed in reverse so citations are expanded in input order.
        for reference in graph.references(frame).iter().rev() {
            let influence = influence_cap.min(reference.weight);
            weight += u64::from(influence);
            if influence >= mb_threshold {
                stack.push((reference.by_frame, influence, depth + 1));
            }
        }
    }

    Ok(ChainWalk {
        weight,
        chain_length,
    })
}
