//! Reference graph representation and construction

pub mod builder;
pub mod reference;

pub use builder::GraphBuilder;
pub use reference::{FrameId, GraphStats, Reference, ReferenceGraph, SegmentGraph};
