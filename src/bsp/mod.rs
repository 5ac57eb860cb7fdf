// src/bsp/mod.rs

//! Codecs for the three BSP lumps a node builder writes: NODES,
//! SEGS and SSECTORS. This module reads and writes the records; it
//! does not build trees or traverse geometry.

pub mod node;
pub mod segment;
pub mod subsector;

pub use node::{BoundingBox, BspChild, BspNode, MAX_CHILD_INDEX};
pub use segment::BspSegment;
pub use subsector::BspSubsector;

/// Returns the root of a decoded node table.
///
/// The NODES lump is written children-first, so the root is the last
/// record; an empty table has no root.
pub fn root(nodes: &[BspNode]) -> Option<&BspNode> {
    nodes.last()
}
