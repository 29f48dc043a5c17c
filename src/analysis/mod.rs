//! Region analysis over the wall graph
//!
//! Partitions the grid into maximal connected components ("rooms") where two
//! adjacent cells are connected iff no wall separates them.

/// Flood-fill room detection and the derived room map
pub mod regions;

pub use regions::RoomMap;
