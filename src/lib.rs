//! Grid-partition analysis engine for wall-enclosed room detection
//!
//! The engine maintains a rectangular grid of cells separated by directional
//! walls, partitions it into maximal connected regions ("rooms") via flood
//! fill, and searches for the single wall removal that produces the largest
//! combined room. The removal search ships in two interchangeable strategies
//! so their equivalence and performance gap can be measured directly.

#![forbid(unsafe_code)]

/// Region analysis: connected-component detection over the wall graph
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Wall-removal search strategies
pub mod optimizer;
/// Spatial primitives: directions and the wall grid
pub mod spatial;

pub use analysis::RoomMap;
pub use io::error::{GridError, Result};
pub use optimizer::{BestRemoval, BruteForce, Memoized, RemovalStrategy};
pub use spatial::{Direction, WallGrid};
