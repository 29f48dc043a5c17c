//! Spatial primitives for the wall grid
//!
//! This module contains the leaf layer of the engine:
//! - Cardinal directions and their wall-mask bits
//! - The wall store with bidirectional consistency guarantees

/// Cardinal directions and neighbor offsets
pub mod direction;
/// Wall store with guaranteed bidirectional consistency
pub mod grid;

pub use direction::Direction;
pub use grid::{ToggleScope, WallGrid};
