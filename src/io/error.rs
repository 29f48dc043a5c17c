//! Error types for grid construction and wall operations

use std::fmt;

use crate::spatial::direction::Direction;

/// Main error type for all engine operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate outside the grid passed to a wall operation
    ///
    /// Rejected before any mutation; the wall store remains usable and
    /// unchanged after the rejection.
    OutOfRange {
        /// Row index that was requested
        x: usize,
        /// Column index that was requested
        y: usize,
        /// Number of rows in the grid
        rows: usize,
        /// Number of columns in the grid
        cols: usize,
    },

    /// Parameter validation failed during construction
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Bidirectional wall bookkeeping disagrees across an edge
    ///
    /// Indicates a construction bug in the wall store itself; surfaced by
    /// the symmetry audit so tests fail loudly instead of silently
    /// reporting wrong areas.
    WallAsymmetry {
        /// Row of the cell on the near side of the mismatched edge
        x: usize,
        /// Column of the cell on the near side of the mismatched edge
        y: usize,
        /// Direction of the mismatched wall relative to `(x, y)`
        direction: Direction,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { x, y, rows, cols } => {
                write!(f, "Cell ({x}, {y}) is outside the {rows}x{cols} grid")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::WallAsymmetry { x, y, direction } => {
                write!(
                    f,
                    "Wall asymmetry at ({x}, {y}) {direction}: paired wall bit is missing"
                )
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, GridError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
