//! ASCII rendering of a wall grid as a floor plan
//!
//! Presentation-only consumer of the wall store's read queries. Interior
//! walls are drawn from each cell's north and west flags; the outer
//! boundary is always drawn closed, matching how the floor plans are
//! conventionally printed.

use crate::io::error::Result;
use crate::spatial::direction::Direction;
use crate::spatial::grid::WallGrid;

/// Render the grid as an ASCII floor plan
///
/// Each cell is three characters wide; `+`, `---` and `|` mark corners,
/// horizontal walls and vertical walls.
///
/// # Errors
///
/// Cannot fail in practice: only in-bounds cells are queried. The `Result`
/// exists because the wall queries themselves are fallible.
pub fn render_layout(grid: &WallGrid) -> Result<String> {
    let mut plan = String::new();

    for x in 0..grid.rows() {
        for y in 0..grid.cols() {
            plan.push('+');
            let top_closed = x == 0 || grid.has_wall(x, y, Direction::North)?;
            plan.push_str(if top_closed { "---" } else { "   " });
        }
        plan.push_str("+\n");

        for y in 0..grid.cols() {
            let left_closed = y == 0 || grid.has_wall(x, y, Direction::West)?;
            plan.push(if left_closed { '|' } else { ' ' });
            plan.push_str("   ");
        }
        plan.push_str("|\n");
    }

    for _ in 0..grid.cols() {
        plan.push_str("+---");
    }
    plan.push_str("+\n");

    Ok(plan)
}
