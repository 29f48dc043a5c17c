//! Brute-force removal search
//!
//! Reference oracle: for every candidate wall it toggles the wall off, runs
//! a full region analysis, reads the merged area at the candidate cell, and
//! restores the wall before moving on. Total cost is O((rows * cols)^2).
//! The [`ToggleScope`] guard restores the wall even if the measurement is
//! interrupted, so the grid is bit-for-bit unchanged on every exit path.

use crate::analysis::regions::RoomMap;
use crate::io::error::Result;
use crate::optimizer::strategy::{BestRemoval, RemovalStrategy};
use crate::spatial::direction::Direction;
use crate::spatial::grid::{ToggleScope, WallGrid};

/// Oracle removal strategy that re-analyzes the grid per candidate
#[derive(Debug, Default, Clone, Copy)]
pub struct BruteForce;

impl RemovalStrategy for BruteForce {
    fn name(&self) -> &'static str {
        "brute force"
    }

    fn find_best_removal(&self, grid: &mut WallGrid) -> Result<Option<BestRemoval>> {
        // Baseline pass: only used to recognize removals that merge nothing
        let baseline = RoomMap::analyze(grid);
        let mut best: Option<BestRemoval> = None;

        for x in 0..grid.rows() {
            for y in 0..grid.cols() {
                for direction in Direction::ALL {
                    if grid.neighbor(x, y, direction).is_none() {
                        continue;
                    }
                    if !grid.has_wall(x, y, direction)? {
                        continue;
                    }

                    let scope = ToggleScope::remove(grid, x, y, direction)?;
                    let merged = RoomMap::analyze(scope.grid());
                    let combined_area = merged.area_at(x, y).unwrap_or(0);
                    let merged_rooms = merged.room_count();
                    scope.restore()?;

                    if merged_rooms == baseline.room_count() {
                        // Redundant wall: removal merged nothing
                        continue;
                    }

                    if best.is_none_or(|current| combined_area > current.combined_area) {
                        best = Some(BestRemoval {
                            combined_area,
                            cell: (x, y),
                            direction,
                        });
                    }
                }
            }
        }

        Ok(best)
    }
}
