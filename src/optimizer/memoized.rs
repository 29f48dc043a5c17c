//! Memoized removal search
//!
//! Runs one region analysis, then scores every candidate wall in constant
//! time by summing the two precomputed room sizes on either side of it.
//! Total cost is O(rows * cols); the grid is never mutated.

use crate::analysis::regions::RoomMap;
use crate::io::error::Result;
use crate::optimizer::strategy::{BestRemoval, RemovalStrategy};
use crate::spatial::direction::Direction;
use crate::spatial::grid::WallGrid;

/// Production removal strategy backed by a precomputed room map
#[derive(Debug, Default, Clone, Copy)]
pub struct Memoized;

impl RemovalStrategy for Memoized {
    fn name(&self) -> &'static str {
        "memoized"
    }

    fn find_best_removal(&self, grid: &mut WallGrid) -> Result<Option<BestRemoval>> {
        let map = RoomMap::analyze(grid);
        let mut best: Option<BestRemoval> = None;

        for x in 0..grid.rows() {
            for y in 0..grid.cols() {
                for direction in Direction::ALL {
                    let Some((nx, ny)) = grid.neighbor(x, y, direction) else {
                        continue;
                    };
                    if !grid.has_wall(x, y, direction)? {
                        continue;
                    }

                    let (Some(here), Some(there)) = (map.room_at(x, y), map.room_at(nx, ny))
                    else {
                        continue;
                    };
                    if here == there {
                        // Redundant wall: removal merges nothing
                        continue;
                    }

                    let combined_area = map.area_of(here) + map.area_of(there);
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
