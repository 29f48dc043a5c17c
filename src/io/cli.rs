//! Command-line interface for the room analysis demo harness
//!
//! Builds a grid (the classic sample plan or a seeded random layout), runs
//! the region analysis, then times one or both removal strategies against
//! the same grid so their performance gap is directly visible.

use clap::{Parser, ValueEnum};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::time::Instant;

use crate::analysis::regions::RoomMap;
use crate::io::configuration::{
    DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_SEED, DEFAULT_WALL_DENSITY, SAMPLE_DIMENSIONS,
    SAMPLE_WALLS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::layout::render_layout;
use crate::optimizer::brute_force::BruteForce;
use crate::optimizer::memoized::Memoized;
use crate::optimizer::strategy::RemovalStrategy;
use crate::spatial::direction::Direction;
use crate::spatial::grid::WallGrid;

/// Which removal strategy (or strategies) to run
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyChoice {
    /// Room-table lookup, O(rows * cols)
    Memoized,
    /// Toggle and re-analyze per candidate, O((rows * cols)^2)
    BruteForce,
    /// Run both and report both timings
    Both,
}

#[derive(Parser)]
#[command(name = "castlerooms")]
#[command(
    author,
    version,
    about = "Analyze wall-enclosed rooms and find the best single wall to remove"
)]
/// Command-line arguments for the analysis harness
pub struct Cli {
    /// Number of grid rows
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of grid columns
    #[arg(long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Seed for the random wall layout
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Probability that any internal edge carries a wall
    #[arg(short, long, default_value_t = DEFAULT_WALL_DENSITY)]
    pub density: f64,

    /// Use the classic 5x5 sample floor plan instead of a random layout
    #[arg(long)]
    pub sample: bool,

    /// Removal strategy to run
    #[arg(long, value_enum, default_value_t = StrategyChoice::Both)]
    pub strategy: StrategyChoice,

    /// Print the floor plan before the analysis results
    #[arg(short, long)]
    pub layout: bool,
}

impl Cli {
    /// Build the grid described by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error for invalid dimensions, a density outside
    /// `[0, 1]`, or a `--sample` request with non-sample dimensions.
    pub fn build_grid(&self) -> Result<WallGrid> {
        if self.sample {
            if (self.rows, self.cols) != SAMPLE_DIMENSIONS {
                return Err(invalid_parameter(
                    "rows/cols",
                    &format!("{}x{}", self.rows, self.cols),
                    &format!(
                        "the sample floor plan is {}x{}",
                        SAMPLE_DIMENSIONS.0, SAMPLE_DIMENSIONS.1
                    ),
                ));
            }
            return WallGrid::with_walls(SAMPLE_DIMENSIONS.0, SAMPLE_DIMENSIONS.1, SAMPLE_WALLS);
        }

        random_grid(self.rows, self.cols, self.density, self.seed)
    }
}

/// Generate a reproducible random wall layout
///
/// Every internal edge independently carries a wall with probability
/// `density`. Edges are visited in a fixed row-major order, so the same
/// seed always produces the same grid.
///
/// # Errors
///
/// Returns an error for invalid dimensions or a density outside `[0, 1]`.
pub fn random_grid(rows: usize, cols: usize, density: f64, seed: u64) -> Result<WallGrid> {
    if !(0.0..=1.0).contains(&density) {
        return Err(invalid_parameter(
            "density",
            &density,
            &"must be between 0.0 and 1.0",
        ));
    }

    let mut grid = WallGrid::new(rows, cols)?;
    let mut rng = StdRng::seed_from_u64(seed);

    for x in 0..rows {
        for y in 0..cols {
            for direction in [Direction::East, Direction::South] {
                if grid.neighbor(x, y, direction).is_some() && rng.random_bool(density) {
                    grid.set_wall(x, y, direction)?;
                }
            }
        }
    }

    Ok(grid)
}

/// Run the harness: analyze the grid and time the selected strategies
///
/// # Errors
///
/// Returns an error if grid construction fails; the searches themselves
/// cannot fail on a constructed grid.
// Allow print for the harness report
#[allow(clippy::print_stdout)]
pub fn run(cli: &Cli) -> Result<()> {
    let mut grid = cli.build_grid()?;

    if cli.layout {
        print!("{}", render_layout(&grid)?);
    }

    let map = RoomMap::analyze(&grid);
    println!(
        "grid: {}x{}, rooms: {}, largest room: {}",
        grid.rows(),
        grid.cols(),
        map.room_count(),
        map.max_area()
    );

    match cli.strategy {
        StrategyChoice::Memoized => report_strategy(&Memoized, &mut grid)?,
        StrategyChoice::BruteForce => report_strategy(&BruteForce, &mut grid)?,
        StrategyChoice::Both => {
            report_strategy(&Memoized, &mut grid)?;
            report_strategy(&BruteForce, &mut grid)?;
        }
    }

    Ok(())
}

// Allow print for the harness report
#[allow(clippy::print_stdout)]
fn report_strategy(strategy: &dyn RemovalStrategy, grid: &mut WallGrid) -> Result<()> {
    let start = Instant::now();
    let best = strategy.find_best_removal(grid)?;
    let elapsed = start.elapsed();

    match best {
        Some(removal) => println!(
            "{}: merge {} cells by removing the wall at ({}, {}) {} (took {elapsed:?})",
            strategy.name(),
            removal.combined_area,
            removal.cell.0,
            removal.cell.1,
            removal.direction,
        ),
        None => println!(
            "{}: no removable wall merges two rooms (took {elapsed:?})",
            strategy.name()
        ),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::random_grid;

    #[test]
    fn test_random_grid_is_reproducible() {
        let a = random_grid(6, 6, 0.4, 7).unwrap();
        let b = random_grid(6, 6, 0.4, 7).unwrap();
        assert_eq!(a, b);

        let c = random_grid(6, 6, 0.4, 8).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_random_grid_respects_density_extremes() {
        let open = random_grid(4, 4, 0.0, 1).unwrap();
        assert_eq!(open, super::WallGrid::new(4, 4).unwrap());

        let closed = random_grid(4, 4, 1.0, 1).unwrap();
        let map = crate::analysis::regions::RoomMap::analyze(&closed);
        assert_eq!(map.room_count(), 16);
    }

    #[test]
    fn test_density_out_of_range_rejected() {
        assert!(random_grid(3, 3, 1.5, 1).is_err());
        assert!(random_grid(3, 3, -0.1, 1).is_err());
    }
}
