//! Validates the removal strategies: agreement with each other, the
//! no-candidate sentinel, and the brute-force restore discipline

use castlerooms::io::cli::random_grid;
use castlerooms::io::configuration::SAMPLE_WALLS;
use castlerooms::{BestRemoval, BruteForce, Direction, Memoized, RemovalStrategy, WallGrid};

fn sample_grid() -> WallGrid {
    WallGrid::with_walls(5, 5, SAMPLE_WALLS).unwrap()
}

#[test]
fn test_sample_floor_plan_best_removal() {
    let expected = Some(BestRemoval {
        combined_area: 21,
        cell: (2, 3),
        direction: Direction::South,
    });

    let mut grid = sample_grid();
    assert_eq!(Memoized.find_best_removal(&mut grid).unwrap(), expected);
    assert_eq!(BruteForce.find_best_removal(&mut grid).unwrap(), expected);
}

#[test]
fn test_strategies_agree_on_random_layouts() {
    for seed in 0..12 {
        for density in [0.2, 0.5, 0.8] {
            let mut grid = random_grid(7, 7, density, seed).unwrap();

            let memoized = Memoized.find_best_removal(&mut grid).unwrap();
            let brute = BruteForce.find_best_removal(&mut grid).unwrap();

            // Shared scan order makes the full result identical, not just
            // the combined area
            assert_eq!(memoized, brute, "seed {seed}, density {density}");
        }
    }
}

#[test]
fn test_open_grid_has_no_candidate() {
    let mut grid = WallGrid::new(4, 4).unwrap();
    assert_eq!(Memoized.find_best_removal(&mut grid).unwrap(), None);
    assert_eq!(BruteForce.find_best_removal(&mut grid).unwrap(), None);
}

#[test]
fn test_single_cell_grid_has_no_candidate() {
    let mut grid = WallGrid::new(1, 1).unwrap();
    assert_eq!(Memoized.find_best_removal(&mut grid).unwrap(), None);
    assert_eq!(BruteForce.find_best_removal(&mut grid).unwrap(), None);
}

#[test]
fn test_redundant_wall_is_never_reported() {
    // The only wall sits on a cycle: removing it merges nothing
    let mut grid = WallGrid::with_walls(2, 2, &[(0, 0, Direction::East)]).unwrap();

    assert_eq!(Memoized.find_best_removal(&mut grid).unwrap(), None);
    assert_eq!(BruteForce.find_best_removal(&mut grid).unwrap(), None);
}

#[test]
fn test_fully_walled_grid_merges_two_cells() {
    let mut grid = WallGrid::new(2, 2).unwrap();
    for x in 0..2 {
        for y in 0..2 {
            for direction in [Direction::East, Direction::South] {
                if grid.neighbor(x, y, direction).is_some() {
                    grid.set_wall(x, y, direction).unwrap();
                }
            }
        }
    }

    let expected = Some(BestRemoval {
        combined_area: 2,
        cell: (0, 0),
        direction: Direction::East,
    });
    assert_eq!(Memoized.find_best_removal(&mut grid).unwrap(), expected);
    assert_eq!(BruteForce.find_best_removal(&mut grid).unwrap(), expected);
}

#[test]
fn test_brute_force_leaves_grid_untouched() {
    for seed in 0..6 {
        let mut grid = random_grid(6, 6, 0.5, seed).unwrap();
        let snapshot = grid.clone();

        BruteForce.find_best_removal(&mut grid).unwrap();

        assert_eq!(grid, snapshot, "seed {seed}");
        grid.verify_symmetry().unwrap();
    }
}

#[test]
fn test_memoized_never_mutates_the_grid() {
    let mut grid = sample_grid();
    let snapshot = grid.clone();

    Memoized.find_best_removal(&mut grid).unwrap();

    assert_eq!(grid, snapshot);
}

#[test]
fn test_strategy_names_differ() {
    assert_ne!(Memoized.name(), BruteForce.name());
}
