//! Validates room detection: scan-order identifiers, area conservation and
//! the canonical floor-plan scenarios

use castlerooms::io::cli::random_grid;
use castlerooms::io::configuration::SAMPLE_WALLS;
use castlerooms::{Direction, RoomMap, WallGrid};

fn sample_grid() -> WallGrid {
    WallGrid::with_walls(5, 5, SAMPLE_WALLS).unwrap()
}

fn fully_walled_grid(rows: usize, cols: usize) -> WallGrid {
    let mut grid = WallGrid::new(rows, cols).unwrap();
    for x in 0..rows {
        for y in 0..cols {
            for direction in [Direction::East, Direction::South] {
                if grid.neighbor(x, y, direction).is_some() {
                    grid.set_wall(x, y, direction).unwrap();
                }
            }
        }
    }
    grid
}

fn total_area(map: &RoomMap) -> usize {
    (1..=map.room_count()).map(|room| map.area_of(room as u32)).sum()
}

#[test]
fn test_open_grid_is_one_room() {
    let grid = WallGrid::new(4, 7).unwrap();
    let map = RoomMap::analyze(&grid);

    assert_eq!(map.room_count(), 1);
    assert_eq!(map.max_area(), 28);
}

#[test]
fn test_fully_walled_grid_is_all_single_cells() {
    let grid = fully_walled_grid(3, 4);
    let map = RoomMap::analyze(&grid);

    assert_eq!(map.room_count(), 12);
    assert_eq!(map.max_area(), 1);
    assert_eq!(total_area(&map), 12);
}

#[test]
fn test_single_cell_grid() {
    let grid = WallGrid::new(1, 1).unwrap();
    let map = RoomMap::analyze(&grid);

    assert_eq!(map.room_count(), 1);
    assert_eq!(map.max_area(), 1);
}

#[test]
fn test_area_is_conserved_on_random_layouts() {
    for seed in 0..8 {
        for density in [0.1, 0.4, 0.7] {
            let grid = random_grid(9, 6, density, seed).unwrap();
            let map = RoomMap::analyze(&grid);
            assert_eq!(total_area(&map), 54, "seed {seed}, density {density}");
        }
    }
}

#[test]
fn test_sample_floor_plan_analysis() {
    let grid = sample_grid();
    grid.verify_symmetry().unwrap();

    let map = RoomMap::analyze(&grid);
    assert_eq!(map.room_count(), 6);
    assert_eq!(map.max_area(), 12);
    assert_eq!(total_area(&map), 25);

    // Identifiers follow row-major discovery order
    assert_eq!(map.room_at(0, 0), Some(1));
    assert_eq!(map.room_at(0, 1), Some(2));
    assert_eq!(map.room_at(0, 2), Some(3));
    assert_eq!(map.room_at(1, 0), Some(4));
    assert_eq!(map.room_at(1, 1), Some(5));
    assert_eq!(map.room_at(2, 2), Some(6));

    assert_eq!(map.area_of(1), 1);
    assert_eq!(map.area_of(2), 1);
    assert_eq!(map.area_of(3), 9);
    assert_eq!(map.area_of(4), 12);
    assert_eq!(map.area_of(5), 1);
    assert_eq!(map.area_of(6), 1);
}

#[test]
fn test_analysis_reflects_mutations_after_reanalysis() {
    let mut grid = sample_grid();
    let before = RoomMap::analyze(&grid);
    assert_eq!(before.room_count(), 6);

    // Knock out the wall between the 12-cell and 9-cell rooms
    grid.toggle_wall(2, 3, Direction::South).unwrap();
    let after = RoomMap::analyze(&grid);

    assert_eq!(after.room_count(), 5);
    assert_eq!(after.max_area(), 21);
}

#[test]
fn test_symmetry_survives_random_construction() {
    for seed in 0..5 {
        let grid = random_grid(8, 8, 0.5, seed).unwrap();
        grid.verify_symmetry().unwrap();
    }
}
