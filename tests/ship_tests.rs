use battleship_hunt::{
    can_place, place_all, place_at, place_ship, BoardError, Cell, Grid, Orientation,
    CLASSIC_FLEET, SMALL_FLEET, STANDARD_FLEET,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn can_place_checks_bounds_and_water() {
    let mut grid = Grid::new(5);
    assert!(can_place(&grid, 0, 2, 3, Orientation::Horizontal));
    assert!(!can_place(&grid, 0, 3, 3, Orientation::Horizontal));
    assert!(can_place(&grid, 2, 4, 3, Orientation::Vertical));
    assert!(!can_place(&grid, 3, 4, 3, Orientation::Vertical));
    assert!(!can_place(&grid, 5, 0, 1, Orientation::Horizontal));

    place_at(&mut grid, 1, 1, 3, Orientation::Vertical).unwrap();
    assert!(!can_place(&grid, 2, 0, 3, Orientation::Horizontal));
    assert!(can_place(&grid, 0, 2, 3, Orientation::Vertical));

    // struck water is no longer free either
    battleship_hunt::attack(&mut grid, 4, 4).unwrap();
    assert!(!can_place(&grid, 4, 2, 3, Orientation::Horizontal));
}

#[test]
fn far_anchors_do_not_overflow() {
    let mut grid = Grid::new(5);
    assert!(!can_place(&grid, 0, usize::MAX, 2, Orientation::Horizontal));
    assert!(!can_place(&grid, usize::MAX, 0, 2, Orientation::Vertical));
    assert!(!can_place(&grid, usize::MAX - 1, 0, 2, Orientation::Horizontal));
    assert_eq!(
        place_at(&mut grid, usize::MAX, 0, 3, Orientation::Vertical).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(grid.count(Cell::Ship), 0);
}

#[test]
fn place_at_reports_overlap_and_bounds() {
    let mut grid = Grid::new(5);
    let ship = place_at(&mut grid, 2, 1, 3, Orientation::Horizontal).unwrap();
    assert_eq!(ship.cells(), &[(2, 1), (2, 2), (2, 3)]);
    assert_eq!(ship.origin(), (2, 1));
    assert_eq!(ship.orientation(), Orientation::Horizontal);
    assert!(ship.contains((2, 3)));
    assert!(!ship.contains((2, 4)));

    assert_eq!(
        place_at(&mut grid, 0, 2, 3, Orientation::Vertical).unwrap_err(),
        BoardError::ShipOverlaps
    );
    assert_eq!(
        place_at(&mut grid, 3, 0, 3, Orientation::Vertical).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        place_at(&mut grid, 0, 0, 6, Orientation::Vertical).unwrap_err(),
        BoardError::InvalidShipLength { length: 6, size: 5 }
    );
    assert_eq!(grid.count(Cell::Ship), 3);
}

#[test]
fn ship_is_sunk_when_every_cell_is_hit() {
    let mut grid = Grid::new(4);
    let ship = place_at(&mut grid, 1, 1, 2, Orientation::Horizontal).unwrap();
    assert!(!ship.is_sunk(&grid));
    battleship_hunt::attack(&mut grid, 1, 1).unwrap();
    assert!(!ship.is_sunk(&grid));
    battleship_hunt::attack(&mut grid, 1, 2).unwrap();
    assert!(ship.is_sunk(&grid));
}

#[test]
fn random_placement_marks_ship_cells() {
    let mut grid = Grid::new(10);
    let mut rng = SmallRng::seed_from_u64(42);
    let ship = place_ship(&mut grid, 5, &mut rng).unwrap();
    assert_eq!(ship.length(), 5);
    assert_eq!(grid.count(Cell::Ship), 5);
    for &(r, c) in ship.cells() {
        assert_eq!(grid.cell(r, c), Cell::Ship);
    }
}

#[test]
fn crowded_board_still_fills_by_scanning() {
    // two length-2 ships fill a 2x2 board exactly
    let mut grid = Grid::new(2);
    let mut rng = SmallRng::seed_from_u64(7);
    let ships = place_all(&mut grid, &[2, 2], &mut rng).unwrap();
    assert_eq!(ships.len(), 2);
    assert_eq!(grid.count(Cell::Ship), 4);
}

#[test]
fn full_board_reports_unable_to_place() {
    let mut grid = Grid::new(2);
    let mut rng = SmallRng::seed_from_u64(1);
    place_at(&mut grid, 0, 0, 2, Orientation::Horizontal).unwrap();
    place_at(&mut grid, 1, 0, 1, Orientation::Horizontal).unwrap();
    assert_eq!(
        place_ship(&mut grid, 2, &mut rng).unwrap_err(),
        BoardError::UnableToPlaceShip { length: 2 }
    );
    assert_eq!(
        place_ship(&mut grid, 0, &mut rng).unwrap_err(),
        BoardError::InvalidShipLength { length: 0, size: 2 }
    );
}

fn fleet_for(size: usize) -> &'static [usize] {
    match size {
        0..=6 => &SMALL_FLEET,
        7..=9 => &STANDARD_FLEET,
        _ => &CLASSIC_FLEET,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placed_fleets_are_disjoint_straight_and_in_bounds(seed in any::<u64>(), size in 5usize..=10) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut grid = Grid::new(size);
        let lengths = fleet_for(size);
        let ships = place_all(&mut grid, lengths, &mut rng).unwrap();

        prop_assert_eq!(ships.len(), lengths.len());
        let mut seen = std::collections::HashSet::new();
        for (ship, &len) in ships.iter().zip(lengths) {
            prop_assert_eq!(ship.length(), len);
            let (r0, c0) = ship.origin();
            for (i, &(r, c)) in ship.cells().iter().enumerate() {
                prop_assert!(r < size && c < size);
                let expected = match ship.orientation() {
                    Orientation::Horizontal => (r0, c0 + i),
                    Orientation::Vertical => (r0 + i, c0),
                };
                prop_assert_eq!((r, c), expected);
                prop_assert!(seen.insert((r, c)), "cell {:?} shared by two ships", (r, c));
            }
        }
        prop_assert_eq!(grid.count(Cell::Ship), seen.len());
    }
}
