use seabattle::{Orientation, Position, Ship};

#[test]
fn test_horizontal_cells() {
    let ship = Ship::new(Position::new(2, 1), 3, Orientation::Horizontal);
    assert_eq!(
        ship.occupied_cells(),
        vec![
            Position::new(2, 1),
            Position::new(2, 2),
            Position::new(2, 3)
        ]
    );
}

#[test]
fn test_vertical_cells() {
    let ship = Ship::new(Position::new(0, 0), 4, Orientation::Vertical);
    let cells: Vec<_> = ship.cells().map(|p| (p.row, p.col)).collect();
    assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
}

#[test]
fn test_is_hit_by() {
    let ship = Ship::new(Position::new(1, 1), 2, Orientation::Vertical);
    assert!(ship.is_hit_by(Position::new(1, 1)));
    assert!(ship.is_hit_by(Position::new(2, 1)));
    assert!(!ship.is_hit_by(Position::new(3, 1)));
    assert!(!ship.is_hit_by(Position::new(1, 2)));
    // querying does not damage the ship
    assert_eq!(ship.remaining_hits(), 2);
    assert!(!ship.is_sunk());
}

#[test]
fn test_single_cell_ship() {
    let ship = Ship::new(Position::new(5, 5), 1, Orientation::Horizontal);
    assert_eq!(ship.occupied_cells(), vec![Position::new(5, 5)]);
    assert_eq!(ship.bow(), Position::new(5, 5));
    assert_eq!(ship.length(), 1);
    assert_eq!(ship.orientation(), Orientation::Horizontal);
}

#[test]
fn test_cells_stop_at_coordinate_limit() {
    let ship = Ship::new(Position::new(i32::MAX, 0), 2, Orientation::Vertical);
    assert_eq!(ship.occupied_cells(), vec![Position::new(i32::MAX, 0)]);
    assert!(ship.is_hit_by(Position::new(i32::MAX, 0)));
    assert!(!ship.is_hit_by(Position::new(i32::MIN, 0)));
}

#[test]
fn test_surrounding_skips_overflowing_neighbours() {
    let corner = Position::new(i32::MAX, i32::MIN);
    let near: Vec<_> = corner.surrounding().collect();
    assert_eq!(near.len(), 4);
    assert!(near.contains(&corner));
    assert!(near.contains(&Position::new(i32::MAX - 1, i32::MIN + 1)));
}
