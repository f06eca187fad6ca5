use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use seabattle::{
    fleet::random_ship, random_board, Board, BoardError, GameConfig, Orientation, Position, Ship,
    ShotOutcome, BOARD_SIZE, FLEET_SIZE,
};

fn orientation(vertical: bool) -> Orientation {
    if vertical {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    }
}

/// Board with a few random placements, some of which may have failed.
fn partial_board(seed: u64) -> (Board, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new(BOARD_SIZE);
    let tries = rng.random_range(0..6);
    for _ in 0..tries {
        let len = rng.random_range(1..=4);
        let _ = board.place_ship(random_ship(&mut rng, BOARD_SIZE, len));
    }
    (board, rng)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn occupied_cells_form_a_line(
        row in -2i32..10,
        col in -2i32..10,
        length in 1usize..6,
        vertical in any::<bool>(),
    ) {
        let ship = Ship::new(Position::new(row, col), length, orientation(vertical));
        let cells = ship.occupied_cells();
        prop_assert_eq!(cells.len(), length);
        for (i, cell) in cells.iter().enumerate() {
            let expected = if vertical {
                Position::new(row + i as i32, col)
            } else {
                Position::new(row, col + i as i32)
            };
            prop_assert_eq!(*cell, expected);
        }
    }

    #[test]
    fn placement_is_atomic(
        seed in any::<u64>(),
        row in -1i32..7,
        col in -1i32..7,
        length in 1usize..5,
        vertical in any::<bool>(),
    ) {
        let (mut board, _) = partial_board(seed);
        let before = board.clone();
        let ship = Ship::new(Position::new(row, col), length, orientation(vertical));
        match board.place_ship(ship.clone()) {
            Err(e) => {
                prop_assert_eq!(e, BoardError::InvalidPlacement);
                prop_assert_eq!(&board, &before);
            }
            Ok(()) => {
                prop_assert_eq!(board.ships().len(), before.ships().len() + 1);
                for cell in ship.cells() {
                    for near in cell.surrounding() {
                        if board.in_bounds(near) {
                            prop_assert!(board.is_excluded(near));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn repeated_shot_is_rejected_without_changes(
        seed in any::<u64>(),
        row in 0..BOARD_SIZE as i32,
        col in 0..BOARD_SIZE as i32,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = random_board(&mut rng, &GameConfig::default());
        let target = Position::new(row, col);
        board.shoot(target).unwrap();
        let after = board.clone();
        prop_assert_eq!(board.shoot(target), Err(BoardError::AlreadyTargeted));
        prop_assert_eq!(&board, &after);
    }

    #[test]
    fn shooting_everything_sinks_the_fleet(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = random_board(&mut rng, &GameConfig::default());
        let mut sunk = 0;
        for row in 0..BOARD_SIZE as i32 {
            for col in 0..BOARD_SIZE as i32 {
                match board.shoot(Position::new(row, col)) {
                    Ok(ShotOutcome::Sunk) => sunk += 1,
                    Ok(_) | Err(BoardError::AlreadyTargeted) => {}
                    Err(e) => prop_assert!(false, "unexpected error {:?}", e),
                }
                prop_assert!(board.destroyed_count() <= board.ships().len());
                prop_assert_eq!(board.destroyed_count(), sunk);
            }
        }
        prop_assert_eq!(sunk, FLEET_SIZE);
        prop_assert!(board.all_sunk());
    }

    #[test]
    fn last_cell_of_each_ship_sinks_it(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = random_board(&mut rng, &GameConfig::default());
        let ships: Vec<Ship> = board.ships().to_vec();
        for (i, ship) in ships.iter().enumerate() {
            let cells = ship.occupied_cells();
            for (k, &cell) in cells.iter().enumerate() {
                let expected = if k + 1 == cells.len() {
                    ShotOutcome::Sunk
                } else {
                    ShotOutcome::Hit
                };
                prop_assert_eq!(board.shoot(cell), Ok(expected));
            }
            prop_assert_eq!(board.destroyed_count(), i + 1);
            prop_assert!(board.ships()[i].is_sunk());
        }
    }
}
