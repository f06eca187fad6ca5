use seabattle::{Board, BoardView, Orientation, Position, Ship};

fn board() -> Board {
    let mut board = Board::new(3);
    board
        .place_ship(Ship::new(Position::new(0, 0), 1, Orientation::Horizontal))
        .unwrap();
    board
        .place_ship(Ship::new(Position::new(2, 2), 1, Orientation::Vertical))
        .unwrap();
    board.finish_setup();
    board
}

#[test]
fn test_revealed_view() {
    let board = board();
    assert_eq!(
        BoardView::revealed(&board).to_string(),
        "  | 1 | 2 | 3 |\n1 | ■ | O | O |\n2 | O | O | O |\n3 | O | O | ■ |"
    );
}

#[test]
fn test_hidden_view_masks_ships() {
    let mut board = board();
    board.shoot(Position::new(1, 2)).unwrap();
    assert_eq!(
        BoardView::hidden(&board).to_string(),
        "  | 1 | 2 | 3 |\n1 | O | O | O |\n2 | O | O | . |\n3 | O | O | O |"
    );
}

#[test]
fn test_sunk_ship_and_surroundings_are_shown() {
    let mut board = board();
    board.shoot(Position::new(0, 0)).unwrap();
    assert_eq!(
        BoardView::hidden(&board).to_string(),
        "  | 1 | 2 | 3 |\n1 | X | . | O |\n2 | . | . | O |\n3 | O | O | O |"
    );
}
