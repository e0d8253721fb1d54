use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);
    assert_eq!(Pos::from_index(112), CENTER);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
    assert_eq!(Pos::checked(15, 3), None);
    assert_eq!(Pos::checked(2, 3), Some(Pos::new(2, 3)));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_pos_distances() {
    let a = Pos::new(7, 7);
    assert_eq!(a.chebyshev(Pos::new(9, 6)), 2);
    assert_eq!(a.manhattan(Pos::new(9, 6)), 3);
    assert_eq!(a.chebyshev(a), 0);
}

#[test]
fn test_pos_offset_stops_at_edge() {
    let corner = Pos::new(0, 14);
    assert_eq!(corner.offset(0, 1, 1), None);
    assert_eq!(corner.offset(1, -1, 2), Some(Pos::new(2, 12)));
}

#[test]
fn test_pos_display() {
    assert_eq!(Pos::new(0, 0).to_string(), "A15");
    assert_eq!(Pos::new(14, 14).to_string(), "O1");
    assert_eq!(CENTER.to_string(), "H8");
}

#[test]
fn test_axis_directions_are_opposite() {
    for axis in Axis::ALL {
        let [(a, b), (c, d)] = axis.directions();
        assert_eq!((a, b), (-c, -d));
    }
}

#[test]
fn test_board_place_and_clear() {
    let mut board = Board::new();
    let pos = Pos::new(4, 9);
    board.place_stone(pos, Stone::Black);
    assert_eq!(board.get(pos), Stone::Black);

    // Re-placing replaces rather than stacking
    board.place_stone(pos, Stone::White);
    assert_eq!(board.get(pos), Stone::White);
    assert_eq!(board.stone_count(), 1);

    board.clear();
    assert!(board.is_board_empty());
}

#[test]
fn test_board_full() {
    let mut board = Board::new();
    for (i, pos) in Pos::all().enumerate() {
        let stone = if i % 2 == 0 { Stone::Black } else { Stone::White };
        board.place_stone(pos, stone);
    }
    assert!(board.is_full());
    assert_eq!(board.occupied().count() as usize, TOTAL_CELLS);
}
