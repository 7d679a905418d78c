use tictactoe::{BitBoard, BitBoardError, Grid};

#[test]
fn test_get_set_bounds() {
    let mut bb = Grid::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert!(!bb.get(0, 0).unwrap());

    assert_eq!(
        bb.set(3, 0),
        Err(BitBoardError::IndexOutOfBounds { row: 3, col: 0 })
    );
    assert!(bb.get(0, 3).is_err());
}

#[test]
fn test_not_stays_within_board() {
    let empty = Grid::new();
    let full = !empty;
    assert!(full.is_full());
    assert_eq!(full.count_ones(), 9);
    assert_eq!(full.into_raw(), 0b1_1111_1111);
    assert!((!full).is_empty());
}

#[test]
fn test_contains_all() {
    let row = Grid::from_cells([(0, 0), (0, 1), (0, 2)]).unwrap();
    let mut marks = Grid::from_cells([(0, 0), (0, 2), (2, 2)]).unwrap();
    assert!(!marks.contains_all(row));
    marks.set(0, 1).unwrap();
    assert!(marks.contains_all(row));
    assert!(marks.contains_all(Grid::new()));
}

#[test]
fn test_from_cells_and_iter() {
    let bb = BitBoard::<u16, 3>::from_cells([(2, 2), (0, 1)]).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (2, 2)]);
}

#[test]
fn test_combine_and_clear() {
    let a = Grid::from_cells([(0, 0), (1, 1)]).unwrap();
    let b = Grid::from_cells([(1, 1), (2, 2)]).unwrap();
    assert_eq!((a & b).count_ones(), 1);
    let mut both = a | b;
    assert_eq!(both.count_ones(), 3);
    both.clear_all();
    assert!(both.is_empty());
    assert_eq!(Grid::from_raw(u16::MAX).count_ones(), 9);
}
