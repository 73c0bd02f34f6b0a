use super::*;

#[test]
fn end_is_start_plus_len() {
    let range = ByteRange::new(4, 3);
    assert_eq!(range.end(), 7);
    assert!(!range.is_empty());
}

#[test]
fn from_bounds_computes_len() {
    let range = ByteRange::from_bounds(2, 9);
    assert_eq!(range, ByteRange::new(2, 7));
}

#[test]
fn get_borrows_source_bytes() {
    let source = b"let x = 1";
    assert_eq!(ByteRange::new(4, 1).get(source), Some(&b"x"[..]));
    assert_eq!(ByteRange::new(8, 5).get(source), None);
}

#[test]
fn merge_covers_both() {
    let a = ByteRange::new(2, 2);
    let b = ByteRange::new(10, 1);
    assert_eq!(a.merge(b), ByteRange::from_bounds(2, 11));
    assert_eq!(b.merge(a), ByteRange::from_bounds(2, 11));
}

#[test]
fn debug_shows_bounds() {
    assert_eq!(format!("{:?}", ByteRange::new(3, 4)), "3..7");
}
