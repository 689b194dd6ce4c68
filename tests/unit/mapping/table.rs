use super::*;
use crate::foundation::core::Selector;

fn frames(t: &MappingTable) -> Vec<u32> {
    t.entries().iter().map(|e| e.frame).collect()
}

#[test]
fn identity_table_uses_primary_selector() {
    let t = MappingTable::identity(3, 10);
    assert_eq!(frames(&t), vec![0, 1, 2]);
    assert!(t.entries().iter().all(|e| e.selector == Selector::Primary));
}

#[test]
fn set_frame_writes_alternate_entry() {
    let mut t = MappingTable::identity(10, 20);
    t.set_frame(5, 10, false).unwrap();
    assert_eq!(t.entries()[5], MapIndex::alternate(10));
    assert_eq!(t.len(), 10);
}

#[test]
fn set_frame_rejects_out_of_bounds() {
    let mut t = MappingTable::identity(10, 20);
    assert_eq!(t.set_frame(10, 0, false), Err(ParseErrorKind::BadValue(10)));
    assert_eq!(t.set_frame(-1, 0, false), Err(ParseErrorKind::BadValue(-1)));
    assert_eq!(t.set_frame(0, 20, false), Err(ParseErrorKind::BadValue(20)));
    assert_eq!(t, MappingTable::identity(10, 20));
}

#[test]
fn set_frame_tolerant_drops_or_clamps() {
    let mut t = MappingTable::identity(4, 8);
    t.set_frame(9, 1, true).unwrap();
    assert_eq!(t, MappingTable::identity(4, 8));

    t.set_frame(1, 50, true).unwrap();
    t.set_frame(2, -3, true).unwrap();
    assert_eq!(t.entries()[1], MapIndex::alternate(7));
    assert_eq!(t.entries()[2], MapIndex::alternate(0));
}

#[test]
fn append_frame_grows_table() {
    let mut t = MappingTable::empty(10);
    for j in [0, 2, 4, 6] {
        t.append_frame(j, false).unwrap();
    }
    assert_eq!(frames(&t), vec![0, 2, 4, 6]);
    assert_eq!(t.append_frame(10, false), Err(ParseErrorKind::BadValue(10)));
}

#[test]
fn append_frame_tolerant_clamps_unless_bound_is_zero() {
    let mut t = MappingTable::empty(5);
    t.append_frame(99, true).unwrap();
    t.append_frame(-4, true).unwrap();
    assert_eq!(frames(&t), vec![4, 0]);

    let mut z = MappingTable::empty(0);
    assert_eq!(z.append_frame(0, true), Err(ParseErrorKind::BadValue(0)));
}

#[test]
fn fill_range_sets_every_entry() {
    let mut t = MappingTable::identity(12, 200);
    t.fill_range(IntRange::new(0, 9), 100, false).unwrap();
    assert!(frames(&t)[..10].iter().all(|&f| f == 100));
    assert_eq!(frames(&t)[10..], [10, 11]);
}

#[test]
fn fill_range_check_order() {
    let mut t = MappingTable::identity(10, 10);
    assert_eq!(
        t.fill_range(IntRange::new(-1, 20), 50, false),
        Err(ParseErrorKind::BadValue(-1))
    );
    assert_eq!(
        t.fill_range(IntRange::new(0, 20), 50, false),
        Err(ParseErrorKind::BadValue(20))
    );
    assert_eq!(
        t.fill_range(IntRange::new(5, 2), 50, false),
        Err(ParseErrorKind::BadValue(2))
    );
    assert_eq!(
        t.fill_range(IntRange::new(0, 2), 50, false),
        Err(ParseErrorKind::BadValue(50))
    );
}

#[test]
fn inverted_range_fails_even_when_tolerant() {
    let mut t = MappingTable::identity(10, 10);
    assert_eq!(
        t.fill_range(IntRange::new(5, 2), 1, true),
        Err(ParseErrorKind::BadValue(2))
    );
    assert_eq!(
        t.set_range(IntRange::new(5, 2), IntRange::new(0, 1), true),
        Err(ParseErrorKind::BadValue(2))
    );
}

#[test]
fn fill_range_tolerant_skips_outside_entries() {
    let mut t = MappingTable::identity(4, 4);
    t.fill_range(IntRange::new(-2, 1), 9, true).unwrap();
    assert_eq!(frames(&t), vec![3, 3, 2, 3]);
}

#[test]
fn set_range_equal_lengths_is_offset() {
    let mut t = MappingTable::identity(5, 20);
    t.set_range(IntRange::new(0, 4), IntRange::new(10, 14), false)
        .unwrap();
    assert_eq!(frames(&t), vec![10, 11, 12, 13, 14]);
}

#[test]
fn set_range_interpolates_and_reverses() {
    let mut t = MappingTable::identity(10, 20);
    t.set_range(IntRange::new(0, 9), IntRange::new(0, 4), false)
        .unwrap();
    assert_eq!(frames(&t), vec![0, 0, 1, 1, 2, 2, 3, 3, 4, 4]);

    let mut t = MappingTable::identity(5, 20);
    t.set_range(IntRange::new(0, 4), IntRange::new(14, 10), false)
        .unwrap();
    assert_eq!(frames(&t), vec![14, 13, 12, 11, 10]);

    let mut t = MappingTable::identity(3, 20);
    t.set_range(IntRange::new(0, 2), IntRange::new(0, 8), false)
        .unwrap();
    assert_eq!(frames(&t), vec![0, 3, 6]);
}

#[test]
fn set_range_checks_output_bounds() {
    let mut t = MappingTable::identity(5, 10);
    assert_eq!(
        t.set_range(IntRange::new(0, 4), IntRange::new(8, 12), false),
        Err(ParseErrorKind::BadValue(12))
    );
    assert_eq!(
        t.set_range(IntRange::new(0, 4), IntRange::new(-1, 3), false),
        Err(ParseErrorKind::BadValue(-1))
    );
}

#[test]
fn set_range_tolerant_clamps_targets() {
    let mut t = MappingTable::identity(4, 3);
    t.set_range(IntRange::new(0, 3), IntRange::new(0, 7), true)
        .unwrap();
    assert_eq!(frames(&t), vec![0, 2, 2, 2]);
}

#[test]
fn resolve_clamps_frame_number() {
    let mut t = MappingTable::identity(3, 10);
    t.set_frame(2, 9, false).unwrap();
    assert_eq!(t.resolve(-5), Some(MapIndex::primary(0)));
    assert_eq!(t.resolve(1), Some(MapIndex::primary(1)));
    assert_eq!(t.resolve(100), Some(MapIndex::alternate(9)));
    assert_eq!(MappingTable::empty(3).resolve(0), None);
}
