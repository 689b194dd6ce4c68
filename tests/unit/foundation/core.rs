use super::*;

#[test]
fn int_range_len_counts_inclusive_bounds() {
    assert_eq!(IntRange::new(0, 9).len(), 10);
    assert_eq!(IntRange::point(4).len(), 1);
    assert_eq!(IntRange::new(5, 4).len(), 0);
    assert!(IntRange::new(5, 4).is_empty());
    assert_eq!(IntRange::new(i32::MIN, i32::MAX).len(), 1u64 << 32);
}

#[test]
fn int_range_display_uses_mapping_syntax() {
    assert_eq!(IntRange::point(7).to_string(), "7");
    assert_eq!(IntRange::new(3, 12).to_string(), "[3 12]");
}

#[test]
fn int_range_iterates_ascending() {
    let v: Vec<i32> = IntRange::new(-1, 2).iter().collect();
    assert_eq!(v, vec![-1, 0, 1, 2]);
}

#[test]
fn map_index_constructors_set_selector() {
    assert_eq!(MapIndex::primary(3).selector, Selector::Primary);
    assert_eq!(MapIndex::alternate(3).selector, Selector::Alternate);
    assert_eq!(Selector::default(), Selector::Primary);
}

#[test]
fn map_index_serializes_snake_case_selector() {
    let s = serde_json::to_string(&MapIndex::alternate(5)).unwrap();
    assert_eq!(s, r#"{"selector":"alternate","frame":5}"#);
}
