use super::*;
use crate::mapping::source::StrLines;

fn engine_ranges(expr: &str, range: IntRange, half_open: bool, discrete: bool) -> Vec<IntRange> {
    let program = Program::compile(expr, TRANSFORM_ALPHABET).unwrap();
    RangeTransform::new(&program, half_open, discrete)
        .unwrap()
        .map_range(range)
}

fn opts(expr: &str, half_open: bool, discrete: bool) -> TransformOptions {
    TransformOptions {
        expr: expr.to_owned(),
        half_open,
        discrete,
    }
}

#[test]
fn identity_keeps_ranges() {
    let out = transform_str("0 [10 19] 5", &TransformOptions::default()).unwrap();
    assert_eq!(out, "0 [10 19] 5");
}

#[test]
fn continuous_scales_boundaries() {
    let r = IntRange::new(0, 4);
    assert_eq!(engine_ranges("x 2 *", r, true, false), vec![IntRange::new(0, 9)]);
    assert_eq!(engine_ranges("x 2 *", r, false, false), vec![IntRange::new(0, 8)]);
}

#[test]
fn continuous_swaps_decreasing_results() {
    // 100 - x over [10 19] half-open: 90 and 80, swapped then offset
    let out = engine_ranges("100 x -", IntRange::new(10, 19), true, false);
    assert_eq!(out, vec![IntRange::new(80, 89)]);
}

#[test]
fn continuous_clamps_at_zero_and_drops_negative() {
    assert_eq!(
        engine_ranges("x 5 -", IntRange::new(0, 9), true, false),
        vec![IntRange::new(0, 4)]
    );
    assert!(engine_ranges("x 100 -", IntRange::new(0, 9), true, false).is_empty());
}

#[test]
fn pass_variable_distinguishes_boundaries() {
    // r is 0 for the lower boundary and 1 for the upper one
    let out = engine_ranges("x r 10 * +", IntRange::new(0, 4), false, false);
    assert_eq!(out, vec![IntRange::new(0, 14)]);
}

#[test]
fn non_finite_results_produce_nothing() {
    assert!(engine_ranges("x 0 /", IntRange::new(1, 3), true, false).is_empty());
    assert!(engine_ranges("x 0 /", IntRange::new(1, 3), true, true).is_empty());
}

#[test]
fn discrete_merges_consecutive_results() {
    assert_eq!(
        engine_ranges("x 2 /", IntRange::new(0, 5), true, true),
        vec![IntRange::new(0, 3)]
    );
    assert_eq!(
        engine_ranges("x 2 *", IntRange::new(0, 2), true, true),
        vec![IntRange::point(0), IntRange::point(2), IntRange::point(4)]
    );
}

#[test]
fn discrete_drops_negative_results() {
    assert_eq!(
        engine_ranges("x 3 -", IntRange::new(0, 5), true, true),
        vec![IntRange::new(0, 2)]
    );
}

#[test]
fn discrete_extends_runs_backwards() {
    assert_eq!(
        engine_ranges("10 x -", IntRange::new(0, 3), true, true),
        vec![IntRange::new(7, 10)]
    );
}

#[test]
fn discrete_output_is_sorted_for_decreasing_steps() {
    // 20 - 2x over 0..=2: 20 18 16
    assert_eq!(
        engine_ranges("20 x 2 * -", IntRange::new(0, 2), true, true),
        vec![IntRange::point(16), IntRange::point(18), IntRange::point(20)]
    );
}

#[test]
fn discrete_merges_repeated_runs() {
    // x mod 3 over 0..=5: 0 1 2 0 1 2
    assert_eq!(
        engine_ranges("x 3 mod", IntRange::new(0, 5), true, true),
        vec![IntRange::new(0, 2)]
    );
}

#[test]
fn lines_without_output_keep_their_slot() {
    let out = transform_str("1\n-5\n2", &TransformOptions::default()).unwrap();
    assert_eq!(out, "1\n\n2");
}

#[test]
fn transform_from_line_source() {
    let program = Program::compile("x 10 +", TRANSFORM_ALPHABET).unwrap();
    let out = transform(StrLines::new("0\n[5 6] 9"), &program, true, false).unwrap();
    assert_eq!(out, "10\n[15 16] 19");
}

#[test]
fn transform_reader_matches_str() {
    let o = opts("x 2 *", false, true);
    let text = "[0 3]\n7 # c\n";
    let a = transform_str(text, &o).unwrap();
    let b = transform_reader(std::io::Cursor::new(text.as_bytes()), &o).unwrap();
    assert_eq!(a, "0 2 4 6\n14");
    assert_eq!(a, b);
}

#[test]
fn bad_expression_is_reported() {
    let err = transform_str("1", &opts("x +", true, false)).unwrap_err();
    assert!(matches!(err, FramemapError::Expression(_)));
}

#[test]
fn wide_alphabet_program_is_rejected() {
    let program = Program::compile("x", "xryz").unwrap();
    assert!(matches!(
        RangeTransform::new(&program, true, false),
        Err(FramemapError::Validation(_))
    ));
}

#[test]
fn parse_failure_surfaces_position() {
    let err = transform_str("1\n2 ]", &TransformOptions::default()).unwrap_err();
    match err {
        FramemapError::Parse(e) => {
            assert_eq!(e.kind, crate::mapping::error::ParseErrorKind::Malformed);
            assert_eq!(e.pos.line, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn format_ranges_joins_with_spaces() {
    assert_eq!(
        format_ranges(&[IntRange::point(3), IntRange::new(5, 9)]),
        "3 [5 9]"
    );
    assert_eq!(format_ranges(&[]), "");
}

#[test]
fn merge_skips_missing_parts() {
    assert_eq!(merge([Some("1 2"), None, Some("[4 5]")]), Some("1 2 [4 5]".to_owned()));
    assert_eq!(merge([None, Some("")]), Some(String::new()));
    assert_eq!(merge([None, None]), None);
    assert_eq!(merge(std::iter::empty()), None);
}
