use super::*;
use crate::mapping::error::{ParseErrorKind, Position};

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FramemapError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FramemapError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn expression_and_parse_errors_are_transparent() {
    let e = FramemapError::from(ExprError);
    assert_eq!(e.to_string(), ExprError.to_string());

    let p = ParseError::new(ParseErrorKind::Malformed, Position { line: 3, column: 7 });
    let e = FramemapError::from(p.clone());
    assert_eq!(e.to_string(), p.to_string());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FramemapError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
