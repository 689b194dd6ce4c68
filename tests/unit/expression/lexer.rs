use super::*;

fn texts(input: &str) -> Vec<String> {
    tokenize(input).into_iter().map(|t| t.text).collect()
}

#[test]
fn splits_and_lowercases() {
    assert_eq!(texts("  A + B "), vec!["a", "+", "b"]);
}

#[test]
fn empty_and_blank_inputs_yield_nothing() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" \t\n ").is_empty());
}

#[test]
fn trailing_token_is_emitted() {
    assert_eq!(texts("x 1 +"), vec!["x", "1", "+"]);
}

#[test]
fn punctuation_passes_through() {
    assert_eq!(texts("X 0 >= ! ?"), vec!["x", "0", ">=", "!", "?"]);
    assert_eq!(texts("ROUND Mod ^^"), vec!["round", "mod", "^^"]);
}

#[test]
fn records_byte_offsets() {
    let toks = tokenize("ab\t cd  e");
    let offsets: Vec<usize> = toks.iter().map(|t| t.offset).collect();
    assert_eq!(offsets, vec![0, 4, 8]);
}
