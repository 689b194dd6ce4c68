use super::*;

#[test]
fn table_is_indexed_by_code() {
    for (i, d) in OP_TABLE.iter().enumerate() {
        assert_eq!(d.code as usize, i, "entry {i} is out of place");
    }
}

#[test]
fn pseudo_codes_carry_no_symbol_and_operators_carry_one() {
    for d in &OP_TABLE {
        if d.arity == 0 {
            assert!(d.symbol.is_none(), "{:?}", d.code);
        } else {
            assert!(d.symbol.is_some(), "{:?}", d.code);
            assert!((1..=MAX_ARITY).contains(&d.arity), "{:?}", d.code);
        }
    }
}

#[test]
fn surface_symbols_have_documented_arities() {
    let expected = [
        ("neg", 1),
        ("!", 1),
        ("abs", 1),
        ("round", 1),
        ("floor", 1),
        ("ceil", 1),
        ("+", 2),
        ("-", 2),
        ("*", 2),
        ("/", 2),
        ("mod", 2),
        ("min", 2),
        ("max", 2),
        ("==", 2),
        ("!=", 2),
        (">", 2),
        (">=", 2),
        ("<", 2),
        ("<=", 2),
        ("&&", 2),
        ("||", 2),
        ("^^", 2),
        ("clip", 3),
        ("?", 3),
    ];
    for (sym, arity) in expected {
        let code = OpCode::from_symbol(sym).unwrap_or_else(|| panic!("missing {sym}"));
        assert_eq!(code.arity(), arity, "{sym}");
    }
}

#[test]
fn unknown_symbols_do_not_resolve() {
    assert_eq!(OpCode::from_symbol("sin"), None);
    assert_eq!(OpCode::from_symbol("NEG"), None);
    assert_eq!(OpCode::from_symbol(""), None);
}
