use varspace_lexer::{
    parse_declaration, split_fallback_groups, split_sigil_tokens, Fragment, Piece,
};

#[test]
fn test_shorthand_value_lexing() {
    // A realistic shorthand: literal text, a fallback group, and a single var.
    let input = "1px solid ($$border-focus, $$border) $$shadow";

    let fragments = split_fallback_groups(input);
    assert_eq!(
        fragments,
        vec![
            Fragment::Literal("1px solid "),
            Fragment::Group("$$border-focus, $$border"),
            Fragment::Literal(" $$shadow"),
        ]
    );

    // The trailing literal still carries a var for the token pass.
    let pieces = split_sigil_tokens(" $$shadow");
    assert_eq!(pieces, vec![Piece::Var("$$shadow")]);
}

#[test]
fn test_template_block_lexing() {
    let template = "\n  --font-size: 12px,\n  --border-width: 1px,\n\n  gap\n";

    let declarations: Vec<_> = template.lines().filter_map(parse_declaration).collect();

    assert_eq!(declarations.len(), 3);
    assert_eq!(declarations[0].name, "font-size");
    assert_eq!(declarations[0].value, Some("12px"));
    assert_eq!(declarations[1].name, "border-width");
    assert_eq!(declarations[1].value, Some("1px"));
    // a bare word is a name with an explicit missing value
    assert_eq!(declarations[2].name, "gap");
    assert_eq!(declarations[2].value, None);
}

#[test]
fn test_css_function_values_pass_through() {
    // Ordinary CSS functions must not be mistaken for fallback groups.
    for value in [
        "rgb(255, 107, 53)",
        "calc(100% - 12px)",
        "var(--already-resolved, 1px)",
    ] {
        assert_eq!(
            split_fallback_groups(value),
            vec![Fragment::Literal(value)],
            "expected {value:?} to stay literal"
        );
        assert_eq!(split_sigil_tokens(value), vec![Piece::Text(value)]);
    }
}

#[test]
fn test_malformed_input_degrades_to_literals() {
    assert_eq!(
        split_fallback_groups("($$a, $$b"),
        vec![Fragment::Literal("($$a, $$b")]
    );
    assert_eq!(split_fallback_groups("($$)"), vec![Fragment::Literal("($$)")]);
    assert_eq!(
        split_fallback_groups(")($$a, $$b)("),
        vec![
            Fragment::Literal(")"),
            Fragment::Group("$$a, $$b"),
            Fragment::Literal("("),
        ]
    );
}
