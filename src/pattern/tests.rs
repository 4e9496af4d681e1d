use super::parse;
use crate::ir::IrNode;

#[test]
fn literal_only() {
    let pattern = parse("hello").unwrap();
    assert_eq!(pattern.len(), 1);
    match &pattern[0] {
        IrNode::Literal(l) => assert_eq!(l.value, "hello"),
        other => panic!("expected literal, got {other:?}"),
    }
}

#[test]
fn schema_field_and_literal() {
    let pattern = parse("<client.ip> connected").unwrap();
    assert_eq!(pattern.len(), 2);
    match &pattern[0] {
        IrNode::Field(f) => {
            assert_eq!(f.name.text, "client.ip");
            assert!(!f.name.custom);
            assert!(!f.optional);
        }
        other => panic!("expected field, got {other:?}"),
    }
    match &pattern[1] {
        IrNode::Literal(l) => assert_eq!(l.value, " connected"),
        other => panic!("expected literal, got {other:?}"),
    }
}

#[test]
fn choice_of_two_fields() {
    let pattern = parse("<http.request.method>?<user.name> /x").unwrap();
    match &pattern[0] {
        IrNode::Choice(c) => {
            assert_eq!(c.left.name.text, "http.request.method");
            assert_eq!(c.right.name.text, "user.name");
        }
        other => panic!("expected choice, got {other:?}"),
    }
}

#[test]
fn adjacent_fields_without_a_separator_are_not_a_choice() {
    // No `EXPR_OPT` separates the two fields, so `Choice`'s sub-grammar
    // never matches and `Expr` falls back to two plain Field nodes.
    let pattern = parse("<?a><b>").unwrap();
    assert_eq!(pattern.len(), 2);
    assert!(matches!(&pattern[0], IrNode::Field(f) if f.optional));
    assert!(matches!(&pattern[1], IrNode::Field(f) if !f.optional));
}

#[test]
fn choice_with_an_optional_branch_fails_the_whole_pattern() {
    // `<?a>?<b>` reads as Field("a", optional) then a literal `?` separator
    // then Field("b"); Choice's non-optional invariant rejects it, Expr
    // falls back to the bare optional Field "<?a>", and the leftover
    // `?<b>` can't be consumed by anything (bare `?` is reserved) so the
    // whole pattern is a grammar error, not a partial parse.
    assert!(parse("<?a>?<b>").is_err());
}

#[test]
fn optional_group_with_nested_literal_anchor() {
    let pattern = parse("<user.name>(? from <client.ip>)!").unwrap();
    assert_eq!(pattern.len(), 3);
    assert!(matches!(&pattern[0], IrNode::Field(_)));
    match &pattern[1] {
        IrNode::Group(g) => {
            assert_eq!(g.children.len(), 2);
            assert!(matches!(&g.children[0], IrNode::Literal(l) if l.value == " from "));
        }
        other => panic!("expected group, got {other:?}"),
    }
    assert!(matches!(&pattern[2], IrNode::Literal(l) if l.value == "!"));
}

#[test]
fn custom_field_with_kind_arg() {
    let pattern = parse("<~count/long> items").unwrap();
    match &pattern[0] {
        IrNode::Field(f) => {
            assert!(f.name.custom);
            assert_eq!(f.name.text, "count");
            assert_eq!(f.args, vec!["long".to_string()]);
        }
        other => panic!("expected field, got {other:?}"),
    }
}

#[test]
fn discard_sentinel_field() {
    let pattern = parse("<~/long> items").unwrap();
    match &pattern[0] {
        IrNode::Field(f) => {
            assert!(f.name.custom);
            assert!(f.name.is_discard_sentinel());
        }
        other => panic!("expected field, got {other:?}"),
    }
}

#[test]
fn escaped_reserved_byte_in_literal() {
    let pattern = parse(r"a\<b").unwrap();
    match &pattern[0] {
        IrNode::Literal(l) => assert_eq!(l.value, "a<b"),
        other => panic!("expected literal, got {other:?}"),
    }
}

#[test]
fn empty_pattern_is_invalid() {
    assert!(parse("").is_err());
}

#[test]
fn nested_groups_without_literal_anchor_still_parse_at_grammar_level() {
    // The grammar only requires a group to have at least one body item; the
    // "must start with a literal" rule is a compiler invariant, not a
    // grammar-level one, so this parses fine here.
    let pattern = parse("(?<a>)").unwrap();
    assert_eq!(pattern.len(), 1);
    assert!(matches!(&pattern[0], IrNode::Group(_)));
}
