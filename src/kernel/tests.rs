use super::*;

fn always_fail() -> Parser<u8> {
    parser(|cursor: Cursor<'_>| -> PResult<'_, u8> { Err(Failure::new(cursor)) })
}

#[test]
fn opt_never_fails_even_on_empty_input() {
    let p = opt(char_in("x"));
    let cursor = Cursor::new("", false);
    assert!(p(cursor).is_ok());
}

#[test]
fn opt_never_fails_on_mismatched_input() {
    let p = opt(char_in("x"));
    let cursor = Cursor::new("y", false);
    let r = p(cursor).unwrap();
    assert_eq!(r.value, None);
    assert_eq!(r.cursor.offset(), 0);
}

#[test]
fn alt_retries_right_branch_at_original_cursor_after_partial_consumption() {
    // `a` consumes two bytes ("ab") before ultimately failing on the third;
    // `alt` must retry `b` at the cursor alt itself was called with, not at
    // wherever `a` left off.
    let a = map(seq(char_in("a"), seq(char_in("b"), char_in("Z"))), |_| 0u8);
    let b = map(char_in("a"), |_| 1u8);
    let p = alt(a, b);

    let cursor = Cursor::new("abc", false);
    let r = p(cursor).unwrap();
    assert_eq!(r.value, 1);
    assert_eq!(r.cursor.offset(), 1);
}

#[test]
fn seq_associativity_on_success() {
    let mk = || (char_in("a"), char_in("b"), char_in("c"));

    let (a1, b1, c1) = mk();
    let left_assoc = map(seq(seq(a1, b1), c1), |((a, b), c)| vec![a, b, c]);

    let (a2, b2, c2) = mk();
    let right_assoc = map(seq(a2, seq(b2, c2)), |(a, (b, c))| vec![a, b, c]);

    let r1 = left_assoc(Cursor::new("abc", false)).unwrap();
    let r2 = right_assoc(Cursor::new("abc", false)).unwrap();
    assert_eq!(r1.value, r2.value);
    assert_eq!(r1.cursor.offset(), r2.cursor.offset());
}

#[test]
fn many1_fails_without_consuming_when_nothing_matches() {
    let p = many1(char_in("x"));
    let cursor = Cursor::new("y", false);
    let err = p(cursor).unwrap_err();
    assert_eq!(err.cursor.offset(), 0);
}

#[test]
fn eof_only_succeeds_at_end() {
    let cursor = Cursor::new("a", false);
    assert!(eof()(cursor).is_err());
    assert!(eof()(cursor.advance(1)).is_ok());
}

#[test]
fn determinism_same_input_same_output() {
    let p = many(alt(map(char_in("a"), |_| 'a'), map(char_in("b"), |_| 'b')));
    let cursor = Cursor::new("aabba", true);
    let r1 = p(cursor).unwrap();
    let r2 = p(cursor).unwrap();
    assert_eq!(r1.value, r2.value);
    assert_eq!(r1.cursor.offset(), r2.cursor.offset());
    assert_eq!(r1.traces.len(), r2.traces.len());
}

#[test]
fn always_fail_helper_is_unreachable_success() {
    let cursor = Cursor::new("x", false);
    assert!(always_fail()(cursor).is_err());
}
