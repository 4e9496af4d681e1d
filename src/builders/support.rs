//! Shared helpers every builtin type-parser builder uses to respect the
//! `end_tokens` list the compiler hands it.

/// Finds the byte position of the first occurrence of `needle` in
/// `haystack`, naively (these are short literals/end-tokens, not a hot loop).
fn find_substr(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Bounds `remaining` to the window a type parser is allowed to consume
/// from, given the compiler-resolved end tokens:
/// - an empty list, or a list containing only `""` (the end-of-input
///   marker), means "no anchor ahead" — the whole remaining input is the
///   window;
/// - otherwise the window ends at the earliest occurrence of any listed
///   token; if none of them occur anywhere in `remaining` this returns
///   `None`, and the caller must fail: every builtin fails when its end
///   token never appears.
pub fn bounded_window<'a>(remaining: &'a [u8], end_tokens: &[String]) -> Option<&'a [u8]> {
    let mut earliest: Option<usize> = None;
    let mut any_concrete = false;
    for token in end_tokens {
        if token.is_empty() {
            continue;
        }
        any_concrete = true;
        if let Some(pos) = find_substr(remaining, token.as_bytes()) {
            earliest = Some(earliest.map_or(pos, |e| e.min(pos)));
        }
    }

    if !any_concrete {
        return Some(remaining);
    }

    earliest.map(|pos| &remaining[..pos])
}
