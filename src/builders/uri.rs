//! `P_URI`: consumes up to the next end token and validates with a
//! pragmatic URI-shape check (a scheme followed by `:`, or a bare path
//! beginning with `/`), storing the raw string verbatim on success.

use serde_json::{json, Value};

use super::support::bounded_window;
use crate::kernel::{self, Cursor, Failure, PResult, Parser, Success};

fn looks_like_uri(candidate: &str) -> bool {
    if candidate.starts_with('/') {
        return true;
    }
    match candidate.split_once(':') {
        Some((scheme, _)) => {
            !scheme.is_empty()
                && scheme.chars().next().map_or(false, |c| c.is_ascii_alphabetic())
                && scheme.chars().all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
        }
        None => false,
    }
}

pub fn builder(name: &str, end_tokens: &[String], _args: &[String]) -> Parser<Value> {
    let name = name.to_string();
    let end_tokens = end_tokens.to_vec();
    kernel::parser(move |cursor: Cursor<'_>| -> PResult<'_, Value> {
        let remaining = cursor.remaining();
        let window = match bounded_window(remaining, &end_tokens) {
            Some(w) => w,
            None => {
                let failure = Failure::new(cursor);
                return trace_failure(cursor, failure, &name, "end token never appeared");
            }
        };

        let candidate = String::from_utf8_lossy(window).into_owned();
        if looks_like_uri(&candidate) {
            let success = Success::new(cursor.advance(window.len()), json!(candidate));
            trace_success(cursor, success, &name)
        } else {
            let failure = Failure::new(cursor);
            trace_failure(cursor, failure, &name, "does not look like a URI")
        }
    })
}

fn trace_success<'a>(cursor: Cursor<'a>, success: Success<'a, Value>, name: &str) -> PResult<'a, Value> {
    if cursor.is_trace_enabled() {
        Ok(success.push_trace(cursor.offset(), format!("[success] url({name})")))
    } else {
        Ok(success)
    }
}

fn trace_failure<'a>(cursor: Cursor<'a>, failure: Failure<'a>, name: &str, why: &str) -> PResult<'a, Value> {
    if cursor.is_trace_enabled() {
        Err(failure.push_trace(cursor.offset(), format!("[failure] url({name}) -> {why}")))
    } else {
        Err(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_scheme_uri() {
        let p = builder("url.original", &[" ".to_string()], &[]);
        let r = p(Cursor::new("https://example.com ", false)).unwrap();
        assert_eq!(r.value, json!("https://example.com"));
    }

    #[test]
    fn accepts_bare_path() {
        let p = builder("url.path", &[" ".to_string()], &[]);
        let r = p(Cursor::new("/x/y ", false)).unwrap();
        assert_eq!(r.value, json!("/x/y"));
    }

    #[test]
    fn rejects_non_uri_text() {
        let p = builder("url.original", &[" ".to_string()], &[]);
        assert!(p(Cursor::new("not a uri ", false)).is_err());
    }
}
