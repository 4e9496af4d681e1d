//! `P_BOOL`: matches literal `true` or `false`, ASCII, case-sensitive (no
//! locale awareness per the Non-goals).

use serde_json::{json, Value};

use crate::kernel::{self, Cursor, Failure, PResult, Parser, Success};

pub fn builder(name: &str, _end_tokens: &[String], _args: &[String]) -> Parser<Value> {
    let name = name.to_string();
    kernel::parser(move |cursor: Cursor<'_>| -> PResult<'_, Value> {
        let remaining = cursor.remaining();
        let matched = if remaining.starts_with(b"true") {
            Some((true, 4usize))
        } else if remaining.starts_with(b"false") {
            Some((false, 5usize))
        } else {
            None
        };

        match matched {
            Some((b, len)) => {
                let success = Success::new(cursor.advance(len), json!(b));
                if cursor.is_trace_enabled() {
                    Ok(success.push_trace(cursor.offset(), format!("[success] bool({name})")))
                } else {
                    Ok(success)
                }
            }
            None => {
                let failure = Failure::new(cursor);
                if cursor.is_trace_enabled() {
                    Err(failure.push_trace(cursor.offset(), format!("[failure] bool({name}) -> expected true or false")))
                } else {
                    Err(failure)
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_true_and_false() {
        let p = builder("flag", &[], &[]);
        assert_eq!(p(Cursor::new("true", false)).unwrap().value, json!(true));
        assert_eq!(p(Cursor::new("false", false)).unwrap().value, json!(false));
    }

    #[test]
    fn rejects_other_casing() {
        let p = builder("flag", &[], &[]);
        assert!(p(Cursor::new("True", false)).is_err());
    }
}
