//! `P_TEXT`: serves `KEYWORD`, `TEXT`, `OBJECT`, `GEO_POINT`, `NESTED`, and
//! any custom field whose kind is unspecified.

use serde_json::Value;

use super::support::bounded_window;
use crate::kernel::{self, Cursor, Failure, PResult, Parser, Success};

pub fn builder(name: &str, end_tokens: &[String], _args: &[String]) -> Parser<Value> {
    let name = name.to_string();
    let end_tokens = end_tokens.to_vec();
    kernel::parser(move |cursor: Cursor<'_>| -> PResult<'_, Value> {
        let remaining = cursor.remaining();
        match bounded_window(remaining, &end_tokens) {
            Some(window) => {
                let text = String::from_utf8_lossy(window).into_owned();
                let success = Success::new(cursor.advance(window.len()), Value::String(text));
                if cursor.is_trace_enabled() {
                    return Ok(success.push_trace(cursor.offset(), format!("[success] text({name})")));
                }
                Ok(success)
            }
            None => {
                let failure = Failure::new(cursor);
                if cursor.is_trace_enabled() {
                    return Err(failure
                        .push_trace(cursor.offset(), format!("[failure] text({name}) -> end token never appeared")));
                }
                Err(failure)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_at_first_end_token() {
        let p = builder("user.name", &[" from".to_string()], &[]);
        let r = p(Cursor::new("alice from 10.0.0.1", false)).unwrap();
        assert_eq!(r.value, Value::String("alice".to_string()));
        assert_eq!(r.cursor.offset(), 5);
    }

    #[test]
    fn greedy_to_eof_when_only_eof_marker() {
        let p = builder("message", &["".to_string()], &[]);
        let r = p(Cursor::new("rest of the line", false)).unwrap();
        assert_eq!(r.value, Value::String("rest of the line".to_string()));
    }

    #[test]
    fn greedy_to_eof_when_no_end_tokens_at_all() {
        let p = builder("message", &[], &[]);
        let r = p(Cursor::new("everything", false)).unwrap();
        assert_eq!(r.value, Value::String("everything".to_string()));
    }

    #[test]
    fn fails_when_end_token_never_appears() {
        let p = builder("user.name", &[" from".to_string()], &[]);
        assert!(p(Cursor::new("alice only", false)).is_err());
    }
}
