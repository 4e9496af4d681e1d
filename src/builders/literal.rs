//! `P_LITERAL`: exact byte match against the literal's own value. Used
//! internally by the compiler for `Literal` IR nodes; never registered
//! against a pattern author's custom-field kind selector.

use serde_json::Value;

use crate::kernel::{self, Cursor, Failure, PResult, Parser, Success};

pub fn builder(name: &str, _end_tokens: &[String], _args: &[String]) -> Parser<Value> {
    let value = name.to_string();
    kernel::parser(move |cursor: Cursor<'_>| -> PResult<'_, Value> {
        let remaining = cursor.remaining();
        let bytes = value.as_bytes();
        let matches = remaining.len() >= bytes.len() && &remaining[..bytes.len()] == bytes;

        if matches {
            let success = Success::new(cursor.advance(bytes.len()), Value::Null);
            if cursor.is_trace_enabled() {
                return Ok(success.push_trace(cursor.offset(), format!("[success] literal({value})")));
            }
            Ok(success)
        } else {
            let failure = Failure::new(cursor);
            if cursor.is_trace_enabled() {
                return Err(failure.push_trace(cursor.offset(), format!("[failure] literal({value})")));
            }
            Err(failure)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_exact_bytes() {
        let p = builder("hello", &[], &[]);
        let r = p(Cursor::new("hello world", false)).unwrap();
        assert_eq!(r.cursor.offset(), 5);
        assert_eq!(r.value, Value::Null);
    }

    #[test]
    fn fails_on_mismatch() {
        let p = builder("hello", &[], &[]);
        assert!(p(Cursor::new("goodbye", false)).is_err());
    }
}
