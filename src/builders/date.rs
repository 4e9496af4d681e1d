//! `P_DATE`: parses a timestamp from the bounded window and emits an RFC
//! 3339 string. A custom field may supply a `chrono` strftime-style format
//! as its first remaining argument (`<~ts/date/%Y-%m-%d %H:%M:%S>`); a
//! schema `DATE` field has no args, so it defaults to RFC 3339 input
//! (`%Y-%m-%dT%H:%M:%S%.f%:z`) — see DESIGN.md Open Question #4.

use chrono::{DateTime, NaiveDateTime};
use serde_json::{json, Value};

use super::support::bounded_window;
use crate::kernel::{self, Cursor, Failure, PResult, Parser, Success};

const DEFAULT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

pub fn builder(name: &str, end_tokens: &[String], args: &[String]) -> Parser<Value> {
    let name = name.to_string();
    let end_tokens = end_tokens.to_vec();
    let format = args.first().cloned().unwrap_or_else(|| DEFAULT_FORMAT.to_string());
    let has_explicit_format = !args.is_empty();

    kernel::parser(move |cursor: Cursor<'_>| -> PResult<'_, Value> {
        let remaining = cursor.remaining();
        let window = match bounded_window(remaining, &end_tokens) {
            Some(w) => w,
            None => {
                let failure = Failure::new(cursor);
                return trace_failure(cursor, failure, &name, "end token never appeared");
            }
        };

        let candidate = match std::str::from_utf8(window) {
            Ok(s) => s,
            Err(_) => {
                let failure = Failure::new(cursor);
                return trace_failure(cursor, failure, &name, "not valid utf-8");
            }
        };

        let rfc3339 = if has_explicit_format {
            NaiveDateTime::parse_from_str(candidate, &format)
                .map(|naive| format!("{}Z", naive.format("%Y-%m-%dT%H:%M:%S%.f")))
                .map_err(|e| e.to_string())
        } else {
            DateTime::parse_from_str(candidate, &format).map(|dt| dt.to_rfc3339()).map_err(|e| e.to_string())
        };

        match rfc3339 {
            Ok(formatted) => {
                let success = Success::new(cursor.advance(window.len()), json!(formatted));
                trace_success(cursor, success, &name)
            }
            Err(_) => {
                let failure = Failure::new(cursor);
                trace_failure(cursor, failure, &name, "timestamp did not match the expected format")
            }
        }
    })
}

fn trace_success<'a>(cursor: Cursor<'a>, success: Success<'a, Value>, name: &str) -> PResult<'a, Value> {
    if cursor.is_trace_enabled() {
        Ok(success.push_trace(cursor.offset(), format!("[success] date({name})")))
    } else {
        Ok(success)
    }
}

fn trace_failure<'a>(cursor: Cursor<'a>, failure: Failure<'a>, name: &str, why: &str) -> PResult<'a, Value> {
    if cursor.is_trace_enabled() {
        Err(failure.push_trace(cursor.offset(), format!("[failure] date({name}) -> {why}")))
    } else {
        Err(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_custom_format_anchored_by_literal() {
        let p = builder("ts", &[" ERROR".to_string()], &["%Y-%m-%d %H:%M:%S".to_string()]);
        let r = p(Cursor::new("2024-01-02 03:04:05 ERROR", false)).unwrap();
        assert_eq!(r.value, json!("2024-01-02T03:04:05Z"));
        assert_eq!(r.cursor.offset(), "2024-01-02 03:04:05".len());
    }

    #[test]
    fn default_schema_format_is_rfc3339() {
        let p = builder("event.created", &["".to_string()], &[]);
        let r = p(Cursor::new("2024-01-02T03:04:05+00:00", false)).unwrap();
        assert_eq!(r.value, json!("2024-01-02T03:04:05+00:00"));
    }

    #[test]
    fn fails_on_malformed_timestamp() {
        let p = builder("ts", &["".to_string()], &["%Y-%m-%d".to_string()]);
        assert!(p(Cursor::new("not-a-date", false)).is_err());
    }
}
