//! `P_USER_AGENT`: consumes up to the next end token and stores the raw
//! string verbatim. Deep user-agent decomposition belongs to an external
//! collaborator — this subsystem's job is payload parsing into *a* document,
//! not UA family/version extraction.

use serde_json::{json, Value};

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
                let success = Success::new(cursor.advance(window.len()), json!(text));
                if cursor.is_trace_enabled() {
                    Ok(success.push_trace(cursor.offset(), format!("[success] user_agent({name})")))
                } else {
                    Ok(success)
                }
            }
            None => {
                let failure = Failure::new(cursor);
                if cursor.is_trace_enabled() {
                    Err(failure
                        .push_trace(cursor.offset(), format!("[failure] user_agent({name}) -> end token never appeared")))
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
    fn stores_raw_string() {
        let p = builder("user_agent.original", &["\"".to_string()], &[]);
        let r = p(Cursor::new("curl/8.1.2\"", false)).unwrap();
        assert_eq!(r.value, json!("curl/8.1.2"));
    }
}
