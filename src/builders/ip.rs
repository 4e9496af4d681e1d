//! `P_IP`: matches an IPv4 or IPv6 literal using `std::net::IpAddr::from_str`
//! against the maximal run of IP-literal-legal bytes before the next end
//! token.

use std::net::IpAddr;
use std::str::FromStr;

use serde_json::{json, Value};

use super::support::bounded_window;
use crate::kernel::{self, Cursor, Failure, PResult, Parser, Success};

fn is_ip_legal(b: u8) -> bool {
    b.is_ascii_hexdigit() || b == b'.' || b == b':'
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

        let run_len = window.iter().take_while(|b| is_ip_legal(**b)).count();
        let candidate = std::str::from_utf8(&window[..run_len]).unwrap_or("");

        match IpAddr::from_str(candidate) {
            Ok(_) => {
                let success = Success::new(cursor.advance(run_len), json!(candidate));
                trace_success(cursor, success, &name)
            }
            Err(_) => {
                let failure = Failure::new(cursor);
                trace_failure(cursor, failure, &name, "not a valid IPv4/IPv6 literal")
            }
        }
    })
}

fn trace_success<'a>(cursor: Cursor<'a>, success: Success<'a, Value>, name: &str) -> PResult<'a, Value> {
    if cursor.is_trace_enabled() {
        Ok(success.push_trace(cursor.offset(), format!("[success] ip({name})")))
    } else {
        Ok(success)
    }
}

fn trace_failure<'a>(cursor: Cursor<'a>, failure: Failure<'a>, name: &str, why: &str) -> PResult<'a, Value> {
    if cursor.is_trace_enabled() {
        Err(failure.push_trace(cursor.offset(), format!("[failure] ip({name}) -> {why}")))
    } else {
        Err(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ipv4() {
        let p = builder("client.ip", &[" connected".to_string()], &[]);
        let r = p(Cursor::new("10.0.0.1 connected", false)).unwrap();
        assert_eq!(r.value, json!("10.0.0.1"));
    }

    #[test]
    fn parses_ipv6() {
        let p = builder("client.ip", &[], &[]);
        let r = p(Cursor::new("::1", false)).unwrap();
        assert_eq!(r.value, json!("::1"));
    }

    #[test]
    fn rejects_non_ip_text() {
        let p = builder("client.ip", &[" connected".to_string()], &[]);
        assert!(p(Cursor::new("not-an-ip connected", false)).is_err());
    }
}
