//! `P_LONG`, `P_BYTE`, `P_DOUBLE`, `P_FLOAT`, `P_SCALED_FLOAT`.
//!
//! ECS's `byte` type has no canonical numeric-range definition, so it's
//! modeled as a plain `i64`, same representation as `long` (see DESIGN.md
//! Open Question #3).

use once_cell::sync::Lazy;
use regex::bytes::Regex;
use serde_json::{json, Value};

use super::support::bounded_window;
use crate::kernel::{self, Cursor, Failure, PResult, Parser, Success};

static INTEGER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]+").unwrap());
static FLOAT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?").unwrap());

fn integer_builder(kind: &'static str, name: &str, end_tokens: &[String]) -> Parser<Value> {
    let name = name.to_string();
    let end_tokens = end_tokens.to_vec();
    kernel::parser(move |cursor: Cursor<'_>| -> PResult<'_, Value> {
        let remaining = cursor.remaining();
        let window = match bounded_window(remaining, &end_tokens) {
            Some(w) => w,
            None => {
                let failure = Failure::new(cursor);
                return trace_failure(cursor, failure, kind, &name, "end token never appeared");
            }
        };

        let matched = match INTEGER_RE.find(window) {
            Some(m) if m.end() > 0 => m.as_bytes(),
            _ => {
                let failure = Failure::new(cursor);
                return trace_failure(cursor, failure, kind, &name, "no digits matched");
            }
        };

        let text = std::str::from_utf8(matched).expect("regex matched ascii digits");
        match text.parse::<i64>() {
            Ok(n) => {
                let success = Success::new(cursor.advance(matched.len()), json!(n));
                trace_success(cursor, success, kind, &name)
            }
            Err(_) => {
                let failure = Failure::new(cursor);
                trace_failure(cursor, failure, kind, &name, "digits out of i64 range")
            }
        }
    })
}

fn float_builder(kind: &'static str, narrow_to_f32: bool, name: &str, end_tokens: &[String]) -> Parser<Value> {
    let name = name.to_string();
    let end_tokens = end_tokens.to_vec();
    kernel::parser(move |cursor: Cursor<'_>| -> PResult<'_, Value> {
        let remaining = cursor.remaining();
        let window = match bounded_window(remaining, &end_tokens) {
            Some(w) => w,
            None => {
                let failure = Failure::new(cursor);
                return trace_failure(cursor, failure, kind, &name, "end token never appeared");
            }
        };

        let matched = match FLOAT_RE.find(window) {
            Some(m) if m.end() > 0 => m.as_bytes(),
            _ => {
                let failure = Failure::new(cursor);
                return trace_failure(cursor, failure, kind, &name, "no number matched");
            }
        };

        let text = std::str::from_utf8(matched).expect("regex matched ascii digits");
        let parsed = match text.parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                let failure = Failure::new(cursor);
                return trace_failure(cursor, failure, kind, &name, "malformed number");
            }
        };

        let value = if narrow_to_f32 { json!(parsed as f32) } else { json!(parsed) };
        let success = Success::new(cursor.advance(matched.len()), value);
        trace_success(cursor, success, kind, &name)
    })
}

fn trace_success<'a>(cursor: Cursor<'a>, success: Success<'a, Value>, kind: &str, name: &str) -> PResult<'a, Value> {
    if cursor.is_trace_enabled() {
        Ok(success.push_trace(cursor.offset(), format!("[success] {kind}({name})")))
    } else {
        Ok(success)
    }
}

fn trace_failure<'a>(cursor: Cursor<'a>, failure: Failure<'a>, kind: &str, name: &str, why: &str) -> PResult<'a, Value> {
    if cursor.is_trace_enabled() {
        Err(failure.push_trace(cursor.offset(), format!("[failure] {kind}({name}) -> {why}")))
    } else {
        Err(failure)
    }
}

pub fn long_builder(name: &str, end_tokens: &[String], _args: &[String]) -> Parser<Value> {
    integer_builder("long", name, end_tokens)
}

pub fn byte_builder(name: &str, end_tokens: &[String], _args: &[String]) -> Parser<Value> {
    integer_builder("byte", name, end_tokens)
}

pub fn double_builder(name: &str, end_tokens: &[String], _args: &[String]) -> Parser<Value> {
    float_builder("double", false, name, end_tokens)
}

pub fn float_field_builder(name: &str, end_tokens: &[String], _args: &[String]) -> Parser<Value> {
    float_builder("float", true, name, end_tokens)
}

pub fn scaled_float_builder(name: &str, end_tokens: &[String], _args: &[String]) -> Parser<Value> {
    float_builder("scaled_float", false, name, end_tokens)
}
