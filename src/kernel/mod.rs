//! The combinator kernel: a small set of primitives and combinators that every
//! higher-level grammar (pattern syntax, compiled payload parsers) is built from.
//!
//! A [`Parser<T>`] is a value, not a recursive-descent function baked into the
//! call stack: it can be built once, stored in a registry, cloned cheaply via
//! `Arc`, and invoked against many different inputs — letting a compiled
//! parser be shared freely, including across threads.

mod combinators;
mod cursor;
mod primitives;
mod trace;
#[cfg(test)]
mod tests;

pub use combinators::{alt, left, many, many1, map, opt, replace, right, seq, succeed};
pub use cursor::Cursor;
pub use primitives::{alnum, char_in, eof, not_char};
pub use trace::{format_traces, TraceRecord};

use std::sync::Arc;

/// Outcome of a parser that consumed input and produced a value.
#[derive(Debug, Clone)]
pub struct Success<'a, T> {
    pub cursor: Cursor<'a>,
    pub value: T,
    pub traces: Vec<TraceRecord>,
}

impl<'a, T> Success<'a, T> {
    pub fn new(cursor: Cursor<'a>, value: T) -> Self {
        Self { cursor, value, traces: Vec::new() }
    }

    pub fn with_traces(cursor: Cursor<'a>, value: T, traces: Vec<TraceRecord>) -> Self {
        Self { cursor, value, traces }
    }

    pub(crate) fn push_trace(mut self, offset: usize, message: impl Into<String>) -> Self {
        if self.cursor.is_trace_enabled() {
            self.traces.push(TraceRecord::new(offset, message));
        }
        self
    }
}

/// Outcome of a parser that could not match at the cursor it was given.
#[derive(Debug, Clone)]
pub struct Failure<'a> {
    pub cursor: Cursor<'a>,
    pub traces: Vec<TraceRecord>,
}

impl<'a> Failure<'a> {
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor, traces: Vec::new() }
    }

    pub fn with_traces(cursor: Cursor<'a>, traces: Vec<TraceRecord>) -> Self {
        Self { cursor, traces }
    }

    pub(crate) fn push_trace(mut self, offset: usize, message: impl Into<String>) -> Self {
        if self.cursor.is_trace_enabled() {
            self.traces.push(TraceRecord::new(offset, message));
        }
        self
    }
}

pub type PResult<'a, T> = Result<Success<'a, T>, Failure<'a>>;

/// A parser is a shared, re-entrant function from a cursor to a result.
///
/// The `for<'a>` bound is what lets one compiled value run against any input
/// buffer handed to it later, instead of being tied to the buffer it was
/// built against.
pub type Parser<T> = Arc<dyn for<'a> Fn(Cursor<'a>) -> PResult<'a, T> + Send + Sync>;

/// Lifts a plain closure into a [`Parser`].
pub fn parser<T, F>(f: F) -> Parser<T>
where
    F: for<'a> Fn(Cursor<'a>) -> PResult<'a, T> + Send + Sync + 'static,
{
    Arc::new(f)
}
