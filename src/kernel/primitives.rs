use super::{parser, Cursor, Failure, PResult, Parser, Success};

fn describe_byte(b: Option<u8>) -> String {
    match b {
        Some(b) => (b as char).to_string(),
        None => "EOF".to_string(),
    }
}

/// Consumes one byte if it appears in `set`; fails otherwise.
pub fn char_in(set: impl Into<String>) -> Parser<u8> {
    let set = set.into();
    parser(move |cursor: Cursor<'_>| -> PResult<'_, u8> {
        let seen = cursor.peek_byte();
        let matched = seen.map_or(false, |b| set.as_bytes().contains(&b));

        let outcome = if matched {
            Ok(Success::new(cursor.advance(1), seen.unwrap()))
        } else {
            Err(Failure::new(cursor))
        };

        if cursor.is_trace_enabled() {
            let tag = if matched { "success" } else { "failure" };
            let msg = format!("[{tag}] char_in({set}) -> {}", describe_byte(seen));
            return Ok(match outcome {
                Ok(s) => s.push_trace(cursor.offset(), msg),
                Err(f) => return Err(f.push_trace(cursor.offset(), msg)),
            });
        }
        outcome
    })
}

/// Consumes one byte if it does **not** appear in `set`; fails otherwise
/// (including at end of input).
pub fn not_char(set: impl Into<String>) -> Parser<u8> {
    let set = set.into();
    parser(move |cursor: Cursor<'_>| -> PResult<'_, u8> {
        let seen = cursor.peek_byte();
        let matched = seen.map_or(false, |b| !set.as_bytes().contains(&b));

        let outcome = if matched {
            Ok(Success::new(cursor.advance(1), seen.unwrap()))
        } else {
            Err(Failure::new(cursor))
        };

        if cursor.is_trace_enabled() {
            let tag = if matched { "success" } else { "failure" };
            let msg = format!("[{tag}] not_char({set}) -> {}", describe_byte(seen));
            return Ok(match outcome {
                Ok(s) => s.push_trace(cursor.offset(), msg),
                Err(f) => return Err(f.push_trace(cursor.offset(), msg)),
            });
        }
        outcome
    })
}

/// Consumes one byte if it is ASCII alphanumeric or appears in `extended`.
pub fn alnum(extended: impl Into<String>) -> Parser<u8> {
    let extended = extended.into();
    parser(move |cursor: Cursor<'_>| -> PResult<'_, u8> {
        let seen = cursor.peek_byte();
        let matched = seen.map_or(false, |b| b.is_ascii_alphanumeric() || extended.as_bytes().contains(&b));

        let outcome = if matched {
            Ok(Success::new(cursor.advance(1), seen.unwrap()))
        } else {
            Err(Failure::new(cursor))
        };

        if cursor.is_trace_enabled() {
            let tag = if matched { "success" } else { "failure" };
            let msg = format!("[{tag}] alnum({extended}) -> {}", describe_byte(seen));
            return Ok(match outcome {
                Ok(s) => s.push_trace(cursor.offset(), msg),
                Err(f) => return Err(f.push_trace(cursor.offset(), msg)),
            });
        }
        outcome
    })
}

/// Succeeds only at the end of input.
pub fn eof() -> Parser<()> {
    parser(move |cursor: Cursor<'_>| -> PResult<'_, ()> {
        if cursor.is_eof() {
            Ok(Success::new(cursor, ()))
        } else {
            let failure = Failure::new(cursor);
            if cursor.is_trace_enabled() {
                return Err(failure.push_trace(cursor.offset(), "[failure] eof -> not at end of input"));
            }
            Err(failure)
        }
    })
}
