//! The fixed grammar that turns a pattern string into [`ir::Pattern`].
//!
//! Built entirely from the [combinator kernel](crate::kernel); every
//! production here is a value, so the grammar below reads the same way the
//! productions it is built from compose: `Literal`, `FieldName`, `Args`,
//! `Field`, `Choice`, `Group`, `Expr`, `Pattern`.

use super::syntax::{self, EXTENDED_CHARS, EXTENDED_CHARS_FIRST};
use crate::error::LogParError;
use crate::ir::{Choice, Field, FieldName, IrNode, Literal, Pattern};
use crate::kernel::{
    self, alt, char_in, eof, format_traces, left, many, many1, map, not_char, opt, right, seq, Cursor, Failure,
    PResult, Parser,
};

fn escape_str(b: u8) -> String {
    (b as char).to_string()
}

fn escaped_char(reserved: &str, esc: u8) -> Parser<u8> {
    let with_esc = format!("{reserved}{}", esc as char);
    right(char_in(escape_str(esc)), char_in(with_esc))
}

fn raw_literal(reserved: &str, esc: u8, require_one: bool) -> Parser<String> {
    let body = alt(not_char(format!("{reserved}{}", esc as char)), escaped_char(reserved, esc));
    let chars: Parser<Vec<u8>> = if require_one { many1(body) } else { many(body) };
    map(chars, |bytes| bytes.into_iter().map(|b| b as char).collect())
}

fn p_field_name() -> Parser<FieldName> {
    let p_custom = kernel::parser(|cursor: Cursor<'_>| -> PResult<'_, String> {
        match cursor.peek_byte() {
            Some(b) if b == syntax::EXPR_CUSTOM_FIELD => {
                Ok(kernel::Success::new(cursor.advance(1), escape_str(b)))
            }
            _ => Ok(kernel::Success::new(cursor, String::new())),
        }
    });

    let extended_first = EXTENDED_CHARS_FIRST;
    let mut extended_rest = EXTENDED_CHARS.to_string();
    extended_rest.push(syntax::EXPR_FIELD_SEP as char);

    let p_name = map(seq(kernel::alnum(extended_first), many(kernel::alnum(extended_rest))), |(first, rest)| {
        let mut s = String::new();
        s.push(first as char);
        s.extend(rest.into_iter().map(|b| b as char));
        s
    });

    kernel::parser(move |cursor: Cursor<'_>| -> PResult<'_, FieldName> {
        let custom_res = p_custom(cursor)?;
        let is_custom = !custom_res.value.is_empty();

        if is_custom {
            // A bare `~` with no following name is legal: the discard sentinel.
            let name_res = opt(p_name.clone())(custom_res.cursor)?;
            let mut traces = custom_res.traces;
            traces.extend(name_res.traces);
            let text = name_res.value.unwrap_or_default();
            Ok(kernel::Success::with_traces(name_res.cursor, FieldName::new(text, true), traces))
        } else {
            match p_name.clone()(custom_res.cursor) {
                Ok(name_res) => {
                    let mut traces = custom_res.traces;
                    traces.extend(name_res.traces);
                    Ok(kernel::Success::with_traces(name_res.cursor, FieldName::new(name_res.value, false), traces))
                }
                Err(f) => {
                    let mut traces = custom_res.traces;
                    traces.extend(f.traces);
                    Err(Failure::with_traces(f.cursor, traces))
                }
            }
        }
    })
}

fn p_args() -> Parser<Vec<String>> {
    let reserved: String = [syntax::EXPR_ARG_SEP, syntax::EXPR_END].iter().map(|b| *b as char).collect();
    let one_arg = right(char_in(escape_str(syntax::EXPR_ARG_SEP)), raw_literal(&reserved, syntax::EXPR_ESCAPE, false));
    many(one_arg)
}

pub fn p_field() -> Parser<Field> {
    let start = char_in(escape_str(syntax::EXPR_BEGIN));
    let end = char_in(escape_str(syntax::EXPR_END));
    let marker = opt(char_in(escape_str(syntax::EXPR_OPT)));
    let body = map(seq(seq(marker, p_field_name()), p_args()), |((marker, name), args)| Field {
        name,
        args,
        optional: marker.is_some(),
    });
    left(right(start, body), end)
}

pub fn p_literal() -> Parser<Literal> {
    map(raw_literal(&syntax::reserved_literal_chars(), syntax::EXPR_ESCAPE, true), |value| Literal { value })
}

pub fn p_choice() -> Parser<Choice> {
    let p = seq(left(p_field(), char_in(escape_str(syntax::EXPR_OPT))), p_field());
    kernel::parser(move |cursor: Cursor<'_>| -> PResult<'_, Choice> {
        match p(cursor) {
            Ok(res) => {
                let (left_field, right_field) = res.value;
                if !left_field.optional && !right_field.optional {
                    Ok(kernel::Success::with_traces(
                        res.cursor,
                        Choice { left: left_field, right: right_field },
                        res.traces,
                    ))
                } else {
                    let mut traces = res.traces;
                    traces.push(crate::kernel::TraceRecord::new(
                        cursor.offset(),
                        "[failure] pChoice -> expected both fields to be non-optional",
                    ));
                    Err(Failure::with_traces(cursor, traces))
                }
            }
            Err(f) => Err(f),
        }
    })
}

fn p_expr() -> Parser<Vec<IrNode>> {
    let p_c = map(p_choice(), IrNode::Choice);
    let p_f = map(p_field(), IrNode::Field);
    let p_l = map(p_literal(), IrNode::Literal);
    many1(alt(alt(p_c, p_f), p_l))
}

fn p_group(cursor: Cursor<'_>) -> PResult<'_, Vec<IrNode>> {
    let start = seq(char_in(escape_str(syntax::EXPR_GROUP_BEGIN)), char_in(escape_str(syntax::EXPR_OPT)));
    let start_res = match start(cursor) {
        Ok(r) => r,
        Err(f) => {
            let mut traces = f.traces;
            traces.push(crate::kernel::TraceRecord::new(cursor.offset(), "[failure] group -> no start"));
            return Err(Failure::with_traces(f.cursor, traces));
        }
    };

    let mut children = Vec::new();
    let mut traces = start_res.traces;
    let mut c = start_res.cursor;
    loop {
        match p_expr()(c) {
            Ok(r) => {
                traces.extend(r.traces);
                c = r.cursor;
                children.extend(r.value);
                continue;
            }
            Err(f) => traces.extend(f.traces),
        }
        match p_group(c) {
            Ok(r) => {
                traces.extend(r.traces);
                c = r.cursor;
                children.push(IrNode::Group(crate::ir::Group { children: r.value }));
                continue;
            }
            Err(f) => {
                traces.extend(f.traces);
                break;
            }
        }
    }

    if children.is_empty() {
        traces.push(crate::kernel::TraceRecord::new(c.offset(), "[failure] group -> no body"));
        return Err(Failure::with_traces(c, traces));
    }

    let end = char_in(escape_str(syntax::EXPR_GROUP_END));
    match end(c) {
        Ok(r) => {
            traces.extend(r.traces);
            Ok(kernel::Success::with_traces(r.cursor, children, traces))
        }
        Err(f) => {
            traces.extend(f.traces);
            traces.push(crate::kernel::TraceRecord::new(c.offset(), "[failure] group -> no end"));
            Err(Failure::with_traces(f.cursor, traces))
        }
    }
}

fn p_pattern() -> Parser<Vec<IrNode>> {
    let group_as_vec = kernel::parser(|cursor: Cursor<'_>| -> PResult<'_, Vec<IrNode>> {
        p_group(cursor).map(|r| {
            kernel::Success::with_traces(r.cursor, vec![IrNode::Group(crate::ir::Group { children: r.value })], r.traces)
        })
    });

    let item = alt(p_expr(), group_as_vec);
    left(map(many1(item), |groups| groups.into_iter().flatten().collect()), eof())
}

/// Parses a whole pattern string into its IR. Trace collection is always on,
/// since a grammar error's only diagnostic payload is its sorted trace.
pub fn parse(pattern: &str) -> Result<Pattern, LogParError> {
    let cursor = Cursor::new(pattern, true);
    match p_pattern()(cursor) {
        Ok(res) => {
            if res.value.is_empty() {
                return Err(LogParError::Grammar("pattern must contain at least one node\n".to_string()));
            }
            Ok(res.value)
        }
        Err(f) => {
            let trace_text = format_traces(&f.traces);
            tracing::error!(pattern, trace = %trace_text, "pattern grammar rejected pattern");
            Err(LogParError::Grammar(trace_text))
        }
    }
}
