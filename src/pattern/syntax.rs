//! Reserved bytes of the pattern language. Once chosen these are part of the
//! external contract and must not change across versions.

pub const EXPR_BEGIN: u8 = b'<';
pub const EXPR_END: u8 = b'>';
pub const EXPR_ARG_SEP: u8 = b'/';
pub const EXPR_OPT: u8 = b'?';
pub const EXPR_ESCAPE: u8 = b'\\';
pub const EXPR_CUSTOM_FIELD: u8 = b'~';
pub const EXPR_GROUP_BEGIN: u8 = b'(';
pub const EXPR_GROUP_END: u8 = b')';
/// Allowed inside a field name alongside `EXTENDED_CHARS`, for dotted ECS
/// paths such as `client.ip`. Distinct from [`EXPR_ARG_SEP`].
pub const EXPR_FIELD_SEP: u8 = b'.';

/// Characters (beyond ASCII alphanumeric) legal as the *first* character of
/// a field name. Empty in this dialect: a field name must start alnum.
pub const EXTENDED_CHARS_FIRST: &str = "";

/// Characters (beyond ASCII alphanumeric) legal anywhere else in a field
/// name, including [`EXPR_FIELD_SEP`].
pub const EXTENDED_CHARS: &str = "._";

/// Bytes that terminate a bare literal run outside of any field/group.
pub fn reserved_literal_chars() -> String {
    [EXPR_BEGIN, EXPR_OPT, EXPR_GROUP_BEGIN, EXPR_GROUP_END].iter().map(|b| *b as char).collect()
}

pub fn as_char(b: u8) -> char {
    b as char
}
