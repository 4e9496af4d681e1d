//! Builtin type-parser builders, one module per `ParserKind`, plus the
//! `register_builtins` wiring that populates a fresh `TypeRegistry`.

mod support;

pub mod bool;
pub mod date;
pub mod ip;
pub mod literal;
pub mod numeric;
pub mod text;
pub mod uri;
pub mod user_agent;

use std::sync::Arc;

use crate::registry::{BuilderFn, ParserKind, TypeRegistry};

/// Registers the fixed builtin builder for every `ParserKind`, including
/// `Literal`. Panics only on a logic error (duplicate registration into a
/// registry this function itself just emptied), never on external input.
pub fn register_builtins(registry: &mut TypeRegistry) {
    let table: &[(ParserKind, BuilderFn)] = &[
        (ParserKind::Literal, Arc::new(literal::builder)),
        (ParserKind::Long, Arc::new(numeric::long_builder)),
        (ParserKind::Byte, Arc::new(numeric::byte_builder)),
        (ParserKind::Double, Arc::new(numeric::double_builder)),
        (ParserKind::Float, Arc::new(numeric::float_field_builder)),
        (ParserKind::ScaledFloat, Arc::new(numeric::scaled_float_builder)),
        (ParserKind::Text, Arc::new(text::builder)),
        (ParserKind::Bool, Arc::new(bool::builder)),
        (ParserKind::Ip, Arc::new(ip::builder)),
        (ParserKind::Date, Arc::new(date::builder)),
        (ParserKind::UserAgent, Arc::new(user_agent::builder)),
        (ParserKind::Uri, Arc::new(uri::builder)),
    ];

    for (kind, builder) in table.iter().cloned() {
        registry.register_builder(kind, builder).expect("fresh registry cannot already hold this kind");
    }
}
