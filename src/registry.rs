//! Type → parser-kind table and parser-kind → builder registry.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::error::LogParError;
use crate::kernel::Parser;
use crate::schema::SemanticType;

/// The small, fixed enumeration of parser kinds a builder can be registered
/// under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParserKind {
    Long,
    Double,
    Float,
    ScaledFloat,
    Byte,
    Text,
    Bool,
    Ip,
    Date,
    UserAgent,
    Uri,
    /// Used internally by the compiler for literal IR nodes; never named by
    /// a pattern author directly.
    Literal,
}

impl ParserKind {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "long" => ParserKind::Long,
            "double" => ParserKind::Double,
            "float" => ParserKind::Float,
            "scaled_float" => ParserKind::ScaledFloat,
            "byte" => ParserKind::Byte,
            "text" => ParserKind::Text,
            "bool" | "boolean" => ParserKind::Bool,
            "ip" => ParserKind::Ip,
            "date" => ParserKind::Date,
            "user_agent" => ParserKind::UserAgent,
            "url" | "uri" => ParserKind::Uri,
            _ => return None,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            ParserKind::Long => "long",
            ParserKind::Double => "double",
            ParserKind::Float => "float",
            ParserKind::ScaledFloat => "scaled_float",
            ParserKind::Byte => "byte",
            ParserKind::Text => "text",
            ParserKind::Bool => "bool",
            ParserKind::Ip => "ip",
            ParserKind::Date => "date",
            ParserKind::UserAgent => "user_agent",
            ParserKind::Uri => "url",
            ParserKind::Literal => "literal",
        }
    }

    /// The fixed schema-type → parser-kind table.
    pub fn for_semantic_type(semantic_type: SemanticType) -> ParserKind {
        match semantic_type {
            SemanticType::Long => ParserKind::Long,
            SemanticType::Double => ParserKind::Double,
            SemanticType::Float => ParserKind::Float,
            SemanticType::ScaledFloat => ParserKind::ScaledFloat,
            SemanticType::Byte => ParserKind::Byte,
            SemanticType::Keyword | SemanticType::Text | SemanticType::Object | SemanticType::GeoPoint | SemanticType::Nested => {
                ParserKind::Text
            }
            SemanticType::Boolean => ParserKind::Bool,
            SemanticType::Ip => ParserKind::Ip,
            SemanticType::Date => ParserKind::Date,
            SemanticType::UserAgent => ParserKind::UserAgent,
            SemanticType::Url => ParserKind::Uri,
        }
    }
}

/// `(name, end_tokens, args) -> parser of document-value`. `name` is the
/// field's source text (for diagnostics), `end_tokens` the byte sequences
/// the compiler resolved to terminate this field's consumption, `args` the
/// remaining pattern-supplied arguments after any kind selector was
/// consumed.
pub type BuilderFn = Arc<dyn Fn(&str, &[String], &[String]) -> Parser<Value> + Send + Sync>;

/// Parser-kind → builder registry. `register_builder` calls are not meant
/// to race each other; compilation only reads.
#[derive(Clone)]
pub struct TypeRegistry {
    builders: HashMap<ParserKind, BuilderFn>,
}

impl TypeRegistry {
    /// An empty registry with no builders — callers must register every
    /// kind they intend to compile against, including `P_LITERAL`.
    pub fn empty() -> Self {
        TypeRegistry { builders: HashMap::new() }
    }

    /// A registry pre-populated with the builtin builders for every kind in
    /// the fixed type table, plus `P_LITERAL`.
    pub fn with_builtin_builders() -> Self {
        let mut registry = Self::empty();
        crate::builders::register_builtins(&mut registry);
        registry
    }

    /// Fatal if `kind` is already registered.
    pub fn register_builder(&mut self, kind: ParserKind, builder: BuilderFn) -> Result<(), LogParError> {
        if self.builders.contains_key(&kind) {
            return Err(LogParError::registration(format!("parser kind '{}' already registered", kind.name())));
        }
        self.builders.insert(kind, builder);
        Ok(())
    }

    pub fn builder(&self, kind: ParserKind) -> Result<&BuilderFn, LogParError> {
        self.builders
            .get(&kind)
            .ok_or_else(|| LogParError::registration(format!("parser kind '{}' not registered", kind.name())))
    }

    pub fn has_builder(&self, kind: ParserKind) -> bool {
        self.builders.contains_key(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_registration_is_fatal() {
        let mut registry = TypeRegistry::empty();
        let builder: BuilderFn = Arc::new(|_, _, _| crate::builders::text::builder("", &[], &[]));
        registry.register_builder(ParserKind::Text, builder.clone()).unwrap();
        assert!(registry.register_builder(ParserKind::Text, builder).is_err());
    }

    #[test]
    fn builtin_registry_has_every_fixed_kind_and_literal() {
        let registry = TypeRegistry::with_builtin_builders();
        for kind in [
            ParserKind::Long,
            ParserKind::Double,
            ParserKind::Float,
            ParserKind::ScaledFloat,
            ParserKind::Byte,
            ParserKind::Text,
            ParserKind::Bool,
            ParserKind::Ip,
            ParserKind::Date,
            ParserKind::UserAgent,
            ParserKind::Uri,
            ParserKind::Literal,
        ] {
            assert!(registry.has_builder(kind), "missing builtin for {kind:?}");
        }
    }
}
