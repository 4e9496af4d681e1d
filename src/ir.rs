//! The intermediate representation produced by the [pattern grammar](crate::pattern)
//! and consumed exclusively by the [compiler](crate::compiler).
//!
//! IR nodes are immutable once built: a closed tagged sum with exhaustive
//! case analysis at every consumer (no catch-all `_` arms over [`IrNode`]).

/// `(text, custom)` — a field's name as written in the pattern.
///
/// When `custom` is set the field's semantic type comes from its first
/// argument (or defaults to free text), and `text` is whatever followed the
/// custom marker — possibly empty, the "discard" sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldName {
    pub text: String,
    pub custom: bool,
}

impl FieldName {
    pub fn new(text: impl Into<String>, custom: bool) -> Self {
        Self { text: text.into(), custom }
    }

    /// A custom field with no suffix (`<~>`): parses but contributes nothing
    /// to the output document.
    pub fn is_discard_sentinel(&self) -> bool {
        self.custom && self.text.is_empty()
    }

    /// The field's name as it appeared in the source pattern, including the
    /// custom marker if present — used for diagnostics and as the parser's
    /// display name.
    pub fn to_source_text(&self) -> String {
        if self.custom {
            format!("~{}", self.text)
        } else {
            self.text.clone()
        }
    }
}

/// A literal IR node: must match these exact bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub value: String,
}

/// A field IR node: a parseable, possibly-named value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: FieldName,
    pub args: Vec<String>,
    pub optional: bool,
}

impl Field {
    pub fn to_source_text(&self) -> String {
        self.name.to_source_text()
    }
}

/// A choice IR node: try `left`; if it fails, try `right`. Both branches must
/// be non-optional, enforced by the pattern grammar at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub left: Field,
    pub right: Field,
}

/// A group IR node: an optional enclosed sub-pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub children: Vec<IrNode>,
}

/// The closed set of pattern IR node variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrNode {
    Literal(Literal),
    Field(Field),
    Choice(Choice),
    Group(Group),
}

impl IrNode {
    pub fn literal(value: impl Into<String>) -> Self {
        IrNode::Literal(Literal { value: value.into() })
    }
}

/// An ordered sequence of IR nodes — what the pattern grammar produces for
/// one pattern string (or one group body).
pub type Pattern = Vec<IrNode>;
