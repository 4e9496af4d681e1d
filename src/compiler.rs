//! Turns a parsed pattern into one executable parser of document values.
//!
//! Each IR node becomes a `Parser<Value>`; composing a sequence of nodes
//! means running them one after another and merging their partial documents.
//! The interesting work is picking, for each field, the exact byte
//! sequences that tell its type parser where to stop — that's end-token
//! resolution, and it has to look ahead at what follows a node in the same
//! list (and, for a node that follows a group, recurse into the group to
//! find what it could start with).

use serde_json::Value;

use crate::document::Document;
use crate::error::LogParError;
use crate::ir::{Field, Group, IrNode, Literal, Pattern};
use crate::kernel::{self, alt, eof, left, map, opt, Parser};
use crate::registry::{ParserKind, TypeRegistry};
use crate::schema::Schema;

/// Compiles a parsed pattern into a single parser that consumes an entire
/// input line (an `eof` check is appended, matching the pattern's implicit
/// whole-line contract).
pub fn compile(
    pattern: &Pattern,
    schema: &Schema,
    registry: &TypeRegistry,
    max_group_recursion: usize,
) -> Result<Parser<Value>, LogParError> {
    let body = build_nodes(pattern, schema, registry, max_group_recursion, 0)?;
    // The output document is always a mapping, even when nothing along the
    // pattern contributed a named field (an all-literal pattern, or a
    // discard-only one).
    let body = map(body, |v| if v.is_object() { v } else { Value::Object(serde_json::Map::new()) });
    Ok(left(body, eof()))
}

fn build_nodes(
    nodes: &[IrNode],
    schema: &Schema,
    registry: &TypeRegistry,
    max_group_recursion: usize,
    depth: usize,
) -> Result<Parser<Value>, LogParError> {
    if depth > max_group_recursion {
        return Err(LogParError::compile("max group recursion level reached"));
    }

    let mut parsers: Vec<Parser<Value>> = Vec::with_capacity(nodes.len());
    let mut i = 0usize;
    while i < nodes.len() {
        match &nodes[i] {
            IrNode::Field(field) => {
                if let Some(IrNode::Group(group)) = nodes.get(i + 1) {
                    parsers.push(build_field_followed_by_group(
                        nodes,
                        i,
                        field,
                        group,
                        schema,
                        registry,
                        max_group_recursion,
                        depth,
                    )?);
                    i += 2;
                    continue;
                }
                let end_tokens = get_end_token(nodes, i)?;
                parsers.push(build_field(field, &end_tokens, schema, registry)?);
                i += 1;
            }
            IrNode::Literal(literal) => {
                parsers.push(build_literal(literal, registry)?);
                i += 1;
            }
            IrNode::Choice(choice) => {
                let end_tokens = get_end_token(nodes, i)?;
                let left_parser = build_field(&choice.left, &end_tokens, schema, registry)?;
                let right_parser = build_field(&choice.right, &end_tokens, schema, registry)?;
                parsers.push(alt(left_parser, right_parser));
                i += 1;
            }
            IrNode::Group(group) => {
                let run = nodes[i..].iter().take_while(|n| matches!(n, IrNode::Group(_))).count();
                if run > max_group_recursion {
                    return Err(LogParError::compile("max group recursion level reached"));
                }
                let inner = build_nodes(&group.children, schema, registry, max_group_recursion, depth + 1)?;
                parsers.push(map(opt(inner), |maybe| maybe.unwrap_or(Value::Null)));
                i += 1;
            }
        }
    }

    Ok(combine(parsers))
}

/// The field-followed-by-group case: an ordered choice between "the field
/// consumed up to the group's own start, then the group matched" and "the
/// field consumed straight through to whatever follows the group, the group
/// skipped entirely". Tried in that order so the group is preferred when it
/// can match.
fn build_field_followed_by_group(
    nodes: &[IrNode],
    field_index: usize,
    field: &Field,
    group: &Group,
    schema: &Schema,
    registry: &TypeRegistry,
    max_group_recursion: usize,
    depth: usize,
) -> Result<Parser<Value>, LogParError> {
    let group_start_tokens = group_end_tokens(group)?;
    let field_with_group_end = vec![group_start_tokens[0].clone()];
    let field_taking_group = build_field(field, &field_with_group_end, schema, registry)?;
    let group_parser = build_nodes(&group.children, schema, registry, max_group_recursion, depth + 1)?;
    let taken = merge_step(field_taking_group, group_parser);

    let skip_end_tokens = get_end_token(nodes, field_index + 1)?;
    let skipped = build_field(field, &skip_end_tokens, schema, registry)?;

    Ok(alt(taken, skipped))
}

/// The end token(s) a node at `nodes[index]` must hand its type parser,
/// derived from whatever comes right after it: end of input if nothing
/// does, a literal's own bytes, or — if a group follows — that group's own
/// start tokens spliced with whatever follows the group in turn.
fn get_end_token(nodes: &[IrNode], index: usize) -> Result<Vec<String>, LogParError> {
    match nodes.get(index + 1) {
        None => Ok(vec![String::new()]),
        Some(IrNode::Literal(literal)) => Ok(vec![literal.value.clone()]),
        Some(IrNode::Group(group)) => {
            let after = get_end_token(nodes, index + 1)?;
            if after.is_empty() {
                Ok(Vec::new())
            } else {
                let mut tokens = group_end_tokens(group)?;
                tokens.extend(after);
                Ok(tokens)
            }
        }
        Some(IrNode::Field(_)) | Some(IrNode::Choice(_)) => Ok(Vec::new()),
    }
}

/// The byte sequence(s) a group itself begins with: a leading literal's own
/// value, or — if the group opens with a run of nested groups — each of
/// those groups' own start tokens spliced together followed by the literal
/// that must anchor the run. A group with neither is a compile error: there
/// would be nothing concrete to search for.
fn group_end_tokens(group: &Group) -> Result<Vec<String>, LogParError> {
    match group.children.first() {
        Some(IrNode::Literal(literal)) => Ok(vec![literal.value.clone()]),
        Some(IrNode::Group(_)) => {
            let mut tokens = Vec::new();
            let mut index = 0usize;
            while let Some(IrNode::Group(inner)) = group.children.get(index) {
                tokens.extend(group_end_tokens(inner)?);
                index += 1;
            }
            match group.children.get(index) {
                Some(IrNode::Literal(literal)) => {
                    tokens.push(literal.value.clone());
                    Ok(tokens)
                }
                _ => Err(LogParError::compile("group must be followed by a literal")),
            }
        }
        _ => Err(LogParError::compile("group must start with a literal or a succession of groups and a literal")),
    }
}

fn build_literal(literal: &Literal, registry: &TypeRegistry) -> Result<Parser<Value>, LogParError> {
    let builder = registry.builder(ParserKind::Literal)?;
    Ok(builder(&literal.value, &[], &[literal.value.clone()]))
}

fn build_field(
    field: &Field,
    end_tokens: &[String],
    schema: &Schema,
    registry: &TypeRegistry,
) -> Result<Parser<Value>, LogParError> {
    let mut args = field.args.clone();
    let kind = if field.name.custom {
        if args.is_empty() {
            ParserKind::Text
        } else {
            let kind_name = args.remove(0);
            ParserKind::from_name(&kind_name)
                .ok_or_else(|| LogParError::compile(format!("parser type '{kind_name}' not found")))?
        }
    } else {
        let semantic_type = schema
            .lookup(&field.name.text)
            .ok_or_else(|| LogParError::compile(format!("field '{}' not found in schema", field.name.text)))?;
        ParserKind::for_semantic_type(semantic_type)
    };

    let builder = registry.builder(kind)?;
    let source_name = field.to_source_text();
    let base = builder(&source_name, end_tokens, &args);

    let named: Parser<Value> = if field.name.is_discard_sentinel() {
        kernel::replace(base, Value::Null)
    } else {
        let field_path = field.name.text.clone();
        map(base, move |v| Document::singleton(&field_path, v).into_value())
    };

    Ok(if field.optional { map(opt(named), |maybe| maybe.unwrap_or(Value::Null)) } else { named })
}

/// Merges two document-producing parsers run in sequence: run `a`, then `b`
/// on the residual cursor, and non-recursively merge their values.
fn merge_step(a: Parser<Value>, b: Parser<Value>) -> Parser<Value> {
    map(kernel::seq(a, b), |(av, bv)| Document::from_value(av).merge(Document::from_value(bv)).into_value())
}

/// Folds a sequence of node parsers left to right. Non-recursive merge's
/// "later write wins" conflict rule is associative, so folding in either
/// direction produces the same document — later nodes in the pattern always
/// win key collisions over earlier ones.
fn combine(parsers: Vec<Parser<Value>>) -> Parser<Value> {
    let mut iter = parsers.into_iter();
    let first = iter.next().expect("a non-empty pattern always compiles at least one parser");
    iter.fold(first, merge_step)
}
