//! The crate's public entry point: schema and builder registry bound
//! together, with pattern compilation and event integration layered on top.

use std::sync::Arc;

use serde_json::Value;

use crate::compiler;
use crate::error::LogParError;
use crate::event::EventSink;
use crate::kernel::{format_traces, Cursor, Parser};
use crate::pattern;
use crate::registry::TypeRegistry;
use crate::schema::Schema;

/// A schema and type registry bound together, ready to compile patterns
/// and run them against events.
///
/// Constructed from a schema document, a group recursion ceiling, and a
/// debug level that, when non-zero, turns a *successful* parse that
/// nonetheless produced diagnostic traces into an error (useful while
/// authoring a pattern, never in production use).
pub struct Logpar {
    schema: Schema,
    registry: TypeRegistry,
    max_group_recursion: usize,
    debug_level: u8,
}

impl Logpar {
    /// Builds a `Logpar` from a schema configuration document (shape:
    /// `{"fields": {name: type, ...}}`), pre-populated with the builtin
    /// type-parser builders.
    pub fn new(schema_document: &Value, max_group_recursion: usize, debug_level: u8) -> Result<Self, LogParError> {
        let schema = Schema::from_json(schema_document)?;
        tracing::info!(max_group_recursion, debug_level, "logpar schema loaded");
        Ok(Logpar { schema, registry: TypeRegistry::with_builtin_builders(), max_group_recursion, debug_level })
    }

    /// Builds a `Logpar` with a caller-supplied registry instead of the
    /// builtin one — useful for tests or callers that want to override
    /// every builder themselves.
    pub fn with_registry(
        schema_document: &Value,
        registry: TypeRegistry,
        max_group_recursion: usize,
        debug_level: u8,
    ) -> Result<Self, LogParError> {
        let schema = Schema::from_json(schema_document)?;
        Ok(Logpar { schema, registry, max_group_recursion, debug_level })
    }

    /// Registers a builder for `kind`, fatal if one is already registered.
    pub fn register_builder(
        &mut self,
        kind: crate::registry::ParserKind,
        builder: crate::registry::BuilderFn,
    ) -> Result<(), LogParError> {
        self.registry.register_builder(kind, builder)
    }

    /// Compiles a pattern string into an executable parser of document
    /// values. The returned parser consumes its entire input; a line with
    /// trailing bytes the pattern doesn't account for fails to parse.
    pub fn build(&self, pattern_text: &str) -> Result<Parser<Value>, LogParError> {
        let span = tracing::info_span!("logpar_build", pattern = pattern_text);
        let _enter = span.enter();
        let ir = pattern::parse(pattern_text)?;
        compiler::compile(&ir, &self.schema, &self.registry, self.max_group_recursion)
    }

    /// Runs a compiled `parser` against `line`, producing the document it
    /// parsed or a `Parse` error carrying its formatted diagnostic trace.
    ///
    /// Traces are always collected, regardless of `debug_level` — a failure's
    /// only diagnostic payload is its sorted trace (spec §4.6), so a
    /// production parse (`debug_level == 0`) still needs it populated.
    /// `debug_level` only controls whether a *successful* parse that still
    /// collected traces (because the pattern used trace-producing primitives
    /// along a path that ultimately succeeded) is treated as an error too —
    /// this is the pattern-authoring debug switch, never meant to affect
    /// failure diagnostics.
    pub fn run(&self, parser: &Parser<Value>, line: &str) -> Result<Value, LogParError> {
        let cursor = Cursor::new(line, true);
        match parser(cursor) {
            Ok(success) => {
                if self.debug_level > 0 && !success.traces.is_empty() {
                    let trace_text = format_traces(&success.traces);
                    tracing::warn!(line, trace = %trace_text, "logpar parse succeeded but produced traces");
                    return Err(LogParError::Parse(trace_text));
                }
                Ok(success.value)
            }
            Err(failure) => {
                let trace_text = format_traces(&failure.traces);
                tracing::warn!(line, trace = %trace_text, "logpar parse failed");
                Err(LogParError::Parse(trace_text))
            }
        }
    }

    /// Compiles and runs `pattern_text` against `line` in one call, for
    /// callers that don't want to hold onto the compiled parser.
    pub fn parse(&self, pattern_text: &str, line: &str) -> Result<Value, LogParError> {
        let parser = self.build(pattern_text)?;
        self.run(&parser, line)
    }

    /// Reads `source_field` off `event`, runs `parser` against it, and
    /// merges the resulting document back into `event`. The event is left
    /// unmodified on any failure.
    ///
    /// Takes the target field path explicitly rather than assuming a
    /// naming convention, so callers using either a flat `parse` key or a
    /// `parse|<field>` convention can drive this without adapting it.
    pub fn run_on_event(
        &self,
        parser: &Parser<Value>,
        event: &mut dyn EventSink,
        source_field: &str,
    ) -> Result<(), LogParError> {
        if !event.exists(source_field) {
            return Err(LogParError::integration(format!("field '{source_field}' does not exist on the event")));
        }
        if !event.is_string(source_field) {
            return Err(LogParError::integration(format!("field '{source_field}' is not a string")));
        }
        let line = event.get_string(source_field).expect("existence and string-ness just checked");
        let document = self.run(parser, &line)?;
        event.merge(document);
        Ok(())
    }
}

/// Convenience wrapper bundling a `Logpar` with one compiled parser,
/// matching the common case of a stage that compiles once and runs the
/// same pattern against many events.
#[derive(Clone)]
pub struct CompiledPattern {
    logpar: Arc<Logpar>,
    parser: Parser<Value>,
}

impl CompiledPattern {
    pub fn new(logpar: Arc<Logpar>, pattern_text: &str) -> Result<Self, LogParError> {
        let parser = logpar.build(pattern_text)?;
        Ok(CompiledPattern { logpar, parser })
    }

    pub fn run(&self, line: &str) -> Result<Value, LogParError> {
        self.logpar.run(&self.parser, line)
    }

    pub fn run_on_event(&self, event: &mut dyn EventSink, source_field: &str) -> Result<(), LogParError> {
        self.logpar.run_on_event(&self.parser, event, source_field)
    }
}
