//! LogPar compiles a concise pattern string describing a log line's shape
//! into an executable parser. Running that parser against a line produces
//! either a structured document or a precise diagnostic explaining exactly
//! where and why the line didn't match.
//!
//! # Design
//!
//! The crate is built in layers, each only aware of the one below it:
//!
//! - [`kernel`] is a small combinator toolkit: parsers are values
//!   (`Arc<dyn Fn(Cursor) -> PResult<T>>`), not functions baked into a
//!   recursive-descent call stack, so they can be built once, stored, and
//!   shared across threads.
//! - [`pattern`] is the fixed grammar that turns a pattern string into
//!   [`ir::IrNode`] trees, built entirely from the kernel.
//! - [`schema`] and [`registry`] hold, respectively, the field-name to
//!   semantic-type mapping loaded from a configuration document and the
//!   semantic-type to concrete-parser-builder table.
//! - [`compiler`] turns an IR tree plus a schema and registry into one
//!   `Parser<serde_json::Value>` — the hard part being end-token
//!   resolution: figuring out, for each field, the exact byte sequences
//!   that tell it where to stop.
//! - [`logpar`] ties schema and registry together behind [`Logpar`], the
//!   entry point most callers want.
//!
//! # Example
//!
//! ```
//! use logpar::Logpar;
//! use serde_json::json;
//!
//! let schema = json!({"fields": {"client.ip": "ip", "user.name": "keyword"}});
//! let logpar = Logpar::new(&schema, 2, 0).unwrap();
//! let parser = logpar.build("client=<client.ip> user=<user.name>").unwrap();
//! let document = logpar.run(&parser, "client=10.0.0.1 user=alice").unwrap();
//! assert_eq!(document, json!({"client": {"ip": "10.0.0.1"}, "user": {"name": "alice"}}));
//! ```

pub mod builders;
pub mod compiler;
pub mod document;
pub mod error;
pub mod event;
pub mod ir;
pub mod kernel;
pub mod logpar;
pub mod pattern;
pub mod registry;
pub mod schema;

pub use document::Document;
pub use error::LogParError;
pub use event::{EventSink, JsonEvent};
pub use logpar::{CompiledPattern, Logpar};
pub use registry::{BuilderFn, ParserKind, TypeRegistry};
pub use schema::{Schema, SemanticType};
