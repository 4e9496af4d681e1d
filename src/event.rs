//! The thin collaborator interface a compiled parser runs against.
//!
//! Compiling a pattern and running it against a string are this crate's
//! job; reading the source field out of an event and writing the parsed
//! document back into it belongs to whatever asset/stage builder embeds
//! this crate. `EventSink` is the seam: any event representation that can
//! answer these five questions can drive [`crate::Logpar::run_on_event`].

use serde_json::Value;

/// A read/write view of one event, addressed by dotted JSON path.
pub trait EventSink {
    /// Whether `path` names an existing value in the event.
    fn exists(&self, path: &str) -> bool;

    /// Whether `path` names an existing value that is a JSON string.
    fn is_string(&self, path: &str) -> bool;

    /// The string at `path`, if it exists and is a string.
    fn get_string(&self, path: &str) -> Option<String>;

    /// Writes `value` at `path`, creating intermediate objects as needed.
    fn set(&mut self, path: &str, value: Value);

    /// Non-recursively merges `document` into the event at its root.
    fn merge(&mut self, document: Value);
}

/// A minimal in-memory [`EventSink`] backed by a `serde_json::Value`,
/// exercised by this crate's own tests and usable by callers that don't
/// already have an event type of their own to implement the trait for.
#[derive(Debug, Clone, Default)]
pub struct JsonEvent(Value);

impl JsonEvent {
    pub fn new(value: Value) -> Self {
        JsonEvent(value)
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    fn pointer(path: &str) -> String {
        let mut pointer = String::new();
        for segment in path.split('.') {
            pointer.push('/');
            pointer.push_str(segment);
        }
        pointer
    }
}

impl EventSink for JsonEvent {
    fn exists(&self, path: &str) -> bool {
        self.0.pointer(&Self::pointer(path)).is_some()
    }

    fn is_string(&self, path: &str) -> bool {
        self.0.pointer(&Self::pointer(path)).map_or(false, Value::is_string)
    }

    fn get_string(&self, path: &str) -> Option<String> {
        self.0.pointer(&Self::pointer(path)).and_then(Value::as_str).map(str::to_string)
    }

    fn set(&mut self, path: &str, value: Value) {
        let mut segments = path.split('.').peekable();
        if !self.0.is_object() {
            self.0 = Value::Object(serde_json::Map::new());
        }
        let mut current = self.0.as_object_mut().expect("just ensured object");
        loop {
            let segment = segments.next().expect("dotted path has at least one segment");
            if segments.peek().is_none() {
                current.insert(segment.to_string(), value);
                return;
            }
            let entry = current.entry(segment.to_string()).or_insert_with(|| Value::Object(serde_json::Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(serde_json::Map::new());
            }
            current = entry.as_object_mut().expect("just ensured object");
        }
    }

    fn merge(&mut self, document: Value) {
        let merged = crate::document::Document::from_value(self.0.take()).merge(crate::document::Document::from_value(document));
        self.0 = merged.into_value();
    }
}
