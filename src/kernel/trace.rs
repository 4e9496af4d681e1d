use std::sync::atomic::{AtomicU64, Ordering};

static ORDER_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A single diagnostic emitted by a combinator: its process-wide creation
/// order, the byte offset it fired at, and a human-readable message.
///
/// `order` gives a stable total order across recursive calls and (per spec
/// §5) across threads, even though causal ordering between threads is not
/// guaranteed — only monotonicity within one parse is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRecord {
    pub order: u64,
    pub offset: usize,
    pub message: String,
}

impl TraceRecord {
    pub fn new(offset: usize, message: impl Into<String>) -> Self {
        Self { order: ORDER_COUNTER.fetch_add(1, Ordering::Relaxed), offset, message: message.into() }
    }
}

/// Sorts traces by `order` ascending and formats them one per line:
/// `"{order}: | offset: {offset} | {message}\n"`.
pub fn format_traces(traces: &[TraceRecord]) -> String {
    let mut sorted: Vec<&TraceRecord> = traces.iter().collect();
    sorted.sort_by_key(|t| t.order);
    let mut out = String::new();
    for t in sorted {
        out.push_str(&format!("{}: | offset: {} | {}\n", t.order, t.offset, t.message));
    }
    out
}
