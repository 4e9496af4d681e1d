//! The six fatal error kinds, collapsed into one closed enum.
//!
//! Every variant carries a human-readable message (`Grammar`/`Parse` carry
//! the pre-sorted, pre-formatted trace text). No panics anywhere a
//! condition here applies; `unreachable!`/`debug_assert!` are reserved for
//! states the type system doesn't already rule out.

use std::fmt;

#[derive(Debug, Clone)]
pub enum LogParError {
    /// Malformed schema, unknown type name, empty fields mapping.
    Configuration(String),
    /// Duplicate builder kind, or compiling before `P_LITERAL` is registered.
    Registration(String),
    /// Pattern string does not conform to the pattern grammar.
    Grammar(String),
    /// Schema lookup miss, unknown custom kind, missing group anchor,
    /// recursion limit exceeded.
    Compile(String),
    /// Payload parser failed against a concrete input; the event is left
    /// unmodified.
    Parse(String),
    /// The target field on the event does not exist or is not a string.
    Integration(String),
}

impl LogParError {
    pub fn configuration(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::error!(kind = "configuration", %message, "logpar configuration error");
        LogParError::Configuration(message)
    }

    pub fn registration(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::error!(kind = "registration", %message, "logpar registration error");
        LogParError::Registration(message)
    }

    pub fn compile(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::error!(kind = "compile", %message, "logpar compile error");
        LogParError::Compile(message)
    }

    pub fn integration(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::warn!(kind = "integration", %message, "logpar integration error");
        LogParError::Integration(message)
    }

    /// `Grammar`/`Parse` are constructed directly from pre-formatted trace
    /// text by their callers (pattern grammar and compiled-parser runner
    /// respectively), which already hold the `tracing` span for the
    /// operation in progress; logging happens there instead of here to
    /// avoid duplicating the pattern/field context in the event.
    fn kind_label(&self) -> &'static str {
        match self {
            LogParError::Configuration(_) => "ConfigurationError",
            LogParError::Registration(_) => "RegistrationError",
            LogParError::Grammar(_) => "GrammarError",
            LogParError::Compile(_) => "CompileError",
            LogParError::Parse(_) => "ParseError",
            LogParError::Integration(_) => "IntegrationError",
        }
    }

    fn message(&self) -> &str {
        match self {
            LogParError::Configuration(m)
            | LogParError::Registration(m)
            | LogParError::Grammar(m)
            | LogParError::Compile(m)
            | LogParError::Parse(m)
            | LogParError::Integration(m) => m,
        }
    }
}

impl fmt::Display for LogParError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind_label(), self.message())
    }
}

impl std::error::Error for LogParError {}
