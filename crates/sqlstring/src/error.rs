//! Error types for sqlstring.
//!
//! Building and rendering statements never fails. Errors only arise when
//! option values are parsed from text, e.g. from a command line or a
//! configuration file.

/// Errors produced when parsing builder options from strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The quote style is neither `single` nor `double`.
    #[error("unknown quote style '{0}', expected 'single' or 'double'")]
    UnknownQuoteStyle(String),

    /// A keyword option could not be matched against its closed set.
    #[error("unknown {kind} '{value}'")]
    UnknownKeyword {
        /// Which option was being parsed (e.g. "select modifier").
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

/// Result type alias for sqlstring operations.
pub type Result<T> = std::result::Result<T, Error>;
