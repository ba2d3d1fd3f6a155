//! Error types for stage runs.
//!
//! Per-record failures carry a 1-based line number so the offending record
//! can be reported without re-reading the input.

use thiserror::Error;

/// Errors produced by the tokenizer and record decoder stages.
#[derive(Debug, Error)]
pub enum StageError {
    /// Input could not be read or output could not be written.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A stage-2 line was shorter than the 8-character hex id field.
    #[error("line {line}: truncated record (need at least 8 characters)")]
    Truncated { line: usize },

    /// A base64 payload field did not decode.
    #[error("line {line}: invalid base64 in {field}: {source}")]
    Base64 {
        line: usize,
        field: &'static str,
        source: base64::DecodeError,
    },

    /// The leading id field was not a hexadecimal numeral.
    #[error("line {line}: invalid hex id {text:?}")]
    Hex { line: usize, text: String },

    /// Terminal error for collect-policy runs with at least one bad record.
    #[error("{count} record(s) failed to decode")]
    Failures { count: usize },
}
