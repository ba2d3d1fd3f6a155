//! # vocab-pipe
//!
//! A two-stage vocabulary data transform.
//!
//! Stage 1 (the tokenizer) splits a raw byte stream into tokens on the
//! ASCII space byte and emits one token per line. Stage 2 (the record
//! decoder) reads fixed-layout lines of the form
//!
//! ```text
//! [8-char hex id][base64 field][optional NUL + base64 field]
//! ```
//!
//! and emits a tab-separated line of the two decoded payloads and the id
//! in decimal. The stages are independent batch transforms, chained by
//! file redirection.
//!
//! ## Example
//!
//! ```
//! use vocab_pipe::{ErrorPolicy, decode_stream, encode_record};
//!
//! let line = encode_record(b"hello", b"world", 42);
//! let mut out = Vec::new();
//! decode_stream(line.as_bytes(), &mut out, ErrorPolicy::Abort).unwrap();
//! assert_eq!(out, b"hello\tworld\t42\n");
//! ```

pub mod decoder;
pub mod error;
pub mod record;
pub mod tokenizer;

pub use decoder::{ErrorPolicy, RunSummary, decode_stream};
pub use error::StageError;
pub use record::{DecodedRecord, ID_WIDTH, RawRecord, encode_record};
pub use tokenizer::{DELIMITER, Tokens, tokenize};
