//! Stage 2 record layout: split, decode, encode.
//!
//! One record per input line:
//! ```text
//! [8-char hex id][base64 field2][NUL][base64 field3][line terminator]
//! ```
//! The NUL separator and field3 are optional. Trailing CR, LF, and NUL
//! characters are stripped from the last field present.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::error::StageError;

/// Width of the leading hex id field, in characters.
pub const ID_WIDTH: usize = 8;

/// One input line split into its three raw fields, before decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    /// 8-character hexadecimal id.
    pub field1: &'a str,
    /// First base64 payload.
    pub field2: &'a str,
    /// Second base64 payload, empty when the line has no NUL separator.
    pub field3: &'a str,
}

impl<'a> RawRecord<'a> {
    /// Split a line at the fixed id offset and the first NUL.
    ///
    /// `line_no` is 1-based and only used for error reporting.
    pub fn split(line: &'a str, line_no: usize) -> Result<Self, StageError> {
        let (field1, rest) = line
            .split_at_checked(ID_WIDTH)
            .ok_or(StageError::Truncated { line: line_no })?;
        let (field2, field3) = match rest.find('\0') {
            Some(pos) => (
                &rest[..pos],
                rest[pos + 1..].trim_end_matches(['\r', '\n', '\0']),
            ),
            None => (rest.trim_end_matches(['\r', '\n', '\0']), ""),
        };
        Ok(Self {
            field1,
            field2,
            field3,
        })
    }

    /// Decode both base64 payloads and parse the hex id.
    pub fn decode(&self, line_no: usize) -> Result<DecodedRecord, StageError> {
        let field2 = STANDARD
            .decode(self.field2)
            .map_err(|source| StageError::Base64 {
                line: line_no,
                field: "field2",
                source,
            })?;
        let field3 = STANDARD
            .decode(self.field3)
            .map_err(|source| StageError::Base64 {
                line: line_no,
                field: "field3",
                source,
            })?;
        let id = u64::from_str_radix(self.field1, 16).map_err(|_| StageError::Hex {
            line: line_no,
            text: self.field1.to_string(),
        })?;
        Ok(DecodedRecord { field2, field3, id })
    }
}

/// A fully decoded record ready for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRecord {
    pub field2: Vec<u8>,
    pub field3: Vec<u8>,
    pub id: u64,
}

impl DecodedRecord {
    /// Render as raw bytes: field2 TAB field3 TAB decimal-id LF.
    ///
    /// Decoded payloads are arbitrary bytes; the line is assembled at the
    /// byte level so non-UTF-8 payloads survive unchanged.
    pub fn to_line(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.field2.len() + self.field3.len() + 24);
        out.extend_from_slice(&self.field2);
        out.push(b'\t');
        out.extend_from_slice(&self.field3);
        out.push(b'\t');
        out.extend_from_slice(self.id.to_string().as_bytes());
        out.push(b'\n');
        out
    }
}

/// Build a stage-2 input line (without terminator) from decoded parts.
///
/// Inverse of [`RawRecord::split`] followed by [`RawRecord::decode`], used
/// for fixture generation and the round-trip tests.
pub fn encode_record(field2: &[u8], field3: &[u8], id: u64) -> String {
    format!(
        "{id:08X}{}\0{}",
        STANDARD.encode(field2),
        STANDARD.encode(field3)
    )
}
