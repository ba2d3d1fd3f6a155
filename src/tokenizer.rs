//! Stage 1: space-delimited byte tokenizer.
//!
//! Splits a raw byte stream on the ASCII space byte (0x20). A token is a
//! maximal run of non-space bytes; delimiter runs never produce empty
//! tokens. No other byte is a delimiter, so newlines and NULs pass through
//! inside tokens untouched.

use std::io::{BufRead, Write};

use crate::error::StageError;

/// The only delimiter byte recognized by stage 1.
pub const DELIMITER: u8 = b' ';

/// Lazy iterator over the non-empty tokens of a byte stream.
///
/// Yields tokens in encounter order. Empty input yields no tokens; input
/// with no delimiter yields exactly one token equal to the whole input.
pub struct Tokens<R: BufRead> {
    reader: R,
    done: bool,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = std::io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut token = Vec::new();
        loop {
            // read_until consumes the delimiter along with the token bytes;
            // a read that stops without one is the final chunk before EOF.
            match self.reader.read_until(DELIMITER, &mut token) {
                Ok(0) => {
                    self.done = true;
                    return if token.is_empty() {
                        None
                    } else {
                        Some(Ok(token))
                    };
                }
                Ok(_) => {
                    if token.last() == Some(&DELIMITER) {
                        token.pop();
                    }
                    if !token.is_empty() {
                        return Some(Ok(token));
                    }
                    // delimiter run: keep scanning
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Run stage 1: write one token per line to `writer`.
///
/// Returns the number of tokens emitted.
pub fn tokenize<R: BufRead, W: Write>(reader: R, mut writer: W) -> Result<usize, StageError> {
    let mut count = 0;
    for token in Tokens::new(reader) {
        let token = token?;
        writer.write_all(&token)?;
        writer.write_all(b"\n")?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &[u8]) -> Vec<Vec<u8>> {
        Tokens::new(input).map(|t| t.unwrap()).collect()
    }

    #[test]
    fn test_empty_input_yields_no_tokens() {
        assert!(collect(b"").is_empty());
    }

    #[test]
    fn test_no_delimiter_yields_whole_input() {
        assert_eq!(collect(b"alpha"), vec![b"alpha".to_vec()]);
    }

    #[test]
    fn test_splits_on_space_in_order() {
        assert_eq!(
            collect(b"one two three"),
            vec![b"one".to_vec(), b"two".to_vec(), b"three".to_vec()]
        );
    }

    #[test]
    fn test_delimiter_runs_produce_no_empty_tokens() {
        assert_eq!(
            collect(b"  a   b  "),
            vec![b"a".to_vec(), b"b".to_vec()]
        );
    }

    #[test]
    fn test_only_spaces_yields_no_tokens() {
        assert!(collect(b"     ").is_empty());
    }

    #[test]
    fn test_newlines_are_not_delimiters() {
        assert_eq!(
            collect(b"a\nb c\n"),
            vec![b"a\nb".to_vec(), b"c\n".to_vec()]
        );
    }

    #[test]
    fn test_non_utf8_bytes_pass_through() {
        assert_eq!(
            collect(b"\xff\xfe \x00\x01"),
            vec![vec![0xff, 0xfe], vec![0x00, 0x01]]
        );
    }

    #[test]
    fn test_tokenize_writes_one_token_per_line() {
        let mut out = Vec::new();
        let count = tokenize(&b"one  two three"[..], &mut out).unwrap();
        assert_eq!(count, 3);
        assert_eq!(out, b"one\ntwo\nthree\n");
    }

    #[test]
    fn test_tokenize_empty_input_writes_nothing() {
        let mut out = Vec::new();
        let count = tokenize(&b""[..], &mut out).unwrap();
        assert_eq!(count, 0);
        assert!(out.is_empty());
    }
}
