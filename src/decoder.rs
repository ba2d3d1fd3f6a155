//! Stage 2 runner: per-line decode loop with a configurable error policy.
//!
//! Records are processed independently and in input order. Lines written
//! before a failing record stay written regardless of policy, so an aborted
//! run leaves a valid prefix of the output on the writer.

use std::io::{BufRead, Write};

use clap::ValueEnum;

use crate::error::StageError;
use crate::record::RawRecord;

/// What to do when a record fails to split or decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ErrorPolicy {
    /// Fail the whole run on the first malformed record.
    #[default]
    Abort,
    /// Report the record on stderr and continue.
    Skip,
    /// Continue, then fail the run at the end if any record was malformed.
    Collect,
}

/// Counters from one stage-2 run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub lines_read: usize,
    pub records_written: usize,
    pub records_skipped: usize,
}

/// Run stage 2: decode each input line into a tab-separated output line.
///
/// Output preserves input order. With [`ErrorPolicy::Abort`] the first
/// malformed record ends the run with its error; with `Skip` malformed
/// records are reported on stderr and counted in the summary; with
/// `Collect` the run continues but ends with [`StageError::Failures`]
/// if any record was malformed.
pub fn decode_stream<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    policy: ErrorPolicy,
) -> Result<RunSummary, StageError> {
    let mut summary = RunSummary::default();
    let mut failures = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        summary.lines_read += 1;
        let line_no = idx + 1;

        let decoded = RawRecord::split(&line, line_no).and_then(|raw| raw.decode(line_no));
        match decoded {
            Ok(record) => {
                writer.write_all(&record.to_line())?;
                summary.records_written += 1;
            }
            Err(err) => match policy {
                ErrorPolicy::Abort => {
                    writer.flush()?;
                    return Err(err);
                }
                ErrorPolicy::Skip => {
                    eprintln!("skipping {err}");
                    summary.records_skipped += 1;
                }
                ErrorPolicy::Collect => {
                    eprintln!("{err}");
                    failures += 1;
                    summary.records_skipped += 1;
                }
            },
        }
    }

    writer.flush()?;
    if failures > 0 {
        return Err(StageError::Failures { count: failures });
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::encode_record;

    fn input(lines: &[String]) -> Vec<u8> {
        let mut text = lines.join("\n");
        text.push('\n');
        text.into_bytes()
    }

    #[test]
    fn test_decodes_lines_in_order() {
        let lines = input(&[
            encode_record(b"hello", b"world", 42),
            encode_record(b"solo", b"", 255),
        ]);
        let mut out = Vec::new();
        let summary = decode_stream(&lines[..], &mut out, ErrorPolicy::Abort).unwrap();
        assert_eq!(out, b"hello\tworld\t42\nsolo\t\t255\n");
        assert_eq!(summary.lines_read, 2);
        assert_eq!(summary.records_written, 2);
        assert_eq!(summary.records_skipped, 0);
    }

    #[test]
    fn test_abort_keeps_earlier_output() {
        let lines = input(&[
            encode_record(b"ok", b"", 1),
            "GGGGGGGGaGVsbG8=".to_string(),
            encode_record(b"never", b"", 3),
        ]);
        let mut out = Vec::new();
        let err = decode_stream(&lines[..], &mut out, ErrorPolicy::Abort).unwrap_err();
        assert!(matches!(err, StageError::Hex { line: 2, .. }));
        assert_eq!(out, b"ok\t\t1\n");
    }

    #[test]
    fn test_skip_continues_past_bad_records() {
        let lines = input(&[
            encode_record(b"a", b"", 1),
            "short".to_string(),
            encode_record(b"b", b"", 2),
        ]);
        let mut out = Vec::new();
        let summary = decode_stream(&lines[..], &mut out, ErrorPolicy::Skip).unwrap();
        assert_eq!(out, b"a\t\t1\nb\t\t2\n");
        assert_eq!(summary.records_written, 2);
        assert_eq!(summary.records_skipped, 1);
    }

    #[test]
    fn test_collect_fails_at_end_with_count() {
        let lines = input(&[
            "GGGGGGGG".to_string(),
            encode_record(b"kept", b"", 7),
            "0000002A***".to_string(),
        ]);
        let mut out = Vec::new();
        let err = decode_stream(&lines[..], &mut out, ErrorPolicy::Collect).unwrap_err();
        assert!(matches!(err, StageError::Failures { count: 2 }));
        // good records are still written
        assert_eq!(out, b"kept\t\t7\n");
    }

    #[test]
    fn test_empty_input_yields_empty_summary() {
        let mut out = Vec::new();
        let summary = decode_stream(&b""[..], &mut out, ErrorPolicy::Abort).unwrap();
        assert_eq!(summary, RunSummary::default());
        assert!(out.is_empty());
    }

    #[test]
    fn test_binary_payload_survives_byte_exact() {
        let payload = [0u8, 9, 10, 13, 200, 255];
        let lines = input(&[encode_record(&payload, b"\x00", 16)]);
        let mut out = Vec::new();
        decode_stream(&lines[..], &mut out, ErrorPolicy::Abort).unwrap();
        let mut expected = payload.to_vec();
        expected.extend_from_slice(b"\t\x00\t16\n");
        assert_eq!(out, expected);
    }
}
