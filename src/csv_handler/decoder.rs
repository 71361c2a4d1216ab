//! Prompt library decoder.
//!
//! Turns raw library text into an ordered [`RecordSet`]. The format is a
//! relaxed two-column CSV written by hand, not RFC 4180:
//!
//! - Line 1 is a header and is always skipped, whatever it contains.
//! - A record is `name,content`, split at the *first* comma on the line.
//! - `content` may be wrapped in double quotes, and a quoted field may span
//!   several physical lines. Quotes are only recognised at the start of the
//!   field and at the end of the line that closes it; `""` escaping does not
//!   exist.
//!
//! Decoding never fails. Lines without a comma, records with an empty name or
//! content, and a quoted field still open at end of input are dropped
//! silently. [`decode_with_stats`] reports how many of each were dropped.
//!
//! # Example
//!
//! ```
//! use prompt_library::csv_handler::decode;
//!
//! let text = "name,content\nGamma,\"Line one\nLine two\"\nAlpha,Hello world";
//! let records = decode(text);
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].content, "Line one\nLine two");
//! assert_eq!(records[1].name, "Alpha");
//! ```

use std::fmt;

use tracing::debug;

use super::record::{PromptRecord, RecordSet};

const QUOTE: char = '"';

/// Counters collected while decoding.
///
/// Line numbers are 1-indexed with line 1 being the header, matching what an
/// editor shows.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DecodeStats {
    /// Physical lines after the header.
    pub lines_read: u64,

    /// Records emitted.
    pub records: u64,

    /// Emitted records whose content spanned more than one line.
    pub multiline_records: u64,

    /// Lines skipped because they had no comma.
    pub malformed_lines: u64,

    /// Records dropped because the name or content was empty.
    pub incomplete_records: u64,

    /// Quoted fields still open when the input ended (0 or 1).
    pub unterminated_fields: u64,
}

impl DecodeStats {
    /// Creates a new `DecodeStats` with all counters set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of records or lines that were dropped.
    pub fn dropped(&self) -> u64 {
        self.malformed_lines + self.incomplete_records + self.unterminated_fields
    }

    /// Returns true if nothing was dropped.
    pub fn is_clean(&self) -> bool {
        self.dropped() == 0
    }
}

impl fmt::Display for DecodeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Prompt Library Decode Report")?;
        writeln!(f, "============================")?;
        writeln!(
            f,
            "Status: {}",
            if self.is_clean() { "CLEAN" } else { "LOSSY" }
        )?;
        writeln!(f)?;
        writeln!(f, "Statistics:")?;
        writeln!(f, "  Lines read:          {:>10}", self.lines_read)?;
        writeln!(f, "  Records:             {:>10}", self.records)?;
        writeln!(f, "  Multi-line records:  {:>10}", self.multiline_records)?;
        writeln!(f, "  Malformed lines:     {:>10}", self.malformed_lines)?;
        writeln!(f, "  Incomplete records:  {:>10}", self.incomplete_records)?;
        writeln!(f, "  Unterminated fields: {:>10}", self.unterminated_fields)?;
        Ok(())
    }
}

/// Line-walk state.
enum State {
    /// Between records.
    Idle,
    /// Inside a quoted field that has not been closed yet.
    InField {
        name: String,
        buffer: String,
        start_line: u64,
    },
}

/// Decodes library text into records, dropping anything malformed.
///
/// Equivalent to `decode_with_stats(text).0`.
pub fn decode(text: &str) -> RecordSet {
    decode_with_stats(text).0
}

/// Decodes library text and reports what was dropped along the way.
pub fn decode_with_stats(text: &str) -> (RecordSet, DecodeStats) {
    let mut records = RecordSet::new();
    let mut stats = DecodeStats::new();
    let mut state = State::Idle;

    for (index, line) in text.split('\n').enumerate().skip(1) {
        let line_number = index as u64 + 1;
        stats.lines_read += 1;

        state = match state {
            State::Idle => match line.split_once(',') {
                None => {
                    debug!(line = line_number, "skipping line without a comma");
                    stats.malformed_lines += 1;
                    State::Idle
                }
                Some((name, rest)) => {
                    let name = trim_field(name);
                    let rest = trim_field(rest);

                    match rest.strip_prefix(QUOTE) {
                        None => {
                            emit(&mut records, &mut stats, line_number, name, rest, false);
                            State::Idle
                        }
                        // A lone `"` after the opening quote is not self-closing.
                        Some(inner) if inner.len() > 1 && inner.ends_with(QUOTE) => {
                            let content = &inner[..inner.len() - QUOTE.len_utf8()];
                            emit(&mut records, &mut stats, line_number, name, content, false);
                            State::Idle
                        }
                        Some(inner) => State::InField {
                            name: name.to_string(),
                            buffer: inner.to_string(),
                            start_line: line_number,
                        },
                    }
                }
            },
            State::InField {
                name,
                mut buffer,
                start_line,
            } => {
                buffer.push('\n');
                match line.strip_suffix(QUOTE) {
                    Some(last) => {
                        buffer.push_str(last);
                        emit(&mut records, &mut stats, start_line, &name, &buffer, true);
                        State::Idle
                    }
                    None => {
                        buffer.push_str(line);
                        State::InField {
                            name,
                            buffer,
                            start_line,
                        }
                    }
                }
            }
        };
    }

    if let State::InField { start_line, .. } = state {
        debug!(line = start_line, "discarding quoted field left open at end of input");
        stats.unterminated_fields += 1;
    }

    (records, stats)
}

fn emit(
    records: &mut RecordSet,
    stats: &mut DecodeStats,
    line_number: u64,
    name: &str,
    content: &str,
    multiline: bool,
) {
    let record = PromptRecord::new(name, content);
    if !record.is_complete() {
        debug!(line = line_number, "dropping record with empty name or content");
        stats.incomplete_records += 1;
        return;
    }

    stats.records += 1;
    if multiline {
        stats.multiline_records += 1;
    }
    records.push(record);
}

/// Returns true for the characters [`trim_field`] strips.
///
/// Unicode whitespace except NEL (U+0085), plus the byte-order mark. NEL is
/// content, not padding, in the libraries this reads.
pub fn is_field_padding(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Trims surrounding padding as defined by [`is_field_padding`].
pub fn trim_field(field: &str) -> &str {
    field.trim_matches(is_field_padding)
}
