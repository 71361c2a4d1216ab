//! Terminal rendering of prompt records for the CLI.

use std::borrow::Cow;

use crate::csv_handler::PromptRecord;

/// Number of characters shown in a preview before it is cut.
pub const DEFAULT_PREVIEW_CHARS: usize = 200;

/// Marker appended to a truncated preview.
const ELLIPSIS: &str = "...";

/// How much of each record's content to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMode {
    /// At most this many characters, then `...`.
    Preview(usize),
    /// The whole content.
    Full,
}

/// Cuts `content` to `max_chars` characters and appends `...` if anything was removed.
pub fn preview(content: &str, max_chars: usize) -> Cow<'_, str> {
    match content.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}{}", &content[..cut], ELLIPSIS)),
        None => Cow::Borrowed(content),
    }
}

/// Renders one record as a numbered title line followed by indented content.
///
/// `index` is the zero-based position in the filtered view; it is printed
/// one-based.
pub fn render_record(index: usize, record: &PromptRecord, mode: ContentMode) -> String {
    let body = match mode {
        ContentMode::Preview(max_chars) => preview(&record.content, max_chars),
        ContentMode::Full => Cow::Borrowed(record.content.as_str()),
    };

    let mut out = format!("[{}] {}\n", index + 1, record.name);
    for line in body.lines() {
        out.push_str("    ");
        out.push_str(line);
        out.push('\n');
    }
    out
}
