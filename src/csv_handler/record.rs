//! Prompt record types.
//!
//! Defines [`PromptRecord`], one decoded `name,content` row of the library,
//! and the [`RecordSet`] alias for the ordered sequence produced by the decoder.

use serde::{Deserialize, Serialize};

/// A single prompt decoded from the library CSV.
///
/// # Fields
///
/// * `name` - Short label shown as the prompt title
/// * `content` - Free-form prompt text; may contain newlines, commas and quotes
///
/// Records coming out of the decoder always have a non-empty `name` and
/// `content`.
///
/// # Example
///
/// ```
/// use prompt_library::csv_handler::PromptRecord;
///
/// let record = PromptRecord::new("Summarize", "Summarize the following text:");
/// assert_eq!(record.name, "Summarize");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRecord {
    /// Prompt title, trimmed.
    pub name: String,

    /// Prompt body. Multi-line fields keep their interior line breaks as `\n`.
    pub content: String,
}

impl PromptRecord {
    /// Creates a new record from anything convertible into `String`.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Returns true when both fields are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.content.is_empty()
    }
}

/// The full ordered sequence of decoded records, in input order.
pub type RecordSet = Vec<PromptRecord>;
