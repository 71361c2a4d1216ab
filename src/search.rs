//! Search module
//!
//! Case-insensitive substring search over prompt names and content.
//!
//! [`filter`] is the pure search: it borrows the full record set and returns
//! the matching records in their original order. [`Catalog`] owns a loaded
//! record set together with the current search term and the filtered view
//! derived from it.
//!
//! # Example
//!
//! ```
//! use prompt_library::csv_handler::PromptRecord;
//! use prompt_library::search::{filter, Catalog};
//!
//! let all = vec![
//!     PromptRecord::new("alpha prompt", "first"),
//!     PromptRecord::new("Other", "mentions Alpha here"),
//!     PromptRecord::new("Unrelated", "nothing"),
//! ];
//! assert_eq!(filter(&all, "ALPHA").len(), 2);
//!
//! let mut catalog = Catalog::new(all);
//! catalog.search("  nothing ");
//! assert_eq!(catalog.summary().to_string(), "Showing 1 of 3 prompts");
//! ```

use std::fmt;
use std::path::Path;

use crate::csv_handler::decoder::trim_field;
use crate::csv_handler::{decode, load_file, PromptRecord, RecordSet};
use crate::error::PromptLibraryError;

/// Normalizes a raw search term: lowercased, then trimmed like a decoded field.
pub fn normalize_term(term: &str) -> String {
    trim_field(&term.to_lowercase()).to_string()
}

/// Returns true if `record` matches an already normalized term.
///
/// An empty term matches everything.
pub fn matches(record: &PromptRecord, normalized_term: &str) -> bool {
    normalized_term.is_empty()
        || record.name.to_lowercase().contains(normalized_term)
        || record.content.to_lowercase().contains(normalized_term)
}

/// Returns the records of `all` matching `term`, in their original order.
///
/// The term is normalized first. An empty term returns every record.
pub fn filter<'a>(all: &'a [PromptRecord], term: &str) -> Vec<&'a PromptRecord> {
    let term = normalize_term(term);
    all.iter().filter(|record| matches(record, &term)).collect()
}

fn matching_indices(all: &[PromptRecord], normalized_term: &str) -> Vec<usize> {
    all.iter()
        .enumerate()
        .filter(|(_, record)| matches(record, normalized_term))
        .map(|(index, _)| index)
        .collect()
}

/// A loaded prompt library and its current search.
///
/// The record set is fixed at construction. Each call to [`Catalog::search`]
/// replaces the filtered view wholesale; nothing is ever updated in place.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: RecordSet,
    term: String,
    view: Vec<usize>,
}

impl Catalog {
    /// Creates a catalog showing every record.
    pub fn new(records: RecordSet) -> Self {
        let view = (0..records.len()).collect();
        Self {
            records,
            term: String::new(),
            view,
        }
    }

    /// Decodes `text` and wraps the result.
    pub fn from_text(text: &str) -> Self {
        Self::new(decode(text))
    }

    /// Loads and decodes a library file.
    pub fn load(path: &Path) -> Result<Self, PromptLibraryError> {
        Ok(Self::new(load_file(path)?))
    }

    /// The full record set, in input order.
    pub fn records(&self) -> &[PromptRecord] {
        &self.records
    }

    /// Number of records in the full set.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The current normalized search term; empty when not searching.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Applies a new search term and returns the number of visible records.
    pub fn search(&mut self, term: &str) -> usize {
        self.term = normalize_term(term);
        self.view = matching_indices(&self.records, &self.term);
        self.view.len()
    }

    /// Drops the current search so every record is visible again.
    pub fn clear(&mut self) {
        self.search("");
    }

    /// The records matching the current term, in input order.
    pub fn view(&self) -> Vec<&PromptRecord> {
        self.view.iter().map(|&index| &self.records[index]).collect()
    }

    /// Record at `index` within the filtered view.
    pub fn get(&self, index: usize) -> Option<&PromptRecord> {
        self.view.get(index).map(|&i| &self.records[i])
    }

    /// Visible and total counts for the current search.
    pub fn summary(&self) -> ResultsSummary {
        ResultsSummary {
            shown: self.view.len(),
            total: self.records.len(),
            searching: !self.term.is_empty(),
        }
    }
}

/// Result counts for display next to the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultsSummary {
    pub shown: usize,
    pub total: usize,
    /// Whether a non-empty term is active.
    pub searching: bool,
}

impl fmt::Display for ResultsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.searching {
            write!(f, "Showing {} of {} prompts", self.shown, self.total)
        } else {
            write!(f, "{} prompts available", self.total)
        }
    }
}
