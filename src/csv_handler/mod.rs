//! CSV handler module
//!
//! Decodes the prompt library file and exports record sequences.

pub mod decoder;
pub mod reader;
pub mod record;
pub mod writer;

pub use decoder::{decode, decode_with_stats, DecodeStats};
pub use reader::{load_file, load_text, read_records, read_text};
pub use record::{PromptRecord, RecordSet};
pub use writer::{write_csv, write_json};
