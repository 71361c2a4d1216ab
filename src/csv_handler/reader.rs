use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::info;

use super::decoder::decode;
use super::record::RecordSet;
use crate::error::PromptLibraryError;

/// Reads all bytes from `reader` and returns them as text.
///
/// Bytes that are not valid UTF-8 are a load failure: nothing is decoded
/// from a partial or corrupted source.
pub fn read_text<R: Read>(mut reader: R) -> Result<String, PromptLibraryError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(String::from_utf8(bytes)?)
}

/// Reads all bytes from `reader` and decodes them as a prompt library.
///
/// The whole input is buffered before decoding starts.
pub fn read_records<R: Read>(reader: R) -> Result<RecordSet, PromptLibraryError> {
    Ok(decode(&read_text(reader)?))
}

/// Loads the raw text of a prompt library file.
pub fn load_text(path: &Path) -> Result<String, PromptLibraryError> {
    read_text(File::open(path)?)
}

/// Loads and decodes a prompt library file.
pub fn load_file(path: &Path) -> Result<RecordSet, PromptLibraryError> {
    let records = decode(&load_text(path)?);
    info!(path = %path.display(), records = records.len(), "loaded prompt library");
    Ok(records)
}
