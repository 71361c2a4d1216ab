use std::io::Write;

use csv::Writer;

use super::record::PromptRecord;
use crate::error::PromptLibraryError;

/// Writes records as a pretty-printed JSON array of `{name, content}` objects.
pub fn write_json<W: Write>(
    records: &[&PromptRecord],
    mut writer: W,
) -> Result<(), PromptLibraryError> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Writes records as RFC 4180 CSV with a `name,content` header.
///
/// Unlike the library input format, fields containing quotes are escaped by
/// doubling them, so the output is meant for spreadsheets and other CSV
/// tools rather than for feeding back into the decoder.
pub fn write_csv<W: Write>(records: &[&PromptRecord], writer: W) -> Result<(), PromptLibraryError> {
    let mut writer = Writer::from_writer(writer);

    writer.write_record(["name", "content"])?;
    for record in records {
        writer.write_record([record.name.as_str(), record.content.as_str()])?;
    }

    writer.flush()?;
    Ok(())
}
