//! CSV source and sink for listing rows

use crate::error::{AnalyzerError, Result};
use analyzer_types::{InputRecord, OutputRecord};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Read every row of a headered CSV file
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<InputRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| with_path(e, "open", path))?;
    read_records_from(file)
}

/// Unknown columns are ignored, missing columns and short rows read as empty
pub fn read_records_from<R: Read>(reader: R) -> Result<Vec<InputRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mut records = Vec::new();
    for result in rdr.records() {
        let mut record = result?;
        // Deserializing by header fails on short rows, so pad them first
        while record.len() < headers.len() {
            record.push_field("");
        }
        let record: InputRecord = record.deserialize(Some(&headers))?;
        records.push(record);
    }
    Ok(records)
}

/// Write all rows with the fixed output header, replacing any existing file
pub fn write_records<P: AsRef<Path>>(path: P, records: &[OutputRecord]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| with_path(e, "create", path))?;
    write_records_to(file, records)
}

pub fn write_records_to<W: Write>(writer: W, records: &[OutputRecord]) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);

    wtr.write_record(OutputRecord::COLUMNS)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

fn with_path(error: std::io::Error, action: &str, path: &Path) -> AnalyzerError {
    AnalyzerError::Io(std::io::Error::new(
        error.kind(),
        format!("Failed to {} {}: {}", action, path.display(), error),
    ))
}
