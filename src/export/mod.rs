//! CSV serialization of matching records.

use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};

use crate::models::{Record, Value};

/// Serialize `records` as RFC 4180 CSV.
///
/// The header row follows the key order of the first record and every
/// data row is written in that same order; keys a later record lacks
/// are written as empty cells. An empty slice yields an empty string.
pub fn to_csv(records: &[&Record]) -> Result<String> {
    let Some(first) = records.first() else {
        return Ok(String::new());
    };
    let header: Vec<&str> = first.keys().collect();

    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer
        .write_record(&header)
        .context("failed to write CSV header")?;

    for record in records {
        let row = header
            .iter()
            .map(|key| record.get(key).map(Value::to_text).unwrap_or_default());
        writer
            .write_record(row)
            .context("failed to write CSV row")?;
    }

    let bytes = writer
        .into_inner()
        .context("failed to flush CSV output")?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}
