//! Delimited input parsing.

use std::io::BufRead;

use anyhow::{Context, Result, bail};
use tracing::debug;

/// Parsed input: a header record followed by content records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Records {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Splits one line into trimmed cells.
pub fn split_record(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter)
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Reads delimited records, skipping blank lines.
///
/// The first record becomes the header. Shorter records are padded with empty
/// cells to the header length; longer ones are rejected with their line
/// number.
pub fn read_records(reader: impl BufRead, delimiter: char) -> Result<Records> {
    let mut records = Records::default();
    let mut seen_header = false;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("failed to read line {line_no}"))?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let mut cells = split_record(line, delimiter);
        if !seen_header {
            records.header = cells;
            seen_header = true;
            continue;
        }

        let columns = records.header.len();
        if cells.len() > columns {
            bail!(
                "line {line_no} has {} cells but the header has {columns}",
                cells.len()
            );
        }
        cells.resize(columns, String::new());
        records.rows.push(cells);
    }

    debug!(
        columns = records.header.len(),
        rows = records.rows.len(),
        "read input records"
    );
    Ok(records)
}
