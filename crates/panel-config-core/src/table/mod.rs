//! CSV table rendering.
//!
//! Produces the exact bytes of the persisted file:
//!
//! ```text
//! EF BB BF                      UTF-8 byte-order mark (for spreadsheet tools)
//! Panel,Parameter,Value\r\n     header row, always present
//! Audio,Volume,80\r\n           one row per record, in submission order
//! ```
//!
//! Rendering happens fully in memory so that the caller can decide whether to
//! touch the disk at all.  Quoting is minimal: a cell is wrapped in double
//! quotes only when it contains a comma, a double quote, CR or LF, and embedded
//! quotes are doubled.

use std::io;

use thiserror::Error;

use crate::domain::record::ConfigRecord;

/// Column names of the header row.
pub const HEADER: [&str; 3] = ["Panel", "Parameter", "Value"];

/// UTF-8 byte-order mark written before the header.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Errors raised while rendering a table.
///
/// The writer targets a `Vec<u8>`, so in practice these only fire if the `csv`
/// crate rejects a record.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to write CSV row: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush CSV buffer: {0}")]
    Flush(#[source] io::Error),
}

/// Renders `records` as the complete CSV file contents.
///
/// # Errors
///
/// Returns [`TableError`] if the CSV writer fails.
///
/// # Example
///
/// ```rust
/// use panel_config_core::{render_table, ConfigRecord, UTF8_BOM};
///
/// let bytes = render_table(&[ConfigRecord::new("Audio", "Volume", "80")]).unwrap();
/// assert_eq!(&bytes[UTF8_BOM.len()..], b"Panel,Parameter,Value\r\nAudio,Volume,80\r\n");
/// ```
pub fn render_table(records: &[ConfigRecord]) -> Result<Vec<u8>, TableError> {
    let mut buf = Vec::with_capacity(UTF8_BOM.len() + 32 * (records.len() + 1));
    buf.extend_from_slice(UTF8_BOM);

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(buf);

    writer.write_record(HEADER)?;
    for record in records {
        writer.write_record(record.cells())?;
    }

    writer
        .into_inner()
        .map_err(|e| TableError::Flush(e.into_error()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
