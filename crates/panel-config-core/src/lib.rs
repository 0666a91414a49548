//! # panel-config-core
//!
//! Shared library for the panel config server containing the configuration
//! record type, the JSON submission decoder, and the CSV table renderer.
//!
//! This crate has no dependencies on sockets, async runtimes, or the file
//! system.  Everything here takes bytes in and hands bytes back, so the server
//! crate decides where (and whether) the rendered table is written.
//!
//! # Data flow
//!
//! ```text
//! request body (JSON bytes)
//!     │  parse_submission()
//!     ▼
//! Vec<ConfigRecord>
//!     │  render_table()
//!     ▼
//! CSV bytes (UTF-8 BOM + "Panel,Parameter,Value" header + one row per record)
//! ```

pub mod domain;
pub mod table;

pub use domain::record::{cell_text, parse_submission, ConfigRecord, SubmissionError};
pub use table::{render_table, TableError, HEADER, UTF8_BOM};
