//! The save-config use case.
//!
//! [`SaveConfigService::save`] takes the raw body of `POST /api/save-config`
//! and runs it through three steps:
//!
//! ```text
//! body bytes ──parse_submission──▶ records ──render_table──▶ CSV bytes ──ConfigStore──▶ disk
//! ```
//!
//! The body is decoded and the table rendered before the store is called, so
//! a malformed body never truncates the previously saved file.  Once the store
//! starts writing there is no rollback: a crash mid-write can leave a short
//! file behind.
//!
//! The disk is reached only through the [`ConfigStore`] trait so the use case
//! can be tested with a mock.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use panel_config_core::{parse_submission, render_table, SubmissionError, TableError};

// ── Storage seam ──────────────────────────────────────────────────────────────

/// Errors raised by a [`ConfigStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The folder holding the table could not be created.
    #[error("could not create folder {}: {source}", .path.display())]
    CreateFolder {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The table file could not be written.
    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Destination for rendered tables.
///
/// The production implementation is
/// [`CsvFileStore`](crate::infrastructure::store::CsvFileStore).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Human-readable location of the table, used in success messages.
    fn destination(&self) -> String;

    /// Replaces the whole stored table with `contents`.
    async fn replace_all(&self, contents: Vec<u8>) -> Result<(), StoreError>;
}

// ── Use case ──────────────────────────────────────────────────────────────────

/// Any failure of a save request.
///
/// The HTTP layer does not distinguish between variants; it reports
/// `to_string()` to the caller with a 500 status.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error(transparent)]
    Submission(#[from] SubmissionError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Summary of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReceipt {
    /// Where the table was written.
    pub destination: String,
    /// Number of data rows written (header excluded).
    pub rows: usize,
}

/// Decodes submissions and hands the rendered table to a [`ConfigStore`].
///
/// Cheap to clone: the store is shared behind an `Arc`.
#[derive(Clone)]
pub struct SaveConfigService {
    store: Arc<dyn ConfigStore>,
}

impl SaveConfigService {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    /// Saves the submission in `body`, replacing any previously saved table.
    ///
    /// # Errors
    ///
    /// - [`SaveError::Submission`] if `body` is not a JSON array of complete
    ///   records.  The store is not touched.
    /// - [`SaveError::Table`] if rendering fails.  The store is not touched.
    /// - [`SaveError::Store`] if the folder or file cannot be written.
    pub async fn save(&self, body: &[u8]) -> Result<SaveReceipt, SaveError> {
        let records = parse_submission(body)?;
        let table = render_table(&records)?;
        debug!(
            "rendered {} records into {} bytes",
            records.len(),
            table.len()
        );

        self.store.replace_all(table).await?;

        Ok(SaveReceipt {
            destination: self.store.destination(),
            rows: records.len(),
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
