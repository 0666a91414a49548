//! JSON body returned by `POST /api/save-config`.
//!
//! ```json
//! {"status":"success","message":"Saved to SwapDatas/InputDatas.csv"}
//! {"status":"error","message":"missing field `value` at line 1 column 29"}
//! ```

use serde::{Deserialize, Serialize};

/// Outcome indicator of a save request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveStatus {
    Success,
    Error,
}

/// Response body of the save endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    pub status: SaveStatus,
    /// Destination path on success, error text on failure.
    pub message: String,
}

impl SaveResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: SaveStatus::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: SaveStatus::Error,
            message: message.into(),
        }
    }
}
