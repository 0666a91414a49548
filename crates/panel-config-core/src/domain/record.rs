//! Configuration records and the JSON submission decoder.
//!
//! The front end posts a JSON array of objects:
//!
//! ```json
//! [
//!   {"panel": "Audio", "parameter": "Volume", "value": 80},
//!   {"panel": "Audio", "parameter": "Muted",  "value": false}
//! ]
//! ```
//!
//! Each object must carry all three keys.  The values are not restricted to
//! strings: the UI sends numbers, booleans and occasionally nested values, and
//! all of them end up as text in a CSV cell.  [`cell_text`] defines that
//! conversion once so every key is treated the same way.
//!
//! # Coercion table
//!
//! | JSON value     | Cell text                        |
//! |----------------|----------------------------------|
//! | string         | the string, verbatim             |
//! | number         | canonical form (`80`, `0.5`)     |
//! | `true`/`false` | `true` / `false` (lowercase)     |
//! | `null`         | empty                            |
//! | array / object | compact JSON (`[1,2]`)           |
//!
//! Booleans keep JSON's lowercase spelling, not the capitalised `True`/`False`
//! some spreadsheet templates expect; compare case-insensitively when reading
//! the table back.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

/// Error returned when a request body is not a valid submission.
///
/// Covers every shape problem in one variant: invalid JSON, a top-level value
/// that is not an array, an element that is not an object, or an object that
/// is missing one of the three required keys.  The message is serde_json's own
/// (e.g. ``missing field `value` at line 1 column 40``), which is what the HTTP
/// layer hands back to the caller.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Malformed(#[from] serde_json::Error),
}

/// One (panel, parameter, value) triple, already coerced to text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConfigRecord {
    /// UI section the setting belongs to.
    #[serde(deserialize_with = "deserialize_cell")]
    pub panel: String,

    /// Named setting within the panel.
    #[serde(deserialize_with = "deserialize_cell")]
    pub parameter: String,

    /// Setting value as it will appear in the CSV cell.
    #[serde(deserialize_with = "deserialize_cell")]
    pub value: String,
}

impl ConfigRecord {
    /// Builds a record from anything string-like.  Mostly useful in tests and
    /// benchmarks; production records come from [`parse_submission`].
    pub fn new(
        panel: impl Into<String>,
        parameter: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            panel: panel.into(),
            parameter: parameter.into(),
            value: value.into(),
        }
    }

    /// The three cells of this record in column order.
    pub fn cells(&self) -> [&str; 3] {
        [&self.panel, &self.parameter, &self.value]
    }
}

/// Decodes a raw request body into an ordered list of records.
///
/// The body is decoded as JSON regardless of any `Content-Type` header.  Extra
/// keys on an object are ignored.  Input order and duplicates are preserved.
///
/// # Errors
///
/// Returns [`SubmissionError::Malformed`] if the body is not a JSON array of
/// objects each holding `panel`, `parameter` and `value`.
///
/// # Example
///
/// ```rust
/// use panel_config_core::parse_submission;
///
/// let records = parse_submission(br#"[{"panel":"Audio","parameter":"Volume","value":80}]"#).unwrap();
/// assert_eq!(records[0].value, "80");
/// ```
pub fn parse_submission(body: &[u8]) -> Result<Vec<ConfigRecord>, SubmissionError> {
    Ok(serde_json::from_slice(body)?)
}

/// Converts any JSON value into the text written to a CSV cell.
///
/// See the module-level coercion table.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // Nested values are kept as compact JSON so nothing is lost.
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn deserialize_cell<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(cell_text(&value))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
