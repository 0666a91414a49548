//! Infrastructure layer for panel-config-server.
//!
//! # Responsibilities
//!
//! - Binding the HTTP listener and serving the axum router
//! - Serving the front end's static files
//! - Writing the CSV table to disk
//! - Reading the optional TOML settings file
//!
//! # What does NOT belong here?
//!
//! - Record decoding or CSV formatting (that is `panel-config-core`)
//! - CLI parsing (that is done in `main.rs`)

pub mod http;
pub mod settings_file;
pub mod store;

pub use http::{build_router, run_server, serve};
pub use settings_file::{load_settings, SettingsError, SettingsFile};
pub use store::CsvFileStore;
