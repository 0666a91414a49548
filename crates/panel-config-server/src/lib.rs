//! panel-config-server library crate.
//!
//! A small local web backend for the simulation panel front end.  It serves
//! the single-page UI from disk and accepts the UI's settings as JSON, saving
//! them to a CSV file.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! Browser (HTML/JS + JSON over HTTP)
//!         ↕
//! [panel-config-server]
//!   ├── domain/           Pure types: ServerConfig, SaveResponse
//!   ├── application/      SaveConfigService: decode → render → store
//!   └── infrastructure/
//!         ├── http/       axum router, static files, CORS
//!         ├── store/      CSV file store (tokio::fs)
//!         └── settings_file/ optional TOML settings
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O and no async.
//! - `application` depends on `domain` and `panel-config-core`, and reaches the
//!   disk only through the [`application::ConfigStore`] trait.
//! - `infrastructure` depends on all other layers plus `axum`, `tower-http`
//!   and `tokio`.

/// Domain layer: configuration and response types (no I/O).
pub mod domain;

/// Application layer: the save-config use case.
pub mod application;

/// Infrastructure layer: HTTP server, file store, settings file.
pub mod infrastructure;
