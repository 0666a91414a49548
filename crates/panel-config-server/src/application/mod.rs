//! Application layer for panel-config-server.
//!
//! Knows *what* a save does (decode, render, replace) and delegates *where*
//! the bytes go to a [`ConfigStore`] implementation from the infrastructure
//! layer.
//!
//! # What does NOT belong here?
//!
//! - axum handlers, status codes, or JSON response bodies
//! - `tokio::fs` calls

pub mod save_config;

pub use save_config::{ConfigStore, SaveConfigService, SaveError, SaveReceipt, StoreError};
