//! Optional TOML settings file.
//!
//! Passed with `--config <FILE>` (or `PANEL_CONFIG`).  Every key is optional;
//! missing keys fall back to the built-in defaults through
//! `#[serde(default = "...")]`, so a file may set just one value:
//!
//! ```toml
//! [server]
//! bind_address = "0.0.0.0"
//! port = 8080
//! static_root = "ui"
//!
//! [storage]
//! folder = "SwapDatas"
//! file_name = "InputDatas.csv"
//! ```
//!
//! CLI flags are applied on top of the loaded values in `main.rs`.

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::config::{DEFAULT_PORT, DEFAULT_SAVE_FILE_NAME, DEFAULT_SAVE_FOLDER};
use crate::domain::ServerConfig;

/// Error type for settings file operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The file could not be read.
    #[error("I/O error reading settings at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// `bind_address` is not an IP address.
    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),
}

// ── Schema ────────────────────────────────────────────────────────────────────

/// Top-level settings file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SettingsFile {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub storage: StorageSection,
}

/// `[server]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerSection {
    /// IP address to bind.  `"0.0.0.0"` exposes the UI to the LAN.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding `index.html` and `components/`.
    #[serde(default = "default_static_root")]
    pub static_root: PathBuf,
}

/// `[storage]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageSection {
    #[serde(default = "default_folder")]
    pub folder: PathBuf,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_static_root() -> PathBuf {
    PathBuf::from(".")
}
fn default_folder() -> PathBuf {
    PathBuf::from(DEFAULT_SAVE_FOLDER)
}
fn default_file_name() -> String {
    DEFAULT_SAVE_FILE_NAME.to_string()
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            static_root: default_static_root(),
        }
    }
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            folder: default_folder(),
            file_name: default_file_name(),
        }
    }
}

impl SettingsFile {
    /// Converts the settings into a [`ServerConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBindAddress`] if `bind_address` is not
    /// an IPv4 or IPv6 address.
    pub fn into_server_config(self) -> Result<ServerConfig, SettingsError> {
        let ip: IpAddr = self
            .server
            .bind_address
            .parse()
            .map_err(|_| SettingsError::InvalidBindAddress(self.server.bind_address.clone()))?;

        Ok(ServerConfig {
            bind_addr: SocketAddr::new(ip, self.server.port),
            static_root: self.server.static_root,
            save_folder: self.storage.folder,
            save_file_name: self.storage.file_name,
        })
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Reads and parses the settings file at `path`.
///
/// Unlike the built-in defaults, a file named explicitly must exist.
///
/// # Errors
///
/// Returns [`SettingsError::Io`] if the file cannot be read and
/// [`SettingsError::Parse`] if the TOML is malformed.
pub fn load_settings(path: &Path) -> Result<SettingsFile, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
