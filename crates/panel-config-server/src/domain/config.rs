//! Server configuration types.
//!
//! [`ServerConfig`] is the single source of truth for all runtime settings.
//! It is built once at startup from defaults, an optional TOML settings file
//! and CLI flags (see `main.rs`), then handed to the router and the store.
//! There is no global state: every component receives the values it needs.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default folder (relative to the working directory) holding the saved table.
pub const DEFAULT_SAVE_FOLDER: &str = "SwapDatas";

/// Default file name of the saved table.
pub const DEFAULT_SAVE_FILE_NAME: &str = "InputDatas.csv";

/// Name of the entry document under the static root.
pub const INDEX_FILE_NAME: &str = "index.html";

/// Subdirectory of the static root served under `/components`.
pub const COMPONENTS_DIR_NAME: &str = "components";

/// All runtime configuration for the server.
///
/// # Example
///
/// ```rust
/// use panel_config_server::domain::ServerConfig;
///
/// let cfg = ServerConfig::default();
/// assert_eq!(cfg.bind_addr.port(), 8080);
/// assert!(cfg.save_path().ends_with("SwapDatas/InputDatas.csv"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    ///
    /// Defaults to loopback so the UI is only reachable from this machine.
    pub bind_addr: SocketAddr,

    /// Directory the front end is served from.
    ///
    /// `/` maps to `index.html` in this directory, `/components/...` to its
    /// `components` subdirectory, and any other path to a file below it.
    pub static_root: PathBuf,

    /// Folder the CSV table is written into.  Created if missing.
    pub save_folder: PathBuf,

    /// File name of the CSV table inside `save_folder`.
    pub save_file_name: String,
}

impl ServerConfig {
    /// Full path of the saved table, e.g. `SwapDatas/InputDatas.csv`.
    pub fn save_path(&self) -> PathBuf {
        self.save_folder.join(&self.save_file_name)
    }

    /// Path of the entry document served at `/`.
    pub fn index_file(&self) -> PathBuf {
        self.static_root.join(INDEX_FILE_NAME)
    }

    /// Directory served under `/components`.
    pub fn components_dir(&self) -> PathBuf {
        self.static_root.join(COMPONENTS_DIR_NAME)
    }

    /// URL a user should open in the browser.
    ///
    /// An unspecified bind address (`0.0.0.0`) is shown as `localhost`.
    pub fn browse_url(&self) -> String {
        if self.bind_addr.ip().is_unspecified() || self.bind_addr.ip().is_loopback() {
            format!("http://localhost:{}", self.bind_addr.port())
        } else {
            format!("http://{}", self.bind_addr)
        }
    }
}

impl Default for ServerConfig {
    /// | Field          | Default            |
    /// |----------------|--------------------|
    /// | bind_addr      | `127.0.0.1:8080`   |
    /// | static_root    | `.`                |
    /// | save_folder    | `SwapDatas`        |
    /// | save_file_name | `InputDatas.csv`   |
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            static_root: PathBuf::from("."),
            save_folder: PathBuf::from(DEFAULT_SAVE_FOLDER),
            save_file_name: DEFAULT_SAVE_FILE_NAME.to_string(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port_is_8080() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.bind_addr.port(), 8080);
    }

    #[test]
    fn test_default_bind_is_loopback() {
        let cfg = ServerConfig::default();
        assert!(cfg.bind_addr.ip().is_loopback());
    }

    #[test]
    fn test_default_save_path_components() {
        // Arrange / Act
        let path = ServerConfig::default().save_path();

        // Assert
        assert_eq!(path, PathBuf::from("SwapDatas").join("InputDatas.csv"));
    }

    #[cfg(unix)]
    #[test]
    fn test_default_save_path_display() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.save_path().display().to_string(), "SwapDatas/InputDatas.csv");
    }

    #[test]
    fn test_index_and_components_are_under_static_root() {
        let cfg = ServerConfig {
            static_root: PathBuf::from("web"),
            ..ServerConfig::default()
        };
        assert_eq!(cfg.index_file(), PathBuf::from("web").join("index.html"));
        assert_eq!(cfg.components_dir(), PathBuf::from("web").join("components"));
    }

    #[test]
    fn test_browse_url_for_loopback() {
        assert_eq!(ServerConfig::default().browse_url(), "http://localhost:8080");
    }

    #[test]
    fn test_browse_url_for_unspecified_bind() {
        let cfg = ServerConfig {
            bind_addr: "0.0.0.0:9000".parse().unwrap(),
            ..ServerConfig::default()
        };
        assert_eq!(cfg.browse_url(), "http://localhost:9000");
    }

    #[test]
    fn test_browse_url_for_lan_address() {
        let cfg = ServerConfig {
            bind_addr: "192.168.1.20:8080".parse().unwrap(),
            ..ServerConfig::default()
        };
        assert_eq!(cfg.browse_url(), "http://192.168.1.20:8080");
    }
}
