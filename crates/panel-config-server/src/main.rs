//! Panel config server: entry point.
//!
//! Serves the simulation panel's single-page front end and saves the settings
//! it posts to `SwapDatas/InputDatas.csv`.
//!
//! # Usage
//!
//! ```text
//! panel-config-server [OPTIONS]
//!
//! Options:
//!   --config      <FILE>  TOML settings file
//!   --bind        <IP>    Address to bind [default: 127.0.0.1]
//!   --port        <PORT>  HTTP port [default: 8080]
//!   --static-root <DIR>   Directory holding index.html and components/ [default: .]
//!   --save-folder <DIR>   Folder for InputDatas.csv [default: SwapDatas]
//! ```
//!
//! # Precedence
//!
//! CLI flag, then environment variable, then settings file, then built-in
//! default.
//!
//! | Variable            | Flag            |
//! |---------------------|-----------------|
//! | `PANEL_CONFIG`      | `--config`      |
//! | `PANEL_BIND`        | `--bind`        |
//! | `PANEL_PORT`        | `--port`        |
//! | `PANEL_STATIC_ROOT` | `--static-root` |
//! | `PANEL_SAVE_FOLDER` | `--save-folder` |

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use panel_config_server::domain::ServerConfig;
use panel_config_server::infrastructure::{load_settings, run_server, SettingsFile};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Local web backend for the simulation panel UI.
#[derive(Debug, Parser)]
#[command(
    name = "panel-config-server",
    about = "Serves the panel UI and saves its settings as CSV",
    version
)]
struct Cli {
    /// TOML settings file.  Flags given on the command line override it.
    #[arg(long, env = "PANEL_CONFIG")]
    config: Option<PathBuf>,

    /// IP address to bind.  Use `0.0.0.0` to expose the UI on the LAN.
    #[arg(long, env = "PANEL_BIND")]
    bind: Option<String>,

    /// HTTP port.
    #[arg(long, env = "PANEL_PORT")]
    port: Option<u16>,

    /// Directory holding `index.html` and `components/`.
    #[arg(long, env = "PANEL_STATIC_ROOT")]
    static_root: Option<PathBuf>,

    /// Folder the CSV table is written into.
    #[arg(long, env = "PANEL_SAVE_FOLDER")]
    save_folder: Option<PathBuf>,
}

impl Cli {
    /// Resolves the final [`ServerConfig`] from the settings file (if any) and
    /// the flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be loaded or the bind
    /// address is not an IP address.
    fn into_server_config(self) -> anyhow::Result<ServerConfig> {
        let mut settings = match &self.config {
            Some(path) => load_settings(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?,
            None => SettingsFile::default(),
        };

        if let Some(bind) = self.bind {
            settings.server.bind_address = bind;
        }
        if let Some(port) = self.port {
            settings.server.port = port;
        }
        if let Some(static_root) = self.static_root {
            settings.server.static_root = static_root;
        }
        if let Some(save_folder) = self.save_folder {
            settings.storage.folder = save_folder;
        }

        settings
            .into_server_config()
            .context("invalid server configuration")
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG controls verbosity; `info` shows the banner and one line per save.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Cli::parse().into_server_config()?;

    info!("------------------------------------------");
    info!("Panel config server started");
    info!("Open {} in a browser", config.browse_url());
    info!("------------------------------------------");

    let shutdown = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("received Ctrl+C, shutting down"),
            Err(e) => {
                // Without a signal handler the server runs until killed.
                error!("failed to listen for Ctrl+C signal: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    run_server(config, shutdown).await
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["panel-config-server"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn test_no_flags_gives_default_config() {
        // Arrange
        let cli = Cli {
            config: None,
            bind: None,
            port: None,
            static_root: None,
            save_folder: None,
        };

        // Act
        let config = cli.into_server_config().unwrap();

        // Assert
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_port_flag_override() {
        let config = cli(&["--port", "9999"]).into_server_config().unwrap();
        assert_eq!(config.bind_addr.port(), 9999);
    }

    #[test]
    fn test_bind_flag_override() {
        let config = cli(&["--bind", "0.0.0.0"]).into_server_config().unwrap();
        assert!(config.bind_addr.ip().is_unspecified());
    }

    #[test]
    fn test_static_root_and_save_folder_overrides() {
        let config = cli(&["--static-root", "ui", "--save-folder", "out"])
            .into_server_config()
            .unwrap();
        assert_eq!(config.static_root, PathBuf::from("ui"));
        assert_eq!(config.save_path(), PathBuf::from("out").join("InputDatas.csv"));
    }

    #[test]
    fn test_invalid_bind_returns_error() {
        let result = cli(&["--bind", "not.an.ip"]).into_server_config();
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_port_is_rejected_by_parser() {
        let result = Cli::try_parse_from(["panel-config-server", "--port", "70000"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_file_is_applied_and_flags_win() {
        // Arrange: file sets port and file name, flag overrides port
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("panel.toml");
        std::fs::write(
            &path,
            "[server]\nport = 7000\n\n[storage]\nfile_name = \"saved.csv\"\n",
        )
        .unwrap();
        let path_arg = path.to_str().unwrap();

        // Act
        let config = cli(&["--config", path_arg, "--port", "7100"])
            .into_server_config()
            .unwrap();

        // Assert
        assert_eq!(config.bind_addr.port(), 7100);
        assert_eq!(config.save_file_name, "saved.csv");
    }

    #[test]
    fn test_missing_settings_file_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        let result = cli(&["--config", missing.to_str().unwrap()]).into_server_config();

        assert!(result.is_err());
    }
}
