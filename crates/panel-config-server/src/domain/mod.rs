//! Domain layer for panel-config-server.
//!
//! Plain data: the runtime configuration and the JSON body returned by the
//! save endpoint.  Nothing here touches the network or the disk.

pub mod config;
pub mod messages;

pub use config::ServerConfig;
pub use messages::{SaveResponse, SaveStatus};
