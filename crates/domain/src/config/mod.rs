//! Configuration module for Awful DNS
//!
//! - `root`: Main configuration and CLI overrides
//! - `server`: Listen address, port and TCP timeout
//! - `zone`: Base domain and advertised glue address
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod zone;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use zone::ZoneConfig;
