//! Configuration module
//!
//! The server runs from built-in defaults only: no config file, no
//! environment variables, no CLI flags. Everything the handlers need at
//! runtime travels in an immutable [`ServerContext`] built once at startup,
//! instead of process-global state like the working directory.

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    pub access_log_format: String,
}

impl Config {
    /// Build the configuration from built-in defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Immutable state shared with every connection and request handler.
pub struct ServerContext {
    pub config: Config,
    /// Canonical root directory all request paths resolve under
    pub root_dir: PathBuf,
}

impl ServerContext {
    pub const fn new(config: Config, root_dir: PathBuf) -> Self {
        Self { config, root_dir }
    }
}

/// Resolve the directory containing the server binary.
///
/// The served root is wherever the executable lives, so the binary can be
/// dropped next to the log viewer page and run from anywhere. The result
/// is canonicalized; path containment checks rely on that.
pub fn resolve_root_dir() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe
        .parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    dir.canonicalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::load().unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8000);
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "combined");
    }

    #[test]
    fn test_socket_addr_listens_on_all_interfaces() {
        let cfg = Config::load().unwrap();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 8000);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn test_resolve_root_dir_is_absolute() {
        let root = resolve_root_dir().unwrap();
        assert!(root.is_absolute());
        assert!(root.is_dir());
    }
}
