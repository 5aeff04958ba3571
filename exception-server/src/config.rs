//! Configuration loading and default template generation.
//!
//! # Configuration File Format
//!
//! ```toml
//! host = "0.0.0.0"
//! port = 3000
//! log_level = "info"
//! ```
//!
//! Every key is optional. `host` and `port` fall back to the `HOST` and
//! `PORT` environment variables and then to `0.0.0.0:3000`.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Port the server listens on when neither the file nor `PORT` sets one.
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_host")]
    host: IpAddr,
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default)]
    log_level: Option<String>,
}

fn default_host() -> IpAddr {
    env::var("HOST")
        .ok()
        .and_then(|host| host.trim().parse().ok())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

fn default_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|port| port.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: None,
        }
    }
}

impl Config {
    /// Address to bind.
    #[must_use]
    pub const fn host(&self) -> IpAddr {
        self.host
    }

    /// Port to bind.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Socket address built from [`host`](Self::host) and [`port`](Self::port).
    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Log filter directive used when `RUST_LOG` is unset.
    #[must_use]
    pub fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }
}

/// Load configuration from a TOML file at the given path.
///
/// # Errors
///
/// Returns [`Error::Config`] if the file cannot be resolved, read, or parsed.
pub fn load_config(path: &Path) -> Result<Config, Error> {
    let config_path = path.canonicalize().map_err(|e| {
        Error::config_with(
            format!("failed to resolve config path '{}'", path.display()),
            e,
        )
    })?;
    let content = std::fs::read_to_string(&config_path).map_err(|e| {
        Error::config_with(
            format!("failed to read config file '{}'", config_path.display()),
            e,
        )
    })?;
    parse_config(&content).map_err(|e| {
        Error::config_with(
            format!("failed to parse TOML config '{}'", config_path.display()),
            e,
        )
    })
}

/// Parse configuration from TOML text.
///
/// # Errors
///
/// Returns the TOML error if `content` is malformed or has unknown keys.
pub fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}

/// Generate a default TOML configuration template.
#[must_use]
pub fn generate_default_config() -> String {
    format!(
        r#"# Exception server configuration

# Server bind address and port.
# Can also be set via HOST / PORT environment variables.
host = "0.0.0.0"
port = {DEFAULT_PORT}

# Log filter used when RUST_LOG is not set.
log_level = "info"
"#
    )
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn template_parses() {
        let config = parse_config(&generate_default_config()).unwrap();
        assert_eq!(config.host(), IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.port(), DEFAULT_PORT);
        assert_eq!(config.log_level(), Some("info"));
    }

    #[test]
    fn explicit_values_win() {
        let config = parse_config("host = \"127.0.0.1\"\nport = 8080\n").unwrap();
        assert_eq!(config.addr(), "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.log_level(), None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse_config("hots = \"127.0.0.1\"\n").is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load_config(Path::new("definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to resolve config path"));
    }

    #[test]
    fn load_reads_file() {
        let path = env::temp_dir().join(format!("exception-server-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"host = \"127.0.0.1\"\nport = 4000\n").unwrap();
        drop(file);

        let config = load_config(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.port(), 4000);
    }
}
