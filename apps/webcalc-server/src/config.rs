//! Layered application configuration.
//!
//! Precedence, lowest to highest: built-in defaults, YAML file (`--config`),
//! `WEBCALC__*` environment variables, CLI overrides.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Directory holding the static client bundle.
    pub static_dir: PathBuf,
    /// Maximum accepted request body size.
    pub body_limit_bytes: usize,
    /// Per-request timeout.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3001".to_owned(),
            static_dir: PathBuf::from("frontend"),
            body_limit_bytes: 64 * 1024,
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub enabled: bool,
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub allow_credentials: bool,
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        // Cross-origin requests are permitted from any origin.
        Self {
            enabled: true,
            allowed_origins: vec!["*".to_owned()],
            allowed_methods: vec!["*".to_owned()],
            allowed_headers: vec!["*".to_owned()],
            allow_credentials: false,
            max_age_seconds: 3600,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Tracing filter directive, e.g. "info" or "webcalc_server=debug".
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

impl AppConfig {
    /// Load the layered configuration. A missing `--config` path is an error;
    /// no path at all means defaults + environment.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file_exact(path));
        }
        figment
            .merge(Env::prefixed("WEBCALC__").split("__"))
            .extract()
            .context("failed to load configuration")
    }

    /// Apply CLI flags on top of the loaded configuration.
    pub fn apply_cli_overrides(&mut self, port: Option<u16>, verbose: u8) {
        if let Some(port) = port {
            self.server.bind_addr = match self.server.bind_addr.parse::<SocketAddr>() {
                Ok(mut addr) => {
                    addr.set_port(port);
                    addr.to_string()
                }
                Err(_) => format!("127.0.0.1:{port}"),
            };
        }
        match verbose {
            0 => {}
            1 => self.logging.level = "info".to_owned(),
            2 => self.logging.level = "debug".to_owned(),
            _ => self.logging.level = "trace".to_owned(),
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server
            .bind_addr
            .parse()
            .with_context(|| format!("invalid bind address '{}'", self.server.bind_addr))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize configuration")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_sensible() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.bind_addr, "127.0.0.1:3001");
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.cors.enabled);
        assert_eq!(cfg.cors.allowed_origins, vec!["*"]);
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "server:\n  bind_addr: 0.0.0.0:8080\nlogging:\n  level: debug\n  format: json"
        )
        .unwrap();

        let cfg = AppConfig::load_or_default(Some(file.path())).unwrap();
        assert_eq!(cfg.server.bind_addr, "0.0.0.0:8080");
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.logging.format, LogFormat::Json);
        // Untouched sections keep their defaults.
        assert_eq!(cfg.server.request_timeout_secs, 30);
    }

    #[test]
    fn env_overrides_yaml() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("webcalc.yaml", "server:\n  bind_addr: 0.0.0.0:8080\n")?;
            jail.set_env("WEBCALC__SERVER__BIND_ADDR", "127.0.0.1:9999");

            let cfg = AppConfig::load_or_default(Some(Path::new("webcalc.yaml"))).expect("load");
            assert_eq!(cfg.server.bind_addr, "127.0.0.1:9999");
            Ok(())
        });
    }

    #[test]
    fn port_flag_rewrites_bind_addr_port() {
        let mut cfg = AppConfig::default();
        cfg.apply_cli_overrides(Some(8081), 0);
        assert_eq!(cfg.server.bind_addr, "127.0.0.1:8081");
    }

    #[test]
    fn verbosity_flag_raises_log_level() {
        let mut cfg = AppConfig::default();
        cfg.apply_cli_overrides(None, 2);
        assert_eq!(cfg.logging.level, "debug");
        cfg.apply_cli_overrides(None, 3);
        assert_eq!(cfg.logging.level, "trace");
    }
}
