//! # CLI Argument Definitions
//!
//! Every flag can also be supplied through a `GREETER_*` environment variable.

use clap::Parser;
use greeter_kernel::config::{ConfigError, DEFAULT_CONFIG_DIR, load_config};
use greeter_kernel::domain::config::ApiConfig;
use greeter_logger::{LevelFilter, Logger, LoggerError};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "greeter-server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Configuration-driven greeting service")]
pub struct Cli {
    /// Configuration profile layered over the defaults (e.g. dev3, dev4)
    #[arg(short, long, env = "GREETER_PROFILE")]
    pub profile: Option<String>,

    /// Directory holding application.toml and application-<profile>.toml
    #[arg(long, env = "GREETER_CONFIG_DIR", default_value = DEFAULT_CONFIG_DIR)]
    pub config_dir: PathBuf,

    /// Overrides the configured listen port
    #[arg(long, env = "GREETER_PORT")]
    pub port: Option<u16>,

    /// Minimum log level (RUST_LOG directives still apply)
    #[arg(long, env = "GREETER_LOG_LEVEL", default_value = "info")]
    pub log_level: LevelFilter,

    /// Write rolling log files into this directory
    #[arg(long, env = "GREETER_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Emit log files as JSON lines
    #[arg(long, env = "GREETER_JSON_LOGS", requires = "log_dir")]
    pub json_logs: bool,
}

impl Cli {
    /// Installs the global subscriber described by the log flags.
    ///
    /// # Errors
    /// Returns an error if the log directory is unusable or a subscriber is already set.
    pub fn init_logging(&self) -> Result<Logger, LoggerError> {
        let builder = Logger::builder(env!("CARGO_PKG_NAME")).level(self.log_level);

        match &self.log_dir {
            Some(dir) => builder.path(dir).json(self.json_logs).init(),
            None => builder.init(),
        }
    }

    /// Resolves the configuration for the selected profile and applies `--port`.
    ///
    /// # Errors
    /// Returns an error for an invalid profile name or a missing/malformed layer.
    pub fn resolve_config(&self) -> Result<ApiConfig, ConfigError> {
        let mut config = load_config(&self.config_dir, self.profile.as_deref())?;
        if let Some(port) = self.port {
            config.server.port = port;
        }
        Ok(config)
    }
}
