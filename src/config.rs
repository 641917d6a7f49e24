//! Runtime configuration.
//!
//! Values come from the environment (a `.env` file is loaded by `main`),
//! falling back to the constants below.

use log::LevelFilter;
use std::error::Error;
use std::str::FromStr;

/// Public address used only to let the OS pick the outbound interface.
pub const DEFAULT_PROBE_ADDR: &str = "8.8.8.8:80";
/// Mask assumed for the local address, typical for home networks.
pub const DEFAULT_SUBNET_MASK: &str = "255.255.255.0";
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Upper bound on captured command stdout, in bytes.
pub const MAX_COMMAND_OUTPUT: usize = 500_000;

pub const ENV_PROBE_ADDR: &str = "NETWORK_INFO_PROBE_ADDR";
pub const ENV_SUBNET_MASK: &str = "NETWORK_INFO_SUBNET_MASK";
pub const ENV_OUTPUT: &str = "NETWORK_INFO_OUTPUT";
pub const ENV_LOG_CONFIG: &str = "NETWORK_INFO_LOG_CONFIG";
/// Level for the built-in stderr logger. Ignored when the log4rs config file
/// exists; a `log4rs.yml` in the working directory sets its own root level.
pub const ENV_LOG_LEVEL: &str = "NETWORK_INFO_LOG_LEVEL";

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format '{other}', expected text or json")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub probe_addr: String,
    pub subnet_mask: String,
    pub output: OutputFormat,
    pub log_config: String,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            probe_addr: DEFAULT_PROBE_ADDR.to_string(),
            subnet_mask: DEFAULT_SUBNET_MASK.to_string(),
            output: OutputFormat::default(),
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl Config {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any key lookup; unset or blank keys use defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Config::default();

        if let Some(addr) = get(ENV_PROBE_ADDR) {
            config.probe_addr = addr.trim().to_string();
        }
        if let Some(mask) = get(ENV_SUBNET_MASK) {
            config.subnet_mask = mask.trim().to_string();
        }
        if let Some(output) = get(ENV_OUTPUT) {
            config.output = output.parse()?;
        }
        if let Some(file) = get(ENV_LOG_CONFIG) {
            config.log_config = file;
        }
        if let Some(level) = get(ENV_LOG_LEVEL) {
            config.log_level = level
                .trim()
                .parse()
                .map_err(|e| format!("Invalid {ENV_LOG_LEVEL} '{level}': {e}"))?;
        }

        Ok(config)
    }
}
