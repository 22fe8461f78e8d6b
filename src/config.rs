//! Runtime configuration.
//!
//! Read from environment variables, optionally seeded from a `.env` file by
//! the binary (`dotenv`).

use crate::output::OutputFormat;
use std::error::Error;

pub const DEFAULT_CIDR: &str = "192.168.1.0/24";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Shown when no CIDR is given on the command line.
    pub default_cidr: String,
    pub output: OutputFormat,
    pub color: bool,
    /// Read CIDRs line by line from stdin when no argument is given.
    pub interactive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_cidr: DEFAULT_CIDR.to_string(),
            output: OutputFormat::Table,
            color: true,
            interactive: false,
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, Box<dyn Error>> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("{key}: expected true/false, got '{other}'").into()),
    }
}

impl Config {
    /// Build from the process environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(cidr) = lookup("SUBNET_DEFAULT_CIDR") {
            config.default_cidr = cidr.trim().to_string();
        }
        if let Some(output) = lookup("SUBNET_OUTPUT") {
            config.output = output.parse()?;
        }
        if let Some(color) = lookup("SUBNET_COLOR") {
            config.color = parse_bool("SUBNET_COLOR", &color)?;
        }
        if let Some(interactive) = lookup("SUBNET_INTERACTIVE") {
            config.interactive = parse_bool("SUBNET_INTERACTIVE", &interactive)?;
        }
        log::debug!("config={config:?}");
        Ok(config)
    }
}
