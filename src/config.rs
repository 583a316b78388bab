use std::path::{Path, PathBuf};

use nexus_nmcli::{NexusError, NexusResult};
use serde::Deserialize;
use tracing::debug;

use crate::cli::CliArgs;

// ─── Embedded Default ────────────────────────────────────────────────────
/// Baked into the binary at compile time. Used whenever no config file
/// exists; the tool never writes one.
const DEFAULT_CONFIG_TOML: &str = include_str!("../default_config.toml");

// ─── TOML Structs ───────────────────────────────────────────────────────

/// Root configuration, parsed from TOML, then overridden by CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub tools: ToolsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Interface for iwgetid (empty string = iwgetid's own choice)
    #[serde(default)]
    pub interface: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    #[serde(default = "default_nmcli")]
    pub nmcli: String,

    #[serde(default = "default_iwgetid")]
    pub iwgetid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub json: bool,
}

// ─── Defaults ───────────────────────────────────────────────────────────

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            interface: String::new(),
        }
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            nmcli: default_nmcli(),
            iwgetid: default_iwgetid(),
        }
    }
}

fn default_log_level() -> String {
    "warn".into()
}
fn default_nmcli() -> String {
    nexus_nmcli::network::nmcli::NMCLI_BIN.into()
}
fn default_iwgetid() -> String {
    nexus_nmcli::network::iwgetid::IWGETID_BIN.into()
}

// ─── Path Resolution ────────────────────────────────────────────────────

impl Config {
    /// Standard config file path: ~/.config/nexus-nmcli/config.toml
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nexus-nmcli")
            .join("config.toml")
    }

    pub fn from_toml(toml_str: &str) -> NexusResult<Self> {
        toml::from_str(toml_str).map_err(|e| NexusError::Config(e.to_string()))
    }

    /// Read a config file; a missing file yields the embedded defaults
    pub fn from_file(path: &Path) -> NexusResult<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Self::from_toml(DEFAULT_CONFIG_TOML);
        }

        let toml_str = std::fs::read_to_string(path)
            .map_err(|e| NexusError::Config(format!("{}: {}", path.display(), e)))?;
        toml::from_str(&toml_str)
            .map_err(|e| NexusError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Convenience: interface as Option<&str> (empty = None)
    pub fn interface(&self) -> Option<&str> {
        let iface = self.general.interface.trim();
        if iface.is_empty() {
            None
        } else {
            Some(iface)
        }
    }
}

// ─── Bootloader ─────────────────────────────────────────────────────────

/// 1. Resolve config file path (CLI override or default)
/// 2. Parse TOML from disk, or the embedded default when absent
/// 3. Apply CLI overrides on top
pub fn load(cli: &CliArgs) -> NexusResult<Config> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::from_file(&config_path)?;

    if let Some(ref level) = cli.log_level {
        config.general.log_level = level.clone();
    }
    if let Some(ref nmcli) = cli.nmcli {
        config.tools.nmcli = nmcli.clone();
    }
    if let Some(ref iwgetid) = cli.iwgetid {
        config.tools.iwgetid = iwgetid.clone();
    }
    if cli.json {
        config.output.json = true;
    }

    Ok(config)
}

/// Returns the embedded default config TOML string.
pub fn default_config_toml() -> &'static str {
    DEFAULT_CONFIG_TOML
}
