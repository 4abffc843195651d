//! Configuration file handling

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::paths::{config_path, resolve_binary};
use super::{Error, Result};

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Subject binary settings
    #[serde(default)]
    pub subject: SubjectConfig,

    /// Timeout settings
    #[serde(default)]
    pub timeouts: Timeouts,
}

/// Where the emulator lives and how it finds its ROMs
#[derive(Debug, Deserialize)]
pub struct SubjectConfig {
    /// Path to the bobbin executable
    #[serde(default = "default_binary")]
    pub binary: PathBuf,

    /// Directory holding the ROM images
    #[serde(default = "default_rom_dir")]
    pub rom_dir: PathBuf,

    /// Environment variable through which bobbin finds `rom_dir`
    #[serde(default = "default_rom_dir_env")]
    pub rom_dir_env: String,
}

impl Default for SubjectConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            rom_dir: default_rom_dir(),
            rom_dir_env: default_rom_dir_env(),
        }
    }
}

fn default_binary() -> PathBuf {
    PathBuf::from("../../src/bobbin")
}
fn default_rom_dir() -> PathBuf {
    PathBuf::from("../../src/roms")
}
fn default_rom_dir_env() -> String {
    "BOBBIN_ROMDIR".to_string()
}

/// Timeout settings in milliseconds
#[derive(Debug, Deserialize)]
pub struct Timeouts {
    /// Upper bound on any single expectation wait
    #[serde(default = "default_expect")]
    pub expect_ms: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            expect_ms: default_expect(),
        }
    }
}

fn default_expect() -> u64 {
    1000
}

/// Command-line values that take precedence over the file
#[derive(Debug, Default)]
pub struct Overrides {
    pub binary: Option<PathBuf>,
    pub rom_dir: Option<PathBuf>,
    pub expect_ms: Option<u64>,
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self> {
        if let Some(binary) = overrides.binary {
            self.subject.binary = binary;
        }
        if let Some(rom_dir) = overrides.rom_dir {
            self.subject.rom_dir = rom_dir;
        }
        if let Some(expect_ms) = overrides.expect_ms {
            self.timeouts.expect_ms = expect_ms;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.timeouts.expect_ms == 0 {
            return Err(Error::Config(
                "timeouts.expect_ms must be greater than zero".to_string(),
            ));
        }
        if self.subject.rom_dir_env.is_empty() || self.subject.rom_dir_env.contains('=') {
            return Err(Error::Config(format!(
                "subject.rom_dir_env '{}' is not a valid variable name",
                self.subject.rom_dir_env
            )));
        }
        Ok(())
    }

    /// Fixed per-session expectation timeout
    pub fn expect_timeout(&self) -> Duration {
        Duration::from_millis(self.timeouts.expect_ms)
    }

    /// The subject binary, looked up on `PATH` when given as a bare name
    pub fn subject_binary(&self) -> PathBuf {
        resolve_binary(&self.subject.binary)
    }

    /// Point the subject at its ROM directory for the rest of the process
    pub fn export_rom_dir(&self) {
        tracing::debug!(
            var = %self.subject.rom_dir_env,
            dir = %self.subject.rom_dir.display(),
            "Exporting ROM directory"
        );
        std::env::set_var(&self.subject.rom_dir_env, &self.subject.rom_dir);
    }
}
