//! Optimizer configuration.
//!
//! Every section has working defaults, so an empty or partial TOML
//! file is valid. Values are checked by [`FileConfig::validate`].

use crate::entropy::anu::MAX_REQUEST_LENGTH;
use crate::techniques::MIN_STACK_BLOCK;
use crate::variation::MAX_BYTE_BUDGET;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Entropy chain configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EntropyConfig {
    /// ANU QRNG JSON endpoint.
    pub anu_endpoint: String,
    /// Random.org integer generator endpoint.
    pub random_org_endpoint: String,
    /// Per-request timeout for physical providers, in seconds.
    pub timeout_secs: u64,
    /// Try the ANU provider.
    pub enable_anu: bool,
    /// Try the Random.org provider.
    pub enable_random_org: bool,
    /// User agent sent to remote services.
    pub user_agent: String,
}

impl Default for EntropyConfig {
    fn default() -> Self {
        Self {
            anu_endpoint: "https://qrng.anu.edu.au/API/jsonI.php".into(),
            random_org_endpoint: "https://www.random.org/integers/".into(),
            timeout_secs: 5,
            enable_anu: true,
            enable_random_org: true,
            user_agent: format!("quantum-prompt/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl EntropyConfig {
    /// Disables every physical provider, keeping the other settings.
    pub fn go_offline(&mut self) {
        self.enable_anu = false;
        self.enable_random_org = false;
    }
}

/// Variation generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Bytes requested per approach variation.
    pub block_size: usize,
    /// Largest variation count accepted per call.
    pub max_variations: usize,
    /// Bytes requested per technique-stack variation.
    pub stack_block_size: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            block_size: 100,
            max_variations: 10,
            stack_block_size: 20,
        }
    }
}

/// Output format for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable blocks.
    #[default]
    Text,
    /// A JSON array of records.
    Json,
}

/// Output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when printing results.
    pub format: OutputFormat,
    /// Directory to write text exports into, if any.
    pub export_dir: Option<PathBuf>,
}

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Provider timeout of zero seconds.
    #[error("timeout must be at least one second")]
    InvalidTimeout,
    /// A byte block size outside the accepted range.
    #[error("block size {got} out of range ({min}-{max})")]
    InvalidBlockSize {
        /// Configured size.
        got: usize,
        /// Smallest accepted size.
        min: usize,
        /// Largest accepted size.
        max: usize,
    },
    /// A variation limit of zero.
    #[error("max_variations must be at least 1")]
    InvalidMaxVariations,
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    /// The file is not valid TOML for this format.
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Entropy chain settings.
    #[serde(default)]
    pub entropy: EntropyConfig,
    /// Generation settings.
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.entropy.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        // First byte selects the approach, the rest parametrize it.
        check_block(self.generation.block_size, MAX_BYTE_BUDGET + 1)?;
        check_block(self.generation.stack_block_size, MIN_STACK_BLOCK)?;

        if self.generation.max_variations == 0 {
            return Err(ConfigError::InvalidMaxVariations);
        }
        Ok(())
    }
}

fn check_block(got: usize, min: usize) -> Result<(), ConfigError> {
    if got < min || got > MAX_REQUEST_LENGTH {
        return Err(ConfigError::InvalidBlockSize {
            got,
            min,
            max: MAX_REQUEST_LENGTH,
        });
    }
    Ok(())
}
