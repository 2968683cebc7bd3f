use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Seed configuration - where the already-generated wrapper sources live.
/// Struct mode scans them to build the type registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Directory containing the wrapper sources
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,
    /// File with the struct newtype wrappers
    #[serde(default = "default_struct_wrappers")]
    pub struct_wrappers: String,
    /// File with the enum and bitflags wrappers
    #[serde(default = "default_enum_wrappers")]
    pub enum_wrappers: String,
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("src")
}

fn default_struct_wrappers() -> String {
    "struct_wrappers.rs".to_string()
}

fn default_enum_wrappers() -> String {
    "enum_wrappers.rs".to_string()
}

impl Default for SeedConfig {
    fn default() -> Self {
        SeedConfig {
            source_dir: default_source_dir(),
            struct_wrappers: default_struct_wrappers(),
            enum_wrappers: default_enum_wrappers(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// The conventional configuration: wrapper sources under `src/`
    pub fn default_config() -> Self {
        Config {
            seed: SeedConfig::default(),
        }
    }

    pub fn struct_wrappers_path(&self) -> PathBuf {
        self.seed.source_dir.join(&self.seed.struct_wrappers)
    }

    pub fn enum_wrappers_path(&self) -> PathBuf {
        self.seed.source_dir.join(&self.seed.enum_wrappers)
    }
}
