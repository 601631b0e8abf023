//! Configuration system for the intcode machine.
//!
//! This module defines the configuration structures used to parameterize machines
//! and pipelines. It provides:
//! 1. **Defaults:** Baseline values (no limits, single-slot ports, dense growth window).
//! 2. **Structures:** Hierarchical config for general, memory and pipeline settings.
//! 3. **Loading:** JSON deserialization from a string or a file.
//!
//! Every field has a default, so a partial JSON document (or `{}`) is a valid config.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants.
mod defaults {
    /// Distance past the end of the dense memory region within which a write
    /// grows the dense region instead of spilling into the sparse map.
    pub const DENSE_WINDOW: usize = 4096;

    /// Slot count of each port connecting two machines in a feedback loop.
    pub const PORT_CAPACITY: usize = 1;
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use intcode_vm::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_steps": 1000000 },
///     "memory": { "max_address": 65536 },
///     "pipeline": { "port_capacity": 2 }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_steps, Some(1_000_000));
/// assert_eq!(config.memory.max_address, Some(65536));
/// assert_eq!(config.memory.dense_window, 4096);
/// assert_eq!(config.pipeline.port_capacity, 2);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General execution settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory settings.
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Multi-machine pipeline settings.
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] if the document is malformed or mistyped.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, [`ConfigError::Parse`] if it
    /// does not hold a valid configuration.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// General execution settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `trace` event for every executed instruction.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Instruction budget per machine; `None` runs until halt.
    #[serde(default)]
    pub max_steps: Option<u64>,
}

/// Memory settings.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Highest address a program may touch; `None` leaves memory unbounded.
    #[serde(default)]
    pub max_address: Option<u64>,

    /// Growth window of the dense memory region, in words.
    #[serde(default = "MemoryConfig::default_dense_window")]
    pub dense_window: usize,
}

impl MemoryConfig {
    /// Returns the default dense growth window.
    const fn default_dense_window() -> usize {
        defaults::DENSE_WINDOW
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            max_address: None,
            dense_window: defaults::DENSE_WINDOW,
        }
    }
}

/// Multi-machine pipeline settings.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Slot count of each rendezvous port; 1 is a strict single-slot handoff.
    #[serde(default = "PipelineConfig::default_port_capacity")]
    pub port_capacity: usize,
}

impl PipelineConfig {
    /// Returns the default port capacity.
    const fn default_port_capacity() -> usize {
        defaults::PORT_CAPACITY
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            port_capacity: defaults::PORT_CAPACITY,
        }
    }
}
