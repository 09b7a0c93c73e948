//! Configuration system for the Y86-64 simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline machine constants (memory size, cycle budget).
//! 2. **Structures:** Config split into general and memory sections.
//! 3. **Validation:** [`Config::from_json`] parses and rejects unusable settings.
//!
//! Configuration is supplied as JSON by a host, or use `Config::default()`.

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Size of simulated memory in bytes (1 KiB).
    pub const MEMORY_SIZE: usize = crate::common::constants::DEFAULT_MEMORY_SIZE;
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use y86sim_core::config::Config;
///
/// let config = Config::default();
/// assert!(!config.general.trace_instructions);
/// assert_eq!(config.memory.size, 1024);
/// ```
///
/// Deserializing from JSON; omitted fields take their defaults:
///
/// ```
/// use y86sim_core::config::Config;
///
/// let json = r#"{
///     "general": { "max_cycles": 500 },
///     "memory": { "size": 4096 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.max_cycles, Some(500));
/// assert_eq!(config.memory.size, 4096);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Simulated memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from JSON text and validates it.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::Parse`] if the text is not a valid configuration
    /// * [`ConfigError::ZeroMemory`] if `memory.size` is zero
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks settings that deserialization alone cannot enforce.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroMemory`] if `memory.size` is zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.memory.size == 0 {
            return Err(ConfigError::ZeroMemory);
        }
        Ok(())
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `debug` event for every retired instruction
    #[serde(default)]
    pub trace_instructions: bool,

    /// Cycle budget for [`Simulator::run`](crate::sim::Simulator::run); `None` runs until halt
    #[serde(default)]
    pub max_cycles: Option<u64>,
}

/// Simulated memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Capacity of the flat byte memory
    #[serde(default = "MemoryConfig::default_size")]
    pub size: usize,
}

impl MemoryConfig {
    /// Returns the default memory capacity in bytes.
    const fn default_size() -> usize {
        defaults::MEMORY_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: defaults::MEMORY_SIZE,
        }
    }
}
