//! Configuration system for the Cardinal simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! simulation run. It provides:
//! 1. **Defaults:** Baseline memory sizes and run limits.
//! 2. **Structures:** Hierarchical config for general settings and memories.
//! 3. **Parsing:** JSON deserialization via `Config::from_json`.
//!
//! Every field has a default, so `{}` is a valid configuration document.

use serde::Deserialize;

use crate::common::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Instruction memory size in bytes (256 instruction words).
    pub const IMEM_SIZE: usize = 1024;

    /// Data memory size in bytes (256 doublewords).
    pub const DMEM_SIZE: usize = 2048;

    /// Cycle budget for `Simulator::run_to_halt`.
    pub const MAX_CYCLES: u64 = 100_000;
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Instruction and data memory sizing.
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Arguments
    ///
    /// * `json` - The JSON text. Missing fields take their defaults.
    ///
    /// # Returns
    ///
    /// The parsed configuration, or `SimError::Json` if the document is
    /// malformed or names an unknown field.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Emit a `debug` tracing event per tick describing every pipeline slot.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Cycle budget used by `Simulator::run_to_halt`.
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,
}

impl GeneralConfig {
    fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}

/// Memory sizing.
///
/// Sizes are in bytes and need not be powers of two: both memories reduce
/// addresses modulo their size.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryConfig {
    /// Instruction memory size in bytes.
    #[serde(default = "MemoryConfig::default_imem_size")]
    pub imem_size: usize,

    /// Data memory size in bytes.
    #[serde(default = "MemoryConfig::default_dmem_size")]
    pub dmem_size: usize,
}

impl MemoryConfig {
    fn default_imem_size() -> usize {
        defaults::IMEM_SIZE
    }

    fn default_dmem_size() -> usize {
        defaults::DMEM_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            imem_size: defaults::IMEM_SIZE,
            dmem_size: defaults::DMEM_SIZE,
        }
    }
}
