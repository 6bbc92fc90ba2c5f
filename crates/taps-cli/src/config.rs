//! Generator configuration and validation.
//!
//! The kernel is fixed, so the only input is the output path. The stability
//! bounds live here so tests can tighten them.

use anyhow::Result;
use lib_dsp::stability::StabilityBounds;
use std::path::PathBuf;

/// Top-level generator configuration.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Header file to create or overwrite.
    pub output: PathBuf,

    /// Bounds the derived tables must satisfy before anything is written.
    pub bounds: StabilityBounds,
}

impl GeneratorConfig {
    /// Build and validate a configuration for an output path.
    pub fn new(output: PathBuf) -> Result<Self> {
        let config = Self {
            output,
            bounds: StabilityBounds::default(),
        };
        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration.
fn validate_config(config: &GeneratorConfig) -> Result<()> {
    if config.output.as_os_str().is_empty() {
        anyhow::bail!("Output path is empty");
    }

    if config.output.is_dir() {
        anyhow::bail!("Output path is a directory: {:?}", config.output);
    }

    Ok(())
}
