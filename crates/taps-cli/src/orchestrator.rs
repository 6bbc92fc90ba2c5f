//! Pipeline orchestration: sample, check, quantize, write.

use crate::config::GeneratorConfig;
use crate::output;
use anyhow::{Context, Result};
use lib_dsp::kernel::WindowedSincKernel;
use lib_dsp::quantize::interleave;
use lib_dsp::sampler::sample_family;
use lib_dsp::stability::StabilityReport;
use lib_types::coefficients::CoefficientTable;

/// Coefficient generator.
pub struct Generator {
    config: GeneratorConfig,
    kernel: WindowedSincKernel,
}

/// Everything produced by a successful run.
#[derive(Clone, Debug)]
pub struct GenerationResults {
    pub report: StabilityReport,
    pub table: CoefficientTable,
}

impl Generator {
    /// Create a new generator.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            kernel: WindowedSincKernel::new(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run the whole pipeline.
    ///
    /// The output file is only touched once every stability bound holds.
    pub fn run(&self) -> Result<GenerationResults> {
        tracing::debug!("Configuration: {:?}", self.config);

        let family = sample_family(&self.kernel).context("Failed to sample kernel derivatives")?;
        tracing::info!("Sampled {} derivative tables", family.iter().count());

        let report = StabilityReport::analyze(&family);
        match serde_json::to_string(&report) {
            Ok(json) => tracing::debug!("Stability report: {}", json),
            Err(e) => tracing::debug!("Stability report not serializable: {}", e),
        }
        output::print_report(&report);

        report
            .validate(&self.config.bounds)
            .context("Kernel derivation is unstable; no output written")?;

        let table = interleave(&family);
        output::write_header(&self.config.output, &table)?;

        Ok(GenerationResults { report, table })
    }
}
