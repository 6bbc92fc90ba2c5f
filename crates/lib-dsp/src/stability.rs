//! Stability checks on the sampled derivative family.
//!
//! The resampler accumulates the Farrow sub-filter outputs in fixed point,
//! so the coefficient sums must stay below the headroom of its integer
//! formats. Every bound is strict; a violation means the kernel is wrong and
//! generation must stop before anything is written.
//!
//! The combined check models the worst case of the Farrow evaluation:
//!
//! ```text
//! maxsignal = Σ_k | K0[k] + K1[k]/2 + K2[k]/4 + K3[k]/8 |
//! ```

use crate::error::{DspError, DspResult};
use lib_types::derivative::{DerivativeOrder, DERIVATIVE_COUNT};
use lib_types::table::DerivativeFamily;
use lib_types::units::Abscissa;
use serde::{Deserialize, Serialize};

/// Upper bounds on the signed sums and the combined magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StabilityBounds {
    /// Bound on the signed sum of each derivative table, by order.
    pub signed_sum: [f64; DERIVATIVE_COUNT],

    /// Bound on `maxsignal`.
    pub max_signal: f64,
}

impl Default for StabilityBounds {
    fn default() -> Self {
        Self {
            signed_sum: [2.0, 2.0, 1.0, 1.0],
            max_signal: 2.0,
        }
    }
}

/// Aggregate magnitudes of a derivative family.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StabilityReport {
    /// `Σ |Kn[k]|` per order. Diagnostic only.
    pub abs_sums: [f64; DERIVATIVE_COUNT],

    /// `Σ Kn[k]` per order.
    pub signed_sums: [f64; DERIVATIVE_COUNT],

    /// Combined worst-case magnitude.
    pub max_signal: f64,
}

impl StabilityReport {
    /// Compute all stability scalars.
    pub fn analyze(family: &DerivativeFamily) -> Self {
        let mut abs_sums = [0.0; DERIVATIVE_COUNT];
        let mut signed_sums = [0.0; DERIVATIVE_COUNT];
        for table in family.iter() {
            let i = table.order().index();
            abs_sums[i] = table.abs_sum();
            signed_sums[i] = table.signed_sum();
        }

        Self {
            abs_sums,
            signed_sums,
            max_signal: max_signal(family),
        }
    }

    /// Check every bound, reporting the first violation.
    ///
    /// A NaN value fails its check.
    pub fn validate(&self, bounds: &StabilityBounds) -> DspResult<()> {
        for order in DerivativeOrder::ALL {
            let i = order.index();
            check(
                format!("sum({})", order),
                self.signed_sums[i],
                bounds.signed_sum[i],
            )?;
        }
        check("maxsignal", self.max_signal, bounds.max_signal)?;

        tracing::info!(
            "Stability bounds satisfied (maxsignal = {:.6})",
            self.max_signal
        );
        Ok(())
    }
}

fn check(name: impl Into<String>, value: f64, bound: f64) -> DspResult<()> {
    if value < bound {
        Ok(())
    } else {
        let err = DspError::instability(name, value, bound);
        tracing::error!("{}", err);
        Err(err)
    }
}

/// Sum over all abscissas of the absolute weighted Farrow combination.
pub fn max_signal(family: &DerivativeFamily) -> f64 {
    Abscissa::grid()
        .filter_map(|x| family.weighted_sample(x))
        .map(f64::abs)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::WindowedSincKernel;
    use crate::sampler::sample_family;
    use lib_types::table::SampleTable;
    use lib_types::units::TAP_COUNT;

    fn kernel_report() -> StabilityReport {
        let family = sample_family(&WindowedSincKernel).unwrap();
        StabilityReport::analyze(&family)
    }

    fn constant_family(value: f64) -> DerivativeFamily {
        let tables = DerivativeOrder::ALL.map(|order| SampleTable::new(order, [value; TAP_COUNT]));
        DerivativeFamily::new(tables).unwrap()
    }

    #[test]
    fn test_kernel_passes_default_bounds() {
        let report = kernel_report();
        assert!(report.validate(&StabilityBounds::default()).is_ok());
    }

    #[test]
    fn test_regression_values() {
        let report = kernel_report();

        let expected_signed = [0.9964001261946689, 0.0, -0.0032946956208704256, 0.0];
        let expected_abs = [
            1.2086067169838626,
            1.2241034721206905,
            0.8076227648468333,
            0.3589527550001104,
        ];
        for i in 0..DERIVATIVE_COUNT {
            assert!(
                (report.signed_sums[i] - expected_signed[i]).abs() < 1e-12,
                "signed sum {} = {}",
                i,
                report.signed_sums[i]
            );
            assert!(
                (report.abs_sums[i] - expected_abs[i]).abs() < 1e-12,
                "abs sum {} = {}",
                i,
                report.abs_sums[i]
            );
        }
        assert!((report.max_signal - 1.3180291394287564).abs() < 1e-12);
    }

    #[test]
    fn test_max_signal_weights() {
        // 13 taps of (1 + 1/2 + 1/4 + 1/8) * 0.1
        let family = constant_family(0.1);
        assert!((max_signal(&family) - 13.0 * 0.1875).abs() < 1e-12);

        let negative = constant_family(-0.1);
        assert!((max_signal(&negative) - 13.0 * 0.1875).abs() < 1e-12);
    }

    #[test]
    fn test_violation_is_reported() {
        // sum(K0) = 1.3 passes, sum(K2) = 1.3 does not
        let report = StabilityReport::analyze(&constant_family(0.1));
        let err = report.validate(&StabilityBounds::default()).unwrap_err();
        match err {
            DspError::DerivationInstability { check, value, bound } => {
                assert_eq!(check, "sum(K2)");
                assert!((value - 1.3).abs() < 1e-12);
                assert_eq!(bound, 1.0);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_bounds_are_strict() {
        let report = StabilityReport {
            abs_sums: [0.0; DERIVATIVE_COUNT],
            signed_sums: [0.0; DERIVATIVE_COUNT],
            max_signal: 2.0,
        };
        assert!(report.validate(&StabilityBounds::default()).is_err());
    }

    #[test]
    fn test_nan_fails_check() {
        let report = StabilityReport {
            abs_sums: [0.0; DERIVATIVE_COUNT],
            signed_sums: [f64::NAN, 0.0, 0.0, 0.0],
            max_signal: 0.0,
        };
        assert!(report.validate(&StabilityBounds::default()).is_err());
    }
}
