//! Error types for kernel derivation.

use lib_types::derivative::DerivativeOrder;
use lib_types::units::Abscissa;
use thiserror::Error;

/// Errors that can occur while deriving the coefficient tables.
#[derive(Debug, Error)]
pub enum DspError {
    /// A stability bound was violated. The kernel definition itself is wrong.
    #[error("Derivation instability: {check} = {value} violates bound < {bound}")]
    DerivationInstability {
        check: String,
        value: f64,
        bound: f64,
    },

    /// The closed form produced NaN or infinity at a sample point.
    #[error("Non-finite {order} sample at abscissa {abscissa}")]
    NonFiniteSample {
        order: DerivativeOrder,
        abscissa: Abscissa,
    },

    /// Sample tables were assembled out of derivative order.
    #[error("Invalid derivative family: {0}")]
    InvalidFamily(String),
}

impl DspError {
    /// Create an instability error for a named check.
    pub fn instability(check: impl Into<String>, value: f64, bound: f64) -> Self {
        Self::DerivationInstability {
            check: check.into(),
            value,
            bound,
        }
    }
}

/// Result type for DSP operations.
pub type DspResult<T> = Result<T, DspError>;
