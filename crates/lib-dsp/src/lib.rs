//! # lib-dsp
//!
//! Coefficient derivation for a Farrow-structure fractional-delay resampler.
//!
//! This crate provides the numeric pipeline, each stage a pure function of
//! the previous one:
//!
//! - **Kernel**: windowed-sinc kernel and its first three derivatives in closed form
//! - **Sampler**: evaluation on the integer grid with the origin limit substituted
//! - **Stability**: signed-sum and worst-case magnitude bounds
//! - **Quantize**: Q15 truncation, reversal and interleaving

pub mod error;
pub mod window;
pub mod kernel;
pub mod sampler;
pub mod stability;
pub mod quantize;

pub use error::{DspError, DspResult};
pub use kernel::{DerivativeKernel, WindowedSincKernel};
pub use sampler::{sample_derivative, sample_family};
pub use stability::{StabilityBounds, StabilityReport};
pub use quantize::{interleave, quantize_q15};
