//! # lib-types
//!
//! Core type definitions for the Farrow taps generator.
//!
//! This crate provides the value types passed between pipeline stages:
//! - Grid and fixed-point units (`Abscissa`, `Q15`)
//! - Derivative orders of the interpolation kernel
//! - Real-valued sample tables for each derivative
//! - The interleaved Q15 coefficient table consumed by the resampler

pub mod units;
pub mod derivative;
pub mod table;
pub mod coefficients;

pub use units::*;
pub use derivative::*;
pub use table::*;
pub use coefficients::*;
