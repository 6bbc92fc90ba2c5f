//! Raised-cosine window of the interpolation kernel.
//!
//! The sinc core is tapered by `w(x) = cos²(πx/12)`, which falls to zero at
//! the support edges `x = ±6`. It is evaluated in the half-angle form
//!
//! ```text
//! w(x) = (1 + cos(πx/6)) / 2
//! ```
//!
//! so that every derivative is a single trigonometric term.

use lib_types::derivative::DerivativeOrder;
use std::f64::consts::PI;

/// Angular rate of the half-angle cosine (π/6).
pub const WINDOW_RATE: f64 = PI / 6.0;

/// Evaluate the window or one of its derivatives at `x`.
///
/// No support check is applied; the kernel handles truncation.
pub fn raised_cosine(order: DerivativeOrder, x: f64) -> f64 {
    let b = WINDOW_RATE;
    let (s, c) = (b * x).sin_cos();

    match order {
        DerivativeOrder::Zeroth => 0.5 * (1.0 + c),
        DerivativeOrder::First => -0.5 * b * s,
        DerivativeOrder::Second => -0.5 * b * b * c,
        DerivativeOrder::Third => 0.5 * b * b * b * s,
    }
}
