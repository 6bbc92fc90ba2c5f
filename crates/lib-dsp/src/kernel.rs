//! Windowed-sinc interpolation kernel and its derivatives in closed form.
//!
//! The kernel is
//!
//! ```text
//! K0(x) = cos²(πx/12) · sin(πx/2) / (πx)    for -6 <= x <= 6
//!       = 0                                 otherwise
//! Kn(x) = K0^(n)(x) / n!                    for n = 1, 2, 3
//! ```
//!
//! It is evaluated as `w(x) · f(x) / π`, where `w` is the raised-cosine
//! window and `f(x) = sin(πx/2) / x`. Derivatives of the product expand by
//! the Leibniz rule, `(w·f)^(n) = Σ C(n,k) · w^(k) · f^(n-k)`, with each
//! factor's derivatives written out by hand.
//!
//! # Removable singularity
//!
//! The closed form divides by powers of `x` and is `0/0` at the origin. The
//! true limits are
//!
//! ```text
//! K0(0) = 1/2,  K1(0) = 0,  K2(0) = -7π²/288,  K3(0) = 0
//! ```
//!
//! from the series `f(x) = a - a³x²/6 + ...` (with `a = π/2`) and
//! `w(x) = 1 - b²x²/4 + ...` (with `b = π/6`). Sampling at the origin uses
//! these constants instead of the closed form.

use crate::window::raised_cosine;
use lib_types::derivative::{DerivativeOrder, DERIVATIVE_COUNT};
use lib_types::units::{Abscissa, KERNEL_HALF_WIDTH};
use std::f64::consts::{FRAC_PI_2, PI};

/// Angular rate of the sinc core (π/2, i.e. half-band).
pub const SINC_RATE: f64 = FRAC_PI_2;

/// Binomial coefficients C(n, k) for the Leibniz expansion.
const BINOMIAL: [[f64; DERIVATIVE_COUNT]; DERIVATIVE_COUNT] = [
    [1.0, 0.0, 0.0, 0.0],
    [1.0, 1.0, 0.0, 0.0],
    [1.0, 2.0, 1.0, 0.0],
    [1.0, 3.0, 3.0, 1.0],
];

/// `lim Kn(x)` as `x -> 0`, already divided by `n!`.
const ORIGIN_LIMITS: [f64; DERIVATIVE_COUNT] = [0.5, 0.0, -7.0 * PI * PI / 288.0, 0.0];

/// A kernel whose derivative family can be sampled on the integer grid.
pub trait DerivativeKernel {
    /// Value of the normalized derivative `Kn` at an integer abscissa.
    fn sample(&self, order: DerivativeOrder, x: Abscissa) -> f64;
}

/// `f(x) = sin(ax) / x` and its derivatives.
fn sinc_core(order: DerivativeOrder, x: f64) -> f64 {
    let a = SINC_RATE;
    let (s, c) = (a * x).sin_cos();
    let x2 = x * x;
    let x3 = x2 * x;
    let x4 = x3 * x;

    match order {
        DerivativeOrder::Zeroth => s / x,
        DerivativeOrder::First => a * c / x - s / x2,
        DerivativeOrder::Second => -a * a * s / x - 2.0 * a * c / x2 + 2.0 * s / x3,
        DerivativeOrder::Third => {
            -a * a * a * c / x + 3.0 * a * a * s / x2 + 6.0 * a * c / x3 - 6.0 * s / x4
        }
    }
}

/// The fixed 13-tap windowed-sinc kernel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WindowedSincKernel;

impl WindowedSincKernel {
    pub fn new() -> Self {
        Self
    }

    /// Half-width of the support.
    #[inline]
    pub fn half_width(&self) -> f64 {
        KERNEL_HALF_WIDTH as f64
    }

    /// The support is the closed interval `[-6, 6]`.
    #[inline]
    pub fn in_support(&self, x: f64) -> bool {
        x >= -self.half_width() && x <= self.half_width()
    }

    /// Closed-form `Kn(x)`.
    ///
    /// Returns 0 outside the support. The result is not defined at `x = 0`;
    /// use [`limit_at_origin`](Self::limit_at_origin) there.
    pub fn evaluate(&self, order: DerivativeOrder, x: f64) -> f64 {
        if !self.in_support(x) {
            return 0.0;
        }

        let n = order.index();
        let mut acc = 0.0;
        for (k, &window_order) in DerivativeOrder::ALL[..=n].iter().enumerate() {
            let sinc_order = DerivativeOrder::ALL[n - k];
            acc += BINOMIAL[n][k] * raised_cosine(window_order, x) * sinc_core(sinc_order, x);
        }

        acc / PI / order.factorial()
    }

    /// Analytic limit of `Kn(x)` as `x -> 0`.
    #[inline]
    pub fn limit_at_origin(&self, order: DerivativeOrder) -> f64 {
        ORIGIN_LIMITS[order.index()]
    }
}

impl DerivativeKernel for WindowedSincKernel {
    fn sample(&self, order: DerivativeOrder, x: Abscissa) -> f64 {
        if x.is_origin() {
            self.limit_at_origin(order)
        } else {
            self.evaluate(order, x.as_f64())
        }
    }
}
