//! Real-valued sample tables of the kernel derivatives.
//!
//! # Sample Semantics
//!
//! A `SampleTable` holds one value per integer abscissa on the kernel
//! support, in ascending abscissa order:
//!
//! ```text
//! samples[k] = K_n(k - 6),  for k = 0, 1, ..., 12
//! ```
//!
//! so `samples[0]` is taken at -6, `samples[6]` at the origin and
//! `samples[12]` at +6. The resampler consumes the tables reversed; that
//! reordering happens at quantization time, never here.

use crate::derivative::{DerivativeOrder, DERIVATIVE_COUNT};
use crate::units::{Abscissa, TAP_COUNT};
use serde::{Deserialize, Serialize};

/// Samples of one derivative order at every integer abscissa.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleTable {
    order: DerivativeOrder,
    samples: [f64; TAP_COUNT],
}

impl SampleTable {
    pub fn new(order: DerivativeOrder, samples: [f64; TAP_COUNT]) -> Self {
        Self { order, samples }
    }

    #[inline]
    pub fn order(&self) -> DerivativeOrder {
        self.order
    }

    #[inline]
    pub fn samples(&self) -> &[f64; TAP_COUNT] {
        &self.samples
    }

    /// Number of samples (always `TAP_COUNT`).
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at an abscissa, or `None` outside the support.
    pub fn at(&self, x: Abscissa) -> Option<f64> {
        x.index().map(|i| self.samples[i])
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    /// Signed sum of all samples.
    pub fn signed_sum(&self) -> f64 {
        self.samples.iter().sum()
    }

    /// Sum of absolute values of all samples.
    pub fn abs_sum(&self) -> f64 {
        self.samples.iter().map(|v| v.abs()).sum()
    }

    /// First abscissa holding a NaN or infinite value.
    pub fn first_non_finite(&self) -> Option<Abscissa> {
        self.samples
            .iter()
            .position(|v| !v.is_finite())
            .map(Abscissa::from_index)
    }
}

/// Sample tables for all four derivative orders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DerivativeFamily {
    tables: [SampleTable; DERIVATIVE_COUNT],
}

impl DerivativeFamily {
    /// Build a family from tables given in order 0..=3.
    ///
    /// Returns `None` if a table's order does not match its position.
    pub fn new(tables: [SampleTable; DERIVATIVE_COUNT]) -> Option<Self> {
        let aligned = tables
            .iter()
            .zip(DerivativeOrder::ALL)
            .all(|(table, order)| table.order() == order);
        aligned.then_some(Self { tables })
    }

    #[inline]
    pub fn get(&self, order: DerivativeOrder) -> &SampleTable {
        &self.tables[order.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &SampleTable> {
        self.tables.iter()
    }

    /// Weighted combination `sum_n K_n(x) / 2^n` at an abscissa, or `None`
    /// outside the support.
    pub fn weighted_sample(&self, x: Abscissa) -> Option<f64> {
        let index = x.index()?;
        Some(
            self.tables
                .iter()
                .map(|table| table.samples[index] * table.order().farrow_weight())
                .sum(),
        )
    }
}
