//! Interleaved Q15 coefficient table.
//!
//! # Layout
//!
//! The table is organised as 13 groups of 4 coefficients. Group `g` belongs
//! to abscissa `6 - g` (group 0 is +6, group 12 is -6), and the 4 entries of
//! a group are the Farrow terms of order 0, 1, 2 and 3:
//!
//! ```text
//! d0[+6] d1[+6] d2[+6] d3[+6]  d0[+5] d1[+5] ...  d0[-6] d1[-6] d2[-6] d3[-6]
//! ```
//!
//! Dividing an entry by 2^15 recovers its real coefficient.

use crate::derivative::{DerivativeOrder, DERIVATIVE_COUNT};
use crate::units::{Abscissa, Q15, KERNEL_HALF_WIDTH, TAP_COUNT};
use serde::{Deserialize, Serialize};

/// Total number of coefficients in the table (13 x 4).
pub const COEFFICIENT_COUNT: usize = TAP_COUNT * DERIVATIVE_COUNT;

/// One group of Farrow coefficients for a single abscissa.
pub type CoefficientGroup = [Q15; DERIVATIVE_COUNT];

/// The final fixed-point coefficient table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoefficientTable {
    groups: [CoefficientGroup; TAP_COUNT],
}

impl CoefficientTable {
    pub fn from_groups(groups: [CoefficientGroup; TAP_COUNT]) -> Self {
        Self { groups }
    }

    /// Number of coefficients (always `COEFFICIENT_COUNT`).
    #[inline]
    pub fn len(&self) -> usize {
        COEFFICIENT_COUNT
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn groups(&self) -> &[CoefficientGroup; TAP_COUNT] {
        &self.groups
    }

    /// Group at a position (0 is abscissa +6).
    pub fn group(&self, position: usize) -> Option<&CoefficientGroup> {
        self.groups.get(position)
    }

    /// Abscissa a group position belongs to.
    pub fn abscissa(position: usize) -> Abscissa {
        Abscissa(KERNEL_HALF_WIDTH - position as i32)
    }

    /// Coefficient at a flat index in the interleaved sequence.
    pub fn get(&self, index: usize) -> Option<Q15> {
        self.groups
            .get(index / DERIVATIVE_COUNT)
            .map(|group| group[index % DERIVATIVE_COUNT])
    }

    /// Real-valued coefficient for a group position and Farrow order.
    pub fn real(&self, position: usize, order: DerivativeOrder) -> Option<f64> {
        self.group(position).map(|group| group[order.index()].to_real())
    }

    /// Coefficients in interleaved order.
    pub fn iter(&self) -> impl Iterator<Item = Q15> + '_ {
        self.groups.iter().flat_map(|group| group.iter().copied())
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().map(|q| q.raw()).collect()
    }
}
