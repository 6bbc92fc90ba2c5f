//! Discrete sampling of the kernel derivatives on the integer grid.

use crate::error::{DspError, DspResult};
use crate::kernel::DerivativeKernel;
use lib_types::derivative::DerivativeOrder;
use lib_types::table::{DerivativeFamily, SampleTable};
use lib_types::units::{Abscissa, TAP_COUNT};

/// Sample one derivative order at the abscissas -6..=6.
///
/// Fails if any sample is NaN or infinite.
pub fn sample_derivative<K>(kernel: &K, order: DerivativeOrder) -> DspResult<SampleTable>
where
    K: DerivativeKernel + ?Sized,
{
    let mut samples = [0.0; TAP_COUNT];
    for (slot, x) in samples.iter_mut().zip(Abscissa::grid()) {
        *slot = kernel.sample(order, x);
    }

    let table = SampleTable::new(order, samples);
    if let Some(abscissa) = table.first_non_finite() {
        return Err(DspError::NonFiniteSample { order, abscissa });
    }

    tracing::debug!("Sampled {}: {:?}", order, table.samples());
    Ok(table)
}

/// Sample all four derivative orders.
pub fn sample_family<K>(kernel: &K) -> DspResult<DerivativeFamily>
where
    K: DerivativeKernel + ?Sized,
{
    let tables = [
        sample_derivative(kernel, DerivativeOrder::Zeroth)?,
        sample_derivative(kernel, DerivativeOrder::First)?,
        sample_derivative(kernel, DerivativeOrder::Second)?,
        sample_derivative(kernel, DerivativeOrder::Third)?,
    ];

    DerivativeFamily::new(tables)
        .ok_or_else(|| DspError::InvalidFamily("tables out of derivative order".to_string()))
}
