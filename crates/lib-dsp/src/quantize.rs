//! Q15 quantization and interleaving of the derivative tables.
//!
//! The resampler walks its input history from the newest sample backwards,
//! so each table is reversed (abscissa +6 first) before the four orders are
//! interleaved into groups of four.

use lib_types::coefficients::{CoefficientGroup, CoefficientTable};
use lib_types::derivative::DERIVATIVE_COUNT;
use lib_types::table::DerivativeFamily;
use lib_types::units::{Q15, Q15_SCALE, TAP_COUNT};

/// Scale a real value by 2^15, truncating toward zero.
#[inline]
pub fn quantize_q15(value: f64) -> Q15 {
    Q15((value * Q15_SCALE) as i32)
}

/// Quantize and interleave a derivative family into the output table.
pub fn interleave(family: &DerivativeFamily) -> CoefficientTable {
    let mut groups: [CoefficientGroup; TAP_COUNT] = [[Q15::ZERO; DERIVATIVE_COUNT]; TAP_COUNT];

    for (position, group) in groups.iter_mut().enumerate() {
        let index = TAP_COUNT - 1 - position;
        for table in family.iter() {
            group[table.order().index()] = quantize_q15(table.samples()[index]);
        }
    }

    let table = CoefficientTable::from_groups(groups);
    tracing::debug!("Quantized {} coefficients", table.len());
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::WindowedSincKernel;
    use crate::sampler::sample_family;
    use lib_types::derivative::DerivativeOrder;
    use lib_types::table::SampleTable;

    const EXPECTED: [i32; 52] = [
        0, 0, 0, -187, 139, -301, 11, 347, 0, 1024, -1184, 15, -1738, 1489, 1648, -1713,
        0, -6144, 4929, 342, 9731, -11097, -1528, 3274, 16384, 0, -7860, 0, 9731, 11097,
        -1528, -3274, 0, 6144, 4929, -342, -1738, -1489, 1648, 1713, 0, -1024, -1184, -15,
        139, 301, 11, -347, 0, 0, 0, 187,
    ];

    fn kernel_table() -> CoefficientTable {
        interleave(&sample_family(&WindowedSincKernel).unwrap())
    }

    #[test]
    fn test_truncates_toward_zero() {
        assert_eq!(quantize_q15(0.5), Q15(16384));
        assert_eq!(quantize_q15(-0.5), Q15(-16384));
        assert_eq!(quantize_q15(1.9 / 32768.0), Q15(1));
        assert_eq!(quantize_q15(-1.9 / 32768.0), Q15(-1));
        assert_eq!(quantize_q15(0.9 / 32768.0), Q15(0));
        assert_eq!(quantize_q15(-0.9 / 32768.0), Q15(0));
        assert_eq!(quantize_q15(1e-17), Q15(0));
    }

    #[test]
    fn test_reverse_and_interleave_order() {
        // Encode (order, index) into each sample so the layout is visible
        let tables = DerivativeOrder::ALL.map(|order| {
            let mut samples = [0.0; TAP_COUNT];
            for (index, s) in samples.iter_mut().enumerate() {
                *s = (order.index() * 100 + index) as f64 / Q15_SCALE;
            }
            SampleTable::new(order, samples)
        });
        let table = interleave(&DerivativeFamily::new(tables).unwrap());

        let values = table.to_vec();
        assert_eq!(&values[..8], &[12, 112, 212, 312, 11, 111, 211, 311]);
        assert_eq!(&values[48..], &[0, 100, 200, 300]);
    }

    #[test]
    fn test_origin_coefficient() {
        let table = kernel_table();
        assert_eq!(table.get((12 - 6) * 4), Some(Q15(16384)));
        assert_eq!(table.group(6), Some(&[Q15(16384), Q15(0), Q15(-7860), Q15(0)]));
    }

    #[test]
    fn test_regression_table() {
        let table = kernel_table();
        assert_eq!(table.len(), 52);
        assert_eq!(table.to_vec(), EXPECTED.to_vec());
    }

    #[test]
    fn test_recovered_coefficients_match_samples() {
        let family = sample_family(&WindowedSincKernel).unwrap();
        let table = interleave(&family);
        for position in 0..TAP_COUNT {
            let abscissa = CoefficientTable::abscissa(position);
            for order in DerivativeOrder::ALL {
                let real = table.real(position, order).unwrap();
                let sample = family.get(order).at(abscissa).unwrap();
                assert!(
                    (real - sample).abs() < 1.0 / Q15_SCALE,
                    "{} at {} off by more than one LSB",
                    order,
                    abscissa
                );
            }
        }
    }
}
