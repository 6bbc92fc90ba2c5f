//! Coefficient header rendering and writing.

use anyhow::{Context, Result};
use lib_dsp::stability::StabilityReport;
use lib_types::coefficients::CoefficientTable;
use lib_types::derivative::{DerivativeOrder, DERIVATIVE_COUNT};
use lib_types::units::TAP_COUNT;
use std::path::Path;

/// Name of the array declared in the header.
pub const ARRAY_NAME: &str = "fir_coeff";

/// Render the coefficient table as a C++ header.
///
/// The header holds an include guard and a single `int32_t` array in
/// interleaved order. The output depends only on the table.
pub fn render_header(table: &CoefficientTable) -> String {
    let values = table
        .iter()
        .map(|q| q.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "\n#pragma once\n\
         #include <array>\n\
         \n\
         static constexpr std::array<int32_t,{taps}*{orders}> {name} = \n\
         {{\n    {values}\n}};\n\n",
        taps = TAP_COUNT,
        orders = DERIVATIVE_COUNT,
        name = ARRAY_NAME,
        values = values,
    )
}

/// Write the header to `path`, creating or truncating it.
///
/// The content is composed in memory first and written in one call.
pub fn write_header(path: &Path, table: &CoefficientTable) -> Result<()> {
    let header = render_header(table);
    std::fs::write(path, header.as_bytes())
        .with_context(|| format!("Failed to write coefficient header: {:?}", path))?;

    tracing::info!("Wrote {} coefficients to {:?}", table.len(), path);
    Ok(())
}

/// Print the stability diagnostics to stdout.
pub fn print_report(report: &StabilityReport) {
    for order in DerivativeOrder::ALL {
        println!("sum|{}| = {}", order, report.abs_sums[order.index()]);
    }
    println!("maxsignal = {}", report.max_signal);
}
