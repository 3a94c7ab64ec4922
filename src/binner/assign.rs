//! Filtering and cell-index mapping for scattered samples.

use crate::axis::GridAxes;
use crate::reduce::ZValue;
use crate::types::Samples;

/// Surviving samples paired with their row-major cell index.
pub(crate) struct CellAssignment {
    /// Cell index per surviving sample.
    pub cells: Vec<usize>,
    /// Index into the input slices per surviving sample.
    pub sources: Vec<usize>,
    pub dropped_nan: usize,
    pub dropped_out_of_bounds: usize,
}

/// Drop NaN z-values and samples outside the closed axis ranges, then map
/// each survivor to its cell.
pub(crate) fn assign_cells<Z: ZValue>(axes: &GridAxes, samples: &Samples<'_, Z>) -> CellAssignment {
    let mut out = CellAssignment {
        cells: Vec::with_capacity(samples.len()),
        sources: Vec::with_capacity(samples.len()),
        dropped_nan: 0,
        dropped_out_of_bounds: 0,
    };
    let points = samples.x().iter().zip(samples.y()).zip(samples.z());
    for (i, ((&x, &y), &z)) in points.enumerate() {
        if z.is_nan() {
            out.dropped_nan += 1;
            continue;
        }
        match axes.locate(x, y) {
            Some(cell) => {
                out.cells.push(cell);
                out.sources.push(i);
            }
            None => out.dropped_out_of_bounds += 1,
        }
    }
    out
}
