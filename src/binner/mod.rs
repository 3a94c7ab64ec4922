//! Scatter-to-grid binning.
//!
//! One call runs a linear pass that drops NaN z-values and samples outside
//! the axis ranges and maps survivors to cells, followed by a grouped
//! reduction over occupied cells. Nothing is kept between calls.
//!
//! ```
//! use grid_binner::{bin_mean, AxisInput};
//!
//! let x = [0.1, 0.2, 1.9];
//! let y = [0.1, 0.1, 0.1];
//! let z = [10.0, 20.0, 100.0];
//! let grid = bin_mean(
//!     &x,
//!     &y,
//!     &z,
//!     AxisInput::Vector(&[0.0, 1.0, 2.0]),
//!     AxisInput::Vector(&[0.0, 1.0]),
//! )
//! .unwrap();
//! assert_eq!(grid.values[(0, 0)], 15.0);
//! assert!(grid.values[(0, 1)].is_nan());
//! assert_eq!(grid.counts.unwrap()[(0, 2)], 1);
//! ```

mod assign;
mod group;
pub mod params;

pub use params::BinParams;

use crate::axis::{AxisInput, GridAxes};
use crate::error::BinError;
use crate::reduce::{Reducer, Statistic, ZValue};
use crate::types::{BinStats, BinnedGrid, Samples};
use assign::assign_cells;
use group::CellGroups;
use log::{debug, warn};
use nalgebra::DMatrix;
use std::time::Instant;

/// Bins samples onto a fixed pair of axes.
#[derive(Clone, Debug)]
pub struct GridBinner {
    axes: GridAxes,
    params: BinParams,
}

impl GridBinner {
    pub fn new(axes: GridAxes, params: BinParams) -> Self {
        Self { axes, params }
    }

    pub fn axes(&self) -> &GridAxes {
        &self.axes
    }

    pub fn params(&self) -> &BinParams {
        &self.params
    }

    /// Reduce the z-values of every cell with `reducer`.
    pub fn bin<Z, R>(&self, samples: &Samples<'_, Z>, reducer: &R) -> BinnedGrid<R::Output>
    where
        Z: ZValue,
        R: Reducer<Z>,
    {
        let t0 = Instant::now();
        let (rows, cols) = self.axes.shape();

        let assignment = assign_cells(&self.axes, samples);
        let groups = CellGroups::build(self.axes.num_cells(), &assignment, samples.z());
        let values = groups.reduce(reducer);
        let counts = self
            .params
            .with_counts
            .then(|| DMatrix::from_row_slice(rows, cols, &groups.counts()));

        let stats = BinStats {
            total: samples.len(),
            kept: assignment.cells.len(),
            dropped_nan: assignment.dropped_nan,
            dropped_out_of_bounds: assignment.dropped_out_of_bounds,
            occupied_cells: groups.occupied(),
            elapsed_ms: t0.elapsed().as_secs_f64() * 1000.0,
        };
        if stats.kept == 0 && stats.total > 0 {
            warn!(
                "GridBinner: all {} samples dropped (nan={} out_of_bounds={})",
                stats.total, stats.dropped_nan, stats.dropped_out_of_bounds
            );
        }
        debug!(
            "GridBinner: {}x{} grid kept={}/{} nan={} oob={} occupied={} elapsed_ms={:.3}",
            rows,
            cols,
            stats.kept,
            stats.total,
            stats.dropped_nan,
            stats.dropped_out_of_bounds,
            stats.occupied_cells,
            stats.elapsed_ms
        );

        BinnedGrid {
            values: DMatrix::from_row_slice(rows, cols, &values),
            counts,
            stats,
        }
    }

    /// Per-cell arithmetic mean.
    pub fn mean<Z: ZValue>(&self, samples: &Samples<'_, Z>) -> BinnedGrid<f64> {
        self.bin(samples, &Statistic::Mean)
    }
}

/// Validate the inputs and bin them in one call.
pub fn bin<Z, R>(
    x: &[f64],
    y: &[f64],
    z: &[Z],
    xq: AxisInput<'_>,
    yq: AxisInput<'_>,
    reducer: &R,
    with_counts: bool,
) -> Result<BinnedGrid<R::Output>, BinError>
where
    Z: ZValue,
    R: Reducer<Z>,
{
    let samples = Samples::new(x, y, z)?;
    let axes = GridAxes::new(xq, yq)?;
    Ok(GridBinner::new(axes, BinParams { with_counts }).bin(&samples, reducer))
}

/// [`bin`] with the mean reducer and the count grid.
pub fn bin_mean<Z: ZValue>(
    x: &[f64],
    y: &[f64],
    z: &[Z],
    xq: AxisInput<'_>,
    yq: AxisInput<'_>,
) -> Result<BinnedGrid<f64>, BinError> {
    bin(x, y, z, xq, yq, &Statistic::Mean, true)
}
