#![doc = include_str!("../README.md")]

// Public modules
pub mod axis;
pub mod binner;
pub mod error;
pub mod reduce;
pub mod types;

// Tooling around the core: config files, reports and disk I/O.
pub mod config;
pub mod io;
pub mod report;

// --- High-level re-exports -------------------------------------------------

pub use crate::axis::{Axis, AxisInput, GridAxes};
pub use crate::binner::{bin, bin_mean, BinParams, GridBinner};
pub use crate::error::{AxisName, BinError};
pub use crate::reduce::{Fill, Reducer, Statistic, ZValue};
pub use crate::types::{BinStats, BinnedGrid, Samples};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use grid_binner::prelude::*;
///
/// let axes = GridAxes::from_vectors(&[0.0, 1.0, 2.0], &[1.0, 0.0]).unwrap();
/// let binner = GridBinner::new(axes, BinParams::default());
/// let samples = Samples::new(&[0.0, 2.0], &[1.0, 0.0], &[1.0, 3.0]).unwrap();
/// let grid = binner.bin(&samples, &Statistic::Sum);
/// assert_eq!(grid.shape(), (2, 3));
/// assert_eq!(grid.values[(1, 2)], 3.0);
/// ```
pub mod prelude {
    pub use crate::{BinParams, GridAxes, GridBinner, Samples, Statistic};
}
