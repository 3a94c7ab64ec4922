//! Serializable summary of a binning run.

use crate::axis::GridAxes;
use crate::reduce::Statistic;
use crate::types::{BinStats, BinnedGrid};
use serde::Serialize;

/// JSON-friendly view of a [`BinnedGrid`]. Empty cells serialize as `null`.
#[derive(Clone, Debug, Serialize)]
pub struct GridReport {
    pub statistic: Statistic,
    pub xq: Vec<f64>,
    pub yq: Vec<f64>,
    pub shape: (usize, usize),
    pub values: Vec<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<Vec<Vec<usize>>>,
    pub stats: BinStats,
}

impl GridReport {
    pub fn new(axes: &GridAxes, statistic: Statistic, grid: &BinnedGrid<f64>) -> Self {
        Self {
            statistic,
            xq: axes.x.coords().to_vec(),
            yq: axes.y.coords().to_vec(),
            shape: grid.shape(),
            values: grid.value_rows(),
            counts: grid.count_rows(),
            stats: grid.stats.clone(),
        }
    }
}
