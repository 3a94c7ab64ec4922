use crate::error::BinError;
use crate::reduce::Fill;
use nalgebra::DMatrix;
use serde::Serialize;

/// Borrowed scattered samples. `x`, `y` and `z` always share one length.
#[derive(Clone, Copy, Debug)]
pub struct Samples<'a, Z> {
    x: &'a [f64],
    y: &'a [f64],
    z: &'a [Z],
}

impl<'a, Z> Samples<'a, Z> {
    pub fn new(x: &'a [f64], y: &'a [f64], z: &'a [Z]) -> Result<Self, BinError> {
        if x.len() != y.len() || x.len() != z.len() {
            return Err(BinError::LengthMismatch {
                x: x.len(),
                y: y.len(),
                z: z.len(),
            });
        }
        Ok(Self { x, y, z })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.z.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.z.is_empty()
    }

    pub fn x(&self) -> &'a [f64] {
        self.x
    }

    pub fn y(&self) -> &'a [f64] {
        self.y
    }

    pub fn z(&self) -> &'a [Z] {
        self.z
    }
}

/// Bookkeeping for one binning call.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BinStats {
    pub total: usize,
    pub kept: usize,
    pub dropped_nan: usize,
    pub dropped_out_of_bounds: usize,
    pub occupied_cells: usize,
    pub elapsed_ms: f64,
}

/// Dense per-cell results, row `r` matching `yq[r]` and column `c` matching `xq[c]`.
#[derive(Clone, Debug)]
pub struct BinnedGrid<O: Fill> {
    /// Reduced statistic; empty cells hold [`Fill::fill`].
    pub values: DMatrix<O>,
    /// Per-cell sample counts, present when requested.
    pub counts: Option<DMatrix<usize>>,
    pub stats: BinStats,
}

impl<O: Fill> BinnedGrid<O> {
    /// `(rows, cols)` of the output grids.
    pub fn shape(&self) -> (usize, usize) {
        self.values.shape()
    }

    /// Values as nested rows, the layout used by JSON reports.
    pub fn value_rows(&self) -> Vec<Vec<O>> {
        matrix_rows(&self.values)
    }

    pub fn count_rows(&self) -> Option<Vec<Vec<usize>>> {
        self.counts.as_ref().map(matrix_rows)
    }
}

fn matrix_rows<T: nalgebra::Scalar + Copy>(m: &DMatrix<T>) -> Vec<Vec<T>> {
    m.row_iter()
        .map(|row| row.iter().copied().collect())
        .collect()
}
