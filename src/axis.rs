//! Grid geometry derived from axis coordinates.
//!
//! An axis is described by a signed resolution taken from the first two
//! coordinates, its closed coordinate range and its number of nodes. Cells
//! are centred on the nodes, each spanning half a step on either side.
//!
//! Index mapping always runs in ascending coordinate order: the position is
//! `floor((v - min) / |res| + 0.5)`, so a value exactly halfway between two
//! nodes belongs to the node with the larger coordinate. A descending axis
//! mirrors that index (`len - 1 - i`), which keeps every sample in the same
//! physical cell whichever direction the axis is given in.
//!
//! Coordinates are expected to be finite and uniformly spaced. A mesh must
//! be axis-aligned and regular for the 1D axis recovered from it to be
//! meaningful; neither property is checked.

use crate::error::{AxisName, BinError};
use nalgebra::DMatrix;

/// Explicit calling convention for an axis argument.
#[derive(Clone, Copy, Debug)]
pub enum AxisInput<'a> {
    /// Plain 1D axis coordinates.
    Vector(&'a [f64]),
    /// Full coordinate mesh of shape `(len(yq), len(xq))`. The x-axis is
    /// read from the first row, the y-axis from the first column.
    Mesh(&'a DMatrix<f64>),
}

/// One uniformly spaced grid dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    coords: Vec<f64>,
    resolution: f64,
    lo: f64,
    hi: f64,
}

impl Axis {
    /// Build an axis from its coordinates.
    pub fn new(name: AxisName, coords: Vec<f64>) -> Result<Self, BinError> {
        if coords.len() < 2 {
            return Err(BinError::AxisTooShort {
                axis: name,
                len: coords.len(),
            });
        }
        let resolution = coords[1] - coords[0];
        if !resolution.is_finite() || resolution == 0.0 {
            return Err(BinError::DegenerateAxis { axis: name });
        }
        let (lo, hi) = coords
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        Ok(Self {
            coords,
            resolution,
            lo,
            hi,
        })
    }

    /// Recover an axis from either calling convention.
    pub fn from_input(name: AxisName, input: AxisInput<'_>) -> Result<Self, BinError> {
        match input {
            AxisInput::Vector(coords) => Self::new(name, coords.to_vec()),
            AxisInput::Mesh(mesh) => {
                if mesh.is_empty() {
                    return Err(BinError::EmptyMesh { axis: name });
                }
                let coords = match name {
                    AxisName::X => mesh.row(0).iter().copied().collect(),
                    AxisName::Y => mesh.column(0).iter().copied().collect(),
                };
                Self::new(name, coords)
            }
        }
    }

    /// Number of nodes (and cells) along this axis.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Never true for a constructed axis, which holds at least two nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Signed spacing between the first two nodes.
    #[inline]
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Closed coordinate range `[min, max]` covered by the nodes.
    #[inline]
    pub fn bounds(&self) -> (f64, f64) {
        (self.lo, self.hi)
    }

    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// True when `v` lies inside the closed node range. NaN is never inside.
    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        v >= self.lo && v <= self.hi
    }

    /// Cell index of an in-range coordinate.
    ///
    /// Callers must check [`Axis::contains`] first; the result is clamped so
    /// coordinates on the outer boundary map into the last cell.
    #[inline]
    pub fn cell_of(&self, v: f64) -> usize {
        let last = self.coords.len() - 1;
        let t = ((v - self.lo) / self.resolution.abs() + 0.5).floor();
        let ascending = if t <= 0.0 { 0 } else { (t as usize).min(last) };
        if self.resolution < 0.0 {
            last - ascending
        } else {
            ascending
        }
    }

    /// Checked variant of [`Axis::cell_of`].
    pub fn index_of(&self, v: f64) -> Option<usize> {
        self.contains(v).then(|| self.cell_of(v))
    }
}

/// Column (`x`) and row (`y`) axes of the output grid.
#[derive(Clone, Debug, PartialEq)]
pub struct GridAxes {
    pub x: Axis,
    pub y: Axis,
}

impl GridAxes {
    pub fn new(xq: AxisInput<'_>, yq: AxisInput<'_>) -> Result<Self, BinError> {
        Ok(Self {
            x: Axis::from_input(AxisName::X, xq)?,
            y: Axis::from_input(AxisName::Y, yq)?,
        })
    }

    pub fn from_vectors(xq: &[f64], yq: &[f64]) -> Result<Self, BinError> {
        Self::new(AxisInput::Vector(xq), AxisInput::Vector(yq))
    }

    pub fn from_mesh(xq: &DMatrix<f64>, yq: &DMatrix<f64>) -> Result<Self, BinError> {
        Self::new(AxisInput::Mesh(xq), AxisInput::Mesh(yq))
    }

    /// Output grid shape as `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.y.len(), self.x.len())
    }

    #[inline]
    pub fn num_cells(&self) -> usize {
        self.x.len() * self.y.len()
    }

    /// Row-major linear cell index of `(x, y)`, or `None` when outside.
    #[inline]
    pub fn locate(&self, x: f64, y: f64) -> Option<usize> {
        let col = self.x.index_of(x)?;
        let row = self.y.index_of(y)?;
        Some(row * self.x.len() + col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis(coords: &[f64]) -> Axis {
        Axis::new(AxisName::X, coords.to_vec()).expect("valid axis")
    }

    #[test]
    fn cells_are_centred_on_nodes() {
        let ax = axis(&[0.0, 1.0, 2.0]);
        assert_eq!(ax.cell_of(0.0), 0);
        assert_eq!(ax.cell_of(0.49), 0);
        assert_eq!(ax.cell_of(0.5), 1);
        assert_eq!(ax.cell_of(1.49), 1);
        assert_eq!(ax.cell_of(1.9), 2);
        assert_eq!(ax.cell_of(2.0), 2);
    }

    #[test]
    fn descending_axis_maps_by_node_distance() {
        let ax = axis(&[3.0, 2.0, 1.0, 0.0]);
        assert!(ax.resolution() < 0.0);
        assert_eq!(ax.bounds(), (0.0, 3.0));
        assert_eq!(ax.index_of(3.0), Some(0));
        assert_eq!(ax.index_of(2.2), Some(1));
        assert_eq!(ax.index_of(0.0), Some(3));
        assert_eq!(ax.index_of(-0.01), None);
    }

    #[test]
    fn half_step_ties_pick_the_same_node_in_both_directions() {
        let up = axis(&[0.0, 1.0, 2.0, 3.0]);
        let down = axis(&[3.0, 2.0, 1.0, 0.0]);
        for v in [0.5, 1.5, 2.5] {
            let i_up = up.cell_of(v);
            let i_down = down.cell_of(v);
            assert_eq!(i_down, 3 - i_up, "v={v}");
            assert_eq!(up.coords()[i_up], down.coords()[i_down], "v={v}");
        }
        assert_eq!(up.coords()[up.cell_of(1.5)], 2.0);
    }

    #[test]
    fn non_finite_coordinates_are_outside() {
        let ax = axis(&[0.0, 0.5, 1.0]);
        assert_eq!(ax.index_of(f64::NAN), None);
        assert_eq!(ax.index_of(f64::INFINITY), None);
    }

    #[test]
    fn short_or_flat_axes_are_rejected() {
        assert_eq!(
            Axis::new(AxisName::Y, vec![1.0]),
            Err(BinError::AxisTooShort {
                axis: AxisName::Y,
                len: 1
            })
        );
        assert_eq!(
            Axis::new(AxisName::X, vec![1.0, 1.0, 2.0]),
            Err(BinError::DegenerateAxis { axis: AxisName::X })
        );
    }

    #[test]
    fn mesh_recovers_first_row_and_column() {
        // 2 rows x 3 cols, as produced by a meshgrid of xq=[0,1,2], yq=[5,6].
        let xm = DMatrix::from_row_slice(2, 3, &[0.0, 1.0, 2.0, 0.0, 1.0, 2.0]);
        let ym = DMatrix::from_row_slice(2, 3, &[5.0, 5.0, 5.0, 6.0, 6.0, 6.0]);
        let axes = GridAxes::from_mesh(&xm, &ym).expect("mesh axes");
        assert_eq!(axes.x.coords(), &[0.0, 1.0, 2.0]);
        assert_eq!(axes.y.coords(), &[5.0, 6.0]);
        assert_eq!(axes.shape(), (2, 3));
    }

    #[test]
    fn empty_mesh_is_rejected() {
        let empty = DMatrix::<f64>::zeros(0, 3);
        let err = Axis::from_input(AxisName::X, AxisInput::Mesh(&empty)).unwrap_err();
        assert_eq!(err, BinError::EmptyMesh { axis: AxisName::X });
    }

    #[test]
    fn locate_is_row_major() {
        let axes = GridAxes::from_vectors(&[0.0, 1.0, 2.0], &[0.0, 1.0]).unwrap();
        assert_eq!(axes.locate(2.0, 1.0), Some(5));
        assert_eq!(axes.locate(0.1, 0.9), Some(3));
        assert_eq!(axes.locate(2.1, 0.0), None);
    }
}
