//! Dense reduce-by-cell over assigned samples.
//!
//! Values are bucketed with a counting sort: per-cell counts become offsets
//! into one contiguous buffer, so every occupied cell is a slice handed to
//! the reducer exactly once.

use super::assign::CellAssignment;
use crate::reduce::{Fill, Reducer};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Z-values grouped by cell in row-major cell order.
pub(crate) struct CellGroups<Z> {
    /// `offsets[c]..offsets[c + 1]` spans the values of cell `c`.
    offsets: Vec<usize>,
    values: Vec<Z>,
}

impl<Z: Copy + Send + Sync> CellGroups<Z> {
    pub fn build(num_cells: usize, assignment: &CellAssignment, z: &[Z]) -> Self {
        let mut offsets = vec![0usize; num_cells + 1];
        for &cell in &assignment.cells {
            offsets[cell + 1] += 1;
        }
        for c in 0..num_cells {
            offsets[c + 1] += offsets[c];
        }

        let mut cursor = offsets[..num_cells].to_vec();
        let mut order = vec![0usize; assignment.cells.len()];
        for (&cell, &src) in assignment.cells.iter().zip(&assignment.sources) {
            order[cursor[cell]] = src;
            cursor[cell] += 1;
        }
        let values = order.into_iter().map(|src| z[src]).collect();
        Self { offsets, values }
    }

    #[inline]
    pub fn num_cells(&self) -> usize {
        self.offsets.len() - 1
    }

    #[inline]
    pub fn cell(&self, c: usize) -> &[Z] {
        &self.values[self.offsets[c]..self.offsets[c + 1]]
    }

    /// Per-cell sample counts in row-major order.
    pub fn counts(&self) -> Vec<usize> {
        self.offsets.windows(2).map(|w| w[1] - w[0]).collect()
    }

    pub fn occupied(&self) -> usize {
        self.offsets.windows(2).filter(|w| w[1] > w[0]).count()
    }

    /// Reduce every occupied cell, leaving empty cells at the fill value.
    pub fn reduce<R: Reducer<Z>>(&self, reducer: &R) -> Vec<R::Output> {
        #[cfg(feature = "parallel")]
        {
            (0..self.num_cells())
                .into_par_iter()
                .map(|c| self.reduce_cell(c, reducer))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            (0..self.num_cells())
                .map(|c| self.reduce_cell(c, reducer))
                .collect()
        }
    }

    #[inline]
    fn reduce_cell<R: Reducer<Z>>(&self, c: usize, reducer: &R) -> R::Output {
        let vals = self.cell(c);
        if vals.is_empty() {
            <R::Output as Fill>::fill()
        } else {
            reducer.reduce(vals)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduce::Statistic;

    fn assignment(cells: Vec<usize>) -> CellAssignment {
        let sources = (0..cells.len()).collect();
        CellAssignment {
            cells,
            sources,
            dropped_nan: 0,
            dropped_out_of_bounds: 0,
        }
    }

    #[test]
    fn groups_are_contiguous_per_cell() {
        let groups = CellGroups::build(4, &assignment(vec![2, 0, 2, 3, 2]), &[1, 2, 3, 4, 5]);
        assert_eq!(groups.cell(0), &[2]);
        assert!(groups.cell(1).is_empty());
        assert_eq!(groups.cell(2), &[1, 3, 5]);
        assert_eq!(groups.cell(3), &[4]);
        assert_eq!(groups.counts(), vec![1, 0, 3, 1]);
        assert_eq!(groups.occupied(), 3);
    }

    #[test]
    fn empty_cells_take_fill_value() {
        let groups = CellGroups::build(3, &assignment(vec![1, 1]), &[2.0f32, 4.0]);
        let out = groups.reduce(&Statistic::Mean);
        assert!(out[0].is_nan());
        assert_eq!(out[1], 3.0);
        assert!(out[2].is_nan());
    }

    #[test]
    fn reducer_sees_each_cell_once() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        let calls = AtomicUsize::new(0);
        let groups = CellGroups::build(5, &assignment(vec![4, 4, 0, 4]), &[1u8, 1, 1, 1]);
        let out = groups.reduce(&|v: &[u8]| {
            calls.fetch_add(1, Ordering::Relaxed);
            v.len() as u64
        });
        assert_eq!(calls.load(Ordering::Relaxed), 2);
        assert_eq!(out, vec![1, 0, 0, 0, 3]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_reduction_matches_serial_cell_order() {
        let cells: Vec<usize> = (0..500).map(|i| (i * 7919) % 37).collect();
        let z: Vec<f64> = (0..500).map(|i| (i as f64 * 0.37).sin()).collect();
        let groups = CellGroups::build(40, &assignment(cells), &z);

        let parallel = groups.reduce(&Statistic::Median);
        let serial: Vec<f64> = (0..groups.num_cells())
            .map(|c| groups.reduce_cell(c, &Statistic::Median))
            .collect();
        assert_eq!(parallel.len(), serial.len());
        for (c, (p, s)) in parallel.iter().zip(&serial).enumerate() {
            assert!(
                (p.is_nan() && s.is_nan()) || p == s,
                "cell {c}: parallel={p} serial={s}"
            );
        }
        assert!(parallel[37..].iter().all(|v| v.is_nan()));
    }
}
