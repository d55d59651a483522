//! Read-only projections of a (possibly partially reduced) matrix state

use super::core::{try_with_capacity, BoundaryMatrix};
use crate::error::Result;

impl BoundaryMatrix {
    /// Total number of nonzero entries
    pub fn nonzero_count(&self) -> u64 {
        self.columns.iter().map(|c| c.len() as u64).sum()
    }

    /// The low value of every column, in column-index order
    pub fn lows(&self) -> Vec<Option<u32>> {
        (0..self.n()).map(|j| self.low(j)).collect()
    }

    /// Whether every pair of distinct nonempty columns has distinct lows
    pub fn is_reduced(&self) -> bool {
        let mut seen = vec![false; self.n()];
        for j in 0..self.n() {
            if let Some(r) = self.low(j) {
                if seen[r as usize] {
                    return false;
                }
                seen[r as usize] = true;
            }
        }
        true
    }

    /// Materialize all present entries as coordinate arrays `(col_idxs, row_idxs)`
    ///
    /// Entries come out grouped by column with rows increasing; any ordering
    /// round-trips through [`BoundaryMatrix::from_coo`] to the same column
    /// sets.
    pub fn to_coo(&self) -> (Vec<i32>, Vec<i32>) {
        let nnz = self.nonzero_count() as usize;
        let mut col_idxs = Vec::with_capacity(nnz);
        let mut row_idxs = Vec::with_capacity(nnz);
        for (j, col) in self.columns.iter().enumerate() {
            for &r in col {
                col_idxs.push(j as i32);
                row_idxs.push(r as i32);
            }
        }
        (col_idxs, row_idxs)
    }

    /// Materialize the dense row-major `n x n` 0/1 matrix
    ///
    /// Diagnostic/export use only: the dense form is O(n^2) and not the
    /// working representation. Fails with a resource-exhaustion error rather
    /// than aborting when `n^2` bytes cannot be allocated.
    pub fn to_dense(&self) -> Result<Vec<u8>> {
        let n = self.n();
        let mut dense: Vec<u8> = try_with_capacity(n.saturating_mul(n))?;
        dense.resize(n * n, 0);
        for (j, col) in self.columns.iter().enumerate() {
            for &r in col {
                dense[r as usize * n + j] = 1;
            }
        }
        Ok(dense)
    }
}
