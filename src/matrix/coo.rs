//! Coordinate-array construction of boundary matrices

use super::core::{try_with_capacity, BoundaryMatrix};
use crate::error::{Error, Result};

impl BoundaryMatrix {
    /// Create a boundary matrix from coordinate arrays
    ///
    /// An entry `(row_idxs[k], col_idxs[k])` marks simplex `row_idxs[k]` as a
    /// face of simplex `col_idxs[k]`. The pair order inside the arrays does
    /// not matter, and a pair listed twice cancels (GF(2) semantics) rather
    /// than double-counting.
    ///
    /// # Arguments
    ///
    /// * `col_idxs` - Column index of each entry
    /// * `row_idxs` - Row index of each entry
    /// * `n` - Number of columns (and rows)
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The two arrays differ in length
    /// - Any index is negative or `>= n`
    pub fn from_coo(col_idxs: &[i32], row_idxs: &[i32], n: usize) -> Result<Self> {
        if col_idxs.len() != row_idxs.len() {
            return Err(Error::length_mismatch(col_idxs.len(), row_idxs.len()));
        }

        let mut entries: Vec<(u32, u32)> = try_with_capacity(col_idxs.len())?;
        for (&c, &r) in col_idxs.iter().zip(row_idxs.iter()) {
            if c < 0 || c as usize >= n {
                return Err(Error::index_out_of_bounds(c, n));
            }
            if r < 0 || r as usize >= n {
                return Err(Error::index_out_of_bounds(r, n));
            }
            entries.push((c as u32, r as u32));
        }

        // Sorting groups duplicates and yields increasing rows per column.
        entries.sort_unstable();

        let mut columns: Vec<Vec<u32>> = try_with_capacity(n)?;
        columns.resize_with(n, Vec::new);

        let mut k = 0;
        while k < entries.len() {
            let entry = entries[k];
            let mut run = 1;
            while k + run < entries.len() && entries[k + run] == entry {
                run += 1;
            }
            if run % 2 == 1 {
                columns[entry.0 as usize].push(entry.1);
            }
            k += run;
        }

        Ok(Self { columns })
    }
}
