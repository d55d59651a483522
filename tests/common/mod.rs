//! Common test utilities
#![allow(dead_code)]

use homr::prelude::*;

/// Filtered triangle: vertices 0-2, edges 3-5, filling triangle 6
///
/// Columns: 3 = {0,1}, 4 = {0,2}, 5 = {1,2}, 6 = {3,4,5}.
pub fn triangle_complex() -> BoundaryMatrix {
    let cols = vec![3, 3, 4, 4, 5, 5, 6, 6, 6];
    let rows = vec![0, 1, 0, 2, 1, 2, 3, 4, 5];
    BoundaryMatrix::from_coo(&cols, &rows, 7).unwrap()
}

/// Hollow triangle: the same complex without the filling 2-simplex
///
/// The loop 3-4-5 never dies, so an essential class survives in addition to
/// the essential connected component.
pub fn circle_complex() -> BoundaryMatrix {
    let cols = vec![3, 3, 4, 4, 5, 5];
    let rows = vec![0, 1, 0, 2, 1, 2];
    BoundaryMatrix::from_coo(&cols, &rows, 6).unwrap()
}

/// Independent serial left-to-right reduction, for confluence checks
///
/// Processes columns in ascending order, repeatedly adding the recorded
/// pivot-owner column until the low is unowned or the column empties. This is
/// the textbook algorithm the round-based engine must agree with.
pub fn serial_reduce(m: &BoundaryMatrix) -> BoundaryMatrix {
    let mut work = m.clone();
    let n = work.n();
    let mut owner: Vec<Option<usize>> = vec![None; n];
    for j in 0..n {
        while let Some(r) = work.low(j) {
            match owner[r as usize] {
                Some(o) => work.add_column(j, o),
                None => {
                    owner[r as usize] = Some(j);
                    break;
                }
            }
        }
    }
    work
}

/// Deterministic pseudo-random coordinate matrix (xorshift)
pub fn random_matrix(n: usize, nnz: usize, seed: u64) -> BoundaryMatrix {
    let mut state = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    let mut cols = Vec::with_capacity(nnz);
    let mut rows = Vec::with_capacity(nnz);
    for _ in 0..nnz {
        cols.push((next() % n as u64) as i32);
        rows.push((next() % n as u64) as i32);
    }
    BoundaryMatrix::from_coo(&cols, &rows, n).unwrap()
}
