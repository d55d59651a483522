//! Round-based reduction engine
//!
//! See the module docs of [`crate::reduce`] for the round contract. The
//! invariants that keep a round race-free: ownership is resolved against the
//! pre-round state with the lowest column index winning ties, owner columns
//! are never written inside a round, and every addition reads the pre-round
//! snapshot only.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::matrix::{symmetric_difference, try_with_capacity, BoundaryMatrix};

/// Below this many collisions a parallel dispatch costs more than it saves
#[cfg(feature = "rayon")]
const PAR_MIN_COLLISIONS: usize = 64;

/// Reduce a boundary matrix to convergence
///
/// The returned state satisfies the uniqueness invariant: no two distinct
/// nonempty columns share a low. The input is not mutated; prior states stay
/// valid for inspection.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfBounds`] if the state carries a row index at or
/// above `n` (impossible for matrices built through [`BoundaryMatrix::from_coo`],
/// checked defensively), and [`Error::ResourceExhausted`] if working buffers
/// for the matrix size cannot be allocated.
pub fn reduce(state: &BoundaryMatrix) -> Result<BoundaryMatrix> {
    run(state, None)
}

/// Reduce a boundary matrix for at most `rounds` rounds
///
/// A round resolves every currently-colliding column once (see the module
/// docs). A budget of `0` returns a copy of the input unchanged. Bounded runs
/// compose exactly: reducing with `k1` and then `k2` rounds yields the same
/// state as one call with `k1 + k2`, so a partial reduction can be resumed
/// where it stopped. The returned state is structurally valid but satisfies
/// the uniqueness invariant only once the budget covers convergence.
///
/// # Errors
///
/// Same failure modes as [`reduce`].
pub fn reduce_bounded(state: &BoundaryMatrix, rounds: u32) -> Result<BoundaryMatrix> {
    run(state, Some(rounds))
}

fn run(state: &BoundaryMatrix, budget: Option<u32>) -> Result<BoundaryMatrix> {
    check_indices(state)?;
    let mut work = state.try_clone()?;
    let mut completed: u32 = 0;
    while budget.map_or(true, |k| completed < k) {
        let pairs = collisions(&work)?;
        if pairs.is_empty() {
            break;
        }
        apply_round(&mut work, &pairs);
        completed += 1;
    }
    Ok(work)
}

/// Defensive index validation at the engine boundary
fn check_indices(state: &BoundaryMatrix) -> Result<()> {
    let n = state.n();
    for j in 0..n {
        if let Some(r) = state.low(j) {
            // Columns are increasing, so the low bounds every entry.
            if r as usize >= n {
                return Err(Error::index_out_of_bounds(i64::from(r), n));
            }
        }
    }
    Ok(())
}

/// The `(dst, src)` additions making up one round
///
/// `src` is always the pivot owner of `dst`'s low, and owners never appear as
/// a `dst`, so the additions of a round are pairwise independent.
fn collisions(state: &BoundaryMatrix) -> Result<Vec<(usize, usize)>> {
    let n = state.n();
    let mut owner: Vec<usize> = try_with_capacity(n)?;
    owner.resize(n, usize::MAX);
    for j in 0..n {
        if let Some(r) = state.low(j) {
            let r = r as usize;
            if owner[r] == usize::MAX {
                owner[r] = j;
            }
        }
    }

    let mut pairs = Vec::new();
    for j in 0..n {
        if let Some(r) = state.low(j) {
            let o = owner[r as usize];
            if o != j {
                pairs.push((j, o));
            }
        }
    }
    Ok(pairs)
}

/// Apply one round of additions against the pre-round snapshot
fn apply_round(state: &mut BoundaryMatrix, pairs: &[(usize, usize)]) {
    let snapshot: &BoundaryMatrix = state;

    #[cfg(feature = "rayon")]
    let updates: Vec<(usize, Vec<u32>)> = pairs
        .par_iter()
        .with_min_len(PAR_MIN_COLLISIONS)
        .map(|&(dst, src)| {
            (
                dst,
                symmetric_difference(snapshot.column(dst), snapshot.column(src)),
            )
        })
        .collect();

    #[cfg(not(feature = "rayon"))]
    let updates: Vec<(usize, Vec<u32>)> = pairs
        .iter()
        .map(|&(dst, src)| {
            (
                dst,
                symmetric_difference(snapshot.column(dst), snapshot.column(src)),
            )
        })
        .collect();

    for (dst, rows) in updates {
        state.set_column(dst, rows);
    }
}
