//! Persistence-interval extraction
//!
//! After reduction, each column's low encodes a birth-death pairing: a column
//! `j` with low `r` kills the class born at filtration index `r`, provided
//! `r` is a birth candidate, i.e. its own column reduced to zero. Zero
//! columns that never appear as a low carry essential classes that survive
//! the whole filtration.

use crate::matrix::BoundaryMatrix;

/// A birth-death pair of filtration indices
///
/// `death` is `None` for essential classes, features that never die within
/// the filtration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersistenceInterval {
    /// Filtration index at which the feature appears
    pub birth: u32,
    /// Filtration index at which the feature disappears, if it does
    pub death: Option<u32>,
}

impl PersistenceInterval {
    /// Returns true if this feature never dies (infinite interval)
    #[inline]
    pub fn is_essential(&self) -> bool {
        self.death.is_none()
    }

    /// Lifespan in filtration indices, or `None` for essential classes
    #[inline]
    pub fn persistence(&self) -> Option<u32> {
        self.death.map(|d| d - self.birth)
    }
}

/// Extract persistence intervals from a reduced state
///
/// A filtration index `r` is a birth candidate exactly when its column is
/// zero in the reduced state (its low is undefined). For each column `j` with
/// `low(j) = r` and `r` a birth candidate, the paired interval `(r, j)` is
/// emitted; every remaining birth candidate is emitted as an essential
/// interval with no death. No index is reported both paired and essential.
///
/// For a matrix that does not satisfy the uniqueness invariant the pairing is
/// not meaningful; callers are expected to pass the output of
/// [`reduce`](crate::reduce::reduce).
///
/// Intervals come out sorted by birth.
pub fn persistence_intervals(reduced: &BoundaryMatrix) -> Vec<PersistenceInterval> {
    let n = reduced.n();
    let lows = reduced.lows();

    let mut paired = vec![false; n];
    let mut intervals = Vec::new();
    for (j, &low) in lows.iter().enumerate() {
        if let Some(r) = low {
            if lows[r as usize].is_none() {
                paired[r as usize] = true;
                intervals.push(PersistenceInterval {
                    birth: r,
                    death: Some(j as u32),
                });
            }
        }
    }

    for (r, &low) in lows.iter().enumerate() {
        if low.is_none() && !paired[r] {
            intervals.push(PersistenceInterval {
                birth: r as u32,
                death: None,
            });
        }
    }

    intervals.sort_unstable_by_key(|iv| iv.birth);
    intervals
}
