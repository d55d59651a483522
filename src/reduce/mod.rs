//! Boundary matrix reduction
//!
//! Drives a [`BoundaryMatrix`](crate::matrix::BoundaryMatrix) to the reduced
//! form in which every nonempty column has a unique low, using only GF(2)
//! column additions.
//!
//! # Rounds
//!
//! The engine works in whole-matrix rounds:
//!
//! 1. **Ownership**: for every row value `r` currently serving as some
//!    column's low, the pivot owner of `r` is the LOWEST column index whose
//!    low is `r`. The lowest-index tie-break makes ownership a pure function
//!    of the state, independent of scheduling.
//! 2. **Elimination**: every nonempty column that is not the owner of its own
//!    low receives one addition of the owner column. All additions read the
//!    pre-round snapshot, so columns can be processed in parallel without
//!    races (owner columns are never written inside a round).
//! 3. **Barrier**: results are applied, lows follow the new contents, and
//!    ownership is recomputed for the next round.
//!
//! Each round strictly lowers (or empties) every column it touches, so the
//! fixpoint is reached in finitely many rounds, and the reduced low array
//! depends only on the input matrix: the round function is deterministic and
//! the underlying rewriting system is confluent, so any schedule, including a
//! serial left-to-right sweep, converges to the same lows.
//!
//! [`reduce_bounded`] exposes the round counter directly: a budget of `k`
//! runs at most `k` rounds, which makes partial reductions resumable and
//! exactly composable (`k1` rounds then `k2` rounds equals `k1 + k2` rounds).

mod engine;

pub use engine::{reduce, reduce_bounded};
