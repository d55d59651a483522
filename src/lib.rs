//! # homr
//!
//! **Persistent-homology boundary-matrix reduction over GF(2).**
//!
//! homr reduces the sparse boundary matrix of a filtered simplicial complex
//! until every nonempty column has a unique lowest nonzero row, then reads
//! birth-death persistence intervals off the result.
//!
//! ## Why homr?
//!
//! - **Deterministic**: the reduced low array depends only on the input
//!   matrix, never on scheduling
//! - **Data-parallel**: collision rounds fan out across columns via rayon
//! - **Resumable**: bounded runs compose exactly, so a reduction can be
//!   stopped and resumed round by round
//! - **Value semantics**: every reduction returns a new state; partial
//!   states stay valid for inspection and export
//!
//! ## Quick Start
//!
//! ```
//! use homr::prelude::*;
//!
//! // Column 1 = {0}, column 2 = {0, 1}
//! let matrix = BoundaryMatrix::from_coo(&[1, 2, 2], &[0, 0, 1], 3)?;
//! let reduced = reduce(&matrix)?;
//!
//! assert_eq!(reduced.lows(), vec![None, Some(0), Some(1)]);
//! let intervals = persistence_intervals(&reduced);
//! assert_eq!(intervals[0].birth, 0);
//! # Ok::<(), homr::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): multi-threaded collision rounds
//! - `cli`: the `homr` command-line binary

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod intervals;
pub mod io;
pub mod matrix;
pub mod reduce;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::intervals::{persistence_intervals, PersistenceInterval};
    pub use crate::matrix::BoundaryMatrix;
    pub use crate::reduce::{reduce, reduce_bounded};
}
