//! Column-sparse boundary matrices over GF(2)
//!
//! A boundary matrix encodes a filtered simplicial complex: column `j` holds
//! the row indices of the faces of simplex `j`, with rows and columns sharing
//! the filtration index space `[0, n)`. Arithmetic is over GF(2), so a column
//! is just a set of row indices and column addition is symmetric difference.
//!
//! # Representation
//!
//! Each column is a strictly increasing `Vec<u32>` of row indices. The "low"
//! of a column, the largest row index present, is the pivot the reduction
//! algorithm works with; reading it off the sorted column keeps it consistent
//! with the contents after every mutation.
//!
//! Matrices are built from coordinate arrays (see [`BoundaryMatrix::from_coo`])
//! and queried through the state views (`lows`, `nonzero_count`, `to_coo`,
//! `to_dense`).

mod coo;
mod core;
mod views;

pub use core::BoundaryMatrix;

pub(crate) use core::{symmetric_difference, try_with_capacity};
