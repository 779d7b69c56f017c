//! Finds every boundary cell of a rectangular grid on which a Hamiltonian path
//! from a fixed start cell can end.
//!
//! The search fans out one tokio task per branch, gives every branch its own
//! [`grid::PointSet`], and collects the exits reached into a sorted,
//! deduplicated list. See [`path::PathFinder`].

pub mod app;
pub mod grid;
pub mod path;
