//! # A solver and plotter backend for small linear programs
//!
//! Linear programs are solved using the two phase Simplex Method on a dense tableau, as described
//! in the book Combinatorial Optimization by Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! Programs in two variables can also be analysed geometrically: the feasible region is computed
//! by clipping a viewing window with the half-planes of the constraints, and objective iso-lines
//! can be generated for any target value. Drawing is left to an implementation of the
//! [`io::Renderer`] trait.
#![warn(missing_docs)]

pub mod algorithm;
pub mod configuration;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
