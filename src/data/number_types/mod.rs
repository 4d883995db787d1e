//! # Number types
//!
//! The algorithms in this crate are written for any floating point type satisfying the `Real`
//! trait, with `f64` being the one that is used in practice.
pub mod traits;
