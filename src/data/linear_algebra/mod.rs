//! # Linear algebra primitives
//!
//! Problems solved by this crate are small, so everything is stored densely.
use crate::data::number_types::traits::Real;

pub mod matrix;

/// Inner product of two vectors of equal length.
pub fn inner_product<F: Real>(left: &[F], right: &[F]) -> F {
    debug_assert_eq!(left.len(), right.len());

    left.iter().zip(right).map(|(&l, &r)| l * r).sum()
}
