//! # Traits
//!
//! The simplex algorithm is defined over the ordered fields. Floating point numbers only
//! approximate such a field, which is why all comparisons in the algorithms go through a tolerance
//! (see `Configuration`).
use std::fmt::{Debug, Display};
use std::iter::Sum;

use num_traits::Float;

/// Floating point numbers that the solver and the geometry can work with.
pub trait Real: Float + From<f32> + Sum + Debug + Display + Send + Sync + 'static {
    /// Convert a literal into this type.
    ///
    /// Single precision literals are representable in all implementors without loss beyond the
    /// precision of the literal itself.
    fn literal(value: f32) -> Self {
        <Self as From<f32>>::from(value)
    }

    /// Whether two numbers differ by at most `tolerance`.
    fn is_close_to(self, other: Self, tolerance: Self) -> bool {
        (self - other).abs() <= tolerance
    }
}

impl Real for f64 {}
impl Real for f32 {}
