//! # Configuration
//!
//! Numerical settings shared by the solver and the geometry.
use crate::data::number_types::traits::Real;

/// Settings for a solve or geometry computation.
///
/// The defaults are sensible for problems with coefficients of moderate magnitude; see the
/// `with_*` methods to change them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Configuration<F> {
    /// Absolute tolerance for comparisons against zero.
    tolerance: F,
    /// After this many consecutive degenerate pivots, the simplex method switches to Bland's rule.
    ///
    /// When `None`, the limit is derived from the size of the problem.
    degenerate_pivot_limit: Option<usize>,
}

impl<F: Real> Default for Configuration<F> {
    fn default() -> Self {
        Self {
            tolerance: F::literal(1e-9),
            degenerate_pivot_limit: None,
        }
    }
}

impl<F: Real> Configuration<F> {
    /// Use a different absolute tolerance.
    ///
    /// # Arguments
    ///
    /// * `tolerance`: Nonnegative, finite value. Values within this distance of zero are treated
    /// as zero.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: F) -> Self {
        debug_assert!(tolerance >= F::zero() && tolerance.is_finite());

        self.tolerance = tolerance;
        self
    }

    /// Switch to Bland's rule after `limit` consecutive degenerate pivots.
    ///
    /// A limit of zero means that Bland's rule is used from the start.
    #[must_use]
    pub fn with_degenerate_pivot_limit(mut self, limit: usize) -> Self {
        self.degenerate_pivot_limit = Some(limit);
        self
    }

    /// The absolute tolerance.
    pub fn tolerance(&self) -> F {
        self.tolerance
    }

    /// Number of consecutive degenerate pivots that is tolerated before switching to Bland's rule.
    ///
    /// # Arguments
    ///
    /// * `nr_rows`: Number of rows of the tableau.
    /// * `nr_columns`: Number of columns of the tableau.
    pub fn degenerate_pivot_limit(&self, nr_rows: usize, nr_columns: usize) -> usize {
        self.degenerate_pivot_limit.unwrap_or(nr_rows + nr_columns)
    }

    /// Whether a value should be treated as zero.
    pub fn is_zero(&self, value: F) -> bool {
        value.abs() <= self.tolerance
    }

    /// Whether a value is positive by more than the tolerance.
    pub fn is_positive(&self, value: F) -> bool {
        value > self.tolerance
    }

    /// Whether a value is negative by more than the tolerance.
    pub fn is_negative(&self, value: F) -> bool {
        value < -self.tolerance
    }

    /// Replace values that are within the tolerance from zero by zero.
    pub fn snap(&self, value: F) -> F {
        if self.is_zero(value) {
            F::zero()
        } else {
            value
        }
    }
}
