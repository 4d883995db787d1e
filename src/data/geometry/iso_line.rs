//! # Objective iso-lines
//!
//! All points in the plane where the objective function has the same value lie on a line. These
//! are drawn to show in which direction the objective improves.
use crate::data::geometry::{Axis, Extent, Point};
use crate::data::number_types::traits::Real;
use crate::io::error::GeometryError;

/// The line `a x + b y = target`, parameterized by the free axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IsoLine<F> {
    target: F,
    /// Objective coefficients `(a, b)`.
    coefficients: (F, F),
    free_axis: Axis,
}

impl<F: Real> IsoLine<F> {
    /// Objective value along the line.
    pub fn target(&self) -> F {
        self.target
    }

    /// Axis along which the line is parameterized.
    pub fn free_axis(&self) -> Axis {
        self.free_axis
    }

    /// Value along the dependent axis, given a value along the free axis.
    ///
    /// For free axis `X` this is `y = (target - a x) / b`, for free axis `Y` it is
    /// `x = (target - b y) / a`.
    pub fn evaluate(&self, free_value: F) -> F {
        let (a, b) = self.coefficients;
        match self.free_axis {
            Axis::X => (self.target - a * free_value) / b,
            Axis::Y => (self.target - b * free_value) / a,
        }
    }

    /// The point on the line with the given value along the free axis.
    pub fn point(&self, free_value: F) -> Point<F> {
        Point::from_axis(self.free_axis, free_value, self.evaluate(free_value))
    }

    /// Points on the line for the given free axis values.
    ///
    /// Points that are not finite or that lie outside of the extent are left out, so the result
    /// might have fewer points than there are values. Points within `tolerance` times the extent's
    /// scale of the boundary are kept, so that endpoints on the boundary survive rounding.
    pub fn sample(&self, free_values: &[F], extent: &Extent<F>, tolerance: F) -> Vec<Point<F>> {
        let margin = tolerance * extent.scale();
        free_values.iter()
            .map(|&value| self.point(value))
            .filter(|point| point.is_finite() && extent.contains(point, margin))
            .collect()
    }
}

/// Create the iso-line of an objective function at a target value.
///
/// # Arguments
///
/// * `objective`: Coefficients `(a, b)` of a two dimensional objective function.
/// * `target`: Objective value `Z` along the line.
/// * `free_axis`: The axis that values are provided for when sampling the line.
///
/// # Errors
///
/// When the objective doesn't have two coefficients, when the target is not finite, or when the
/// coefficient of the dependent axis is zero: the iso-lines are then parallel to the dependent axis.
pub fn iso_line<F: Real>(objective: &[F], target: F, free_axis: Axis) -> Result<IsoLine<F>, GeometryError> {
    let coefficients = match *objective {
        [a, b] => (a, b),
        _ => return Err(GeometryError::NotTwoDimensional(objective.len())),
    };
    if !target.is_finite() {
        return Err(GeometryError::NonFiniteTarget(target.to_string()));
    }

    let dependent = match free_axis {
        Axis::X => coefficients.1,
        Axis::Y => coefficients.0,
    };
    if dependent.is_zero() {
        return Err(GeometryError::DegenerateIsoLine { axis: !free_axis });
    }

    Ok(IsoLine { target, coefficients, free_axis })
}

/// Create a family of iso-lines, one for each target value.
///
/// # Errors
///
/// See `iso_line`.
pub fn iso_lines<F: Real>(
    objective: &[F],
    targets: &[F],
    free_axis: Axis,
) -> Result<Vec<IsoLine<F>>, GeometryError> {
    targets.iter()
        .map(|&target| iso_line(objective, target, free_axis))
        .collect()
}
