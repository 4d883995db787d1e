//! # Geometry of two dimensional linear programs
//!
//! Points, half-planes and the viewing window in which the feasible region and the objective
//! iso-lines are computed.
use std::fmt;
use std::ops::Not;

use enum_map::{enum_map, Enum, EnumMap};

use crate::data::number_types::traits::Real;
use crate::io::error::GeometryError;

pub mod iso_line;
pub mod polygon;

/// One of the two axes of the plane.
///
/// The first variable of a program is drawn along `X`, the second along `Y`.
#[allow(missing_docs)]
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Not for Axis {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
        })
    }
}

/// A point in the plane.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point<F> {
    pub x: F,
    pub y: F,
}

impl<F: Real> Point<F> {
    /// Create a new point.
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Create a point from the coordinate along one axis and the coordinate along the other.
    pub fn from_axis(axis: Axis, value: F, other: F) -> Self {
        match axis {
            Axis::X => Self::new(value, other),
            Axis::Y => Self::new(other, value),
        }
    }

    /// Coordinate along an axis.
    pub fn coordinate(&self, axis: Axis) -> F {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Self) -> F {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Point on the segment from `self` to `other`, at fraction `t` of the way.
    pub fn interpolate(&self, other: &Self, t: F) -> Self {
        Self::new(self.x + t * (other.x - self.x), self.y + t * (other.y - self.y))
    }

    /// Whether both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Real> fmt::Display for Point<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "({:.*}, {:.*})", precision, self.x, precision, self.y),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

/// The half-plane `a x + b y <= c`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HalfPlane<F> {
    /// Outward normal `(a, b)`.
    normal: Point<F>,
    /// Right hand side `c`.
    offset: F,
}

impl<F: Real> HalfPlane<F> {
    /// Create the half-plane `a x + b y <= c`.
    pub fn new(a: F, b: F, c: F) -> Self {
        Self { normal: Point::new(a, b), offset: c }
    }

    /// The same boundary line, the other side.
    #[must_use]
    pub fn opposite(&self) -> Self {
        Self::new(-self.normal.x, -self.normal.y, -self.offset)
    }

    /// Length of the normal vector.
    pub fn normal_length(&self) -> F {
        self.normal.x.hypot(self.normal.y)
    }

    /// Value of `a x + b y - c`, scaled by the length of the normal.
    ///
    /// Negative inside, positive outside, zero on the boundary. Should only be called when the
    /// normal is not zero.
    pub fn signed_distance(&self, point: &Point<F>) -> F {
        debug_assert!(self.normal_length() > F::zero());

        (self.normal.x * point.x + self.normal.y * point.y - self.offset) / self.normal_length()
    }
}

/// The rectangular window in which regions and lines are computed.
///
/// Unbounded regions are cut off at its border.
#[derive(Clone, Debug, PartialEq)]
pub struct Extent<F> {
    /// (minimum, maximum) per axis.
    limits: EnumMap<Axis, (F, F)>,
}

impl<F: Real> Extent<F> {
    /// Create a new extent.
    ///
    /// # Errors
    ///
    /// When a limit is not finite, or a minimum is not below the corresponding maximum.
    pub fn new(x_min: F, x_max: F, y_min: F, y_max: F) -> Result<Self, GeometryError> {
        let limits = enum_map! {
            Axis::X => (x_min, x_max),
            Axis::Y => (y_min, y_max),
        };
        let is_valid = limits.values()
            .all(|&(min, max)| min.is_finite() && max.is_finite() && min < max);

        if is_valid {
            Ok(Self { limits })
        } else {
            Err(GeometryError::InvalidExtent)
        }
    }

    /// Smallest coordinate along an axis.
    pub fn min(&self, axis: Axis) -> F {
        self.limits[axis].0
    }

    /// Largest coordinate along an axis.
    pub fn max(&self, axis: Axis) -> F {
        self.limits[axis].1
    }

    /// Size along an axis.
    pub fn width(&self, axis: Axis) -> F {
        self.max(axis) - self.min(axis)
    }

    /// Size of the largest side, used to scale tolerances.
    pub fn scale(&self) -> F {
        self.width(Axis::X).max(self.width(Axis::Y))
    }

    /// Corners in counter-clockwise order, starting at the lower left.
    pub fn corners(&self) -> [Point<F>; 4] {
        let (x_min, x_max) = self.limits[Axis::X];
        let (y_min, y_max) = self.limits[Axis::Y];

        [
            Point::new(x_min, y_min),
            Point::new(x_max, y_min),
            Point::new(x_max, y_max),
            Point::new(x_min, y_max),
        ]
    }

    /// Whether a point lies inside the extent, up to a tolerance.
    pub fn contains(&self, point: &Point<F>, tolerance: F) -> bool {
        self.limits.iter().all(|(axis, &(min, max))| {
            let value = point.coordinate(axis);
            value >= min - tolerance && value <= max + tolerance
        })
    }
}

/// `n` evenly spaced values from `start` to `end`, both included.
///
/// Rendering code can use this to create the samples for `IsoLine::sample`.
pub fn linspace<F: Real>(start: F, end: F, n: usize) -> Vec<F> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / F::literal((n - 1) as f32);
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * F::literal(i as f32) })
                .collect()
        },
    }
}
