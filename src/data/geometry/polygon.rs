//! # Feasible region of a two dimensional program
//!
//! The region is computed by clipping the viewing extent by each of the half-planes that describe
//! the program, one at a time (Sutherland-Hodgman). Every vertex remembers where the edge that
//! leaves it came from, so that it is known afterwards whether the extent is part of the boundary.
use std::cmp::Ordering;

use itertools::Itertools;
use log::{debug, trace};

use crate::configuration::Configuration;
use crate::data::geometry::{Extent, HalfPlane, Point};
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::number_types::traits::Real;
use crate::io::error::GeometryError;

/// Feasible region of a two dimensional program, within the viewing extent.
#[derive(Clone, Debug, PartialEq)]
pub enum FeasibleRegion<F> {
    /// Nothing is feasible within the extent.
    ///
    /// The program might still be feasible outside of it.
    Empty,
    /// The region has no area: a single point, or the two end points of a segment.
    Degenerate(Vec<Point<F>>),
    /// The region has a positive area.
    Polygon(Polygon<F>),
}

impl<F: Real> FeasibleRegion<F> {
    /// All points that describe the region.
    pub fn vertices(&self) -> &[Point<F>] {
        match self {
            FeasibleRegion::Empty => &[],
            FeasibleRegion::Degenerate(points) => points,
            FeasibleRegion::Polygon(polygon) => polygon.vertices(),
        }
    }

    /// Whether nothing is feasible within the extent.
    pub fn is_empty(&self) -> bool {
        matches!(self, FeasibleRegion::Empty)
    }
}

/// A convex polygon with a positive area.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon<F> {
    /// At least three vertices, counter-clockwise.
    vertices: Vec<Point<F>>,
    /// Whether part of the boundary is formed by the extent.
    truncated: bool,
}

impl<F: Real> Polygon<F> {
    /// Vertices in counter-clockwise order.
    pub fn vertices(&self) -> &[Point<F>] {
        &self.vertices
    }

    /// Whether the region was cut off by the viewing extent.
    ///
    /// If so, the true feasible region extends beyond the extent; it might be unbounded.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Area, computed with the shoelace formula.
    pub fn area(&self) -> F {
        signed_area(&self.vertices).abs()
    }

    /// Whether a point lies inside the polygon or on its boundary, up to a tolerance.
    pub fn contains(&self, point: &Point<F>, tolerance: F) -> bool {
        self.vertices.iter()
            .circular_tuple_windows()
            .all(|(a, b)| {
                let cross = (b.x - a.x) * (point.y - a.y) - (b.y - a.y) * (point.x - a.x);
                cross >= -tolerance * a.distance(b)
            })
    }
}

/// Where the edge leaving a vertex comes from.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum EdgeSource {
    Extent,
    Constraint,
}

/// Compute the feasible region of a two dimensional program with the default configuration.
///
/// # Errors
///
/// If the program doesn't have exactly two variables.
pub fn feasible_polygon<F: Real>(
    program: &LinearProgram<F>,
    extent: &Extent<F>,
) -> Result<FeasibleRegion<F>, GeometryError> {
    feasible_polygon_with(program, extent, &Configuration::default())
}

/// Compute the feasible region of a two dimensional program.
///
/// Every inequality, both sides of every equality and every bound of the program is a half-plane
/// that the extent is clipped by.
///
/// # Errors
///
/// If the program doesn't have exactly two variables.
pub fn feasible_polygon_with<F: Real>(
    program: &LinearProgram<F>,
    extent: &Extent<F>,
    configuration: &Configuration<F>,
) -> Result<FeasibleRegion<F>, GeometryError> {
    let half_planes = half_planes(program)?;
    debug!("Clipping the extent by {} half-planes", half_planes.len());

    Ok(clip_all(&half_planes, extent, configuration.tolerance()))
}

/// The half-planes that together describe the feasible set of a two dimensional program.
///
/// # Errors
///
/// If the program doesn't have exactly two variables.
pub fn half_planes<F: Real>(program: &LinearProgram<F>) -> Result<Vec<HalfPlane<F>>, GeometryError> {
    if program.nr_variables() != 2 {
        return Err(GeometryError::NotTwoDimensional(program.nr_variables()));
    }

    let from_constraint = |coefficients: &[F], rhs| HalfPlane::new(coefficients[0], coefficients[1], rhs);
    let inequalities = program.inequalities().iter()
        .map(|constraint| from_constraint(constraint.coefficients(), constraint.rhs()));
    let equalities = program.equalities().iter()
        .flat_map(|constraint| {
            let half_plane = from_constraint(constraint.coefficients(), constraint.rhs());
            [half_plane, half_plane.opposite()]
        });
    let bounds = program.variables().iter()
        .enumerate()
        .flat_map(|(j, variable)| {
            let unit = |sign: F| if j == 0 { (sign, F::zero()) } else { (F::zero(), sign) };
            let lower = variable.lower_bound().map(|lower| {
                let (a, b) = unit(-F::one());
                HalfPlane::new(a, b, -lower)
            });
            let upper = variable.upper_bound().map(|upper| {
                let (a, b) = unit(F::one());
                HalfPlane::new(a, b, upper)
            });
            lower.into_iter().chain(upper)
        });

    Ok(inequalities.chain(equalities).chain(bounds).collect())
}

/// The part of the boundary line of a half-plane that lies within the extent.
///
/// Returns `None` when the line misses the extent or only touches it in a single point.
pub fn boundary_segment<F: Real>(
    half_plane: &HalfPlane<F>,
    extent: &Extent<F>,
    tolerance: F,
) -> Option<(Point<F>, Point<F>)> {
    if half_plane.normal_length() <= tolerance {
        return None;
    }

    let epsilon = tolerance * extent.scale();
    let on_line = clip(start(extent), half_plane, epsilon)
        .into_iter()
        .map(|(point, _)| point)
        .filter(|point| half_plane.signed_distance(point).abs() <= epsilon)
        .collect::<Vec<_>>();

    farthest_pair(&on_line).filter(|(a, b)| a.distance(b) > epsilon)
}

fn start<F: Real>(extent: &Extent<F>) -> Vec<(Point<F>, EdgeSource)> {
    extent.corners().into_iter().map(|corner| (corner, EdgeSource::Extent)).collect()
}

fn clip_all<F: Real>(
    half_planes: &[HalfPlane<F>],
    extent: &Extent<F>,
    tolerance: F,
) -> FeasibleRegion<F> {
    let epsilon = tolerance * extent.scale();

    let mut vertices = start(extent);
    for half_plane in half_planes {
        if half_plane.normal_length() <= tolerance {
            // The half-plane reads 0 <= c
            if half_plane.offset >= -tolerance {
                continue;
            } else {
                return FeasibleRegion::Empty;
            }
        }

        vertices = clip(vertices, half_plane, epsilon);
        trace!("{} vertices after clipping by {:?}", vertices.len(), half_plane);
        if vertices.is_empty() {
            return FeasibleRegion::Empty;
        }
    }

    classify(merge_close(vertices, epsilon), tolerance * extent.scale() * extent.scale())
}

/// One step of the Sutherland-Hodgman algorithm.
///
/// Points within `epsilon` of the boundary line are considered to be inside.
fn clip<F: Real>(
    vertices: Vec<(Point<F>, EdgeSource)>,
    half_plane: &HalfPlane<F>,
    epsilon: F,
) -> Vec<(Point<F>, EdgeSource)> {
    let distances = vertices.iter()
        .map(|(point, _)| half_plane.signed_distance(point))
        .collect::<Vec<_>>();

    let mut clipped = Vec::with_capacity(vertices.len() + 1);
    for i in 0..vertices.len() {
        let j = (i + 1) % vertices.len();
        let (current, source) = vertices[i];
        let (next, _) = vertices[j];
        let (d_current, d_next) = (distances[i], distances[j]);

        match (d_current <= epsilon, d_next <= epsilon) {
            (true, true) => {
                let along_boundary = d_current.abs() <= epsilon && d_next.abs() <= epsilon;
                let source = if along_boundary { EdgeSource::Constraint } else { source };
                clipped.push((current, source));
            },
            (true, false) => {
                clipped.push((current, source));
                clipped.push((intersection(&current, &next, d_current, d_next), EdgeSource::Constraint));
            },
            (false, true) => {
                clipped.push((intersection(&current, &next, d_current, d_next), source));
            },
            (false, false) => (),
        }
    }

    clipped
}

fn intersection<F: Real>(from: &Point<F>, to: &Point<F>, d_from: F, d_to: F) -> Point<F> {
    let t = (d_from / (d_from - d_to)).max(F::zero()).min(F::one());
    from.interpolate(to, t)
}

/// Remove consecutive vertices that are within `epsilon` from each other, including the last and
/// the first.
///
/// Of two merged vertices, the edge source of the later one is kept: the edge leaving the earlier
/// one has no length.
fn merge_close<F: Real>(
    vertices: Vec<(Point<F>, EdgeSource)>,
    epsilon: F,
) -> Vec<(Point<F>, EdgeSource)> {
    let mut merged: Vec<(Point<F>, EdgeSource)> = Vec::with_capacity(vertices.len());
    for (point, source) in vertices {
        match merged.last_mut() {
            Some((last, last_source)) if last.distance(&point) <= epsilon => {
                *last = point;
                *last_source = source;
            },
            _ => merged.push((point, source)),
        }
    }
    while merged.len() > 1 && merged[0].0.distance(&merged[merged.len() - 1].0) <= epsilon {
        merged.pop();
    }

    merged
}

fn classify<F: Real>(vertices: Vec<(Point<F>, EdgeSource)>, area_tolerance: F) -> FeasibleRegion<F> {
    let points = vertices.iter().map(|&(point, _)| point).collect::<Vec<_>>();

    match points.len() {
        0 => FeasibleRegion::Empty,
        1 => FeasibleRegion::Degenerate(points),
        _ if signed_area(&points).abs() <= area_tolerance => match farthest_pair(&points) {
            Some((a, b)) => FeasibleRegion::Degenerate(vec![a, b]),
            None => FeasibleRegion::Degenerate(points),
        },
        _ => {
            let truncated = vertices.iter().any(|&(_, source)| source == EdgeSource::Extent);
            FeasibleRegion::Polygon(Polygon { vertices: points, truncated })
        },
    }
}

fn farthest_pair<F: Real>(points: &[Point<F>]) -> Option<(Point<F>, Point<F>)> {
    points.iter()
        .tuple_combinations()
        .max_by(|(a, b), (c, d)| a.distance(b).partial_cmp(&c.distance(d)).unwrap_or(Ordering::Equal))
        .map(|(a, b)| (*a, *b))
}

fn signed_area<F: Real>(points: &[Point<F>]) -> F {
    let twice = points.iter()
        .circular_tuple_windows()
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum::<F>();

    twice / F::literal(2_f32)
}
