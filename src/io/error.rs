//! # Error reporting
//!
//! Malformed input is rejected before any computation starts. Infeasibility and unboundedness are
//! not errors, see `LinearProgramType`.
use thiserror::Error;

use crate::data::geometry::Axis;

/// A `LinearProgramError` is returned when a linear program is inconsistently described.
///
/// This error is not returned when the linear program is infeasible or unbounded. It is meant only
/// for descriptions of linear programs, and is never produced by the solver itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinearProgramError {
    /// The objective function has no coefficients.
    #[error("a linear program needs at least one variable")]
    NoVariables,
    /// A vector of coefficients doesn't have a value for each variable.
    #[error("{location} has {found} coefficients, but the program has {expected} variables")]
    DimensionMismatch {
        /// Which part of the program, e.g. "inequality 2".
        location: String,
        #[allow(missing_docs)]
        expected: usize,
        #[allow(missing_docs)]
        found: usize,
    },
    /// A coefficient, right hand side or bound is infinite or not a number.
    #[error("{0} is not a finite number")]
    NonFinite(String),
    /// The lower bound of a variable exceeds its upper bound.
    #[error("variable {variable} has lower bound {lower}, which exceeds its upper bound {upper}")]
    InvalidBounds {
        #[allow(missing_docs)]
        variable: String,
        #[allow(missing_docs)]
        lower: String,
        #[allow(missing_docs)]
        upper: String,
    },
    /// Bounds were given for a variable that doesn't exist.
    #[error("bounds given for variable {index}, but the program has {nr_variables} variables")]
    VariableIndex {
        #[allow(missing_docs)]
        index: usize,
        #[allow(missing_docs)]
        nr_variables: usize,
    },
    /// The number of variable names doesn't match the number of variables.
    #[error("{found} names given for {expected} variables")]
    NameCount {
        #[allow(missing_docs)]
        expected: usize,
        #[allow(missing_docs)]
        found: usize,
    },
}

/// Geometric computations are only defined for two dimensional programs inside a proper window.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// The program has a number of variables different from two.
    #[error("only programs in two variables can be drawn, this one has {0}")]
    NotTwoDimensional(usize),
    /// The viewing extent has no area or is not finite.
    #[error("the viewing extent should be finite with minima below maxima")]
    InvalidExtent,
    /// An iso-line target is infinite or not a number.
    #[error("iso-line target {0} is not a finite number")]
    NonFiniteTarget(String),
    /// The objective doesn't depend on the axis that an iso-line would be solved for.
    #[error("the objective has no {axis} component, so its iso-lines can't be expressed in {axis}")]
    DegenerateIsoLine {
        /// The dependent axis.
        axis: Axis,
    },
}

/// A scene could not be set up.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The program is malformed.
    #[error("invalid linear program: {0}")]
    Program(#[from] LinearProgramError),
    /// The program or the extent can't be drawn.
    #[error("can't draw the program: {0}")]
    Geometry(#[from] GeometryError),
}
