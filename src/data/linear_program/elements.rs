//! # Building blocks to describe linear programs.
use std::fmt;

use enum_map::Enum;

use crate::data::linear_program::solution::Solution;

/// A `Constraint` is a type of (in)equality.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConstraintType {
    Equal,
    Greater,
    Less,
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ConstraintType::Equal => "=",
            ConstraintType::Greater => ">=",
            ConstraintType::Less => "<=",
        })
    }
}

/// Direction of a bound.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BoundDirection {
    /// In the case of a variable, x >= b.
    Lower,
    /// In the case of a variable, x <= b.
    Upper,
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Objective {
    Maximize,
    #[default]
    Minimize,
}

/// After the second phase, either an optimum is found or the problem is determined to be unbounded.
///
/// Only the `FiniteOptimum` variant carries a point, so a result that is not optimal can't be
/// mistaken for one that is.
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq)]
pub enum LinearProgramType<F> {
    FiniteOptimum(Solution<F>),
    Infeasible,
    Unbounded,
}

impl<F> LinearProgramType<F> {
    /// The outcome without the solution.
    pub fn status(&self) -> Status {
        match self {
            LinearProgramType::FiniteOptimum(_) => Status::Optimal,
            LinearProgramType::Infeasible => Status::Infeasible,
            LinearProgramType::Unbounded => Status::Unbounded,
        }
    }

    /// The solution, if an optimum was found.
    pub fn solution(&self) -> Option<&Solution<F>> {
        match self {
            LinearProgramType::FiniteOptimum(solution) => Some(solution),
            LinearProgramType::Infeasible | LinearProgramType::Unbounded => None,
        }
    }
}

/// Tag of a `LinearProgramType`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Status {
    Optimal,
    Infeasible,
    Unbounded,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Status::Optimal => "optimal",
            Status::Infeasible => "infeasible",
            Status::Unbounded => "unbounded",
        })
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::elements::{LinearProgramType, Status};
    use crate::data::linear_program::solution::Solution;

    #[test]
    fn status() {
        let optimal = LinearProgramType::FiniteOptimum(Solution::new(1_f64, vec![1_f64], vec!["x".to_string()]));
        assert_eq!(optimal.status(), Status::Optimal);
        assert!(optimal.solution().is_some());

        let infeasible = LinearProgramType::<f64>::Infeasible;
        assert_eq!(infeasible.status(), Status::Infeasible);
        assert!(infeasible.solution().is_none());
        assert_eq!(LinearProgramType::<f64>::Unbounded.status().to_string(), "unbounded");
    }
}
