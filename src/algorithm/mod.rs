//! # Algorithms
//!
//! Linear programs are brought into standard form and solved with the two phase Simplex method.
use log::debug;

use crate::algorithm::two_phase::matrix_provider::matrix_data::MatrixData;
use crate::algorithm::two_phase::matrix_provider::MatrixProvider;
use crate::algorithm::two_phase::strategy::pivot_rule::{DantzigWithBlandFallback, PivotRule};
use crate::configuration::Configuration;
use crate::data::linear_program::elements::LinearProgramType;
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::Real;

pub mod two_phase;
pub mod utilities;

/// A problem formulation of which a relaxation can be solved.
///
/// In the case of linear programming without integer variables, the relaxation is the problem
/// itself.
pub trait SolveRelaxation<F: Real>: MatrixProvider<F> {
    /// Solve the relaxed version of this problem.
    ///
    /// # Return value
    ///
    /// Whether the problem is feasible, and if so, a value for each column if the problem is
    /// bounded.
    fn solve_relaxation<PR: PivotRule<F>>(&self, configuration: &Configuration<F>) -> OptimizationResult<F>;
}

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm.
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq)]
pub enum OptimizationResult<F> {
    Infeasible,
    /// A value for each column of the `MatrixProvider` that was solved.
    FiniteOptimum(Vec<F>),
    Unbounded,
}

/// Solve a linear program.
///
/// The program is transformed into standard form, solved with the default pivot rule and the
/// solution is translated back to the variables of the program.
///
/// # Arguments
///
/// * `program`: Validated linear program with any number of variables.
/// * `configuration`: Tolerance and anti-cycling settings.
///
/// # Return value
///
/// The optimal solution with its objective value in the direction of the program, or the reason
/// why there is none.
pub fn solve<F: Real>(program: &LinearProgram<F>, configuration: &Configuration<F>) -> LinearProgramType<F> {
    solve_with_rule::<_, DantzigWithBlandFallback>(program, configuration)
}

/// Solve a linear program with a specific pivot rule.
///
/// See `solve`.
pub fn solve_with_rule<F: Real, PR: PivotRule<F>>(
    program: &LinearProgram<F>,
    configuration: &Configuration<F>,
) -> LinearProgramType<F> {
    let matrix_data = MatrixData::from_program(program);
    debug!(
        "Solving a program with {} variables in standard form with {} rows and {} columns",
        program.nr_variables(), matrix_data.nr_rows(), matrix_data.nr_columns(),
    );

    let result = match matrix_data.solve_relaxation::<PR>(configuration) {
        OptimizationResult::FiniteOptimum(column_values) => {
            let point = matrix_data.reconstruct_solution(column_values);
            let objective_value = program.objective_value(&point);
            LinearProgramType::FiniteOptimum(Solution::new(objective_value, point, program.names()))
        },
        OptimizationResult::Infeasible => LinearProgramType::Infeasible,
        OptimizationResult::Unbounded => LinearProgramType::Unbounded,
    };
    debug!("Solved, status: {}", result.status());

    result
}
