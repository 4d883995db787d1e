//! # Phase one
//!
//! Finding a basic feasible solution by minimizing the sum of the artificial variables.
use log::{debug, log_enabled, trace, warn, Level};

use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::{debug_assert_in_basic_feasible_solution_state, Tableau};
use crate::algorithm::two_phase::tableau::kind::artificial::Artificial;
use crate::data::number_types::traits::Real;

/// LP's can be either feasible (allowing at least one solution) or infeasible (allowing no
/// solutions).
///
/// If the problem is feasible, it can either have full rank, or be rank deficient.
#[derive(Debug, PartialEq)]
pub enum RankedFeasibilityResult<F> {
    /// The problem is feasible and the tableau holds a basic feasible solution without artificial
    /// variables, apart from those in redundant rows.
    Feasible {
        /// Whether the problem needs rows to be removed.
        rank: Rank,
        /// Tableau at the end of the first phase.
        tableau: Tableau<F, Artificial>,
    },
    /// The problem is not feasible.
    Infeasible,
}

/// A matrix or linear program either has full rank, or be rank deficient.
///
/// In case it is rank deficient, a sorted, deduplicated list of (row)indices should be provided,
/// that when removed, makes the matrix or linear program full rank.
#[derive(Debug, Eq, PartialEq)]
pub enum Rank {
    /// The matrix is full rank, no rows need to be removed.
    Full,
    /// The `Vec<usize>` is sorted and contains no duplicate values.
    Deficient(Vec<usize>),
}

/// Reduces the artificial cost of the basic feasible solution to zero, if possible. In doing so, a
/// basic feasible solution to the standard form linear program is found.
///
/// # Arguments
///
/// * `tableau`: Artificial tableau with a valid basis. This basis will typically consist of
/// artificial and slack variables.
///
/// # Return value
///
/// Whether the tableau allows a basic feasible solution without artificial variables.
pub fn primal<F, PR>(mut tableau: Tableau<F, Artificial>) -> RankedFeasibilityResult<F>
where
    F: Real,
    PR: PivotRule<F>,
{
    let mut rule = PR::new(&tableau);
    let mut nr_pivots = 0_usize;
    loop {
        debug_assert_in_basic_feasible_solution_state(&tableau);
        if log_enabled!(Level::Trace) {
            trace!("{}", tableau);
        }

        match rule.select_primal_pivot_column(&tableau) {
            Some((column_index, cost)) => {
                let column = tableau.generate_column(column_index);
                match tableau.select_primal_pivot_row(&column) {
                    Some(row_index) => {
                        trace!("Phase one pivot on ({}, {}), relative cost {}", row_index, column_index, cost);
                        let info = tableau.bring_into_basis(column_index, row_index);
                        rule.after_basis_update(&info);
                        nr_pivots += 1;
                    },
                    None => {
                        // The artificial objective is bounded from below by zero
                        warn!("No pivot row for column {} with relative cost {} in phase one", column_index, cost);
                        break;
                    },
                }
            },
            None => break,
        }
    }

    let objective = tableau.objective_function_value();
    debug!("Phase one finished after {} pivots with artificial cost {}", nr_pivots, objective);
    if tableau.configuration().is_positive(objective) {
        return RankedFeasibilityResult::Infeasible;
    }

    let rows_to_remove = remove_artificial_basis_variables(&mut tableau);
    let rank = if rows_to_remove.is_empty() {
        Rank::Full
    } else {
        Rank::Deficient(rows_to_remove)
    };

    RankedFeasibilityResult::Feasible { rank, tableau }
}

/// Removes all artificial variables from the tableau by making a basis change "at zero level", or
/// without change of cost of the current solution.
///
/// # Arguments
///
/// * `tableau`: Tableau to change the basis for.
///
/// # Return value
///
/// A `Vec` with indices of rows that are redundant, sorted.
fn remove_artificial_basis_variables<F: Real>(tableau: &mut Tableau<F, Artificial>) -> Vec<usize> {
    let mut rows_to_remove = Vec::new();

    for artificial in tableau.artificial_basis_columns() {
        // Artificial variables never reenter the basis, so it is still in the row it started in
        let pivot_row = tableau.pivot_row_from_artificial(artificial);
        debug_assert_eq!(tableau.basis_column_index_for_row(pivot_row), artificial);

        let pivot_column = (tableau.nr_artificial_variables()..tableau.nr_columns())
            .filter(|&j| !tableau.is_in_basis(j))
            .find(|&j| !tableau.configuration().is_zero(tableau.generate_element(pivot_row, j)));

        match pivot_column {
            Some(column) => {
                trace!("Artificial variable {} leaves the basis at zero level for column {}", artificial, column);
                tableau.bring_into_basis(column, pivot_row);
            },
            None => rows_to_remove.push(pivot_row),
        }
    }

    rows_to_remove.sort_unstable();
    rows_to_remove
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::algorithm::two_phase::matrix_provider::matrix_data::MatrixData;
    use crate::algorithm::two_phase::phase_one::{primal, Rank, RankedFeasibilityResult};
    use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, SteepestDescentAlongVariable};
    use crate::algorithm::two_phase::tableau::Tableau;
    use crate::algorithm::two_phase::tableau::kind::artificial::Artificial;
    use crate::configuration::Configuration;
    use crate::data::linear_program::general_form::LinearProgram;
    use crate::tests::problem_1;

    #[test]
    fn feasible() {
        let matrix_data = problem_1::matrix_data_form();
        let tableau = Tableau::<f64, Artificial>::new(&matrix_data, Configuration::default());
        match primal::<_, FirstProfitable>(tableau) {
            RankedFeasibilityResult::Feasible { rank, tableau } => {
                assert_eq!(rank, Rank::Full);
                assert!(tableau.artificial_basis_columns().is_empty());
                assert_abs_diff_eq!(tableau.objective_function_value(), 0_f64, epsilon = 1e-9);
            },
            RankedFeasibilityResult::Infeasible => panic!("The diet problem is feasible"),
        }
    }

    #[test]
    fn infeasible() {
        let program = LinearProgram::minimize(vec![1_f64])
            .greater_than(vec![1_f64], 5_f64)
            .less_than(vec![1_f64], 1_f64)
            .build()
            .unwrap();
        let matrix_data = MatrixData::from_program(&program);
        let tableau = Tableau::<f64, Artificial>::new(&matrix_data, Configuration::default());
        assert_eq!(primal::<_, SteepestDescentAlongVariable>(tableau), RankedFeasibilityResult::Infeasible);
    }

    #[test]
    fn redundant_row() {
        // The second equality is twice the first
        let program = LinearProgram::minimize(vec![1_f64, 1_f64])
            .equal_to(vec![1_f64, 1_f64], 2_f64)
            .equal_to(vec![2_f64, 2_f64], 4_f64)
            .build()
            .unwrap();
        let matrix_data = MatrixData::from_program(&program);
        let tableau = Tableau::<f64, Artificial>::new(&matrix_data, Configuration::default());
        match primal::<_, FirstProfitable>(tableau) {
            RankedFeasibilityResult::Feasible { rank, .. } => assert_eq!(rank, Rank::Deficient(vec![1])),
            RankedFeasibilityResult::Infeasible => panic!("Problem is feasible"),
        }
    }
}
