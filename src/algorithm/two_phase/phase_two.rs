//! # Phase two
//!
//! Improving a basic feasible solution until it is optimal.
use log::{debug, log_enabled, trace, Level};

use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::{debug_assert_in_basic_feasible_solution_state, Tableau};
use crate::algorithm::two_phase::tableau::kind::non_artificial::NonArtificial;
use crate::data::number_types::traits::Real;

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal <=> dual feasible <=> c >= 0)
/// - All constraint values need to be positive (primary feasibility)
///
/// # Return value
///
/// An `OptimizationResult` indicating whether or not the problem has a finite optimum. It cannot be
/// infeasible, as a feasible solution is needed to start using this method.
pub fn primal<F, PR>(tableau: &mut Tableau<F, NonArtificial>) -> OptimizationResult<F>
where
    F: Real,
    PR: PivotRule<F>,
{
    let mut rule = PR::new(tableau);
    let mut nr_pivots = 0_usize;
    let result = loop {
        debug_assert_in_basic_feasible_solution_state(tableau);
        if log_enabled!(Level::Trace) {
            trace!("{}", tableau);
        }

        match rule.select_primal_pivot_column(tableau) {
            Some((column_index, cost)) => {
                let column = tableau.generate_column(column_index);
                match tableau.select_primal_pivot_row(&column) {
                    Some(row_index) => {
                        trace!("Phase two pivot on ({}, {}), relative cost {}", row_index, column_index, cost);
                        let info = tableau.bring_into_basis(column_index, row_index);
                        rule.after_basis_update(&info);
                        nr_pivots += 1;
                    },
                    None => {
                        debug!("Column {} has no positive entries, the problem is unbounded", column_index);
                        break OptimizationResult::Unbounded;
                    },
                }
            },
            None => break OptimizationResult::FiniteOptimum(tableau.current_bfs()),
        }
    };
    debug!("Phase two finished after {} pivots", nr_pivots);

    result
}
