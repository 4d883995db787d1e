//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the simplex algorithm. The
//! algorithm is implemented as described in chapters 2 and 4 of Combinatorial Optimization, a book
//! by Christos H. Papadimitriou and Kenneth Steiglitz.
use log::debug;

use crate::algorithm::{OptimizationResult, SolveRelaxation};
use crate::algorithm::two_phase::matrix_provider::MatrixProvider;
use crate::algorithm::two_phase::phase_one::{Rank, RankedFeasibilityResult};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::kind::artificial::Artificial;
use crate::algorithm::two_phase::tableau::kind::non_artificial::NonArtificial;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::configuration::Configuration;
use crate::data::number_types::traits::Real;

pub mod matrix_provider;
pub mod phase_one;
pub mod phase_two;
pub mod strategy;
pub mod tableau;

#[cfg(test)]
mod test;

impl<F, MP> SolveRelaxation<F> for MP
where
    F: Real,
    MP: MatrixProvider<F> + PartialInitialBasis,
{
    fn solve_relaxation<PR: PivotRule<F>>(&self, configuration: &Configuration<F>) -> OptimizationResult<F> {
        let artificial_tableau = Tableau::<F, Artificial>::new(self, *configuration);

        match phase_one::primal::<F, PR>(artificial_tableau) {
            RankedFeasibilityResult::Feasible { rank, tableau } => {
                let rows_to_remove = match rank {
                    Rank::Full => Vec::new(),
                    Rank::Deficient(rows) => {
                        debug!("Removing {} redundant rows: {:?}", rows.len(), rows);
                        rows
                    },
                };
                let mut non_artificial = Tableau::<F, NonArtificial>::from_artificial(
                    tableau,
                    &rows_to_remove,
                    self,
                );
                phase_two::primal::<F, PR>(&mut non_artificial)
            },
            RankedFeasibilityResult::Infeasible => OptimizationResult::Infeasible,
        }
    }
}

/// A few basis columns are already present in the problem.
///
/// Sometimes, a few variables (like positive slack variables) are available that result in less
/// artificial variables being needed.
pub trait PartialInitialBasis {
    /// Return the indices of all positive slack variables.
    ///
    /// This is used to find a basic feasible solution faster using the two phase method.
    ///
    /// # Return value
    ///
    /// Collection of tuples with row and column index of (positive) slack coefficients.
    fn pivot_element_indices(&self) -> Vec<(usize, usize)>;

    /// How many positive slacks there are in the problem.
    ///
    /// Is equal to the length of the value returned by `pivot_element_indices`.
    fn nr_initial_elements(&self) -> usize;
}
