//! # Non-Artificial Tableau
//!
//! Contains a tableau `Kind` type for tableaus without artificial variables and `Tableau` logic
//! that is only relevant in the second phase.
use std::collections::HashSet;

use crate::algorithm::two_phase::matrix_provider::MatrixProvider;
use crate::algorithm::two_phase::tableau::kind::artificial::Artificial;
use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::utilities::remove_indices;
use crate::data::linear_algebra::inner_product;
use crate::data::number_types::traits::Real;

/// The `Kind` in case the `Tableau` does not contain any artificial variables.
///
/// This `Tableau` variant should only be constructed with a known feasible basis.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NonArtificial;

impl Kind for NonArtificial {
    fn start_index(&self) -> usize {
        0
    }
}

impl<F: Real> Tableau<F, NonArtificial> {
    /// Create a `Tableau` from an artificial tableau.
    ///
    /// The artificial columns are dropped, as are the rows that were found to be redundant. The
    /// cost row is recomputed from the costs of the provider, relative to the basis that the first
    /// phase ended in.
    ///
    /// # Arguments
    ///
    /// * `tableau`: `Tableau` with a basic feasible solution without any artificial variables in
    /// the basis, apart from the ones in `rows_to_remove`.
    /// * `rows_to_remove`: Sorted indices of redundant rows.
    /// * `provider`: Original problem, that the artificial tableau was constructed from.
    ///
    /// # Return value
    ///
    /// `Tableau` with the same basis, but without artificial variables.
    pub fn from_artificial<MP: MatrixProvider<F>>(
        tableau: Tableau<F, Artificial>,
        rows_to_remove: &[usize],
        provider: &MP,
    ) -> Self {
        let nr_artificial = tableau.nr_artificial_variables();
        let Tableau {
            mut rows,
            mut b,
            mut basis_indices,
            configuration,
            ..
        } = tableau;

        rows.remove_rows(rows_to_remove);
        remove_indices(&mut b, rows_to_remove);
        remove_indices(&mut basis_indices, rows_to_remove);
        rows.remove_leading_columns(nr_artificial);
        debug_assert!(basis_indices.iter().all(|&column| column >= nr_artificial));

        for column in &mut basis_indices {
            *column -= nr_artificial;
        }
        let basis_columns = basis_indices.iter().copied().collect::<HashSet<_>>();

        let basis_costs = basis_indices.iter()
            .map(|&column| provider.cost_value(column))
            .collect::<Vec<_>>();
        let relative_costs = (0..rows.nr_columns())
            .map(|j| if basis_columns.contains(&j) {
                F::zero()
            } else {
                configuration.snap(provider.cost_value(j) - inner_product(&basis_costs, &rows.column(j)))
            })
            .collect();
        let objective = inner_product(&basis_costs, &b);

        Tableau {
            rows,
            b,
            relative_costs,
            objective,
            basis_indices,
            basis_columns,
            configuration,
            kind: NonArtificial,
        }
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::algorithm::two_phase::matrix_provider::MatrixProvider;
    use crate::algorithm::two_phase::tableau::debug_assert_in_basic_feasible_solution_state;
    use crate::algorithm::two_phase::tableau::kind::Kind;
    use crate::tests::problem_2::{matrix_data_form, tableau_form};

    #[test]
    fn from_artificial() {
        let matrix_data = matrix_data_form();
        let tableau = tableau_form(&matrix_data);
        assert_eq!(tableau.kind.start_index(), 0);
        assert_eq!(tableau.nr_columns(), matrix_data.nr_columns());
        assert_eq!(tableau.nr_rows(), 3);
        debug_assert_in_basic_feasible_solution_state(&tableau);

        // The only feasible point is (0.5, 0.5)
        assert!(tableau.is_in_basis(0));
        assert!(tableau.is_in_basis(1));
        assert_abs_diff_eq!(tableau.objective_function_value(), 22.5, epsilon = 1e-9);
    }
}
