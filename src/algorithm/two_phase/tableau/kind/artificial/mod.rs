//! # Artificial variables in the tableau
//!
//! Rows that don't have a slack variable with coefficient `+1` get an artificial variable, such
//! that the initial basis is the identity. The sum of the artificial variables is then minimized,
//! and if that sum can be made zero, a basic feasible solution of the original problem is found.
use std::collections::HashSet;

use log::trace;

use crate::algorithm::two_phase::matrix_provider::MatrixProvider;
use crate::algorithm::two_phase::PartialInitialBasis;
use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::configuration::Configuration;
use crate::data::linear_algebra::matrix::Dense;
use crate::data::number_types::traits::Real;

/// Tableaus with artificial variables.
///
/// Not necessarily every row has an artificial variable: slack variables of the provider are used
/// where possible (see `PartialInitialBasis`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Artificial {
    /// For each artificial variable, the row where it has its `1`.
    column_to_row: Vec<usize>,
}

impl Kind for Artificial {
    fn start_index(&self) -> usize {
        self.nr_artificial_variables()
    }
}

impl Artificial {
    /// How many artificial variables are in the tableau.
    ///
    /// This number can be zero, or any number through the number of rows.
    pub fn nr_artificial_variables(&self) -> usize {
        self.column_to_row.len()
    }

    /// At which row is the pivot from a specific artificial variable located?
    ///
    /// # Arguments
    ///
    /// * `artificial_index`: Index of artificial variable.
    ///
    /// # Returns
    ///
    /// Row index where the pivot is located.
    pub fn pivot_row_from_artificial(&self, artificial_index: usize) -> usize {
        debug_assert!(artificial_index < self.nr_artificial_variables());

        self.column_to_row[artificial_index]
    }
}

impl<F: Real> Tableau<F, Artificial> {
    /// Create a `Tableau` augmented with artificial variables.
    ///
    /// The initial basis consists of the slack variables that the provider offers and artificial
    /// variables in all other rows. The artificial variables have cost `1`, all other variables
    /// have cost `0`.
    ///
    /// # Arguments
    ///
    /// * `provider`: Problem in standard form with a nonnegative right hand side.
    /// * `configuration`: Tolerances.
    ///
    /// # Return value
    ///
    /// The `Tableau` with an initial basic feasible solution for the artificial problem.
    pub fn new<MP>(provider: &MP, configuration: Configuration<F>) -> Self
    where
        MP: MatrixProvider<F> + PartialInitialBasis,
    {
        let nr_rows = provider.nr_rows();

        let mut slack_for_row = vec![None; nr_rows];
        for (row, column) in provider.pivot_element_indices() {
            slack_for_row[row] = Some(column);
        }
        let column_to_row = (0..nr_rows)
            .filter(|&row| slack_for_row[row].is_none())
            .collect::<Vec<_>>();
        let nr_artificial = column_to_row.len();
        debug_assert_eq!(nr_artificial, nr_rows - provider.nr_initial_elements());

        // Artificial columns first, then the columns of the provider
        let nr_columns = nr_artificial + provider.nr_columns();
        let mut rows = Dense::zeros(nr_rows, nr_columns);
        for (artificial, &row) in column_to_row.iter().enumerate() {
            rows[(row, artificial)] = F::one();
        }
        for j in 0..provider.nr_columns() {
            for (i, value) in provider.column(j).into_iter().enumerate() {
                rows[(i, nr_artificial + j)] = value;
            }
        }
        let b = provider.constraint_values();

        let mut artificial_index = 0;
        let basis_indices = slack_for_row.iter()
            .map(|slack| match slack {
                Some(column) => nr_artificial + column,
                None => {
                    artificial_index += 1;
                    artificial_index - 1
                },
            })
            .collect::<Vec<_>>();
        let basis_columns = basis_indices.iter().copied().collect::<HashSet<_>>();

        // The cost row relative to the initial basis: artificial columns are basic and have cost 1
        let relative_costs = (0..nr_columns)
            .map(|j| if j < nr_artificial {
                F::zero()
            } else {
                -column_to_row.iter().map(|&row| rows[(row, j)]).sum::<F>()
            })
            .collect::<Vec<_>>();
        let objective = column_to_row.iter().map(|&row| b[row]).sum();

        trace!("Artificial tableau with {} artificial variables for {} rows", nr_artificial, nr_rows);

        Tableau {
            rows,
            b,
            relative_costs,
            objective,
            basis_indices,
            basis_columns,
            configuration,
            kind: Artificial { column_to_row },
        }
    }

    /// Number of artificial variables in this tableau.
    pub fn nr_artificial_variables(&self) -> usize {
        self.kind.nr_artificial_variables()
    }

    /// At which row is the pivot from a specific artificial variable located?
    pub fn pivot_row_from_artificial(&self, artificial_index: usize) -> usize {
        self.kind.pivot_row_from_artificial(artificial_index)
    }

    /// Extract information necessary to construct a `NonArtificial` tableau.
    ///
    /// # Returns
    ///
    /// The artificial variables (sorted) that are still in the basis.
    pub fn artificial_basis_columns(&self) -> Vec<usize> {
        let mut columns = self.basis_columns.iter()
            .copied()
            .filter(|&column| column < self.nr_artificial_variables())
            .collect::<Vec<_>>();
        columns.sort_unstable();
        columns
    }
}
