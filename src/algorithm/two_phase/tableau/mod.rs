//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//! The tableau is dense: all columns are stored relative to the current basis and updated with
//! every basis change.
use std::cmp::max;
use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::configuration::Configuration;
use crate::data::linear_algebra::matrix::Dense;
use crate::data::number_types::traits::Real;

pub mod kind;

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// It owns the data structures that describe the problem relative to the current basis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<F, K> {
    /// The constraint matrix relative to the current basis, `B^-1 A`.
    ///
    /// This attribute changes with a basis change.
    rows: Dense<F>,
    /// The current values of the basic variables, `B^-1 b`. Nonnegative.
    b: Vec<F>,
    /// Relative cost of each column, zero for the basic columns.
    relative_costs: Vec<F>,
    /// Value of the objective function at the current basic feasible solution.
    objective: F,

    /// Maps the rows to the column that is basic in that row.
    basis_indices: Vec<usize>,
    /// All columns currently in the basis.
    ///
    /// Could also be derived from `basis_indices`, but is here for faster reading and writing.
    basis_columns: HashSet<usize>,

    /// Tolerances used to compare values against zero.
    configuration: Configuration<F>,

    /// Whether this tableau has artificial variables (and is in the first phase of the two-phase
    /// algorithm) or not. See the `Kind` trait for more information.
    kind: K,
}

/// Information about a basis change that a pivot rule might use to update its state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BasisChangeComputationInfo<F> {
    /// Row in which the basis changed.
    pub pivot_row_index: usize,
    /// The column that entered the basis.
    pub pivot_column_index: usize,
    /// The column that left the basis.
    pub leaving_column_index: usize,
    /// Value of the entering variable after the basis change.
    ///
    /// When this is zero, the basis change was degenerate: the solution didn't move.
    pub step: F,
}

impl<F: Real> BasisChangeComputationInfo<F> {
    /// Whether the basic feasible solution is the same before and after the basis change.
    pub fn is_degenerate(&self) -> bool {
        self.step.is_zero()
    }
}

impl<F, K> Tableau<F, K>
where
    F: Real,
    K: kind::Kind,
{
    /// Brings a column into the basis by updating all rows, the relative costs and the data
    /// structures holding the collection of basis columns.
    ///
    /// Values that end up within the tolerance from zero are set to zero.
    ///
    /// # Arguments
    ///
    /// * `pivot_column_index`: Column to enter the basis, not yet in the basis.
    /// * `pivot_row_index`: Row whose basic column leaves the basis. The pivot element is not zero.
    ///
    /// # Return value
    ///
    /// A description of the basis change.
    pub fn bring_into_basis(
        &mut self,
        pivot_column_index: usize,
        pivot_row_index: usize,
    ) -> BasisChangeComputationInfo<F> {
        debug_assert!(pivot_column_index < self.nr_columns());
        debug_assert!(pivot_row_index < self.nr_rows());
        debug_assert!(!self.is_in_basis(pivot_column_index));

        let pivot_value = self.rows[(pivot_row_index, pivot_column_index)];
        debug_assert!(!pivot_value.is_zero());

        self.rows.divide_row(pivot_row_index, pivot_value);
        self.b[pivot_row_index] = self.configuration.snap(self.b[pivot_row_index] / pivot_value);
        let step = self.b[pivot_row_index];

        for row in (0..self.nr_rows()).filter(|&row| row != pivot_row_index) {
            let factor = self.rows[(row, pivot_column_index)];
            if !factor.is_zero() {
                self.rows.subtract_multiple_of_row(pivot_row_index, row, factor);
                self.b[row] = self.configuration.snap(self.b[row] - factor * step);
            }
        }

        let cost = self.relative_costs[pivot_column_index];
        self.objective = self.configuration.snap(self.objective + cost * step);
        for (j, relative_cost) in self.relative_costs.iter_mut().enumerate() {
            *relative_cost = *relative_cost - cost * self.rows[(pivot_row_index, j)];
        }

        let configuration = self.configuration;
        self.rows.map_in_place(|value| configuration.snap(value));
        self.relative_costs.iter_mut().for_each(|value| *value = configuration.snap(*value));

        let leaving_column_index = self.basis_indices[pivot_row_index];
        self.update_basis_indices(pivot_row_index, pivot_column_index, leaving_column_index);

        BasisChangeComputationInfo {
            pivot_row_index,
            pivot_column_index,
            leaving_column_index,
            step,
        }
    }

    /// Update the basis index.
    ///
    /// Removes the index of the variable leaving the basis from the `basis_columns` attribute,
    /// while inserting the entering variable index.
    fn update_basis_indices(
        &mut self,
        pivot_row: usize,
        pivot_column: usize,
        leaving_column: usize,
    ) {
        debug_assert!(pivot_column < self.nr_columns());
        debug_assert!(leaving_column < self.nr_columns());

        self.basis_indices[pivot_row] = pivot_column;
        let was_there = self.basis_columns.remove(&leaving_column);
        debug_assert!(was_there);
        let was_not_there = self.basis_columns.insert(pivot_column);
        debug_assert!(was_not_there);
    }

    /// Determine the row to pivot on.
    ///
    /// Determine the row to pivot on, given the column. This is the row with the minimal ratio
    /// between the current constraint vector and the column. Only entries larger than the
    /// tolerance are considered.
    ///
    /// Rows whose ratio is so close to the minimum that stepping by it keeps every value of `b`
    /// within the tolerance from nonnegative are tied. Among those, the row in which the basic
    /// column has the lowest index is chosen (Bland's anti cycling rule).
    ///
    /// # Arguments
    ///
    /// * `column`: Problem column with respect to the current basis with length `m`.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the problem is unbounded in the direction of
    /// this column.
    pub fn select_primal_pivot_row(&self, column: &[F]) -> Option<usize> {
        debug_assert_eq!(column.len(), self.nr_rows());

        // (row, ratio)
        let candidates = column.iter()
            .enumerate()
            .filter(|&(_, &xij)| self.configuration.is_positive(xij))
            .map(|(row, &xij)| (row, self.b[row] / xij))
            .collect::<Vec<_>>();
        let min_ratio = candidates.iter().map(|&(_, ratio)| ratio).reduce(F::min)?;
        let max_entry = candidates.iter().map(|&(row, _)| column[row]).fold(F::zero(), F::max);

        // Stepping by `ratio` lowers `b[i]` by at most `max_entry * (ratio - min_ratio)` below zero
        candidates.into_iter()
            .filter(|&(_, ratio)| (ratio - min_ratio) * max_entry <= self.configuration.tolerance())
            .min_by_key(|&(row, _)| self.basis_indices[row])
            .map(|(row, _)| row)
    }

    /// Calculates the relative cost of a column.
    ///
    /// # Arguments
    ///
    /// * `j`: Index of column to calculate the relative cost for, in range `0` through
    /// `self.nr_columns()`.
    ///
    /// # Return value
    ///
    /// The relative cost. Is zero for basis columns.
    pub fn relative_cost(&self, j: usize) -> F {
        debug_assert!(j < self.nr_columns());

        self.relative_costs[j]
    }

    /// Column of original problem with respect to the current basis.
    ///
    /// # Arguments
    ///
    /// * `j`: Column index of the variable, in range `0` until `self.nr_columns()`.
    ///
    /// # Return value
    ///
    /// `Vec` of size `m`.
    pub fn generate_column(&self, j: usize) -> Vec<F> {
        debug_assert!(j < self.nr_columns());

        self.rows.column(j)
    }

    /// Single element with respect to the current basis.
    pub fn generate_element(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns());

        self.rows[(i, j)]
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        debug_assert!(column < self.nr_columns());

        self.basis_columns.contains(&column)
    }

    /// Index of the column that is basic in a row.
    pub fn basis_column_index_for_row(&self, row: usize) -> usize {
        debug_assert!(row < self.nr_rows());

        self.basis_indices[row]
    }

    /// Get the current basic feasible solution.
    ///
    /// # Return value
    ///
    /// A value for every column, zero for all non basic columns.
    pub fn current_bfs(&self) -> Vec<F> {
        let mut solution = vec![F::zero(); self.nr_columns()];
        for (&column, &value) in self.basis_indices.iter().zip(&self.b) {
            solution[column] = value;
        }

        solution
    }

    /// Get the cost of the current solution.
    ///
    /// # Note
    ///
    /// This function works for both artificial and non-artificial tableaus.
    pub fn objective_function_value(&self) -> F {
        self.objective
    }

    /// Index of the first column that may enter the basis.
    pub fn start_index(&self) -> usize {
        self.kind.start_index()
    }

    /// Tolerances of this tableau.
    pub fn configuration(&self) -> &Configuration<F> {
        &self.configuration
    }

    /// Number of rows in the tableau.
    pub fn nr_rows(&self) -> usize {
        self.rows.nr_rows()
    }

    /// Number of columns in the tableau.
    ///
    /// This number includes any artificial variables.
    pub fn nr_columns(&self) -> usize {
        self.rows.nr_columns()
    }
}

/// Check whether the tableau currently has a valid basic feasible solution.
///
/// Only used for debug purposes.
pub fn debug_assert_in_basic_feasible_solution_state<F, K>(tableau: &Tableau<F, K>)
where
    F: Real,
    K: kind::Kind,
{
    // Checking basis_columns
    // Correct number of basis columns (uniqueness is implied because it's a set)
    debug_assert_eq!(tableau.basis_columns.len(), tableau.nr_rows());
    debug_assert_eq!(tableau.basis_indices.len(), tableau.nr_rows());

    // Basis columns are unit vectors with zero relative cost
    for (i, &j) in tableau.basis_indices.iter().enumerate() {
        debug_assert!(tableau.basis_columns.contains(&j));
        for row in 0..tableau.nr_rows() {
            let expected = if row == i { F::one() } else { F::zero() };
            debug_assert!(
                tableau.rows[(row, j)].is_close_to(expected, tableau.configuration.tolerance()),
                "Column {} is not equal to e_{}", j, i,
            );
        }
        debug_assert!(
            tableau.configuration.is_zero(tableau.relative_costs[j]),
            "Relative cost of column {} is not zero", j,
        );
    }

    // `b` >= 0
    for (i, &value) in tableau.b.iter().enumerate() {
        debug_assert!(
            !tableau.configuration.is_negative(value),
            "rhs (b) is not always nonnegative: at index {} we have {} < 0", i, value,
        );
    }
}

impl<F, K> Display for Tableau<F, K>
where
    F: Real,
    K: kind::Kind,
{
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "=== Tableau ===")?;
        let objective = self.objective.to_string();
        let cost = self.relative_costs.iter().map(ToString::to_string).collect::<Vec<_>>();
        let b = self.b.iter().map(ToString::to_string).collect::<Vec<_>>();
        let columns = (0..self.nr_columns())
            .map(|j| self.rows.column(j).iter().map(ToString::to_string).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        let row_counter_width = max("cost".len(), self.nr_rows().to_string().len());
        let column_width = columns.iter().enumerate().map(|(j, column)| {
            column.iter().map(String::len)
                .chain([j.to_string().len(), cost[j].len()])
                .max()
                .unwrap_or(1)
        }).collect::<Vec<_>>();
        let b_inner_width = b.iter().map(String::len).chain([objective.len(), 1]).max().unwrap_or(1);

        // Column counters
        write!(f, "{0:>width$} |", "", width = row_counter_width)?;
        write!(f, " {0:^width$} |", "b", width = b_inner_width)?;
        for (j, width) in column_width.iter().enumerate() {
            write!(f, " {0:^width$}", j, width = width)?;
        }
        writeln!(f)?;

        let total_width = (row_counter_width + 1) + 1 + (1 + b_inner_width + 1) + 1 +
            column_width.iter().map(|l| 1 + l).sum::<usize>();
        // Separator
        writeln!(f, "{}", "-".repeat(total_width))?;

        // Cost row
        write!(f, "{0:>width$} |", "cost", width = row_counter_width)?;
        write!(f, " {0:^width$} |", objective, width = b_inner_width)?;
        for (j, width) in column_width.iter().enumerate() {
            write!(f, " {0:^width$}", cost[j], width = width)?;
        }
        writeln!(f)?;

        // Separator
        writeln!(f, "{}", "-".repeat(total_width))?;

        // Row counter and row data
        for i in 0..self.nr_rows() {
            write!(f, "{0:>width$} |", i, width = row_counter_width)?;
            write!(f, " {0:^width$} |", b[i], width = b_inner_width)?;
            for (j, width) in column_width.iter().enumerate() {
                write!(f, " {0:^width$}", columns[j][i], width = width)?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        writeln!(f, "=== Basis Columns ===")?;
        let basis = self.basis_indices.iter().copied().enumerate().collect::<Vec<_>>();
        writeln!(f, "{:?}", basis)
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::algorithm::two_phase::matrix_provider::matrix_data::MatrixData;
    use crate::algorithm::two_phase::matrix_provider::MatrixProvider;
    use crate::algorithm::two_phase::tableau::kind::artificial::Artificial;
    use crate::algorithm::two_phase::tableau::kind::non_artificial::NonArtificial;
    use crate::algorithm::two_phase::tableau::Tableau;
    use crate::configuration::Configuration;
    use crate::data::linear_program::general_form::LinearProgram;
    use crate::tests::problem_2::{artificial_tableau_form, matrix_data_form, tableau_form};

    #[test]
    fn cost() {
        let matrix_data = matrix_data_form();
        let artificial_tableau = artificial_tableau_form(&matrix_data);
        // Only the equality row needs an artificial variable
        assert_eq!(artificial_tableau.objective_function_value(), 1_f64);

        let tableau = tableau_form(&matrix_data);
        assert_abs_diff_eq!(tableau.objective_function_value(), 22.5, epsilon = 1e-9);
    }

    #[test]
    fn relative_cost() {
        let matrix_data = matrix_data_form();
        let artificial_tableau = artificial_tableau_form(&matrix_data);
        assert_eq!(artificial_tableau.relative_cost(0), 0_f64);
        assert_eq!(artificial_tableau.relative_cost(1), -1_f64);
        assert_eq!(artificial_tableau.relative_cost(2), -1_f64);
        assert_eq!(artificial_tableau.relative_cost(3), 0_f64);

        // Basic columns have no relative cost
        let tableau = tableau_form(&matrix_data);
        assert_eq!(tableau.relative_cost(0), 0_f64);
        assert_eq!(tableau.relative_cost(1), 0_f64);
    }

    #[test]
    fn generate_column() {
        let matrix_data = matrix_data_form();
        let artificial_tableau = artificial_tableau_form(&matrix_data);
        // Artificial column
        assert_eq!(artificial_tableau.generate_column(0), vec![0_f64, 0_f64, 1_f64]);
        // First variable
        assert_eq!(artificial_tableau.generate_column(1), vec![0.05, 0.02, 1_f64]);
        assert_eq!(artificial_tableau.generate_element(1, 2), 0.01);
    }

    #[test]
    fn bring_into_basis() {
        let matrix_data = matrix_data_form();
        let mut artificial_tableau = artificial_tableau_form(&matrix_data);
        let column = 2;
        let column_data = artificial_tableau.generate_column(column);
        // Ratios 0.06 / 0.07, 0.015 / 0.01 and 1 / 1
        let row = artificial_tableau.select_primal_pivot_row(&column_data).unwrap();
        assert_eq!(row, 0);
        let info = artificial_tableau.bring_into_basis(column, row);

        assert!(artificial_tableau.is_in_basis(column));
        assert!(!artificial_tableau.is_in_basis(3));
        assert_eq!(info.leaving_column_index, 3);
        assert!(!info.is_degenerate());
        assert_abs_diff_eq!(info.step, 0.06 / 0.07, epsilon = 1e-12);
        assert_abs_diff_eq!(artificial_tableau.objective_function_value(), 1_f64 - 0.06 / 0.07, epsilon = 1e-12);
    }

    #[test]
    fn nearly_tied_ratios() {
        // Ratios 0.0010000009 and 0.001 differ by less than the tolerance, but stepping by the
        // first one would violate the second row by 9e-7
        let program = LinearProgram::maximize(vec![1_f64])
            .less_than(vec![1_f64], 0.001 + 0.9e-9)
            .less_than(vec![1000_f64], 1_f64)
            .build()
            .unwrap();
        let matrix_data = MatrixData::from_program(&program);
        let mut tableau = Tableau::<f64, Artificial>::new(&matrix_data, Configuration::default());
        assert_eq!(tableau.nr_artificial_variables(), 0);

        let column = tableau.generate_column(0);
        assert_eq!(tableau.select_primal_pivot_row(&column), Some(1));
        let info = tableau.bring_into_basis(0, 1);
        assert_abs_diff_eq!(info.step, 0.001, epsilon = 1e-15);
        assert!(tableau.current_bfs().iter().all(|&value| value >= 0_f64));
    }

    #[test]
    fn exact_ties_go_to_the_lowest_basis_column() {
        // Both rows have ratio 1, their slacks are columns 2 and 3
        let program = LinearProgram::maximize(vec![1_f64, 1_f64])
            .less_than(vec![2_f64, 0_f64], 2_f64)
            .less_than(vec![1_f64, 1_f64], 1_f64)
            .build()
            .unwrap();
        let matrix_data = MatrixData::from_program(&program);
        let tableau = Tableau::<f64, Artificial>::new(&matrix_data, Configuration::default());
        let column = tableau.generate_column(0);
        assert_eq!(tableau.select_primal_pivot_row(&column), Some(0));
        assert_eq!(tableau.select_primal_pivot_row(&[0_f64, -1_f64]), None);
    }

    #[test]
    fn bfs() {
        let matrix_data = matrix_data_form();
        let tableau = tableau_form(&matrix_data);
        let bfs = tableau.current_bfs();
        assert_eq!(bfs.len(), matrix_data.nr_columns());
        assert_abs_diff_eq!(bfs[0], 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(bfs[1], 0.5, epsilon = 1e-9);
    }

    #[test]
    fn display() {
        let matrix_data = matrix_data_form();
        let tableau: Tableau<f64, NonArtificial> = tableau_form(&matrix_data);
        let text = tableau.to_string();
        assert!(text.starts_with("=== Tableau ===\n"));
        assert!(text.contains("=== Basis Columns ==="));
    }
}
