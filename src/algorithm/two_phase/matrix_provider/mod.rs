//! # Representing linear programs for the Simplex method
//!
//! The Simplex method algorithms work on a tableau. This module contains structures that can
//! provide the data of the problem relative to the initial basis: a matrix in standard form, a
//! nonnegative right hand side and a cost row.
pub mod matrix_data;

/// Abstract interface for a matrix and constraint vector.
///
/// This is the data of the "problem relative to the initial basis"; that is, nothing in data
/// structures implementing this trait determines a basis. The implementors of this trait are
/// read-only, with basis changes the `Tableau` changes instead.
///
/// The indexing for the variables and constraints is as follows:
///
/// /                 || Vars of which we want a solution | Inequality slack vars | Bound slack vars |
/// ==================||==================================|=======================|==================|-----
/// Inequalities      ||            constants             |         +/- 1         |         0        || b |
/// ------------------||----------------------------------|-----------------------|------------------||---|
/// Equalities        ||            constants             |           0           |         0        || b |
/// ------------------||----------------------------------|-----------------------|------------------||---|
/// Bound constraints ||    constants (one 1 per row)     |           0           |          1       || b |
/// --------------------------------------------------------------------------------------------------
pub trait MatrixProvider<F> {
    /// Column of the problem.
    ///
    /// # Arguments
    ///
    /// * `j`: Column index.
    ///
    /// # Return value
    ///
    /// A dense vector of length `self.nr_rows()`.
    fn column(&self, j: usize) -> Vec<F>;

    /// Cost of a variable.
    ///
    /// # Arguments
    ///
    /// * `j`: Column index.
    ///
    /// # Return value
    ///
    /// Cost value, to be minimized.
    fn cost_value(&self, j: usize) -> F;

    /// Constraint values.
    ///
    /// Note: constraint values of both the constraints and bounds. All values are nonnegative.
    ///
    /// # Return value
    ///
    /// A dense vector of constraint values, often called `b` in mathematical notation.
    fn constraint_values(&self) -> Vec<F>;

    /// The total number of rows in the provided matrix.
    fn nr_rows(&self) -> usize;

    /// The total number of columns in the provided matrix. This does not include artificial
    /// variables; those are represented by the `Artificial` tableau kind.
    fn nr_columns(&self) -> usize;

    /// Reconstruct a solution.
    ///
    /// Not all variables that a provider presents to the solution algorithms are relevant for the
    /// final solution. Slacks are dropped, and substituted variables are translated back here.
    ///
    /// # Arguments
    ///
    /// * `column_values`: A solution for each of the variables that this provider presents.
    ///
    /// # Return value
    ///
    /// A value for each variable of the original problem.
    fn reconstruct_solution(&self, column_values: Vec<F>) -> Vec<F>;
}
