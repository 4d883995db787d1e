//! # Dense matrix
//!
//! Row major matrix with dimensions that are fixed at creation, apart from the explicit removal of
//! rows and trailing columns.
use std::ops::{Index, IndexMut};

use crate::algorithm::utilities::remove_indices;
use crate::data::number_types::traits::Real;

/// Uses a `Vec<Vec<F>>` as underlying data structure.
#[derive(Clone, Debug, PartialEq)]
pub struct Dense<F> {
    data: Vec<Vec<F>>,
    nr_columns: usize,
}

impl<F: Real> Dense<F> {
    /// Create a matrix with all values equal to zero.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            data: vec![vec![F::zero(); nr_columns]; nr_rows],
            nr_columns,
        }
    }

    /// Create a matrix from rows of equal length.
    ///
    /// # Arguments
    ///
    /// * `rows`: Row major data.
    /// * `nr_columns`: Length of each of the rows, needed in case there are no rows.
    pub fn from_rows(rows: Vec<Vec<F>>, nr_columns: usize) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == nr_columns));

        Self { data: rows, nr_columns }
    }

    /// All values in row `i`.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows());

        &self.data[i]
    }

    /// All values in column `j`, collected.
    pub fn column(&self, j: usize) -> Vec<F> {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(|row| row[j]).collect()
    }

    /// Divide all values in a row by the same value.
    pub fn divide_row(&mut self, i: usize, divisor: F) {
        debug_assert!(i < self.nr_rows());

        for value in &mut self.data[i] {
            *value = *value / divisor;
        }
    }

    /// Negate all values in a row.
    pub fn negate_row(&mut self, i: usize) {
        debug_assert!(i < self.nr_rows());

        for value in &mut self.data[i] {
            *value = -*value;
        }
    }

    /// Subtract a multiple of row `read_row` from row `write_row`.
    pub fn subtract_multiple_of_row(&mut self, read_row: usize, write_row: usize, factor: F) {
        debug_assert!(read_row < self.nr_rows());
        debug_assert!(write_row < self.nr_rows());
        debug_assert_ne!(read_row, write_row);

        let (read, write) = if read_row < write_row {
            let (head, tail) = self.data.split_at_mut(write_row);
            (&head[read_row], &mut tail[0])
        } else {
            let (head, tail) = self.data.split_at_mut(read_row);
            (&tail[0], &mut head[write_row])
        };

        for (target, &source) in write.iter_mut().zip(read.iter()) {
            *target = *target - factor * source;
        }
    }

    /// Remove a set of rows.
    ///
    /// # Arguments
    ///
    /// * `indices`: Sorted, deduplicated row indices.
    pub fn remove_rows(&mut self, indices: &[usize]) {
        remove_indices(&mut self.data, indices);
    }

    /// Remove the first `count` columns.
    pub fn remove_leading_columns(&mut self, count: usize) {
        debug_assert!(count <= self.nr_columns);

        for row in &mut self.data {
            row.drain(..count);
        }
        self.nr_columns -= count;
    }

    /// Apply a function to every value.
    pub fn map_in_place(&mut self, mut f: impl FnMut(F) -> F) {
        for value in self.data.iter_mut().flat_map(|row| row.iter_mut()) {
            *value = f(*value);
        }
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.data.len()
    }

    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}

impl<F> Index<(usize, usize)> for Dense<F> {
    type Output = F;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.data[i][j]
    }
}

impl<F> IndexMut<(usize, usize)> for Dense<F> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        &mut self.data[i][j]
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::matrix::Dense;

    fn matrix() -> Dense<f64> {
        Dense::from_rows(vec![
            vec![1_f64, 2_f64, 3_f64],
            vec![4_f64, 5_f64, 6_f64],
            vec![7_f64, 8_f64, 9_f64],
        ], 3)
    }

    #[test]
    fn row_operations() {
        let mut m = matrix();
        m.subtract_multiple_of_row(0, 1, 4_f64);
        assert_eq!(m.row(1), &[0_f64, -3_f64, -6_f64]);
        m.subtract_multiple_of_row(2, 0, 1_f64);
        assert_eq!(m.row(0), &[-6_f64, -6_f64, -6_f64]);
        m.divide_row(0, -6_f64);
        assert_eq!(m.row(0), &[1_f64, 1_f64, 1_f64]);
        m.negate_row(2);
        assert_eq!(m.column(2), vec![1_f64, -6_f64, -9_f64]);
    }

    #[test]
    fn shrinking() {
        let mut m = matrix();
        m.remove_rows(&[1]);
        assert_eq!(m.nr_rows(), 2);
        assert_eq!(m[(1, 0)], 7_f64);
        m.remove_leading_columns(2);
        assert_eq!(m, Dense::from_rows(vec![vec![3_f64], vec![9_f64]], 1));
    }

    #[test]
    fn zeros() {
        let mut m = Dense::<f64>::zeros(2, 2);
        m[(0, 1)] = 3_f64;
        m.map_in_place(|v| v + 1_f64);
        assert_eq!(m, Dense::from_rows(vec![vec![1_f64, 4_f64], vec![1_f64, 1_f64]], 2));
    }
}
