//! # Representation of optimal solutions
//!
//! Once a linear program is fully solved, the values of the slack, artificial and substituted
//! variables are translated back into values of the variables of the program as it was provided.
use std::fmt;

use crate::data::number_types::traits::Real;

/// An optimal solution of a linear program.
///
/// Immutable once produced. The objective value is expressed in the direction of the original
/// problem, so for a maximization problem it is the maximum.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<F> {
    /// Value of the objective function for this solution.
    objective_value: F,
    /// Value of each variable, ordered by index.
    point: Vec<F>,
    /// Name of each variable, ordered by index.
    names: Vec<String>,
}

impl<F> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// # Arguments
    ///
    /// * `objective_value`: Objective function value at `point`.
    /// * `point`: Value of each variable.
    /// * `names`: Name of each variable, same length as `point`.
    pub fn new(objective_value: F, point: Vec<F>, names: Vec<String>) -> Self {
        debug_assert_eq!(point.len(), names.len());

        Self { objective_value, point, names }
    }

    /// Value of the objective function at the optimum.
    pub fn objective_value(&self) -> &F {
        &self.objective_value
    }

    /// The optimal point.
    pub fn point(&self) -> &[F] {
        &self.point
    }

    /// Value of a variable by name.
    pub fn value(&self, name: &str) -> Option<&F> {
        self.names.iter().position(|n| n == name).map(|j| &self.point[j])
    }

    /// (name, value) pairs of all variables.
    pub fn values(&self) -> impl Iterator<Item = (&str, &F)> {
        self.names.iter().map(String::as_str).zip(self.point.iter())
    }
}

impl<F: Real> fmt::Display for Solution<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = self.names.iter().map(String::len).max().unwrap_or(0);
        for (name, value) in self.values() {
            writeln!(f, "{name:>width$} = {value:.4}")?;
        }
        write!(f, "{:>width$} = {:.4}", "Z", self.objective_value, width = width)
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::solution::Solution;

    #[test]
    fn lookup() {
        let solution = Solution::new(3_f64, vec![1_f64, 0.5], vec!["A".to_string(), "B".to_string()]);
        assert_eq!(solution.value("B"), Some(&0.5));
        assert_eq!(solution.value("C"), None);
        assert_eq!(solution.values().count(), 2);
    }

    #[test]
    fn display() {
        let solution = Solution::new(3_f64, vec![1_f64, 0.5], vec!["A".to_string(), "BB".to_string()]);
        assert_eq!(solution.to_string(), " A = 1.0000\nBB = 0.5000\n Z = 3.0000");
    }
}
