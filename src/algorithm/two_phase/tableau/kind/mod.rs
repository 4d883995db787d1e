//! # Tableau types: artificial or not
//!
//! A tableau can contain artificial variables. They can be used to find a feasible solution in a
//! two-phase algorithm: the first phase finds a basic feasible solution, the second improves it.
//!
//! The `Tableau` type and algorithm logic in the parent modules is independent or whether a tableau
//! contains artificial variables, or not. This module enables those abstractions.
pub mod artificial;
pub mod non_artificial;

/// The tableau type provides two different ways for the `Tableau` to function, depending on whether
/// any artificial variables are included in the problem.
pub trait Kind {
    /// Index of the first column that is not artificial.
    ///
    /// Artificial variables always have the lowest column indices. Pivot rules only consider the
    /// columns from this index onwards, such that artificial variables never reenter the basis.
    fn start_index(&self) -> usize;
}
