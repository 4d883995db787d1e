//! # Bundled problems
//!
//! Three small programs in two variables, each with a viewing window and iso-line values that
//! show how the objective changes around the optimum.
use crate::data::geometry::{Axis, Extent};
use crate::data::linear_program::general_form::LinearProgram;
use crate::io::error::SceneError;
use crate::io::Scene;

/// Diet problem.
///
/// Food `A` costs 12 and food `B` costs 8 per unit. Three nutrients have a minimum requirement,
/// `A` and `B` contain `(2, 3)`, `(4, 3)` and `(7, 6)` units of them. Minimize the cost of a diet
/// that meets the requirements of `30`, `50` and `60` units.
///
/// # Errors
///
/// Never for this data, the result type comes from the validation of the program.
pub fn diet() -> Result<Scene<f64>, SceneError> {
    let program = LinearProgram::minimize(vec![12_f64, 8_f64])
        .greater_than(vec![2_f64, 3_f64], 30_f64)
        .greater_than(vec![4_f64, 3_f64], 50_f64)
        .greater_than(vec![7_f64, 6_f64], 60_f64)
        .names(["A", "B"])
        .build()?;
    let extent = Extent::new(0_f64, 20_f64, 0_f64, 20_f64)?;

    Ok(Scene::new("diet", program, extent)?
        .with_iso_lines(vec![120_f64, 130_f64, 133_f64, 150_f64, 180_f64, 200_f64], Axis::X))
}

/// Mixture problem.
///
/// Fractions `X` and `Y` of two ingredients that cost 25 and 20 are mixed. The mixture can
/// contain at most 6% of one component and 1.5% of another, the ingredients contain `(5%, 7%)`
/// and `(2%, 1%)` of them. Only a single mixture meets both requirements.
///
/// # Errors
///
/// Never for this data, the result type comes from the validation of the program.
pub fn mixture() -> Result<Scene<f64>, SceneError> {
    let program = LinearProgram::minimize(vec![25_f64, 20_f64])
        .less_than(vec![0.05, 0.07], 0.06)
        .less_than(vec![0.02, 0.01], 0.015)
        .equal_to(vec![1_f64, 1_f64], 1_f64)
        .names(["X", "Y"])
        .build()?;
    let extent = Extent::new(0_f64, 1_f64, 0_f64, 1_f64)?;

    Ok(Scene::new("mixture", program, extent)?
        .with_iso_lines(vec![20_f64, 22.5, 25_f64, 27.5, 30_f64], Axis::X))
}

/// Investment problem.
///
/// A budget of 10000 is divided over stocks `S` with a return of 10 and bonds `B` with a return
/// of 8. At least 4000 goes to bonds, and the amount in bonds is between three and nine times the
/// amount in stocks. Maximize the return.
///
/// # Errors
///
/// Never for this data, the result type comes from the validation of the program.
pub fn investment() -> Result<Scene<f64>, SceneError> {
    let program = LinearProgram::maximize(vec![10_f64, 8_f64])
        .less_than(vec![-1_f64, -1_f64], -10_000_f64)
        .less_than(vec![3_f64, -1_f64], 0_f64)
        .less_than(vec![-9_f64, 1_f64], 0_f64)
        .less_than(vec![0_f64, -1_f64], -4_000_f64)
        .equal_to(vec![1_f64, 1_f64], 10_000_f64)
        .names(["S", "B"])
        .build()?;
    let extent = Extent::new(0_f64, 4_000_f64, 0_f64, 10_000_f64)?;

    Ok(Scene::new("investment", program, extent)?
        .with_iso_lines(vec![60_000_f64, 70_000_f64, 80_000_f64, 85_000_f64, 90_000_f64], Axis::X))
}

/// All bundled problems.
///
/// # Errors
///
/// See the individual problems.
pub fn all() -> Result<Vec<Scene<f64>>, SceneError> {
    Ok(vec![diet()?, mixture()?, investment()?])
}
