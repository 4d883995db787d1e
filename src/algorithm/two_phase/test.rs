use approx::assert_abs_diff_eq;

use crate::algorithm::{OptimizationResult, SolveRelaxation, solve_with_rule};
use crate::algorithm::two_phase::matrix_provider::matrix_data::MatrixData;
use crate::algorithm::two_phase::strategy::pivot_rule::{DantzigWithBlandFallback, FirstProfitable, PivotRule, SteepestDescentAlongVariable};
use crate::configuration::Configuration;
use crate::data::linear_program::elements::{LinearProgramType, Status};
use crate::data::linear_program::general_form::LinearProgram;

fn optimum<PR: PivotRule<f64>>(program: &LinearProgram<f64>) -> (f64, Vec<f64>) {
    match solve_with_rule::<_, PR>(program, &Configuration::default()) {
        LinearProgramType::FiniteOptimum(solution) => (*solution.objective_value(), solution.point().to_vec()),
        other => panic!("Expected an optimum, got {:?}", other),
    }
}

#[test]
fn infeasible() {
    let program = LinearProgram::minimize(vec![1_f64])
        .greater_than(vec![1_f64], 5_f64)
        .less_than(vec![1_f64], 1_f64)
        .build()
        .unwrap();
    assert_eq!(program.solve(), LinearProgramType::Infeasible);
}

#[test]
fn infeasible_bounds_and_constraint() {
    let program = LinearProgram::minimize(vec![1_f64, 1_f64])
        .less_than(vec![1_f64, 1_f64], 1_f64)
        .bounds(0, Some(1_f64), Some(2_f64))
        .bounds(1, Some(1_f64), None)
        .build()
        .unwrap();
    assert_eq!(program.solve().status(), Status::Infeasible);
}

#[test]
fn unbounded() {
    let program = LinearProgram::minimize(vec![-1_f64])
        .build()
        .unwrap();
    assert_eq!(program.solve(), LinearProgramType::Unbounded);

    let data = MatrixData::from_program(&program);
    assert_eq!(
        data.solve_relaxation::<FirstProfitable>(&Configuration::default()),
        OptimizationResult::Unbounded,
    );
}

#[test]
fn unbounded_with_constraints() {
    // Unbounded in the direction (1, 1)
    let program = LinearProgram::maximize(vec![1_f64, 1_f64])
        .less_than(vec![1_f64, -1_f64], 2_f64)
        .greater_than(vec![1_f64, 1_f64], 1_f64)
        .build()
        .unwrap();
    assert_eq!(program.solve().status(), Status::Unbounded);
}

#[test]
fn free_variable() {
    // Minimize x subject to x >= -3 as a constraint, with x free
    let program = LinearProgram::minimize(vec![1_f64])
        .greater_than(vec![1_f64], -3_f64)
        .bounds(0, None, None)
        .build()
        .unwrap();
    let (value, point) = optimum::<DantzigWithBlandFallback>(&program);
    assert_abs_diff_eq!(value, -3_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(point[0], -3_f64, epsilon = 1e-9);
}

#[test]
fn shifted_lower_bound() {
    let program = LinearProgram::minimize(vec![2_f64, 3_f64])
        .less_than(vec![1_f64, 1_f64], 10_f64)
        .bounds(0, Some(1.5), None)
        .bounds(1, Some(-2_f64), None)
        .build()
        .unwrap();
    let (value, point) = optimum::<DantzigWithBlandFallback>(&program);
    assert_abs_diff_eq!(point[0], 1.5, epsilon = 1e-9);
    assert_abs_diff_eq!(point[1], -2_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(value, 3_f64 - 6_f64, epsilon = 1e-9);
}

#[test]
fn upper_bounds() {
    // Only an upper bound on the first variable, both bounds on the second
    let program = LinearProgram::maximize(vec![1_f64, 1_f64])
        .less_than(vec![1_f64, 2_f64], 10_f64)
        .bounds(0, None, Some(4_f64))
        .bounds(1, Some(1_f64), Some(2_f64))
        .build()
        .unwrap();
    let (value, point) = optimum::<DantzigWithBlandFallback>(&program);
    assert_abs_diff_eq!(point[0], 4_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(point[1], 2_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(value, 6_f64, epsilon = 1e-9);
}

#[test]
fn redundant_equalities() {
    let program = LinearProgram::minimize(vec![1_f64, 2_f64, 3_f64])
        .equal_to(vec![1_f64, 1_f64, 1_f64], 6_f64)
        .equal_to(vec![1_f64, -1_f64, 0_f64], 1_f64)
        .equal_to(vec![2_f64, 0_f64, 1_f64], 7_f64)
        .build()
        .unwrap();
    // The third equality is the sum of the first two
    for (value, point) in [
        optimum::<FirstProfitable>(&program),
        optimum::<SteepestDescentAlongVariable>(&program),
        optimum::<DantzigWithBlandFallback>(&program),
    ] {
        assert!(program.is_feasible(&point, 1e-9));
        // x = (3.5, 2.5, 0)
        assert_abs_diff_eq!(value, 8.5, epsilon = 1e-9);
    }
}

#[test]
fn maximize() {
    let program = LinearProgram::maximize(vec![3_f64, 2_f64])
        .less_than(vec![1_f64, 1_f64], 4_f64)
        .less_than(vec![1_f64, 3_f64], 6_f64)
        .bounds(0, Some(0_f64), Some(3_f64))
        .build()
        .unwrap();
    let (value, point) = optimum::<DantzigWithBlandFallback>(&program);
    assert_abs_diff_eq!(point[0], 3_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(point[1], 1_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(value, 11_f64, epsilon = 1e-9);
}

/// Beale's example, on which Dantzig's rule cycles when ties in the ratio test go to the lowest
/// basis column index.
fn beale() -> LinearProgram<f64> {
    LinearProgram::minimize(vec![-0.75, 20_f64, -0.5, 6_f64])
        .less_than(vec![0.25, -8_f64, -1_f64, 9_f64], 0_f64)
        .less_than(vec![0.5, -12_f64, -0.5, 3_f64], 0_f64)
        .less_than(vec![0_f64, 0_f64, 1_f64, 0_f64], 1_f64)
        .build()
        .unwrap()
}

#[test]
fn degenerate_cycling_example() {
    let program = beale();
    for (value, point) in [
        optimum::<FirstProfitable>(&program),
        optimum::<DantzigWithBlandFallback>(&program),
    ] {
        assert_abs_diff_eq!(value, -1.25, epsilon = 1e-9);
        assert!(program.is_feasible(&point, 1e-9));
    }
}

#[test]
fn bland_from_the_start() {
    let program = beale();
    let configuration = Configuration::default().with_degenerate_pivot_limit(0);
    let result = solve_with_rule::<_, DantzigWithBlandFallback>(&program, &configuration);
    assert_abs_diff_eq!(*result.solution().unwrap().objective_value(), -1.25, epsilon = 1e-9);
}

#[test]
fn idempotent() {
    let program = beale();
    assert_eq!(program.solve(), program.solve());
}

#[test]
fn larger_tolerance() {
    // The two constraints conflict by less than the tolerance
    let program = LinearProgram::minimize(vec![1_f64])
        .greater_than(vec![1_f64], 1_f64 + 1e-8)
        .less_than(vec![1_f64], 1_f64)
        .build()
        .unwrap();
    assert_eq!(program.solve().status(), Status::Infeasible);
    let configuration = Configuration::default().with_tolerance(1e-6);
    assert_eq!(program.solve_with(&configuration).status(), Status::Optimal);
}

#[test]
fn nearly_tied_ratios() {
    let program = LinearProgram::maximize(vec![1_f64])
        .less_than(vec![1_f64], 0.001 + 0.9e-9)
        .less_than(vec![1000_f64], 1_f64)
        .build()
        .unwrap();
    for (value, point) in [
        optimum::<FirstProfitable>(&program),
        optimum::<SteepestDescentAlongVariable>(&program),
        optimum::<DantzigWithBlandFallback>(&program),
    ] {
        assert!(program.is_feasible(&point, 1e-9));
        assert_abs_diff_eq!(value, 0.001, epsilon = 1e-12);
    }
}
