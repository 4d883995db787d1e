use approx::assert_abs_diff_eq;

use planar_lp::configuration::Configuration;
use planar_lp::data::geometry::Extent;
use planar_lp::data::geometry::polygon::{feasible_polygon, FeasibleRegion};
use planar_lp::data::linear_program::elements::{LinearProgramType, Objective};
use planar_lp::data::linear_program::general_form::LinearProgram;

use super::{brute_force, programs, BOX};

#[test]
fn optimum_matches_brute_force() {
    let mut nr_feasible = 0;
    for program in programs() {
        match (program.solve(), brute_force(&program, 1e-7)) {
            (LinearProgramType::FiniteOptimum(solution), Some(expected)) => {
                assert_abs_diff_eq!(*solution.objective_value(), expected, epsilon = 1e-6);
                nr_feasible += 1;
            },
            (LinearProgramType::Infeasible, None) => {},
            (result, expected) => panic!("{}\nsolver: {:?}, brute force: {:?}", program, result, expected),
        }
    }
    assert!(nr_feasible > 0);
}

#[test]
fn optimal_points_are_feasible() {
    for program in programs() {
        if let LinearProgramType::FiniteOptimum(solution) = program.solve() {
            assert!(program.is_feasible(solution.point(), 1e-7), "{}\n{:?}", program, solution.point());
            assert_abs_diff_eq!(
                *solution.objective_value(),
                program.objective_value(solution.point()),
                epsilon = 1e-9,
            );
        }
    }
}

#[test]
fn optimum_is_a_vertex_of_the_region() {
    // The window contains the box, so no region is truncated by it
    let extent = Extent::new(-1_f64, BOX + 1_f64, -1_f64, BOX + 1_f64).unwrap();
    for program in programs() {
        let region = feasible_polygon(&program, &extent).unwrap();
        match program.solve() {
            LinearProgramType::FiniteOptimum(solution) => {
                assert!(!region.is_empty());
                let values = region.vertices().iter().map(|vertex| program.objective_value(&[vertex.x, vertex.y]));
                let best = match program.direction() {
                    Objective::Minimize => values.fold(f64::INFINITY, f64::min),
                    Objective::Maximize => values.fold(f64::NEG_INFINITY, f64::max),
                };
                assert_abs_diff_eq!(*solution.objective_value(), best, epsilon = 1e-6);
                if let FeasibleRegion::Polygon(polygon) = &region {
                    assert!(!polygon.is_truncated());
                }
            },
            LinearProgramType::Infeasible => assert!(region.is_empty(), "{}\n{:?}", program, region),
            LinearProgramType::Unbounded => panic!("All programs are bounded"),
        }
    }
}

#[test]
fn idempotent() {
    for program in programs().step_by(7) {
        assert_eq!(program.solve(), program.solve());
    }
}

#[test]
fn same_optimum_with_bland() {
    let bland = Configuration::default().with_degenerate_pivot_limit(0);
    for program in programs().step_by(5) {
        match (program.solve(), program.solve_with(&bland)) {
            (LinearProgramType::FiniteOptimum(first), LinearProgramType::FiniteOptimum(second)) => {
                assert_abs_diff_eq!(*first.objective_value(), *second.objective_value(), epsilon = 1e-9);
            },
            (first, second) => assert_eq!(first.status(), second.status()),
        }
    }
}

#[test]
fn three_variables() {
    // Minimize x + 2 y + 3 z subject to x + y + z >= 1 and x <= 0.25, optimum at (0.25, 0.75, 0)
    let program = LinearProgram::minimize(vec![1_f64, 2_f64, 3_f64])
        .greater_than(vec![1_f64, 1_f64, 1_f64], 1_f64)
        .bounds(0, Some(0_f64), Some(0.25))
        .build()
        .unwrap();
    let solution = program.solve().solution().cloned().unwrap();
    assert_abs_diff_eq!(*solution.objective_value(), 1.75, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.point()[0], 0.25, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.point()[1], 0.75, epsilon = 1e-9);
}
