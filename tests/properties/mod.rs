//! # Solver properties
//!
//! Programs in two variables are generated from a fixed table of constraints. Their optimum is
//! compared against brute force enumeration of the intersections of all boundary lines.
use planar_lp::data::linear_program::elements::Objective;
use planar_lp::data::linear_program::general_form::LinearProgram;

mod test;

/// Constraints `a x + b y <= c`.
const CONSTRAINTS: [[f64; 3]; 8] = [
    [1_f64, 1_f64, 8_f64],
    [-1_f64, -1_f64, -2_f64],
    [2_f64, -1_f64, 6_f64],
    [-1_f64, 2_f64, 7_f64],
    [1_f64, 3_f64, 15_f64],
    [-3_f64, -1_f64, -4_f64],
    [1_f64, -1_f64, -9_f64],
    [0_f64, 1_f64, 4_f64],
];

const OBJECTIVES: [[f64; 2]; 5] = [
    [1_f64, 1_f64],
    [-1_f64, 2_f64],
    [3_f64, -1_f64],
    [-2_f64, -5_f64],
    [1_f64, 0_f64],
];

/// Upper bound on both variables, such that each program is bounded.
const BOX: f64 = 10_f64;

/// All programs with three of the constraints, each objective and both directions.
fn programs() -> impl Iterator<Item = LinearProgram<f64>> {
    let n = CONSTRAINTS.len();
    (0..n).flat_map(move |i| ((i + 1)..n).flat_map(move |j| ((j + 1)..n).map(move |k| [i, j, k])))
        .flat_map(|rows| OBJECTIVES.iter().flat_map(move |objective| [true, false].map(|maximize| {
            let builder = if maximize {
                LinearProgram::maximize(objective.to_vec())
            } else {
                LinearProgram::minimize(objective.to_vec())
            };
            rows.iter()
                .fold(builder, |builder, &row| {
                    let [a, b, c] = CONSTRAINTS[row];
                    builder.less_than(vec![a, b], c)
                })
                .default_bounds(Some(0_f64), Some(BOX))
                .build()
                .unwrap()
        })))
}

/// Best objective value over all feasible intersections of two boundary lines, in the direction
/// of the program.
fn brute_force(program: &LinearProgram<f64>, tolerance: f64) -> Option<f64> {
    let mut lines = program.inequalities().iter()
        .map(|constraint| (constraint.coefficients()[0], constraint.coefficients()[1], constraint.rhs()))
        .collect::<Vec<_>>();
    lines.extend([(1_f64, 0_f64, 0_f64), (0_f64, 1_f64, 0_f64), (1_f64, 0_f64, BOX), (0_f64, 1_f64, BOX)]);

    let mut best: Option<f64> = None;
    for (i, &(a1, b1, c1)) in lines.iter().enumerate() {
        for &(a2, b2, c2) in &lines[(i + 1)..] {
            let determinant = a1 * b2 - a2 * b1;
            if determinant.abs() < 1e-12 {
                continue;
            }
            let point = [(c1 * b2 - c2 * b1) / determinant, (a1 * c2 - a2 * c1) / determinant];
            if program.is_feasible(&point, tolerance) {
                let value = program.objective_value(&point);
                best = Some(match best {
                    None => value,
                    Some(best) if program.direction() == Objective::Maximize => best.max(value),
                    Some(best) => best.min(value),
                });
            }
        }
    }

    best
}
