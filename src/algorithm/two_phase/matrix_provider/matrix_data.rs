//! # Standard form
//!
//! A `LinearProgram` in general form is transformed into the equality form `Ax = b, x >= 0` with
//! `b >= 0` that the Simplex method works on.
use std::fmt;

use enum_map::{Enum, enum_map, EnumMap};

use crate::algorithm::two_phase::matrix_provider::MatrixProvider;
use crate::algorithm::two_phase::PartialInitialBasis;
use crate::data::linear_algebra::matrix::Dense;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::number_types::traits::Real;

/// The problem in standard form.
///
/// Row and column groups are ordered as follows:
///
/// /                 ||  Normal  | Inequality slack | Bound slack |
/// ==================||==========|==================|=============|-----
/// Inequalities      ||    A     |    +/- I         |      0      || b |
/// Equalities        ||    A     |      0           |      0      || b |
/// Variable bounds   ||  e_j     |      0           |      I      || r |
///
/// Rows with a negative right hand side are negated, which is why the inequality slacks might have
/// coefficient `-1`. Bound rows always have a positive slack coefficient, because the range `r`
/// of a bounded variable is nonnegative.
#[derive(Clone, Debug, PartialEq)]
pub struct MatrixData<F> {
    /// All rows, including the slack columns.
    constraints: Dense<F>,
    /// Nonnegative right hand side.
    b: Vec<F>,
    /// Cost of each column, to be minimized. Zero for the slacks.
    cost: Vec<F>,

    /// Indices that separate the different groups.
    row_group_end: EnumMap<RowType, usize>,
    column_group_end: EnumMap<ColumnType, usize>,

    /// How each variable of the original problem is expressed in the normal columns.
    substitutions: Vec<Substitution<F>>,
}

#[derive(Enum, Debug)]
enum RowType {
    /// `<=` constraints, `<a, x> + s = b`.
    Inequality,
    /// `==` constraints.
    Equality,
    /// Upper bounds `y + s = u - l` of variables that have both a lower and an upper bound.
    VariableBound,
}

/// Indexing within the different column types (see struct description).
#[derive(Enum, Debug)]
enum ColumnType {
    /// Variables for which we want a solution, after substitution.
    Normal,
    /// Slacks `s` for an equation like `<a, x> + s = b`.
    ///
    /// Can be used as part of the initial basis, unless the row was negated.
    InequalitySlack,
    /// Slacks for a variable bound like `y + s = r`.
    ///
    /// Can always be used as part of the initial basis.
    BoundSlack,
}

/// How a variable of the original problem is written in terms of nonnegative columns.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Substitution<F> {
    /// `x = lower + y`.
    Shifted {
        /// Index of `y`.
        column: usize,
        #[allow(missing_docs)]
        lower: F,
    },
    /// `x = upper - y`, for variables with only an upper bound.
    Mirrored {
        /// Index of `y`.
        column: usize,
        #[allow(missing_docs)]
        upper: F,
    },
    /// `x = positive - negative`, for free variables.
    Split {
        #[allow(missing_docs)]
        positive: usize,
        #[allow(missing_docs)]
        negative: usize,
    },
}

impl<F: Real> Substitution<F> {
    /// Value of the original variable.
    fn value(&self, column_values: &[F]) -> F {
        match *self {
            Substitution::Shifted { column, lower } => lower + column_values[column],
            Substitution::Mirrored { column, upper } => upper - column_values[column],
            Substitution::Split { positive, negative } => column_values[positive] - column_values[negative],
        }
    }
}

impl<F: Real> MatrixData<F> {
    /// Create the standard form of a linear program.
    ///
    /// Maximization problems get their cost row negated.
    pub fn from_program(program: &LinearProgram<F>) -> Self {
        let mut nr_normal = 0;
        let mut bounded = Vec::new();
        let substitutions = program.variables().iter()
            .map(|variable| {
                let column = nr_normal;
                match (variable.lower_bound(), variable.upper_bound()) {
                    (Some(lower), upper) => {
                        if let Some(upper) = upper {
                            bounded.push((column, upper - lower));
                        }
                        nr_normal += 1;
                        Substitution::Shifted { column, lower }
                    },
                    (None, Some(upper)) => {
                        nr_normal += 1;
                        Substitution::Mirrored { column, upper }
                    },
                    (None, None) => {
                        nr_normal += 2;
                        Substitution::Split { positive: column, negative: column + 1 }
                    },
                }
            })
            .collect::<Vec<_>>();

        let nr_inequalities = program.inequalities().len();
        let nr_equalities = program.equalities().len();
        let nr_bounds = bounded.len();

        let row_group_end = enum_map! {
            RowType::Inequality => nr_inequalities,
            RowType::Equality => nr_inequalities + nr_equalities,
            RowType::VariableBound => nr_inequalities + nr_equalities + nr_bounds,
        };
        let column_group_end = enum_map! {
            ColumnType::Normal => nr_normal,
            ColumnType::InequalitySlack => nr_normal + nr_inequalities,
            ColumnType::BoundSlack => nr_normal + nr_inequalities + nr_bounds,
        };
        let nr_rows = row_group_end[RowType::VariableBound];
        let nr_columns = column_group_end[ColumnType::BoundSlack];

        let mut constraints = Dense::zeros(nr_rows, nr_columns);
        let mut b = Vec::with_capacity(nr_rows);
        let rows = program.inequalities().iter().chain(program.equalities());
        for (i, constraint) in rows.enumerate() {
            let mut rhs = constraint.rhs();
            for (&coefficient, substitution) in constraint.coefficients().iter().zip(&substitutions) {
                rhs = rhs - substitute(coefficient, substitution, |j, value| constraints[(i, j)] = constraints[(i, j)] + value);
            }
            if i < nr_inequalities {
                constraints[(i, column_group_end[ColumnType::Normal] + i)] = F::one();
            }
            b.push(rhs);
        }
        for (k, &(column, range)) in bounded.iter().enumerate() {
            let row = row_group_end[RowType::Equality] + k;
            constraints[(row, column)] = F::one();
            constraints[(row, column_group_end[ColumnType::InequalitySlack] + k)] = F::one();
            b.push(range);
        }

        for i in 0..nr_rows {
            if b[i] < F::zero() {
                constraints.negate_row(i);
                b[i] = -b[i];
            }
        }

        let mut cost = vec![F::zero(); nr_columns];
        for (&coefficient, substitution) in program.objective().iter().zip(&substitutions) {
            let coefficient = match program.direction() {
                Objective::Minimize => coefficient,
                Objective::Maximize => -coefficient,
            };
            // The constant part of the cost doesn't influence the optimal point
            substitute(coefficient, substitution, |j, value| cost[j] = cost[j] + value);
        }

        Self {
            constraints,
            b,
            cost,
            row_group_end,
            column_group_end,
            substitutions,
        }
    }

    /// The number of variables for which we want a solution.
    fn nr_normal_variables(&self) -> usize {
        self.column_group_end[ColumnType::Normal]
    }

    /// The number of rows that originate from an inequality or equality.
    pub fn nr_constraints(&self) -> usize {
        self.row_group_end[RowType::Equality]
    }

    /// The number of rows that originate from a variable with both bounds.
    pub fn nr_bounds(&self) -> usize {
        self.row_group_end[RowType::VariableBound] - self.row_group_end[RowType::Equality]
    }

    /// How the variables of the original problem are represented.
    pub fn substitutions(&self) -> &[Substitution<F>] {
        &self.substitutions
    }
}

/// Distribute a coefficient of an original variable over the columns that represent it.
///
/// # Arguments
///
/// * `coefficient`: Coefficient of the original variable.
/// * `substitution`: How the variable is represented.
/// * `add`: Adds a value to the coefficient of a column.
///
/// # Return value
///
/// The constant term that the substitution introduces, to be moved to the right hand side.
fn substitute<F: Real>(coefficient: F, substitution: &Substitution<F>, mut add: impl FnMut(usize, F)) -> F {
    match *substitution {
        Substitution::Shifted { column, lower } => {
            add(column, coefficient);
            coefficient * lower
        },
        Substitution::Mirrored { column, upper } => {
            add(column, -coefficient);
            coefficient * upper
        },
        Substitution::Split { positive, negative } => {
            add(positive, coefficient);
            add(negative, -coefficient);
            F::zero()
        },
    }
}

impl<F: Real> MatrixProvider<F> for MatrixData<F> {
    fn column(&self, j: usize) -> Vec<F> {
        debug_assert!(j < self.nr_columns());

        self.constraints.column(j)
    }

    fn cost_value(&self, j: usize) -> F {
        debug_assert!(j < self.nr_columns());

        self.cost[j]
    }

    fn constraint_values(&self) -> Vec<F> {
        self.b.clone()
    }

    fn nr_rows(&self) -> usize {
        self.constraints.nr_rows()
    }

    fn nr_columns(&self) -> usize {
        self.constraints.nr_columns()
    }

    fn reconstruct_solution(&self, column_values: Vec<F>) -> Vec<F> {
        debug_assert_eq!(column_values.len(), self.nr_columns());

        self.substitutions.iter()
            .map(|substitution| substitution.value(&column_values))
            .collect()
    }
}

impl<F: Real> PartialInitialBasis for MatrixData<F> {
    fn pivot_element_indices(&self) -> Vec<(usize, usize)> {
        let inequalities = (0..self.row_group_end[RowType::Inequality])
            .map(|i| (i, self.column_group_end[ColumnType::Normal] + i))
            .filter(|&(i, j)| self.constraints[(i, j)] > F::zero());
        let bounds = (0..self.nr_bounds())
            .map(|k| {
                let row = self.row_group_end[RowType::Equality] + k;
                let column = self.column_group_end[ColumnType::InequalitySlack] + k;
                (row, column)
            });

        inequalities.chain(bounds).collect()
    }

    fn nr_initial_elements(&self) -> usize {
        self.pivot_element_indices().len()
    }
}

impl<F: Real> fmt::Display for MatrixData<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = 8;
        let separator_width = (2 + self.nr_columns()) * width + 3;

        write!(f, "{:>width$}", "|", width = width)?;
        for column in 0..self.nr_columns() {
            if column == 0 || self.column_group_end.values().any(|&j| j == column) {
                write!(f, "|")?;
            }
            write!(f, "{:^width$}", column, width = width)?;
        }
        writeln!(f, "|{:^width$}", "b", width = width)?;
        writeln!(f, "{}", "=".repeat(separator_width))?;

        write!(f, "{:>width$}", "cost |", width = width)?;
        for column in 0..self.nr_columns() {
            if column == 0 || self.column_group_end.values().any(|&j| j == column) {
                write!(f, "|")?;
            }
            write!(f, "{:^width$}", self.cost[column], width = width)?;
        }
        writeln!(f, "|")?;

        for row in 0..self.nr_rows() {
            if row == 0 || self.row_group_end.values().any(|&i| i == row) {
                writeln!(f, "{}", "-".repeat(separator_width))?;
            }
            write!(f, "{:>width$}", format!("{} |", row), width = width)?;
            for column in 0..self.nr_columns() {
                if column == 0 || self.column_group_end.values().any(|&j| j == column) {
                    write!(f, "|")?;
                }
                write!(f, "{:^width$}", self.constraints[(row, column)], width = width)?;
            }
            writeln!(f, "|{:^width$}", self.b[row], width = width)?;
        }

        Ok(())
    }
}
