//! # Linear programs as provided by the user
//!
//! A linear program in general form has any number of `<=` and `==` constraints and an optional
//! lower and upper bound for each variable. It is validated once when it is built, and immutable
//! afterwards.
use std::fmt;

use enum_map::{enum_map, EnumMap};

use crate::algorithm;
use crate::configuration::Configuration;
use crate::data::linear_algebra::inner_product;
use crate::data::linear_program::elements::{BoundDirection, ConstraintType, LinearProgramType, Objective};
use crate::data::number_types::traits::Real;
use crate::io::error::LinearProgramError;

/// A linear constraint `coefficients · x (<= or ==) rhs`.
///
/// Whether it is an inequality or an equality is determined by where it is stored in the
/// `LinearProgram`.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint<F> {
    coefficients: Vec<F>,
    rhs: F,
}

impl<F: Real> Constraint<F> {
    /// Create a new constraint.
    pub fn new(coefficients: Vec<F>, rhs: F) -> Self {
        Self { coefficients, rhs }
    }

    /// Coefficient of each variable.
    pub fn coefficients(&self) -> &[F] {
        &self.coefficients
    }

    /// Right hand side.
    pub fn rhs(&self) -> F {
        self.rhs
    }

    /// Value of the left hand side at a point.
    pub fn lhs(&self, point: &[F]) -> F {
        inner_product(&self.coefficients, point)
    }

    /// The constraint with both sides multiplied by minus one.
    ///
    /// Turns a `>=` constraint into a `<=` constraint.
    #[must_use]
    pub fn negate(self) -> Self {
        Self {
            coefficients: self.coefficients.into_iter().map(|v| -v).collect(),
            rhs: -self.rhs,
        }
    }
}

/// A variable with its name and bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable<F> {
    /// Name used when reporting a solution.
    pub name: String,
    /// Both bounds, `None` meaning unbounded in that direction.
    pub bounds: EnumMap<BoundDirection, Option<F>>,
}

impl<F: Real> Variable<F> {
    /// Lower bound, if any.
    pub fn lower_bound(&self) -> Option<F> {
        self.bounds[BoundDirection::Lower]
    }

    /// Upper bound, if any.
    pub fn upper_bound(&self) -> Option<F> {
        self.bounds[BoundDirection::Upper]
    }

    /// Whether a value respects both bounds, up to a tolerance.
    pub fn admits(&self, value: F, tolerance: F) -> bool {
        self.lower_bound().map_or(true, |lower| value >= lower - tolerance)
            && self.upper_bound().map_or(true, |upper| value <= upper + tolerance)
    }
}

/// A linear program in general form.
///
/// Invariants, checked by `Builder::build`:
///
/// * there is at least one variable;
/// * all coefficient vectors have a value for each variable;
/// * all numbers are finite;
/// * lower bounds don't exceed upper bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearProgram<F> {
    /// Cost (or profit) coefficient of each variable.
    objective: Vec<F>,
    direction: Objective,
    /// Constraints of the form `a · x <= b`.
    inequalities: Vec<Constraint<F>>,
    /// Constraints of the form `a · x == b`.
    equalities: Vec<Constraint<F>>,
    variables: Vec<Variable<F>>,
}

impl<F: Real> LinearProgram<F> {
    /// Start building a program that minimizes `objective · x`.
    pub fn minimize(objective: Vec<F>) -> Builder<F> {
        Builder::new(objective, Objective::Minimize)
    }

    /// Start building a program that maximizes `objective · x`.
    pub fn maximize(objective: Vec<F>) -> Builder<F> {
        Builder::new(objective, Objective::Maximize)
    }

    /// Solve this program with the default configuration.
    ///
    /// See `algorithm::solve`.
    pub fn solve(&self) -> LinearProgramType<F> {
        algorithm::solve(self, &Configuration::default())
    }

    /// Solve this program with a custom configuration.
    pub fn solve_with(&self, configuration: &Configuration<F>) -> LinearProgramType<F> {
        algorithm::solve(self, configuration)
    }

    /// Number of variables.
    pub fn nr_variables(&self) -> usize {
        self.objective.len()
    }

    /// Cost coefficients, in the direction of the problem.
    pub fn objective(&self) -> &[F] {
        &self.objective
    }

    /// Whether the objective should be minimized or maximized.
    pub fn direction(&self) -> Objective {
        self.direction
    }

    /// Constraints `a · x <= b`. Constraints provided as `>=` are stored negated.
    pub fn inequalities(&self) -> &[Constraint<F>] {
        &self.inequalities
    }

    /// Constraints `a · x == b`.
    pub fn equalities(&self) -> &[Constraint<F>] {
        &self.equalities
    }

    /// All variables, ordered by index.
    pub fn variables(&self) -> &[Variable<F>] {
        &self.variables
    }

    /// Lower bound of each variable.
    pub fn lower_bounds(&self) -> Vec<Option<F>> {
        self.variables.iter().map(Variable::lower_bound).collect()
    }

    /// Upper bound of each variable.
    pub fn upper_bounds(&self) -> Vec<Option<F>> {
        self.variables.iter().map(Variable::upper_bound).collect()
    }

    /// Names of the variables, ordered by index.
    pub fn names(&self) -> Vec<String> {
        self.variables.iter().map(|variable| variable.name.clone()).collect()
    }

    /// Value of the objective function, in the direction of the problem.
    pub fn objective_value(&self, point: &[F]) -> F {
        debug_assert_eq!(point.len(), self.nr_variables());

        inner_product(&self.objective, point)
    }

    /// A readable description of each constraint, first the inequalities, then the equalities.
    ///
    /// Used to label constraints when they are drawn.
    pub fn constraint_labels(&self) -> Vec<String> {
        let names = self.names();
        self.inequalities.iter().map(|constraint| (constraint, ConstraintType::Less))
            .chain(self.equalities.iter().map(|constraint| (constraint, ConstraintType::Equal)))
            .map(|(constraint, constraint_type)| format!(
                "{} {} {}",
                LinearExpression(&constraint.coefficients, &names), constraint_type, constraint.rhs,
            ))
            .collect()
    }

    /// Whether a point satisfies all constraints and bounds, up to a tolerance.
    pub fn is_feasible(&self, point: &[F], tolerance: F) -> bool {
        debug_assert_eq!(point.len(), self.nr_variables());

        self.inequalities.iter().all(|constraint| constraint.lhs(point) <= constraint.rhs + tolerance)
            && self.equalities.iter().all(|constraint| constraint.lhs(point).is_close_to(constraint.rhs, tolerance))
            && self.variables.iter().zip(point).all(|(variable, &value)| variable.admits(value, tolerance))
    }
}

impl<F: Real> fmt::Display for LinearProgram<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names = self.names();
        let direction = match self.direction {
            Objective::Minimize => "minimize",
            Objective::Maximize => "maximize",
        };
        writeln!(f, "{} {}", direction, LinearExpression(&self.objective, &names))?;
        writeln!(f, "subject to")?;
        for label in self.constraint_labels() {
            writeln!(f, "    {}", label)?;
        }
        for variable in &self.variables {
            match (variable.lower_bound(), variable.upper_bound()) {
                (Some(lower), Some(upper)) => writeln!(f, "    {} <= {} <= {}", lower, variable.name, upper)?,
                (Some(lower), None) => writeln!(f, "    {} >= {}", variable.name, lower)?,
                (None, Some(upper)) => writeln!(f, "    {} <= {}", variable.name, upper)?,
                (None, None) => writeln!(f, "    {} free", variable.name)?,
            }
        }

        Ok(())
    }
}

/// Formatting helper, writes terms like "12 A + 8 B".
struct LinearExpression<'a, F>(&'a [F], &'a [String]);

impl<F: Real> fmt::Display for LinearExpression<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut terms = self.0.iter().zip(self.1).filter(|(coefficient, _)| !coefficient.is_zero());
        match terms.next() {
            None => return f.write_str("0"),
            Some((coefficient, name)) => write!(f, "{} {}", coefficient, name)?,
        }
        for (&coefficient, name) in terms {
            if coefficient < F::zero() {
                write!(f, " - {} {}", -coefficient, name)?;
            } else {
                write!(f, " + {} {}", coefficient, name)?;
            }
        }

        Ok(())
    }
}

/// Collects the parts of a `LinearProgram`, validating them when `build` is called.
///
/// Unless specified otherwise, variables are nonnegative and have no upper bound.
#[derive(Clone, Debug)]
pub struct Builder<F> {
    objective: Vec<F>,
    direction: Objective,
    inequalities: Vec<Constraint<F>>,
    equalities: Vec<Constraint<F>>,
    default_bounds: EnumMap<BoundDirection, Option<F>>,
    bounds: Vec<(usize, EnumMap<BoundDirection, Option<F>>)>,
    names: Option<Vec<String>>,
}

impl<F: Real> Builder<F> {
    /// Create a new builder.
    pub fn new(objective: Vec<F>, direction: Objective) -> Self {
        Self {
            objective,
            direction,
            inequalities: Vec::new(),
            equalities: Vec::new(),
            default_bounds: enum_map! {
                BoundDirection::Lower => Some(F::zero()),
                BoundDirection::Upper => None,
            },
            bounds: Vec::new(),
            names: None,
        }
    }

    /// Add a constraint `coefficients · x <= rhs`.
    #[must_use]
    pub fn less_than(mut self, coefficients: Vec<F>, rhs: F) -> Self {
        self.inequalities.push(Constraint::new(coefficients, rhs));
        self
    }

    /// Add a constraint `coefficients · x >= rhs`.
    ///
    /// It is stored as `-coefficients · x <= -rhs`.
    #[must_use]
    pub fn greater_than(mut self, coefficients: Vec<F>, rhs: F) -> Self {
        self.inequalities.push(Constraint::new(coefficients, rhs).negate());
        self
    }

    /// Add a constraint `coefficients · x == rhs`.
    #[must_use]
    pub fn equal_to(mut self, coefficients: Vec<F>, rhs: F) -> Self {
        self.equalities.push(Constraint::new(coefficients, rhs));
        self
    }

    /// Add a constraint of any type.
    #[must_use]
    pub fn constraint(self, coefficients: Vec<F>, constraint_type: ConstraintType, rhs: F) -> Self {
        match constraint_type {
            ConstraintType::Less => self.less_than(coefficients, rhs),
            ConstraintType::Greater => self.greater_than(coefficients, rhs),
            ConstraintType::Equal => self.equal_to(coefficients, rhs),
        }
    }

    /// Set the bounds of a single variable.
    ///
    /// # Arguments
    ///
    /// * `variable`: Index of the variable.
    /// * `lower`: Lower bound, `None` if there is none.
    /// * `upper`: Upper bound, `None` if there is none.
    #[must_use]
    pub fn bounds(mut self, variable: usize, lower: Option<F>, upper: Option<F>) -> Self {
        self.bounds.push((variable, enum_map! {
            BoundDirection::Lower => lower,
            BoundDirection::Upper => upper,
        }));
        self
    }

    /// Set the bounds of all variables that don't get specific bounds.
    #[must_use]
    pub fn default_bounds(mut self, lower: Option<F>, upper: Option<F>) -> Self {
        self.default_bounds = enum_map! {
            BoundDirection::Lower => lower,
            BoundDirection::Upper => upper,
        };
        self
    }

    /// Name the variables.
    ///
    /// Without names, variables are called `x0`, `x1`, etc.
    #[must_use]
    pub fn names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Validate the collected data and create the linear program.
    ///
    /// # Errors
    ///
    /// If a vector doesn't have a value for each variable, a number is not finite, a bound refers
    /// to a variable that doesn't exist or a lower bound exceeds an upper bound.
    pub fn build(self) -> Result<LinearProgram<F>, LinearProgramError> {
        let nr_variables = self.objective.len();
        if nr_variables == 0 {
            return Err(LinearProgramError::NoVariables);
        }
        check_finite(&self.objective, "objective")?;

        for (kind, constraints) in [("inequality", &self.inequalities), ("equality", &self.equalities)] {
            for (i, constraint) in constraints.iter().enumerate() {
                let location = format!("{} {}", kind, i);
                if constraint.coefficients.len() != nr_variables {
                    return Err(LinearProgramError::DimensionMismatch {
                        location,
                        expected: nr_variables,
                        found: constraint.coefficients.len(),
                    });
                }
                check_finite(&constraint.coefficients, &location)?;
                check_finite(&[constraint.rhs], &format!("right hand side of {}", location))?;
            }
        }

        let names = match self.names {
            Some(names) if names.len() != nr_variables => return Err(LinearProgramError::NameCount {
                expected: nr_variables,
                found: names.len(),
            }),
            Some(names) => names,
            None => (0..nr_variables).map(|j| format!("x{}", j)).collect(),
        };

        let mut variables = names.into_iter()
            .map(|name| Variable { name, bounds: self.default_bounds })
            .collect::<Vec<_>>();
        for (index, bounds) in self.bounds {
            match variables.get_mut(index) {
                Some(variable) => variable.bounds = bounds,
                None => return Err(LinearProgramError::VariableIndex { index, nr_variables }),
            }
        }

        for variable in &variables {
            for bound in variable.bounds.values().flatten() {
                check_finite(&[*bound], &format!("bound of variable {}", variable.name))?;
            }
            if let (Some(lower), Some(upper)) = (variable.lower_bound(), variable.upper_bound()) {
                if lower > upper {
                    return Err(LinearProgramError::InvalidBounds {
                        variable: variable.name.clone(),
                        lower: lower.to_string(),
                        upper: upper.to_string(),
                    });
                }
            }
        }

        Ok(LinearProgram {
            objective: self.objective,
            direction: self.direction,
            inequalities: self.inequalities,
            equalities: self.equalities,
            variables,
        })
    }
}

fn check_finite<F: Real>(values: &[F], location: &str) -> Result<(), LinearProgramError> {
    match values.iter().position(|value| !value.is_finite()) {
        None => Ok(()),
        Some(_) if values.len() == 1 => Err(LinearProgramError::NonFinite(location.to_string())),
        Some(j) => Err(LinearProgramError::NonFinite(format!("coefficient {} of {}", j, location))),
    }
}
