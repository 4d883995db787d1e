//! # Presenting linear programs
//!
//! A `Scene` combines a two dimensional program with a viewing window and a family of objective
//! iso-lines. Rendering it computes the optimum and the feasible region, and passes everything to
//! a `Renderer`, which decides what drawing means.
use log::debug;

use crate::configuration::Configuration;
use crate::data::geometry::{Axis, Extent, HalfPlane, linspace, Point};
use crate::data::geometry::iso_line::{iso_lines, IsoLine};
use crate::data::geometry::polygon::{boundary_segment, feasible_polygon_with, FeasibleRegion};
use crate::data::linear_program::elements::LinearProgramType;
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::number_types::traits::Real;
use crate::io::error::GeometryError;

pub mod error;
pub mod problems;

/// Something that can show the results of a `Scene`.
///
/// The methods are called by `Scene::render` in the order in which they are declared here.
pub trait Renderer<F> {
    /// Show the feasible region within the extent.
    fn draw_region(&mut self, region: &FeasibleRegion<F>);

    /// Show the boundary line of a constraint, clipped to the extent.
    ///
    /// # Arguments
    ///
    /// * `label`: Description of the constraint, like "2 A + 3 B <= 30".
    /// * `from`, `to`: End points of the line within the extent.
    fn draw_constraint(&mut self, label: &str, from: &Point<F>, to: &Point<F>);

    /// Show an iso-line of the objective function.
    ///
    /// # Arguments
    ///
    /// * `line`: The line, which knows its objective value.
    /// * `points`: Samples on the line that lie within the extent. Might be empty.
    fn draw_iso_line(&mut self, line: &IsoLine<F>, points: &[Point<F>]);

    /// Highlight the optimal point.
    fn mark_optimum(&mut self, point: &Point<F>, objective_value: F);

    /// Show the outcome of solving the program.
    fn report_status(&mut self, result: &LinearProgramType<F>);
}

/// A two dimensional program together with what is needed to draw it.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene<F> {
    name: String,
    program: LinearProgram<F>,
    extent: Extent<F>,
    /// Objective values of the iso-lines.
    iso_targets: Vec<F>,
    free_axis: Axis,
    configuration: Configuration<F>,
}

impl<F: Real> Scene<F> {
    /// Create a scene without iso-lines.
    ///
    /// # Errors
    ///
    /// When the program doesn't have exactly two variables.
    pub fn new(
        name: impl Into<String>,
        program: LinearProgram<F>,
        extent: Extent<F>,
    ) -> Result<Self, GeometryError> {
        if program.nr_variables() != 2 {
            return Err(GeometryError::NotTwoDimensional(program.nr_variables()));
        }

        Ok(Self {
            name: name.into(),
            program,
            extent,
            iso_targets: Vec::new(),
            free_axis: Axis::X,
            configuration: Configuration::default(),
        })
    }

    /// Draw iso-lines for these objective values, sampled along `free_axis`.
    #[must_use]
    pub fn with_iso_lines(mut self, targets: Vec<F>, free_axis: Axis) -> Self {
        self.iso_targets = targets;
        self.free_axis = free_axis;
        self
    }

    /// Use other tolerances for solving and clipping.
    #[must_use]
    pub fn with_configuration(mut self, configuration: Configuration<F>) -> Self {
        self.configuration = configuration;
        self
    }

    /// Name of the scene.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The program that is drawn.
    pub fn program(&self) -> &LinearProgram<F> {
        &self.program
    }

    /// The viewing window.
    pub fn extent(&self) -> &Extent<F> {
        &self.extent
    }

    /// Objective values of the iso-lines.
    pub fn iso_targets(&self) -> &[F] {
        &self.iso_targets
    }

    /// Solve the program, compute its geometry and draw everything.
    ///
    /// # Arguments
    ///
    /// * `renderer`: Receives the draw calls.
    /// * `samples`: Number of evenly spaced free axis values at which each iso-line is sampled.
    ///
    /// # Return value
    ///
    /// The outcome of solving the program.
    ///
    /// # Errors
    ///
    /// When the iso-lines can't be expressed along the dependent axis. Nothing is drawn in that
    /// case.
    pub fn render<R: Renderer<F>>(
        &self,
        renderer: &mut R,
        samples: usize,
    ) -> Result<LinearProgramType<F>, GeometryError> {
        let result = self.program.solve_with(&self.configuration);
        let region = feasible_polygon_with(&self.program, &self.extent, &self.configuration)?;
        let lines = iso_lines(self.program.objective(), &self.iso_targets, self.free_axis)?;
        debug!("Rendering scene \"{}\": {}, {} region vertices", self.name, result.status(), region.vertices().len());

        renderer.draw_region(&region);

        let constraints = self.program.inequalities().iter()
            .chain(self.program.equalities());
        for (label, constraint) in self.program.constraint_labels().iter().zip(constraints) {
            let coefficients = constraint.coefficients();
            let half_plane = HalfPlane::new(coefficients[0], coefficients[1], constraint.rhs());
            if let Some((from, to)) = boundary_segment(&half_plane, &self.extent, self.configuration.tolerance()) {
                renderer.draw_constraint(label, &from, &to);
            }
        }

        let free_values = linspace(self.extent.min(self.free_axis), self.extent.max(self.free_axis), samples);
        for line in &lines {
            renderer.draw_iso_line(line, &line.sample(&free_values, &self.extent, self.configuration.tolerance()));
        }

        if let LinearProgramType::FiniteOptimum(solution) = &result {
            let point = Point::new(solution.point()[0], solution.point()[1]);
            renderer.mark_optimum(&point, *solution.objective_value());
        }
        renderer.report_status(&result);

        Ok(result)
    }
}
