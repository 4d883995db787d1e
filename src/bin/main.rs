use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{error, info};

use planar_lp::configuration::Configuration;
use planar_lp::data::geometry::{Axis, Extent, Point};
use planar_lp::data::geometry::iso_line::IsoLine;
use planar_lp::data::geometry::polygon::FeasibleRegion;
use planar_lp::data::linear_program::elements::{ConstraintType, LinearProgramType};
use planar_lp::data::linear_program::general_form::LinearProgram;
use planar_lp::io::error::{GeometryError, SceneError};
use planar_lp::io::{problems, Renderer, Scene};

/// Solve and describe small linear programs in two variables.
#[derive(Parser, Debug)]
#[command(name = "planar-lp")]
#[command(version)]
struct Opts {
    /// Bundled problem to show, ignored when an objective is given
    #[arg(value_enum, default_value = "all")]
    problem: Problem,

    /// Number of points at which each iso-line is sampled
    #[arg(short, long, default_value = "5")]
    samples: usize,

    /// Absolute tolerance for comparisons against zero
    #[arg(short, long)]
    tolerance: Option<f64>,

    /// Minimize this objective, like "12,8"
    #[arg(long, value_name = "COEFFICIENTS", value_parser = parse_numbers, conflicts_with = "maximize")]
    minimize: Option<Numbers>,

    /// Maximize this objective, like "10,8"
    #[arg(long, value_name = "COEFFICIENTS", value_parser = parse_numbers)]
    maximize: Option<Numbers>,

    /// Constraint of the custom problem, like "2,3>=30"; can be repeated
    #[arg(short, long, value_parser = parse_constraint)]
    constraint: Vec<ConstraintArgument>,

    /// Viewing window of the custom problem: "x_min,x_max,y_min,y_max"
    #[arg(long, value_name = "BOUNDS", value_parser = parse_numbers, default_value = "0,10,0,10")]
    extent: Numbers,

    /// Objective values of the iso-lines of the custom problem, like "100,150"
    #[arg(long, value_name = "VALUES", value_parser = parse_numbers)]
    iso: Option<Numbers>,
}

/// Comma separated numbers.
#[derive(Debug, Clone, PartialEq)]
struct Numbers(Vec<f64>);

/// A constraint given on the command line.
#[derive(Debug, Clone, PartialEq)]
struct ConstraintArgument {
    coefficients: Vec<f64>,
    constraint_type: ConstraintType,
    rhs: f64,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum Problem {
    Diet,
    Mixture,
    Investment,
    All,
}

fn parse_numbers(text: &str) -> Result<Numbers, String> {
    text.split(',')
        .map(|value| value.trim().parse::<f64>().map_err(|error| format!("\"{}\": {}", value.trim(), error)))
        .collect::<Result<_, _>>()
        .map(Numbers)
}

fn parse_constraint(text: &str) -> Result<ConstraintArgument, String> {
    let (operator, constraint_type) = [("<=", ConstraintType::Less), (">=", ConstraintType::Greater), ("=", ConstraintType::Equal)]
        .into_iter()
        .find(|(operator, _)| text.contains(operator))
        .ok_or_else(|| format!("no \"<=\", \">=\" or \"=\" in \"{}\"", text))?;
    let (lhs, rhs) = text.split_once(operator).ok_or_else(|| format!("can't split \"{}\"", text))?;
    let rhs = rhs.trim().parse::<f64>().map_err(|error| format!("\"{}\": {}", rhs.trim(), error))?;

    Ok(ConstraintArgument { coefficients: parse_numbers(lhs)?.0, constraint_type, rhs })
}

/// Writes a description of everything that is drawn to standard output.
struct TextRenderer;

impl Renderer<f64> for TextRenderer {
    fn draw_region(&mut self, region: &FeasibleRegion<f64>) {
        match region {
            FeasibleRegion::Empty => println!("Feasible region: empty within the window"),
            FeasibleRegion::Degenerate(points) => println!("Feasible region: degenerate, {}", format_points(points)),
            FeasibleRegion::Polygon(polygon) => {
                let truncated = if polygon.is_truncated() { ", truncated by the window" } else { "" };
                println!(
                    "Feasible region: polygon with area {:.4}{}, {}",
                    polygon.area(), truncated, format_points(polygon.vertices()),
                );
            },
        }
    }

    fn draw_constraint(&mut self, label: &str, from: &Point<f64>, to: &Point<f64>) {
        println!("Constraint {}: from {:.4} to {:.4}", label, from, to);
    }

    fn draw_iso_line(&mut self, line: &IsoLine<f64>, points: &[Point<f64>]) {
        if points.is_empty() {
            println!("Iso-line Z = {}: outside of the window", line.target());
        } else {
            println!("Iso-line Z = {}: {}", line.target(), format_points(points));
        }
    }

    fn mark_optimum(&mut self, point: &Point<f64>, objective_value: f64) {
        println!("Optimum at {:.4} with value {:.4}", point, objective_value);
    }

    fn report_status(&mut self, result: &LinearProgramType<f64>) {
        match result {
            LinearProgramType::FiniteOptimum(solution) => print!("Status: optimal\n{}", solution),
            LinearProgramType::Infeasible => println!("Status: infeasible"),
            LinearProgramType::Unbounded => println!("Status: unbounded"),
        }
    }
}

fn format_points(points: &[Point<f64>]) -> String {
    points.iter().map(|point| format!("{:.4}", point)).collect::<Vec<_>>().join(" ")
}

fn custom_scene(opts: &Opts, objective: Vec<f64>, maximize: bool) -> Result<Scene<f64>, SceneError> {
    let builder = if maximize {
        LinearProgram::maximize(objective)
    } else {
        LinearProgram::minimize(objective)
    };
    let program = opts.constraint.iter()
        .fold(builder, |builder, constraint| {
            builder.constraint(constraint.coefficients.clone(), constraint.constraint_type, constraint.rhs)
        })
        .names(["x", "y"])
        .build()?;
    let extent = match opts.extent.0[..] {
        [x_min, x_max, y_min, y_max] => Extent::new(x_min, x_max, y_min, y_max)?,
        _ => return Err(GeometryError::InvalidExtent.into()),
    };

    Ok(Scene::new("custom", program, extent)?
        .with_iso_lines(opts.iso.clone().map(|Numbers(values)| values).unwrap_or_default(), Axis::X))
}

fn scenes(opts: &Opts) -> Result<Vec<Scene<f64>>, SceneError> {
    if let Some(Numbers(objective)) = &opts.minimize {
        return Ok(vec![custom_scene(opts, objective.clone(), false)?]);
    }
    if let Some(Numbers(objective)) = &opts.maximize {
        return Ok(vec![custom_scene(opts, objective.clone(), true)?]);
    }

    match opts.problem {
        Problem::Diet => Ok(vec![problems::diet()?]),
        Problem::Mixture => Ok(vec![problems::mixture()?]),
        Problem::Investment => Ok(vec![problems::investment()?]),
        Problem::All => problems::all(),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let opts = Opts::parse();

    let mut configuration = Configuration::default();
    if let Some(tolerance) = opts.tolerance {
        if !tolerance.is_finite() || tolerance < 0_f64 {
            error!("The tolerance should be a nonnegative number, got {}", tolerance);
            return ExitCode::FAILURE;
        }
        configuration = configuration.with_tolerance(tolerance);
    }

    let scenes = match scenes(&opts) {
        Ok(scenes) => scenes,
        Err(error) => {
            error!("{}", error);
            return ExitCode::FAILURE;
        },
    };

    let mut renderer = TextRenderer;
    for scene in scenes {
        let scene = scene.with_configuration(configuration);
        info!("Rendering {}", scene.name());
        println!("=== {} ===", scene.name());
        print!("{}", scene.program());
        if let Err(error) = scene.render(&mut renderer, opts.samples) {
            error!("{}", error);
            return ExitCode::FAILURE;
        }
        println!();
    }

    ExitCode::SUCCESS
}
