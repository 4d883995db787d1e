//! # Rendering the bundled problems
//!
//! A renderer that stores everything it is asked to draw, such that the scenes can be inspected.
use planar_lp::data::geometry::Point;
use planar_lp::data::geometry::iso_line::IsoLine;
use planar_lp::data::geometry::polygon::FeasibleRegion;
use planar_lp::data::linear_program::elements::LinearProgramType;
use planar_lp::io::Renderer;

mod test;

#[derive(Default)]
struct Drawing {
    region: Option<FeasibleRegion<f64>>,
    constraints: Vec<(String, Point<f64>, Point<f64>)>,
    iso_lines: Vec<(f64, Vec<Point<f64>>)>,
    optimum: Option<(Point<f64>, f64)>,
    status: Option<LinearProgramType<f64>>,
}

impl Renderer<f64> for Drawing {
    fn draw_region(&mut self, region: &FeasibleRegion<f64>) {
        self.region = Some(region.clone());
    }

    fn draw_constraint(&mut self, label: &str, from: &Point<f64>, to: &Point<f64>) {
        self.constraints.push((label.to_string(), *from, *to));
    }

    fn draw_iso_line(&mut self, line: &IsoLine<f64>, points: &[Point<f64>]) {
        self.iso_lines.push((line.target(), points.to_vec()));
    }

    fn mark_optimum(&mut self, point: &Point<f64>, objective_value: f64) {
        self.optimum = Some((*point, objective_value));
    }

    fn report_status(&mut self, result: &LinearProgramType<f64>) {
        self.status = Some(result.clone());
    }
}
