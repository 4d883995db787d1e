use approx::assert_abs_diff_eq;

use planar_lp::configuration::Configuration;
use planar_lp::data::geometry::{Axis, Extent, Point};
use planar_lp::data::geometry::polygon::FeasibleRegion;
use planar_lp::data::linear_program::elements::{LinearProgramType, Status};
use planar_lp::data::linear_program::general_form::LinearProgram;
use planar_lp::io::{problems, Scene};

use super::Drawing;

fn draw(scene: &Scene<f64>, samples: usize) -> Drawing {
    let mut drawing = Drawing::default();
    let result = scene.render(&mut drawing, samples).unwrap();
    assert_eq!(drawing.status.as_ref(), Some(&result));
    drawing
}

#[test]
fn diet() {
    let scene = problems::diet().unwrap();
    let drawing = draw(&scene, 21);

    let polygon = match drawing.region.unwrap() {
        FeasibleRegion::Polygon(polygon) => polygon,
        other => panic!("Expected a polygon, got {:?}", other),
    };
    assert!(polygon.is_truncated());
    let (optimum, value) = drawing.optimum.unwrap();
    assert_abs_diff_eq!(optimum.x, 0_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(optimum.y, 50_f64 / 3_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(value, 400_f64 / 3_f64, epsilon = 1e-9);
    assert!(polygon.vertices().iter().any(|vertex| vertex.distance(&optimum) < 1e-9));
    assert!(polygon.contains(&optimum, 1e-9));

    assert_eq!(drawing.constraints.len(), 3);
    assert_eq!(drawing.iso_lines.iter().map(|(target, _)| *target).collect::<Vec<_>>(), scene.iso_targets());
    for (target, points) in &drawing.iso_lines {
        for point in points {
            assert_abs_diff_eq!(12_f64 * point.x + 8_f64 * point.y, *target, epsilon = 1e-9);
            assert!(scene.extent().contains(point, 1e-9));
        }
    }
}

#[test]
fn mixture() {
    let drawing = draw(&problems::mixture().unwrap(), 5);

    match drawing.region.unwrap() {
        FeasibleRegion::Degenerate(points) => {
            assert!(points.iter().all(|point| point.distance(&Point::new(0.5, 0.5)) < 1e-7));
        },
        other => panic!("Expected a single point, got {:?}", other),
    }
    let (optimum, value) = drawing.optimum.unwrap();
    assert_abs_diff_eq!(optimum.x, 0.5, epsilon = 1e-9);
    assert_abs_diff_eq!(value, 22.5, epsilon = 1e-9);
}

#[test]
fn investment() {
    let drawing = draw(&problems::investment().unwrap(), 11);

    let (optimum, value) = drawing.optimum.unwrap();
    assert_abs_diff_eq!(optimum.x, 2_500_f64, epsilon = 1e-6);
    assert_abs_diff_eq!(optimum.y, 7_500_f64, epsilon = 1e-6);
    assert_abs_diff_eq!(value, 85_000_f64, epsilon = 1e-6);
    // The iso-line through the optimum touches the feasible segment
    let (_, points) = drawing.iso_lines.iter().find(|(target, _)| *target == 85_000_f64).unwrap();
    assert!(!points.is_empty());
    assert!(matches!(drawing.region, Some(FeasibleRegion::Degenerate(_))));
}

#[test]
fn unconstrained_window() {
    let program = LinearProgram::maximize(vec![1_f64, 1_f64]).build().unwrap();
    let extent = Extent::new(-1_f64, 3_f64, 2_f64, 4_f64).unwrap();
    let scene = Scene::new("quadrant", program, extent).unwrap()
        .with_iso_lines(vec![5_f64], Axis::Y);
    let drawing = draw(&scene, 3);

    assert_eq!(drawing.status, Some(LinearProgramType::Unbounded));
    assert!(drawing.optimum.is_none());
    assert!(drawing.constraints.is_empty());
    match drawing.region.unwrap() {
        // Only x >= 0 cuts the window
        FeasibleRegion::Polygon(polygon) => {
            assert_eq!(polygon.vertices().len(), 4);
            assert_abs_diff_eq!(polygon.area(), 6_f64, epsilon = 1e-9);
            assert!(polygon.is_truncated());
        },
        other => panic!("Expected a rectangle, got {:?}", other),
    }
    // y = 2, 3, 4 gives x = 3, 2, 1
    assert_eq!(drawing.iso_lines[0].1, vec![Point::new(3_f64, 2_f64), Point::new(2_f64, 3_f64), Point::new(1_f64, 4_f64)]);
}

#[test]
fn tolerance_decides_feasibility() {
    let program = LinearProgram::minimize(vec![1_f64, 1_f64])
        .greater_than(vec![1_f64, 0_f64], 1_f64 + 1e-8)
        .less_than(vec![1_f64, 0_f64], 1_f64)
        .build()
        .unwrap();
    let extent = Extent::new(0_f64, 2_f64, 0_f64, 2_f64).unwrap();
    let scene = Scene::new("thin", program, extent).unwrap();

    assert_eq!(draw(&scene, 2).status.map(|result| result.status()), Some(Status::Infeasible));
    let relaxed = scene.with_configuration(Configuration::default().with_tolerance(1e-6));
    assert_eq!(draw(&relaxed, 2).status.map(|result| result.status()), Some(Status::Optimal));
}
