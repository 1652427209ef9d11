//! Example: 2D transform of a polygon, rendered side by side
//!
//! This example applies a homogeneous rotation + translation to the default
//! unit square and draws the original and transformed polygons to a PNG.

use plotters::prelude::*;
use xform::parser::format_table;
use xform::presets::{self, Axis, Preset};
use xform::{Dimension, Matrix, TransformMode, apply_transform_or_empty};

fn polygon(points: &Matrix) -> Vec<(f64, f64)> {
    let mut path: Vec<(f64, f64)> = points.row_iter().map(|r| (r[0], r[1])).collect();
    // Close the polygon.
    if path.len() > 2 {
        path.push(path[0]);
    }
    path
}

fn bounds(a: &Matrix, b: &Matrix, column: usize) -> (f64, f64) {
    a.column(column)
        .iter()
        .chain(b.column(column).iter())
        .fold((-5.0_f64, 5.0_f64), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== 2D Transform Example ===\n");

    let rotation = Preset::Rotation {
        axis: Axis::Z,
        degrees: 30.0,
    }
    .matrix(Dimension::Two, TransformMode::Homogeneous);
    let translation = presets::translation_2d(1.2, 0.4);
    let transform = xform::linalg::multiply(&translation, &rotation)?;

    println!("Transform (rotate 30 degrees, then translate by (1.2, 0.4)):");
    println!("{}\n", format_table(&transform));

    let (output, error) = apply_transform_or_empty(
        presets::default_points(Dimension::Two),
        &transform,
        true,
    );
    if let Some(err) = error {
        println!("Error: {err}");
    }

    println!("Original points:\n{}\n", format_table(&output.points));
    println!("Transformed points:\n{}", format_table(&output.transformed));

    let (min_x, max_x) = bounds(&output.points, &output.transformed, 0);
    let (min_y, max_y) = bounds(&output.points, &output.transformed, 1);

    let output_file = "transform_2d.png";
    let root = BitMapBackend::new(output_file, (560, 420)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Original vs transformed", ("sans-serif", 28).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(min_x..max_x, min_y..max_y)?;

    chart.configure_mesh().draw()?;

    chart
        .draw_series(LineSeries::new(polygon(&output.points), BLUE.stroke_width(2)))?
        .label("Original")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));
    chart.draw_series(
        output
            .points
            .row_iter()
            .map(|r| Circle::new((r[0], r[1]), 4, BLUE.filled())),
    )?;

    chart
        .draw_series(LineSeries::new(
            polygon(&output.transformed),
            RED.stroke_width(2),
        ))?
        .label("Transformed")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));
    chart.draw_series(output.transformed.row_iter().map(|r| {
        Rectangle::new(
            [(r[0] - 0.08, r[1] - 0.08), (r[0] + 0.08, r[1] + 0.08)],
            RED.filled(),
        )
    }))?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    println!("\nPlot saved to: {}", output_file);

    Ok(())
}
