//! Example: perspective divide and its edge cases
//!
//! Shows how projecting out of homogeneous form treats weights near 0 and 1,
//! and what error messages a visualizer would display for bad input.

use xform::homogeneous::{WEIGHT_TOLERANCE, from_homogeneous};
use xform::parser::{format_table, parse_matrix};
use xform::{apply_transform, apply_transform_or_empty};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== Homogeneous Perspective Example ===\n");

    // A simple perspective transform: w = 1 + z / 4.
    let perspective = "1 0 0 0\n0 1 0 0\n0 0 1 0\n0 0 0.25 1";
    let points = "1 1 0\n1 1 4\n1 1 12\n1 1 -4";
    let output = apply_transform(points, perspective, true)?;
    println!("Points:\n{}\n", format_table(&output.points));
    println!("After perspective divide:\n{}\n", format_table(&output.transformed));
    println!("The last point has w = 0 and is returned undivided.\n");

    println!("Weight tolerance: {WEIGHT_TOLERANCE:e}");
    let weights = parse_matrix("2 4 1e-13\n2 4 1e-11\n2 4 1.0000000000001\n2 4 2")?;
    println!("Projected:\n{}\n", format_table(&from_homogeneous(&weights)));

    let bad_inputs = [
        ("1 2\n3 4 5", "1 0\n0 1", false),
        ("1 2\n3 four", "1 0\n0 1", false),
        ("1 2", "1 0\n0 1", true),
    ];
    for (points, transform, homogeneous) in bad_inputs {
        let (output, error) = apply_transform_or_empty(points, transform, homogeneous);
        match error {
            Some(err) => println!("{points:?} -> error: {err}"),
            None => println!("{points:?} -> {}", format_table(&output.transformed)),
        }
    }

    Ok(())
}
