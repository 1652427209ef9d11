//! Example: 3D transforms of the unit cube
//!
//! Applies each preset to the default cube in both linear and homogeneous mode
//! and prints the numeric results.

use xform::parser::format_table;
use xform::presets::{self, Axis, Preset};
use xform::{Dimension, TransformMode, apply_transform};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== 3D Transform Example ===\n");

    let cube = presets::default_points(Dimension::Three);
    let presets = [
        (
            "rotation about Y by 45 degrees",
            Preset::Rotation {
                axis: Axis::Y,
                degrees: 45.0,
            },
        ),
        (
            "scale by (2, 1, 0.5)",
            Preset::Scale {
                sx: 2.0,
                sy: 1.0,
                sz: 0.5,
            },
        ),
        (
            "translation by (0.8, 0.4, 0.2)",
            Preset::Translation {
                tx: 0.8,
                ty: 0.4,
                tz: 0.2,
            },
        ),
        ("shear of the XY plane", Preset::Shear { shx: 0.5, shy: 0.0 }),
    ];

    for mode in [TransformMode::Linear, TransformMode::Homogeneous] {
        for (name, preset) in &presets {
            let transform = preset.matrix(Dimension::Three, mode);
            let output = apply_transform(cube, &transform, mode.is_homogeneous())?;

            println!("--- {name} ({mode} mode) ---");
            println!("Transform:\n{}", format_table(&transform));
            println!("Transformed cube:\n{}\n", format_table(&output.transformed));
        }
    }

    Ok(())
}
