//! Built-in colour map gradients.

use super::{ColorStop, Gradient};

/// Names of every built-in colour map. Each also has a `_r` reversed form.
pub const COLORMAP_NAMES: &[&str] = &["jet", "viridis", "gray", "hot", "cool", "fire", "ocean"];

/// Gradient for a built-in colour map name, without the `_r` suffix.
pub fn preset_gradient(name: &str) -> Option<Gradient> {
    let stops = match name {
        "jet" => jet(),
        "viridis" => viridis(),
        "gray" => vec![
            ColorStop::new(0.0, [0, 0, 0]),
            ColorStop::new(1.0, [255, 255, 255]),
        ],
        "hot" => vec![
            ColorStop::new(0.0, [11, 0, 0]),
            ColorStop::new(0.365, [255, 0, 0]),
            ColorStop::new(0.746, [255, 255, 0]),
            ColorStop::new(1.0, [255, 255, 255]),
        ],
        "cool" => vec![
            ColorStop::new(0.0, [0, 255, 255]),
            ColorStop::new(1.0, [255, 0, 255]),
        ],
        "fire" => vec![
            ColorStop::new(0.0, [0, 0, 0]),
            ColorStop::new(0.2, [128, 0, 0]),
            ColorStop::new(0.4, [255, 0, 0]),
            ColorStop::new(0.6, [255, 128, 0]),
            ColorStop::new(0.8, [255, 255, 0]),
            ColorStop::new(1.0, [255, 255, 255]),
        ],
        "ocean" => vec![
            ColorStop::new(0.0, [0, 0, 64]),
            ColorStop::new(0.25, [0, 64, 128]),
            ColorStop::new(0.5, [0, 128, 192]),
            ColorStop::new(0.75, [64, 192, 255]),
            ColorStop::new(1.0, [255, 255, 255]),
        ],
        _ => return None,
    };
    Some(Gradient::new(stops))
}

// Dark blue through cyan and yellow to dark red.
fn jet() -> Vec<ColorStop> {
    vec![
        ColorStop::new(0.0, [0, 0, 128]),
        ColorStop::new(0.11, [0, 0, 255]),
        ColorStop::new(0.125, [0, 0, 255]),
        ColorStop::new(0.34, [0, 219, 255]),
        ColorStop::new(0.35, [0, 229, 247]),
        ColorStop::new(0.375, [21, 255, 226]),
        ColorStop::new(0.64, [239, 255, 8]),
        ColorStop::new(0.65, [247, 246, 0]),
        ColorStop::new(0.66, [255, 236, 0]),
        ColorStop::new(0.89, [255, 19, 0]),
        ColorStop::new(0.91, [232, 0, 0]),
        ColorStop::new(1.0, [128, 0, 0]),
    ]
}

fn viridis() -> Vec<ColorStop> {
    vec![
        ColorStop::new(0.0, [68, 1, 84]),
        ColorStop::new(0.125, [72, 40, 120]),
        ColorStop::new(0.25, [62, 73, 137]),
        ColorStop::new(0.375, [49, 104, 142]),
        ColorStop::new(0.5, [38, 130, 142]),
        ColorStop::new(0.625, [31, 158, 137]),
        ColorStop::new(0.75, [53, 183, 121]),
        ColorStop::new(0.875, [110, 206, 88]),
        ColorStop::new(1.0, [253, 231, 37]),
    ]
}
