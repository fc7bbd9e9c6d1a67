use mandelplot_core::MANDELBROT_CONFIG;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where row 0 of the field is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Row 0 at the bottom, so the imaginary axis points up.
    #[default]
    Lower,
    /// Row 0 at the top.
    Upper,
}

/// Everything the renderer needs besides the field itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub colormap: String,
    pub output: PathBuf,
    pub origin: Origin,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            colormap: MANDELBROT_CONFIG.default_colormap.to_string(),
            output: PathBuf::from("mandelbrot.png"),
            origin: Origin::default(),
        }
    }
}

impl RenderSettings {
    pub fn with_colormap(mut self, colormap: impl Into<String>) -> Self {
        self.colormap = colormap.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }
}
