//! JSON run configuration: what to plot and how to draw it.

use crate::{RenderError, RenderSettings};
use mandelplot_core::PlotConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A full run, read from a single flat JSON object.
///
/// The plot parameters (`viewport`, `width`, `height`, `max_iterations`,
/// `escape_radius`) and the drawing settings (`colormap`, `output`,
/// `origin`) share one namespace. Missing keys take their defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(flatten)]
    pub plot: PlotConfig,
    #[serde(flatten)]
    pub render: RenderSettings,
}

impl RunConfig {
    pub fn from_json(json: &str) -> Result<Self, RenderError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded run config from {}", path.display());
        Ok(config)
    }
}
