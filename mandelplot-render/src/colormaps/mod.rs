mod gradient;
mod presets;

pub use gradient::{ColorStop, Gradient, LUT_SIZE};
pub use presets::{preset_gradient, COLORMAP_NAMES};

use crate::RenderError;

/// A named colour map resolved into a lookup table.
#[derive(Clone, Debug, PartialEq)]
pub struct Colormap {
    name: String,
    lut: Vec<[u8; 3]>,
}

impl Colormap {
    /// Resolve a colour map by name. A trailing `_r` reverses the map.
    pub fn by_name(name: &str) -> Result<Self, RenderError> {
        let (base, reversed) = match name.strip_suffix("_r") {
            Some(base) => (base, true),
            None => (name, false),
        };

        let gradient = preset_gradient(base)
            .ok_or_else(|| RenderError::UnknownColormap(name.to_string()))?;
        let gradient = if reversed {
            gradient.reversed()
        } else {
            gradient
        };

        Ok(Self::from_gradient(name, &gradient))
    }

    pub fn from_gradient(name: &str, gradient: &Gradient) -> Self {
        Self {
            name: name.to_string(),
            lut: gradient.to_lut(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Colour for a normalised value `t` in `[0, 1]`. Out-of-range and NaN
    /// inputs map to the nearest end of the table.
    #[inline]
    pub fn map(&self, t: f64) -> [u8; 3] {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let index = (t * (self.lut.len() - 1) as f64).round() as usize;
        self.lut[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        for name in COLORMAP_NAMES {
            let cmap = Colormap::by_name(name).unwrap();
            assert_eq!(cmap.name(), *name);
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = Colormap::by_name("plasma-ish").unwrap_err();
        assert!(matches!(err, RenderError::UnknownColormap(ref n) if n == "plasma-ish"));
        assert_eq!(err.to_string(), "unknown color map \"plasma-ish\"");
    }

    #[test]
    fn reversed_suffix_flips_map() {
        let gray = Colormap::by_name("gray").unwrap();
        let gray_r = Colormap::by_name("gray_r").unwrap();
        assert_eq!(gray.map(0.0), [0, 0, 0]);
        assert_eq!(gray_r.map(0.0), [255, 255, 255]);
        assert_eq!(gray_r.map(1.0), [0, 0, 0]);
    }

    #[test]
    fn bare_suffix_is_not_a_map() {
        assert!(Colormap::by_name("_r").is_err());
    }

    #[test]
    fn map_clamps_and_handles_nan() {
        let gray = Colormap::by_name("gray").unwrap();
        assert_eq!(gray.map(-1.0), [0, 0, 0]);
        assert_eq!(gray.map(2.0), [255, 255, 255]);
        assert_eq!(gray.map(f64::NAN), [0, 0, 0]);
    }
}
