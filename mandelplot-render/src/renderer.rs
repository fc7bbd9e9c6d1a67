//! Turns a numeric field into a colour-mapped image.

use crate::{Colormap, Origin, RenderError, RenderSettings};
use image::{Rgb, RgbImage};
use mandelplot_compute::Field;
use std::path::Path;

/// Renders fields with one colour map and orientation.
///
/// Values are normalised linearly between the field's minimum and maximum
/// before colour lookup; a constant field maps every cell to the low end.
#[derive(Clone, Debug)]
pub struct PlotRenderer {
    settings: RenderSettings,
    colormap: Colormap,
}

impl PlotRenderer {
    /// Resolve the colour map named in `settings`.
    pub fn new(settings: RenderSettings) -> Result<Self, RenderError> {
        let colormap = Colormap::by_name(&settings.colormap)?;
        Ok(Self { settings, colormap })
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn colormap(&self) -> &Colormap {
        &self.colormap
    }

    /// Colour-map `values` (`height` rows of `width`, row-major) into an
    /// image.
    pub fn render(
        &self,
        values: &[f64],
        width: usize,
        height: usize,
    ) -> Result<RgbImage, RenderError> {
        if width == 0 || height == 0 || values.len() != width * height {
            return Err(RenderError::ShapeMismatch {
                width,
                height,
                actual: values.len(),
            });
        }

        let (lo, hi) = finite_range(values).unwrap_or((0.0, 0.0));
        let span = hi - lo;

        let mut img = RgbImage::new(width as u32, height as u32);
        for (row, chunk) in values.chunks(width).enumerate() {
            let y = match self.settings.origin {
                Origin::Lower => height - 1 - row,
                Origin::Upper => row,
            };
            for (x, &v) in chunk.iter().enumerate() {
                let t = if span > 0.0 { (v - lo) / span } else { 0.0 };
                img.put_pixel(x as u32, y as u32, Rgb(self.colormap.map(t)));
            }
        }
        Ok(img)
    }

    /// Render any field whose cells convert to `f64`.
    pub fn render_field<T>(&self, field: &Field<T>) -> Result<RgbImage, RenderError>
    where
        T: Copy + Into<f64>,
    {
        let values: Vec<f64> = field.values().iter().map(|&v| v.into()).collect();
        self.render(&values, field.width(), field.height())
    }

    /// Render `field` and write it to the configured output path.
    pub fn save_field<T>(&self, field: &Field<T>) -> Result<(), RenderError>
    where
        T: Copy + Into<f64>,
    {
        let img = self.render_field(field)?;
        save_png(&img, &self.settings.output)
    }
}

/// Write `img` as PNG, creating parent directories as needed.
pub fn save_png(img: &RgbImage, path: &Path) -> Result<(), RenderError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    img.save_with_format(path, image::ImageFormat::Png)?;
    log::info!(
        "Wrote {}x{} image to {}",
        img.width(),
        img.height(),
        path.display()
    );
    Ok(())
}

fn finite_range(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(origin: Origin) -> PlotRenderer {
        PlotRenderer::new(
            RenderSettings::default()
                .with_colormap("gray")
                .with_origin(origin),
        )
        .unwrap()
    }

    #[test]
    fn unknown_colormap_fails_at_construction() {
        let err = PlotRenderer::new(RenderSettings::default().with_colormap("bogus")).unwrap_err();
        assert!(matches!(err, RenderError::UnknownColormap(_)));
    }

    #[test]
    fn min_maps_to_low_end_and_max_to_high_end() {
        let img = gray(Origin::Upper)
            .render(&[0.0, 5.0, 10.0, 10.0], 2, 2)
            .unwrap();
        assert_eq!(img.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(1, 1), &Rgb([255, 255, 255]));
        assert_eq!(img.get_pixel(1, 0), &Rgb([128, 128, 128]));
    }

    #[test]
    fn lower_origin_puts_first_row_at_bottom() {
        let values = [0.0, 0.0, 1.0, 1.0];
        let upper = gray(Origin::Upper).render(&values, 2, 2).unwrap();
        let lower = gray(Origin::Lower).render(&values, 2, 2).unwrap();
        assert_eq!(upper.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(lower.get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(lower.get_pixel(0, 1), &Rgb([0, 0, 0]));
    }

    #[test]
    fn constant_field_maps_to_low_end() {
        let img = gray(Origin::Upper).render(&[7.0; 6], 3, 2).unwrap();
        assert!(img.pixels().all(|p| *p == Rgb([0, 0, 0])));
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let err = gray(Origin::Upper).render(&[1.0, 2.0, 3.0], 2, 2).unwrap_err();
        assert!(matches!(
            err,
            RenderError::ShapeMismatch {
                width: 2,
                height: 2,
                actual: 3
            }
        ));
    }

    #[test]
    fn finite_range_ignores_non_finite() {
        assert_eq!(
            finite_range(&[f64::NAN, 2.0, f64::INFINITY, -1.0]),
            Some((-1.0, 2.0))
        );
        assert_eq!(finite_range(&[f64::NAN]), None);
    }
}
