//! Color gradients with positioned stops.

use serde::{Deserialize, Serialize};

/// Entries in a colour map lookup table.
pub const LUT_SIZE: usize = 256;

/// A color stop in the gradient.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub position: f64,
    pub color: [u8; 3],
}

impl ColorStop {
    pub const fn new(position: f64, color: [u8; 3]) -> Self {
        Self { position, color }
    }
}

/// Piecewise-linear gradient over `[0, 1]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub stops: Vec<ColorStop>,
}

impl Gradient {
    /// Create a gradient from color stops. Stops are sorted by position.
    /// Requires at least one stop.
    pub fn new(mut stops: Vec<ColorStop>) -> Self {
        assert!(
            !stops.is_empty(),
            "Gradient must have at least one color stop"
        );
        stops.sort_by(|a, b| {
            a.position
                .partial_cmp(&b.position)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Self { stops }
    }

    /// Colour at `t`, interpolating linearly in RGB between the enclosing
    /// stops. `t` outside `[0, 1]` is clamped to the end stops.
    pub fn sample(&self, t: f64) -> [u8; 3] {
        let first = self.stops[0];
        let last = self.stops[self.stops.len() - 1];
        if self.stops.len() == 1 || t <= first.position {
            return first.color;
        }
        if t >= last.position {
            return last.color;
        }

        // Find segment
        let seg = self
            .stops
            .windows(2)
            .position(|pair| t <= pair[1].position)
            .unwrap_or(self.stops.len() - 2);
        let (s0, s1) = (self.stops[seg], self.stops[seg + 1]);

        // Local t in segment
        let span = s1.position - s0.position;
        let seg_t = if span.abs() < 1e-10 {
            0.0
        } else {
            ((t - s0.position) / span).clamp(0.0, 1.0)
        };

        let mut out = [0u8; 3];
        for (channel, value) in out.iter_mut().enumerate() {
            let a = s0.color[channel] as f64;
            let b = s1.color[channel] as f64;
            *value = (a + seg_t * (b - a)).round().clamp(0.0, 255.0) as u8;
        }
        out
    }

    /// Sample the gradient into a [`LUT_SIZE`]-entry lookup table.
    pub fn to_lut(&self) -> Vec<[u8; 3]> {
        (0..LUT_SIZE)
            .map(|i| self.sample(i as f64 / (LUT_SIZE - 1) as f64))
            .collect()
    }

    /// Same colours, mirrored end to end.
    pub fn reversed(&self) -> Self {
        Self::new(
            self.stops
                .iter()
                .map(|s| ColorStop::new(1.0 - s.position, s.color))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black_to_white() -> Gradient {
        Gradient::new(vec![
            ColorStop::new(0.0, [0, 0, 0]),
            ColorStop::new(1.0, [255, 255, 255]),
        ])
    }

    #[test]
    fn gradient_two_stops_endpoints() {
        let lut = black_to_white().to_lut();
        assert_eq!(lut.len(), LUT_SIZE);
        assert_eq!(lut[0], [0, 0, 0]);
        assert_eq!(lut[LUT_SIZE - 1], [255, 255, 255]);
    }

    #[test]
    fn gradient_midpoint_is_halfway() {
        assert_eq!(black_to_white().sample(0.5), [128, 128, 128]);
    }

    #[test]
    fn gradient_three_stops() {
        let gradient = Gradient::new(vec![
            ColorStop::new(0.0, [255, 0, 0]),
            ColorStop::new(0.5, [0, 255, 0]),
            ColorStop::new(1.0, [0, 0, 255]),
        ]);
        assert_eq!(gradient.sample(0.5), [0, 255, 0]);
        assert_eq!(gradient.sample(0.25), [128, 128, 0]);
        assert_eq!(gradient.sample(0.75), [0, 128, 128]);
    }

    #[test]
    fn stops_are_sorted_on_construction() {
        let gradient = Gradient::new(vec![
            ColorStop::new(1.0, [255, 255, 255]),
            ColorStop::new(0.0, [0, 0, 0]),
        ]);
        assert_eq!(gradient.stops[0].position, 0.0);
    }

    #[test]
    fn out_of_range_is_clamped() {
        let gradient = black_to_white();
        assert_eq!(gradient.sample(-3.0), [0, 0, 0]);
        assert_eq!(gradient.sample(7.0), [255, 255, 255]);
    }

    #[test]
    fn single_stop_is_constant() {
        let gradient = Gradient::new(vec![ColorStop::new(0.3, [10, 20, 30])]);
        assert!(gradient.to_lut().iter().all(|&c| c == [10, 20, 30]));
    }

    #[test]
    fn reversed_swaps_ends() {
        let reversed = black_to_white().reversed();
        assert_eq!(reversed.sample(0.0), [255, 255, 255]);
        assert_eq!(reversed.sample(1.0), [0, 0, 0]);
    }
}
