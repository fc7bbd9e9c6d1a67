use mandelplot_core::{EscapeParams, F64Complex};
use serde::{Deserialize, Serialize};

/// Outcome of iterating a single point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EscapeResult {
    /// First k with |z_k| > R, or the iteration budget if the orbit stayed
    /// bounded.
    pub iterations: u32,
    /// Whether the point escaped within the budget
    pub escaped: bool,
    /// |z_k|² at escape for smooth coloring. Interior points store 0.0.
    pub final_z_norm_sq: f64,
}

impl EscapeResult {
    /// Continuous iteration count μ = k + 1 - log₂(ln |z_k|).
    ///
    /// Interior points return exactly `max_iterations`. Escaped points are
    /// clamped to `[0, max_iterations)`, so the budget only ever marks a
    /// bounded cell.
    pub fn smooth_iterations(&self, max_iterations: u32) -> f64 {
        let max = max_iterations as f64;
        if !self.escaped {
            return max;
        }
        let escaped_max = max - max * f64::EPSILON;

        // Since we have |z|²: ln(|z|) = ln(|z|²) / 2
        let smooth = if self.final_z_norm_sq > 1.0 {
            let log_z = self.final_z_norm_sq.ln() / 2.0;
            let nu = log_z.ln() / std::f64::consts::LN_2;
            self.iterations as f64 + 1.0 - nu
        } else {
            self.iterations as f64
        };

        if smooth.is_finite() {
            smooth.clamp(0.0, escaped_max)
        } else {
            (self.iterations as f64).min(escaped_max)
        }
    }
}

/// Escape-time iteration for one point.
///
/// Iterates z₀ = 0, z_{k+1} = z_k² + c and returns the smallest k in
/// `[0, N)` with |z_k|² > R². The comparison is strict: an orbit that lands
/// exactly on the escape circle has not escaped yet.
///
/// Allocation-free and independent of any shared state.
#[inline]
pub fn escape_time(c: F64Complex, params: &EscapeParams) -> EscapeResult {
    let max_iterations = params.max_iterations();
    let escape_radius_sq = params.escape_radius_sq();

    let mut zx = 0.0_f64;
    let mut zy = 0.0_f64;

    for k in 0..max_iterations {
        let zx_sq = zx * zx;
        let zy_sq = zy * zy;

        let z_norm_sq = zx_sq + zy_sq;
        if z_norm_sq > escape_radius_sq {
            return EscapeResult {
                iterations: k,
                escaped: true,
                final_z_norm_sq: z_norm_sq,
            };
        }

        // z = z^2 + c
        let new_zx = zx_sq - zy_sq + c.re;
        zy = 2.0 * zx * zy + c.im;
        zx = new_zx;
    }

    EscapeResult {
        iterations: max_iterations,
        escaped: false,
        final_z_norm_sq: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(max_iterations: u32, escape_radius: f64) -> EscapeParams {
        EscapeParams::new(max_iterations, escape_radius).unwrap()
    }

    #[test]
    fn origin_is_in_set() {
        for (n, r) in [(1, 0.5), (100, 2.0), (1000, 1e6)] {
            let result = escape_time(F64Complex::ZERO, &params(n, r));
            assert!(!result.escaped);
            assert_eq!(result.iterations, n);
            assert_eq!(result.final_z_norm_sq, 0.0);
        }
    }

    #[test]
    fn c_two_escapes_at_one_below_radius_two() {
        // z1 = 2, |z1| = 2 > 1.9
        let result = escape_time(F64Complex::new(2.0, 0.0), &params(100, 1.9));
        assert!(result.escaped);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.final_z_norm_sq, 4.0);
    }

    #[test]
    fn landing_on_the_radius_is_not_escaping() {
        // |z1| = 2 is not strictly greater than R = 2; z2 = 6 escapes
        let result = escape_time(F64Complex::new(2.0, 0.0), &params(100, 2.0));
        assert!(result.escaped);
        assert_eq!(result.iterations, 2);
        assert_eq!(result.final_z_norm_sq, 36.0);
    }

    #[test]
    fn c_two_stays_within_budget_for_larger_radius() {
        // Only z0 = 0 and z1 = 2 are tested with N = 2; neither exceeds 2.1
        let result = escape_time(F64Complex::new(2.0, 0.0), &params(2, 2.1));
        assert!(!result.escaped);
        assert_eq!(result.iterations, 2);
    }

    #[test]
    fn main_cardioid_point_in_set() {
        let result = escape_time(F64Complex::new(-0.5, 0.0), &params(500, 2.0));
        assert!(!result.escaped, "Point (-0.5, 0) should be in set");
    }

    #[test]
    fn period_two_bulb_point_in_set() {
        let result = escape_time(F64Complex::new(-1.0, 0.0), &params(1000, 2.0));
        assert!(!result.escaped);
    }

    #[test]
    fn point_on_boundary_high_iterations() {
        let result = escape_time(F64Complex::new(-0.75, 0.1), &params(1000, 2.0));
        assert!(result.escaped);
        assert!(
            result.iterations > 10,
            "Boundary point should take many iterations"
        );
    }

    #[test]
    fn huge_c_escapes_at_one() {
        let result = escape_time(F64Complex::new(1e200, 1e200), &params(10, 2.0));
        assert!(result.escaped);
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn smooth_value_of_interior_is_budget() {
        let result = escape_time(F64Complex::ZERO, &params(64, 2.0));
        assert_eq!(result.smooth_iterations(64), 64.0);
    }

    #[test]
    fn smooth_value_stays_near_integer_count() {
        let p = params(1000, 256.0);
        let result = escape_time(F64Complex::new(-0.75, 0.1), &p);
        let mu = result.smooth_iterations(1000);
        let k = result.iterations as f64;
        // |z_k| lies between R and roughly R², so log₂(ln |z_k|) is in (0, 3.5)
        assert!(mu > k - 3.0 && mu < k + 1.0, "k = {k}, mu = {mu}");
    }

    #[test]
    fn escaped_smooth_value_stays_below_budget() {
        // Escaping on the last step with |z|² barely above 1 pushes μ past N
        // before clamping.
        let last_step = EscapeResult {
            iterations: 99,
            escaped: true,
            final_z_norm_sq: 1.0001,
        };
        let mu = last_step.smooth_iterations(100);
        assert!(mu < 100.0, "mu = {mu}");
        assert!(mu > 99.0, "mu = {mu}");

        let first_step = EscapeResult {
            iterations: 0,
            escaped: true,
            final_z_norm_sq: 1.0001,
        };
        assert!(first_step.smooth_iterations(1) < 1.0);
    }

    #[test]
    fn smooth_value_is_continuous_across_band_edges() {
        // Neighbouring points along the real axis should differ by far less
        // than a whole iteration band once smoothed.
        let p = params(200, 1000.0);
        let a = escape_time(F64Complex::new(0.30, 0.0), &p).smooth_iterations(200);
        let b = escape_time(F64Complex::new(0.3001, 0.0), &p).smooth_iterations(200);
        assert!((a - b).abs() < 1.0, "a = {a}, b = {b}");
    }
}
