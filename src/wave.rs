//! Pulse math for the dot-wave background.
//!
//! Everything here is target-independent: the grid layout and the
//! traveling-pulse displacement are plain arithmetic over CSS-pixel
//! coordinates, so the host can unit-test them while the wasm side
//! feeds the results into a canvas.

/// Fixed animation constants, in CSS pixels per frame where applicable.
#[derive(Clone, Copy, Debug)]
pub struct WaveConfig {
    pub dot_radius: f64,
    pub dot_spacing: f64,
    pub speed: f64,
    pub pulse_width: f64,
    pub amplitude: f64,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            dot_radius: 1.5,
            dot_spacing: 30.0,
            speed: 1.0,
            pulse_width: 100.0,
            amplitude: 15.0,
        }
    }
}

/// A grid point. `y` is the resting height; the displaced height is
/// computed per frame and never stored back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub x: f64,
    pub y: f64,
}

/// Which edge of the page a surface sits on. The pulse sweeps inward
/// from the outer edge on both sides, so the right surface mirrors the
/// travel direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn orient(self, center: f64, surface_width: f64) -> f64 {
        match self {
            Side::Left => center,
            Side::Right => surface_width - center,
        }
    }
}

/// Lay out dots row by row at a half-spacing inset from every edge.
pub fn dot_grid(width: f64, height: f64, spacing: f64) -> Vec<Dot> {
    let mut dots = Vec::new();
    let mut y = spacing / 2.0;
    while y < height {
        let mut x = spacing / 2.0;
        while x < width {
            dots.push(Dot { x, y });
            x += spacing;
        }
        y += spacing;
    }
    dots
}

/// Current pulse center for a surface of the given width.
///
/// The travel distance is padded by one pulse width so the pulse enters
/// and leaves the surface fully before wrapping; the result stays in
/// `[-pulse_width / 2, surface_width + pulse_width / 2)`.
pub fn pulse_center(clock: u64, surface_width: f64, cfg: &WaveConfig) -> f64 {
    let travel = surface_width + cfg.pulse_width;
    (clock as f64 * cfg.speed) % travel - cfg.pulse_width / 2.0
}

/// Vertical displacement for a dot at `distance` from the pulse center.
/// Gaussian falloff; far dots decay to effectively zero without an
/// explicit cutoff.
pub fn lift(distance: f64, cfg: &WaveConfig) -> f64 {
    let falloff = distance / (cfg.pulse_width * 0.4);
    cfg.amplitude * (-falloff * falloff).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_center_stays_in_travel_band() {
        let cfg = WaveConfig::default();
        let width = 480.0;
        for clock in 0..20_000 {
            let c = pulse_center(clock, width, &cfg);
            assert!(
                c >= -cfg.pulse_width / 2.0 && c < width + cfg.pulse_width / 2.0,
                "clock {clock}: center {c} out of band"
            );
        }
    }

    #[test]
    fn lift_peaks_at_full_amplitude() {
        let cfg = WaveConfig::default();
        assert_eq!(lift(0.0, &cfg), cfg.amplitude);
    }

    #[test]
    fn lift_at_falloff_radius_is_amplitude_over_e() {
        let cfg = WaveConfig::default();
        let expected = cfg.amplitude * (-1.0f64).exp();
        let got = lift(cfg.pulse_width * 0.4, &cfg);
        assert!((got - expected).abs() < 1e-9, "got {got}, expected {expected}");
    }

    #[test]
    fn grid_covers_a_300px_row_with_ten_dots() {
        let dots = dot_grid(300.0, 300.0, 30.0);
        let first_row: Vec<_> = dots.iter().filter(|d| d.y == 15.0).collect();
        assert_eq!(first_row.len(), 10);
        assert_eq!(first_row.first().map(|d| d.x), Some(15.0));
        assert_eq!(first_row.last().map(|d| d.x), Some(285.0));
        assert_eq!(dots.len(), 100);
    }

    #[test]
    fn right_side_mirrors_the_center() {
        let width = 480.0;
        assert_eq!(Side::Left.orient(120.0, width), 120.0);
        assert_eq!(Side::Right.orient(120.0, width), 360.0);
    }

    #[test]
    fn empty_surface_yields_no_dots() {
        assert!(dot_grid(0.0, 0.0, 30.0).is_empty());
        assert!(dot_grid(10.0, 0.0, 30.0).is_empty());
    }
}
