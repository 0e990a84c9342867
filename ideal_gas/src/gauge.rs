//! Log-scaled pressure gauge

use crate::config::GasConfig;
use crate::container::ContainerRect;

/// Maps a pressure onto the [0, 1] fill of a bar spanning
/// `[min_pressure, max_pressure]` on a log10 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureGauge {
    pub min_pressure: f64,
    pub max_pressure: f64,
}

impl PressureGauge {
    pub fn new(min_pressure: f64, max_pressure: f64) -> Self {
        Self {
            min_pressure,
            max_pressure,
        }
    }

    pub fn fill_fraction(&self, pressure: f64) -> f64 {
        // NaN falls through max/min to the lower bound
        let p = pressure.max(self.min_pressure).min(self.max_pressure);
        let lo = self.min_pressure.log10();
        let hi = self.max_pressure.log10();
        ((p.log10() - lo) / (hi - lo)).clamp(0.0, 1.0)
    }
}

impl Default for PressureGauge {
    fn default() -> Self {
        Self::new(1e2, 1e7)
    }
}

/// Where the vertical gauge bar sits on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeLayout {
    pub frame: ContainerRect,
}

impl GaugeLayout {
    /// Bar of `gauge_width` along the right edge, as tall as the container area.
    pub fn from_config(config: &GasConfig) -> Self {
        let height = config.canvas_height - 2.0 * config.area_padding - config.gauge_reserve;
        let x = config.canvas_width - config.gauge_width - config.gauge_margin;
        Self {
            frame: ContainerRect::new(x, config.area_padding, config.gauge_width, height),
        }
    }

    /// Filled part of the bar, anchored at the bottom, in whole pixels.
    pub fn fill_rect(&self, fraction: f64) -> ContainerRect {
        let fill_h = (self.frame.height * fraction.clamp(0.0, 1.0) as f32).floor();
        ContainerRect::new(
            self.frame.left,
            self.frame.bottom - fill_h,
            self.frame.width,
            fill_h,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturates_below_and_above() {
        let g = PressureGauge::default();
        assert_eq!(g.fill_fraction(1e2), 0.0);
        assert_eq!(g.fill_fraction(1.0), 0.0);
        assert_eq!(g.fill_fraction(0.0), 0.0);
        assert_eq!(g.fill_fraction(-5.0), 0.0);
        assert_eq!(g.fill_fraction(1e7), 1.0);
        assert_eq!(g.fill_fraction(1e12), 1.0);
        assert_eq!(g.fill_fraction(f64::INFINITY), 1.0);
    }

    #[test]
    fn nan_reads_empty() {
        assert_eq!(PressureGauge::default().fill_fraction(f64::NAN), 0.0);
    }

    #[test]
    fn decade_steps_are_even() {
        let g = PressureGauge::default();
        assert!((g.fill_fraction(1e3) - 0.2).abs() < 1e-12);
        assert!((g.fill_fraction(1e5) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn monotone_between_bounds() {
        let g = PressureGauge::default();
        let mut prev = g.fill_fraction(1e2);
        for i in 1..=100 {
            let p = 10f64.powf(2.0 + 5.0 * i as f64 / 100.0);
            let f = g.fill_fraction(p);
            assert!(f > prev);
            prev = f;
        }
    }

    #[test]
    fn layout_follows_canvas() {
        let layout = GaugeLayout::from_config(&GasConfig::default());
        assert_eq!(layout.frame.left, 540.0 - 24.0 - 10.0);
        assert_eq!(layout.frame.top, 20.0);
        assert_eq!(layout.frame.height, 480.0);
    }

    #[test]
    fn fill_grows_from_the_bottom() {
        let layout = GaugeLayout::from_config(&GasConfig::default());
        let half = layout.fill_rect(0.5);
        assert_eq!(half.height, 240.0);
        assert_eq!(half.bottom, layout.frame.bottom);
        assert_eq!(layout.fill_rect(0.0).height, 0.0);
        assert_eq!(layout.fill_rect(1.0).height, 480.0);
    }
}
