//! Slider ranges, canvas layout and particle settings
//!
//! Everything the core needs to know about its host lives here, so the
//! simulation can be driven identically by the windowed app and by tests.

use crate::error::{ConfigError, Result};

/// Bounds and default of one slider-controlled quantity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl ParameterRange {
    pub const fn new(min: f64, max: f64, default: f64) -> Self {
        Self { min, max, default }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `value` within the range; 0 at `min`, 1 at `max`, unclamped.
    pub fn fraction(&self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }

    fn validate(&self, name: &'static str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.max <= self.min {
            return Err(ConfigError::EmptyRange {
                name,
                min: self.min,
                max: self.max,
            });
        }
        if !(self.min..=self.max).contains(&self.default) {
            return Err(ConfigError::DefaultOutOfRange {
                name,
                value: self.default,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Full configuration of a gas simulation
#[derive(Debug, Clone, PartialEq)]
pub struct GasConfig {
    /// Temperature slider (K)
    pub temperature: ParameterRange,
    /// Mole-count slider (mol)
    pub moles: ParameterRange,
    /// Volume slider (m³)
    pub volume: ParameterRange,

    /// Drawing canvas size in pixels
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Inset of the visualization area from the canvas edges
    pub area_padding: f32,
    /// Vertical space kept free below the container for gauge labels
    pub gauge_reserve: f32,

    pub particle_radius: f32,
    /// Particle density at the mole-count baseline
    pub base_particles: f64,
    pub min_particles: usize,
    pub max_particles: usize,
    /// Initial particle speeds are drawn from `[min, max)` px/s
    pub min_speed: f32,
    pub max_speed: f32,

    /// Pressure bounds of the gauge scale (Pa)
    pub pressure_display_min: f64,
    pub pressure_display_max: f64,
    pub gauge_width: f32,
    pub gauge_margin: f32,
}

impl GasConfig {
    /// Check every range and layout constraint the core depends on.
    pub fn validate(&self) -> Result<()> {
        self.temperature.validate("temperature")?;
        self.moles.validate("moles")?;
        self.volume.validate("volume")?;

        let max_w = self.canvas_width - 2.0 * self.area_padding;
        let max_h = self.canvas_height - 2.0 * self.area_padding - self.gauge_reserve;
        if !(max_w > 0.0 && max_h > 0.0) {
            return Err(ConfigError::CanvasTooSmall {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }

        if !(self.particle_radius > 0.0) {
            return Err(ConfigError::InvalidParticles(format!(
                "radius must be > 0, got {}",
                self.particle_radius
            )));
        }
        if self.min_particles == 0 || self.min_particles > self.max_particles {
            return Err(ConfigError::InvalidParticles(format!(
                "count range [{}, {}] is empty",
                self.min_particles, self.max_particles
            )));
        }
        if !(self.min_speed >= 0.0 && self.min_speed < self.max_speed) {
            return Err(ConfigError::InvalidParticles(format!(
                "speed range [{}, {}) is empty",
                self.min_speed, self.max_speed
            )));
        }

        if !(self.pressure_display_min > 0.0 && self.pressure_display_min < self.pressure_display_max)
        {
            return Err(ConfigError::InvalidGaugeBounds {
                min: self.pressure_display_min,
                max: self.pressure_display_max,
            });
        }
        Ok(())
    }
}

impl Default for GasConfig {
    fn default() -> Self {
        Self {
            temperature: ParameterRange::new(100.0, 1000.0, 300.0),
            moles: ParameterRange::new(0.1, 5.0, 1.0),
            volume: ParameterRange::new(0.01, 0.5, 0.1),

            canvas_width: 540.0,
            canvas_height: 620.0,
            area_padding: 20.0,
            gauge_reserve: 100.0,

            particle_radius: 3.0,
            base_particles: 40.0,
            min_particles: 5,
            max_particles: 250,
            min_speed: 30.0,
            max_speed: 120.0,

            pressure_display_min: 1e2,
            pressure_display_max: 1e7,
            gauge_width: 24.0,
            gauge_margin: 10.0,
        }
    }
}
