//! Simulation context: inputs, stepping and the per-frame snapshot
//!
//! `GasSimulation` owns everything that evolves: the slider state, the
//! particle set and the RNG used to seed particles. Input events adjust
//! the population and re-seed particles the new container no longer
//! holds; `step` advances particles once per rendered frame.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GasConfig;
use crate::container::{ContainerRect, GeometryMapper, VisualizationArea};
use crate::error::Result;
use crate::format;
use crate::gauge::{GaugeLayout, PressureGauge};
use crate::particle::SpeedRange;
use crate::population::ParticlePopulation;
use crate::thermo::ThermodynamicState;

/// A discrete change coming from the host UI
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Temperature(f64),
    Moles(f64),
    Volume(f64),
    /// Restore the slider defaults
    Reset,
}

/// What the renderer needs to draw one particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleView {
    pub position: Vec2,
    pub radius: f32,
}

/// Formatted readouts for the info panel
#[derive(Debug, Clone, PartialEq)]
pub struct Readouts {
    pub temperature: String,
    pub moles: String,
    pub volume: String,
    pub pressure: String,
}

/// Everything the rendering side reads after a step
#[derive(Debug, Clone)]
pub struct Frame {
    pub container: ContainerRect,
    pub particles: Vec<ParticleView>,
    pub pressure: f64,
    pub gauge_fraction: f64,
    pub gauge_frame: ContainerRect,
    pub gauge_fill: ContainerRect,
    pub target_count: usize,
    pub speed_scale: f32,
    pub readouts: Readouts,
}

/// The simulation context
pub struct GasSimulation {
    config: GasConfig,
    state: ThermodynamicState,
    mapper: GeometryMapper,
    gauge: PressureGauge,
    gauge_layout: GaugeLayout,
    particles: ParticlePopulation,
    target_count: usize,
    rng: StdRng,
}

impl GasSimulation {
    /// Validate `config` and start at the slider defaults.
    pub fn new(config: GasConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Like [`new`](Self::new) but with a reproducible particle layout.
    pub fn with_seed(config: GasConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GasConfig, rng: StdRng) -> Result<Self> {
        config.validate()?;

        let state = Self::default_state(&config);
        let mapper = GeometryMapper::new(VisualizationArea::from_config(&config));
        let gauge = PressureGauge::new(config.pressure_display_min, config.pressure_display_max);
        let gauge_layout = GaugeLayout::from_config(&config);

        let mut sim = Self {
            config,
            state,
            mapper,
            gauge,
            gauge_layout,
            particles: ParticlePopulation::new(),
            target_count: 0,
            rng,
        };
        sim.apply_inputs();
        log::info!(
            "gas simulation ready: T={} K, n={} mol, V={} m³, {} particles",
            sim.state.temperature,
            sim.state.moles,
            sim.state.volume,
            sim.particles.len()
        );
        Ok(sim)
    }

    fn default_state(config: &GasConfig) -> ThermodynamicState {
        ThermodynamicState::new(
            config.temperature.default,
            config.moles.default,
            config.volume.default,
        )
    }

    pub fn config(&self) -> &GasConfig {
        &self.config
    }

    pub fn state(&self) -> &ThermodynamicState {
        &self.state
    }

    pub fn particles(&self) -> &ParticlePopulation {
        &self.particles
    }

    /// Particle count requested by the current mole slider.
    pub fn target_count(&self) -> usize {
        self.target_count
    }

    pub fn pressure(&self) -> f64 {
        self.state.pressure()
    }

    /// Container for the current volume.
    pub fn container(&self) -> ContainerRect {
        self.mapper.rect_for(self.state.volume, &self.config.volume)
    }

    /// Speed multiplier: 0.4 at the coldest slider position, 2.0 at the hottest.
    pub fn speed_scale(&self) -> f32 {
        let frac = self
            .config
            .temperature
            .fraction(self.state.temperature)
            .clamp(0.0, 1.0);
        (0.4 + 1.6 * frac) as f32
    }

    fn speeds(&self) -> SpeedRange {
        SpeedRange::new(self.config.min_speed, self.config.max_speed)
    }

    /// Apply one UI event, then bring the population in line with it.
    pub fn handle(&mut self, event: InputEvent) {
        log::debug!("input event: {:?}", event);
        match event {
            InputEvent::Temperature(t) => self.state.temperature = t,
            InputEvent::Moles(n) => self.state.moles = n,
            InputEvent::Volume(v) => self.state.volume = v,
            InputEvent::Reset => {
                self.reset();
                return;
            }
        }
        self.apply_inputs();
    }

    /// Set all three inputs at once, as read from the sliders.
    pub fn set_inputs(&mut self, temperature: f64, moles: f64, volume: f64) {
        self.state.update(temperature, moles, volume);
        self.apply_inputs();
    }

    /// Restore T, n and V to their defaults and recompute the population.
    pub fn reset(&mut self) {
        self.state = Self::default_state(&self.config);
        self.apply_inputs();
        log::info!(
            "reset to T={} K, n={} mol, V={} m³",
            self.state.temperature,
            self.state.moles,
            self.state.volume
        );
    }

    fn apply_inputs(&mut self) {
        let area = self.container();
        self.target_count =
            self.particles
                .follow_moles(self.state.moles, &self.config, area, &mut self.rng);
        let reseeded = self.reseed_stranded(area);
        if reseeded > 0 {
            log::debug!("re-seeded {} particles after the container changed", reseeded);
        }
    }

    /// Re-seed every particle that does not fit inside `area`, walls included.
    fn reseed_stranded(&mut self, area: ContainerRect) -> usize {
        let speeds = self.speeds();
        let mut reseeded = 0;
        for particle in self.particles.iter_mut() {
            if !area.contains_circle(particle.position, particle.radius) {
                particle.reset(area, speeds, &mut self.rng);
                reseeded += 1;
            }
        }
        reseeded
    }

    /// Advance every particle by `dt` seconds.
    ///
    /// Any particle whose centre lies outside the container is re-seeded
    /// inside it instead of moving. Returns how many were re-seeded.
    pub fn step(&mut self, dt: f32) -> usize {
        let dt = dt.max(0.0);
        let area = self.container();
        let scale = self.speed_scale();
        let speeds = self.speeds();

        let mut reseeded = 0;
        for particle in self.particles.iter_mut() {
            if particle.is_outside(&area) {
                particle.reset(area, speeds, &mut self.rng);
                reseeded += 1;
            } else {
                particle.update(dt, area, scale);
            }
        }

        if reseeded > 0 {
            log::trace!("re-seeded {} particles outside the container", reseeded);
        }
        reseeded
    }

    pub fn readouts(&self) -> Readouts {
        Readouts {
            temperature: format::format_temperature(self.state.temperature),
            moles: format::format_moles(self.state.moles),
            volume: format::format_volume(self.state.volume),
            pressure: format::format_pressure(self.pressure()),
        }
    }

    /// Snapshot of the current state for drawing.
    pub fn frame(&self) -> Frame {
        let pressure = self.pressure();
        let gauge_fraction = self.gauge.fill_fraction(pressure);

        Frame {
            container: self.container(),
            particles: self
                .particles
                .iter()
                .map(|p| ParticleView {
                    position: p.position,
                    radius: p.radius,
                })
                .collect(),
            pressure,
            gauge_fraction,
            gauge_frame: self.gauge_layout.frame,
            gauge_fill: self.gauge_layout.fill_rect(gauge_fraction),
            target_count: self.target_count,
            speed_scale: self.speed_scale(),
            readouts: self.readouts(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    fn sim() -> GasSimulation {
        GasSimulation::with_seed(GasConfig::default(), 1234).expect("default config is valid")
    }

    #[test]
    fn starts_at_defaults_with_population() {
        let s = sim();
        assert_eq!(*s.state(), ThermodynamicState::new(300.0, 1.0, 0.1));
        assert_eq!(s.particles().len(), s.target_count());
        assert!(s.target_count() >= 5);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut cfg = GasConfig::default();
        cfg.min_particles = 0;
        assert!(matches!(
            GasSimulation::with_seed(cfg, 1),
            Err(ConfigError::InvalidParticles(_))
        ));
    }

    #[test]
    fn speed_scale_spans_slider() {
        let mut s = sim();
        s.handle(InputEvent::Temperature(100.0));
        assert!((s.speed_scale() - 0.4).abs() < 1e-6);
        s.handle(InputEvent::Temperature(1000.0));
        assert!((s.speed_scale() - 2.0).abs() < 1e-6);
        s.handle(InputEvent::Temperature(5000.0));
        assert!((s.speed_scale() - 2.0).abs() < 1e-6);
        s.handle(InputEvent::Temperature(0.0));
        assert!((s.speed_scale() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn moles_event_resizes_population() {
        let mut s = sim();
        s.handle(InputEvent::Moles(5.0));
        assert_eq!(s.particles().len(), 200);
        s.handle(InputEvent::Moles(0.1));
        assert_eq!(s.particles().len(), 8);
    }

    #[test]
    fn volume_event_leaves_no_particle_outside_the_drawn_container() {
        let mut s = GasSimulation::with_seed(GasConfig::default(), 99).expect("default config is valid");
        s.handle(InputEvent::Volume(0.5));
        for _ in 0..240 {
            s.step(1.0 / 60.0);
        }
        s.handle(InputEvent::Volume(0.01));

        let f = s.frame();
        for p in &f.particles {
            assert!(
                f.container.contains_circle(p.position, p.radius),
                "{:?} outside {:?}",
                p.position,
                f.container
            );
        }
        assert_eq!(s.step(1.0 / 60.0), 0);
    }

    #[test]
    fn step_does_not_change_population() {
        let mut s = sim();
        let before = s.particles().len();
        for _ in 0..120 {
            s.step(1.0 / 60.0);
        }
        assert_eq!(s.particles().len(), before);
    }

    #[test]
    fn negative_dt_is_treated_as_zero() {
        let mut s = sim();
        let before: Vec<Vec2> = s.particles().iter().map(|p| p.position).collect();
        s.step(-1.0);
        let after: Vec<Vec2> = s.particles().iter().map(|p| p.position).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn frame_mirrors_state() {
        let s = sim();
        let f = s.frame();
        assert_eq!(f.container, s.container());
        assert_eq!(f.particles.len(), s.particles().len());
        assert_eq!(f.readouts.pressure, "2.494e4 Pa");
        assert_eq!(f.readouts.temperature, "300.0 K");
        assert!(f.gauge_fraction > 0.0 && f.gauge_fraction < 1.0);
        assert_eq!(f.gauge_fill.bottom, f.gauge_frame.bottom);
    }
}
