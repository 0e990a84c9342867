//! Mole count → live particle set

use rand::Rng;

use crate::config::{GasConfig, ParameterRange};
use crate::container::ContainerRect;
use crate::particle::{Particle, SpeedRange};

/// Number of particles to display for `moles`.
///
/// Linear in the slider position, from 0.2× to 5× `base`, then clamped to
/// `[min_count, max_count]`.
pub fn target_count(
    moles: f64,
    range: &ParameterRange,
    base: f64,
    min_count: usize,
    max_count: usize,
) -> usize {
    let raw = (base * (0.2 + 4.8 * range.fraction(moles))).floor();
    if raw.is_nan() {
        return min_count;
    }
    raw.clamp(min_count as f64, max_count as f64) as usize
}

/// The particle collection, grown and shrunk to follow the mole slider
#[derive(Debug, Clone, Default)]
pub struct ParticlePopulation {
    particles: Vec<Particle>,
}

impl ParticlePopulation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Particle> {
        self.particles.iter_mut()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    /// Spawn new particles in `area` or drop them from the end until the set
    /// holds exactly `target`. Survivors keep their position and velocity.
    pub fn resize_to<R: Rng + ?Sized>(
        &mut self,
        target: usize,
        area: ContainerRect,
        radius: f32,
        speeds: SpeedRange,
        rng: &mut R,
    ) {
        let before = self.particles.len();
        while self.particles.len() < target {
            self.particles.push(Particle::spawn(area, radius, speeds, rng));
        }
        self.particles.truncate(target);

        if before != target {
            log::debug!("particle population {} -> {}", before, target);
        }
    }

    /// Target count for `moles` under `config`, then [`resize_to`](Self::resize_to).
    pub fn follow_moles<R: Rng + ?Sized>(
        &mut self,
        moles: f64,
        config: &GasConfig,
        area: ContainerRect,
        rng: &mut R,
    ) -> usize {
        let target = target_count(
            moles,
            &config.moles,
            config.base_particles,
            config.min_particles,
            config.max_particles,
        );
        self.resize_to(
            target,
            area,
            config.particle_radius,
            SpeedRange::new(config.min_speed, config.max_speed),
            rng,
        );
        target
    }

    /// Mean speed of the stored velocities, before temperature scaling.
    pub fn mean_speed(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        self.particles.iter().map(Particle::speed).sum::<f32>() / self.particles.len() as f32
    }
}

impl<'a> IntoIterator for &'a ParticlePopulation {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}
