//! Gas particles confined by the container walls
//!
//! Particles never interact with each other; the only physics is straight
//! flight at constant speed and specular reflection off the four walls.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use crate::container::ContainerRect;

/// Draw range for the initial speed of a particle (px/s)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedRange {
    pub min: f32,
    pub max: f32,
}

impl SpeedRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

/// A single gas particle
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    /// Container the particle was last placed or updated against
    pub area: ContainerRect,
}

impl Particle {
    /// Create a particle at a random spot inside `area`.
    pub fn spawn<R: Rng + ?Sized>(
        area: ContainerRect,
        radius: f32,
        speeds: SpeedRange,
        rng: &mut R,
    ) -> Self {
        let mut particle = Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            radius,
            area,
        };
        particle.reset(area, speeds, rng);
        particle
    }

    /// Re-seed position, direction and speed within `area`.
    pub fn reset<R: Rng + ?Sized>(&mut self, area: ContainerRect, speeds: SpeedRange, rng: &mut R) {
        self.area = area;

        let inset = 2.0 * self.radius;
        self.position = Vec2::new(
            rng.gen::<f32>() * (area.width - inset) + area.left + self.radius,
            rng.gen::<f32>() * (area.height - inset) + area.top + self.radius,
        );

        let angle = rng.gen::<f32>() * TAU;
        let speed = rng.gen::<f32>() * (speeds.max - speeds.min) + speeds.min;
        self.velocity = Vec2::new(angle.cos(), angle.sin()) * speed;
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Whether the centre lies outside `area`.
    pub fn is_outside(&self, area: &ContainerRect) -> bool {
        !area.contains(self.position)
    }

    /// Advance by `dt` seconds at `speed_scale` times the stored velocity,
    /// then bounce off any wall the particle has reached.
    pub fn update(&mut self, dt: f32, area: ContainerRect, speed_scale: f32) {
        self.area = area;
        self.position += self.velocity * dt * speed_scale;

        let r = self.radius;
        if self.position.x - r < area.left {
            self.position.x = area.left + r;
            self.velocity.x = -self.velocity.x;
        } else if self.position.x + r > area.right {
            self.position.x = area.right - r;
            self.velocity.x = -self.velocity.x;
        }

        if self.position.y - r < area.top {
            self.position.y = area.top + r;
            self.velocity.y = -self.velocity.y;
        } else if self.position.y + r > area.bottom {
            self.position.y = area.bottom - r;
            self.velocity.y = -self.velocity.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SPEEDS: SpeedRange = SpeedRange { min: 30.0, max: 120.0 };

    fn area() -> ContainerRect {
        ContainerRect::new(50.0, 40.0, 200.0, 100.0)
    }

    fn particle_at(position: Vec2, velocity: Vec2) -> Particle {
        Particle {
            position,
            velocity,
            radius: 3.0,
            area: area(),
        }
    }

    #[test]
    fn spawn_lands_inside_inset_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let p = Particle::spawn(area(), 3.0, SPEEDS, &mut rng);
            assert!(area().contains_circle(p.position, p.radius), "{:?}", p.position);
            let s = p.speed();
            assert!(s >= 30.0 - 1e-3 && s < 120.0 + 1e-3, "speed {s}");
        }
    }

    #[test]
    fn free_flight_moves_linearly() {
        let mut p = particle_at(Vec2::new(100.0, 80.0), Vec2::new(40.0, -20.0));
        p.update(0.5, area(), 1.0);
        assert_eq!(p.position, Vec2::new(120.0, 70.0));
        assert_eq!(p.velocity, Vec2::new(40.0, -20.0));
    }

    #[test]
    fn speed_scale_multiplies_displacement() {
        let mut p = particle_at(Vec2::new(100.0, 80.0), Vec2::new(10.0, 0.0));
        p.update(1.0, area(), 2.0);
        assert_eq!(p.position.x, 120.0);
        // stored velocity is untouched
        assert_eq!(p.velocity.x, 10.0);
    }

    #[test]
    fn right_wall_reflects_and_clamps() {
        let mut p = particle_at(Vec2::new(245.0, 80.0), Vec2::new(100.0, 0.0));
        p.update(0.1, area(), 1.0);
        assert_eq!(p.position.x, 250.0 - 3.0);
        assert_eq!(p.velocity.x, -100.0);
    }

    #[test]
    fn top_wall_reflects_and_clamps() {
        let mut p = particle_at(Vec2::new(100.0, 45.0), Vec2::new(0.0, -60.0));
        p.update(0.1, area(), 1.0);
        assert_eq!(p.position.y, 40.0 + 3.0);
        assert_eq!(p.velocity.y, 60.0);
    }

    #[test]
    fn corner_bounce_flips_both_axes() {
        let mut p = particle_at(Vec2::new(54.0, 136.0), Vec2::new(-50.0, 50.0));
        p.update(0.1, area(), 1.0);
        assert_eq!(p.position, Vec2::new(53.0, 137.0));
        assert_eq!(p.velocity, Vec2::new(50.0, -50.0));
    }

    #[test]
    fn update_adopts_new_container() {
        let mut p = particle_at(Vec2::new(100.0, 80.0), Vec2::ZERO);
        let smaller = ContainerRect::new(60.0, 50.0, 100.0, 60.0);
        p.update(0.016, smaller, 1.0);
        assert_eq!(p.area, smaller);
    }

    #[test]
    fn reset_relocates_into_new_area() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut p = particle_at(Vec2::new(900.0, 900.0), Vec2::new(1.0, 1.0));
        let target = ContainerRect::new(300.0, 300.0, 40.0, 40.0);
        assert!(p.is_outside(&target));
        p.reset(target, SPEEDS, &mut rng);
        assert!(target.contains_circle(p.position, p.radius));
        assert_eq!(p.area, target);
    }

    #[test]
    fn long_run_never_escapes() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut p = Particle::spawn(area(), 3.0, SPEEDS, &mut rng);
        for _ in 0..10_000 {
            p.update(1.0 / 60.0, area(), 2.0);
            assert!(area().contains_circle(p.position, p.radius));
        }
    }
}
