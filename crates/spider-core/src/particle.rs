use crate::config::FieldConfig;
use crate::pointer::PointerState;
use crate::surface::{Rgba, SurfaceSize};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Spawn point. Not read by the simulation after spawning.
    pub base_position: Vec2,
    pub size: f32,
    pub color: Rgba,
    /// Personal multiplier applied to the pointer repulsion.
    pub density: f32,
    pub velocity: Vec2,
}

impl Particle {
    pub fn new(position: Vec2, size: f32, color: Rgba, density: f32, velocity: Vec2) -> Self {
        Self {
            position,
            base_position: position,
            size,
            color,
            density,
            velocity,
        }
    }

    /// Random particle somewhere inside `bounds`.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: SurfaceSize, cfg: &FieldConfig) -> Self {
        let size = rng.gen::<f32>() * cfg.size_span + cfg.min_size;
        let position = Vec2::new(
            rng.gen::<f32>() * bounds.width,
            rng.gen::<f32>() * bounds.height,
        );
        let alpha = rng.gen::<f32>() * (1.0 - cfg.min_alpha) + cfg.min_alpha;
        let density = rng.gen::<f32>() * cfg.density_span + cfg.min_density;
        let velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * cfg.max_speed,
            (rng.gen::<f32>() - 0.5) * cfg.max_speed,
        );
        Self::new(position, size, Rgba::new(cfg.rgb, alpha), density, velocity)
    }

    /// Drift one step and bounce off the surface edges.
    ///
    /// The edge test runs on the new position, so a particle can sit up to one
    /// velocity step outside the surface before it heads back.
    #[inline]
    pub fn drift(&mut self, bounds: SurfaceSize) {
        self.position += self.velocity;
        if self.position.x <= 0.0 || self.position.x >= bounds.width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y <= 0.0 || self.position.y >= bounds.height {
            self.velocity.y = -self.velocity.y;
        }
    }

    /// Push the particle away from the pointer with a linear falloff that is
    /// 1 at the pointer and 0 at the radius edge.
    #[inline]
    pub fn repel(&mut self, pointer: &PointerState) {
        let to_pointer = pointer.position() - self.position;
        let distance = to_pointer.length();
        // distance == 0 has no direction
        if distance <= 0.0 || distance >= pointer.radius {
            return;
        }
        let force = (pointer.radius - distance) / pointer.radius;
        self.position -= to_pointer / distance * force * self.density;
    }

    #[inline]
    pub fn update(&mut self, pointer: &PointerState, bounds: SurfaceSize) {
        self.drift(bounds);
        self.repel(pointer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn gray(a: f32) -> Rgba {
        Rgba::new([150, 150, 150], a)
    }

    #[test]
    fn spawn_respects_configured_ranges() {
        let cfg = FieldConfig::default();
        let bounds = SurfaceSize::new(640.0, 480.0);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let p = Particle::spawn(&mut rng, bounds, &cfg);
            assert!(p.size >= 1.0 && p.size < 6.0);
            assert!(p.position.x >= 0.0 && p.position.x < bounds.width);
            assert!(p.position.y >= 0.0 && p.position.y < bounds.height);
            assert!(p.color.a >= 0.75 && p.color.a < 1.0);
            assert!(p.density >= 1.0 && p.density <= 101.0);
            assert!(p.velocity.x >= -0.125 && p.velocity.x < 0.125);
            assert!(p.velocity.y >= -0.125 && p.velocity.y < 0.125);
            assert_eq!(p.base_position, p.position);
        }
    }

    #[test]
    fn drift_flips_velocity_after_crossing_edge() {
        let bounds = SurfaceSize::new(100.0, 100.0);
        let mut p = Particle::new(
            Vec2::new(99.9, 50.0),
            2.0,
            gray(1.0),
            10.0,
            Vec2::new(0.125, 0.0),
        );
        p.drift(bounds);
        // one step outside, already heading back
        assert!(p.position.x > bounds.width);
        assert_eq!(p.velocity.x, -0.125);
        p.drift(bounds);
        assert!(p.position.x < bounds.width);
        assert_eq!(p.velocity.x, -0.125);
    }

    #[test]
    fn repel_pushes_away_from_pointer() {
        let pointer = PointerState::new(100.0, 100.0, 150.0);
        let mut p = Particle::new(Vec2::new(100.0, 50.0), 2.0, gray(1.0), 3.0, Vec2::ZERO);
        p.repel(&pointer);
        // d = 50, force = 100/150, displacement = 2 straight up
        assert_eq!(p.position.x, 100.0);
        assert!((p.position.y - 48.0).abs() < 1e-4);
    }

    #[test]
    fn repel_ignores_particles_outside_radius() {
        let pointer = PointerState::new(0.0, 0.0, 150.0);
        let mut p = Particle::new(Vec2::new(150.0, 0.0), 2.0, gray(1.0), 50.0, Vec2::ZERO);
        p.repel(&pointer);
        assert_eq!(p.position, Vec2::new(150.0, 0.0));
    }

    #[test]
    fn repel_skips_coincident_particle() {
        let pointer = PointerState::new(40.0, 40.0, 150.0);
        let mut p = Particle::new(Vec2::new(40.0, 40.0), 2.0, gray(1.0), 50.0, Vec2::ZERO);
        p.repel(&pointer);
        assert_eq!(p.position, Vec2::new(40.0, 40.0));
    }
}
