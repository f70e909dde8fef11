//! The particle field: spawning, per-frame update and the connection pass.

use crate::config::FieldConfig;
use crate::connections::{self, Connection};
use crate::particle::Particle;
use crate::pointer::PointerState;
use crate::surface::{DrawSurface, Rgba, SurfaceSize};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldState {
    /// No particle set yet.
    Uninitialized,
    /// Particles present; the frame loop drives update, draw and connect.
    Running,
}

pub struct ParticleField {
    config: FieldConfig,
    size: SurfaceSize,
    particles: Vec<Particle>,
    state: FieldState,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: FieldConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Reproducible field, mostly for tests.
    pub fn with_seed(config: FieldConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: FieldConfig, rng: StdRng) -> Self {
        Self {
            config,
            size: SurfaceSize::default(),
            particles: Vec::new(),
            state: FieldState::Uninitialized,
            rng,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access for hosts that want to place particles by hand.
    pub fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Discard the current particles and spawn a fresh set sized to the
    /// surface area.
    pub fn initialize(&mut self, width: f32, height: f32) {
        self.size = SurfaceSize::new(width, height);
        self.particles.clear();
        let count = self.config.particle_count(width, height);
        self.particles.reserve(count);
        for _ in 0..count {
            let p = Particle::spawn(&mut self.rng, self.size, &self.config);
            self.particles.push(p);
        }
        self.state = FieldState::Running;
        log::debug!(
            "[field] initialized {}x{} with {} particles",
            width,
            height,
            count
        );
    }

    /// New surface dimensions. Everything from before is thrown away.
    pub fn resize(&mut self, width: f32, height: f32) {
        log::debug!(
            "[field] resize {}x{} -> {}x{}",
            self.size.width,
            self.size.height,
            width,
            height
        );
        self.initialize(width, height);
    }

    /// Update every particle in stored order and draw it right after its own
    /// update.
    pub fn advance_frame<S: DrawSurface + ?Sized>(
        &mut self,
        pointer: &PointerState,
        surface: &mut S,
    ) {
        let bounds = self.size;
        for p in &mut self.particles {
            p.update(pointer, bounds);
            surface.fill_circle(p.position, p.size, p.color);
        }
    }

    /// Pairs currently close enough to be joined, via the configured strategy.
    pub fn connections(&self) -> Vec<Connection> {
        let positions: Vec<Vec2> = self.particles.iter().map(|p| p.position).collect();
        connections::scan(
            &positions,
            self.config.connect_distance_sq,
            self.config.strategy,
        )
    }

    pub fn render_connections<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        let line = self.config.line_width;
        for c in self.connections() {
            let a = &self.particles[c.a];
            let b = &self.particles[c.b];
            let color = Rgba::new(self.config.rgb, c.opacity);
            surface.stroke_line(a.position, b.position, color, line);
        }
    }

    /// One animation tick: clear, update and draw particles, then connect.
    pub fn frame<S: DrawSurface + ?Sized>(
        &mut self,
        pointer: &PointerState,
        surface: &mut S,
    ) {
        surface.clear_rect(Vec2::ZERO, self.size);
        if self.state == FieldState::Uninitialized {
            return;
        }
        self.advance_frame(pointer, surface);
        self.render_connections(surface);
    }
}
