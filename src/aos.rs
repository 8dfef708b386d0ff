//! Array of structures.
//!
//! Each particle is one `#[repr(C)]` record, and records are packed back to back.
//! Any pass over the system loads whole records, including the fields it never reads.

use std::mem;

use log::debug;

use crate::{initial_state, kinetic_energy, Error, Simulation, Vec3};

/// Full state of one particle, stored as a single unit.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Position in world space.
    pub position: Vec3,
    /// Velocity per unit of time.
    pub velocity: Vec3,
    /// Mass, assumed positive.
    pub mass: f32,
}

impl Particle {
    /// Create a new particle record.
    #[inline]
    pub fn new(position: Vec3, velocity: Vec3, mass: f32) -> Self {
        Particle {
            position,
            velocity,
            mass,
        }
    }
}

/// Particle system storing one contiguous sequence of [`Particle`] records.
///
/// Particle `i` is always the `i`-th record; the sequence never grows or shrinks
/// after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    fn fill(mut particles: Vec<Particle>, count: usize) -> Self {
        particles.extend((0..count).map(|i| {
            let (position, velocity, mass) = initial_state(i);
            Particle::new(position, velocity, mass)
        }));
        debug!(
            "aos: built {} particles, {} bytes",
            count,
            count * mem::size_of::<Particle>()
        );
        ParticleSystem { particles }
    }

    /// Create a system of `count` particles with the deterministic initial state.
    pub fn new(count: usize) -> Self {
        Self::fill(Vec::with_capacity(count), count)
    }

    /// Like `new`, but reports allocation failure instead of aborting.
    pub fn try_new(count: usize) -> Result<Self, Error> {
        let mut particles = Vec::new();
        particles
            .try_reserve_exact(count)
            .map_err(Error::allocation(count))?;
        Ok(Self::fill(particles, count))
    }

    /// All particle records, in index order.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance every position by `velocity * dt`.
    #[inline(never)]
    pub fn update_positions(&mut self, dt: f32) {
        for particle in &mut self.particles {
            particle.position = particle.position.add(particle.velocity.scale(dt));
        }
    }

    /// Sum of `0.5 * mass * |velocity|^2`, accumulated in index order.
    #[inline(never)]
    pub fn compute_kinetic_energy(&self) -> f32 {
        let mut total = 0.0;
        for particle in &self.particles {
            total += kinetic_energy(particle.velocity, particle.mass);
        }
        total
    }

    /// Advance every velocity by `gravity * dt`.
    #[inline(never)]
    pub fn apply_gravity(&mut self, gravity: Vec3, dt: f32) {
        for particle in &mut self.particles {
            particle.velocity = particle.velocity.add(gravity.scale(dt));
        }
    }

    /// Apply gravity, integrate positions, and return the new kinetic energy.
    #[inline(never)]
    pub fn update(&mut self, gravity: Vec3, dt: f32) -> f32 {
        self.apply_gravity(gravity, dt);
        self.update_positions(dt);
        self.compute_kinetic_energy()
    }
}

impl Simulation for ParticleSystem {
    const LAYOUT: &'static str = "aos";

    fn new(count: usize) -> Self {
        ParticleSystem::new(count)
    }

    fn try_new(count: usize) -> Result<Self, Error> {
        ParticleSystem::try_new(count)
    }

    #[inline]
    fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    fn position(&self, index: usize) -> Vec3 {
        self.particles[index].position
    }

    #[inline]
    fn velocity(&self, index: usize) -> Vec3 {
        self.particles[index].velocity
    }

    #[inline]
    fn mass(&self, index: usize) -> f32 {
        self.particles[index].mass
    }

    fn storage_bytes(&self) -> usize {
        mem::size_of_val(self.particles.as_slice())
    }

    fn update_positions(&mut self, dt: f32) {
        ParticleSystem::update_positions(self, dt)
    }

    fn compute_kinetic_energy(&self) -> f32 {
        ParticleSystem::compute_kinetic_energy(self)
    }

    fn apply_gravity(&mut self, gravity: Vec3, dt: f32) {
        ParticleSystem::apply_gravity(self, gravity, dt)
    }

    fn update(&mut self, gravity: Vec3, dt: f32) -> f32 {
        ParticleSystem::update(self, gravity, dt)
    }
}
