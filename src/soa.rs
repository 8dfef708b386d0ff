//! Structure of arrays.
//!
//! Positions, velocities and masses live in three parallel vectors.
//! Index `i` denotes the same particle in all of them, and a pass only walks
//! the vectors it needs.

use std::mem;

use log::debug;

use crate::{initial_state, kinetic_energy, Error, Simulation, Vec3};

/// Particle system storing each field in its own contiguous sequence.
///
/// The three sequences are allocated together and always have the same length.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSystem {
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    masses: Vec<f32>,
}

impl ParticleSystem {
    fn fill(
        mut positions: Vec<Vec3>,
        mut velocities: Vec<Vec3>,
        mut masses: Vec<f32>,
        count: usize,
    ) -> Self {
        for i in 0..count {
            let (position, velocity, mass) = initial_state(i);
            positions.push(position);
            velocities.push(velocity);
            masses.push(mass);
        }
        let system = ParticleSystem {
            positions,
            velocities,
            masses,
        };
        debug!(
            "soa: built {} particles, {} bytes",
            count,
            system.storage_bytes()
        );
        system
    }

    /// Create a system of `count` particles with the deterministic initial state.
    pub fn new(count: usize) -> Self {
        Self::fill(
            Vec::with_capacity(count),
            Vec::with_capacity(count),
            Vec::with_capacity(count),
            count,
        )
    }

    /// Like `new`, but reports allocation failure instead of aborting.
    pub fn try_new(count: usize) -> Result<Self, Error> {
        let (mut positions, mut velocities, mut masses) = (Vec::new(), Vec::new(), Vec::new());
        positions
            .try_reserve_exact(count)
            .map_err(Error::allocation(count))?;
        velocities
            .try_reserve_exact(count)
            .map_err(Error::allocation(count))?;
        masses
            .try_reserve_exact(count)
            .map_err(Error::allocation(count))?;
        Ok(Self::fill(positions, velocities, masses, count))
    }

    /// Positions, in index order.
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Velocities, in index order.
    #[inline]
    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    /// Masses, in index order.
    #[inline]
    pub fn masses(&self) -> &[f32] {
        &self.masses
    }

    /// Advance every position by `velocity * dt`. Masses are not touched.
    #[inline(never)]
    pub fn update_positions(&mut self, dt: f32) {
        for (position, velocity) in self.positions.iter_mut().zip(&self.velocities) {
            *position = position.add(velocity.scale(dt));
        }
    }

    /// Sum of `0.5 * mass * |velocity|^2`, accumulated in index order.
    /// Only velocities and masses are read.
    #[inline(never)]
    pub fn compute_kinetic_energy(&self) -> f32 {
        let mut total = 0.0;
        for (&velocity, &mass) in self.velocities.iter().zip(&self.masses) {
            total += kinetic_energy(velocity, mass);
        }
        total
    }

    /// Advance every velocity by `gravity * dt`. Only velocities are touched.
    #[inline(never)]
    pub fn apply_gravity(&mut self, gravity: Vec3, dt: f32) {
        for velocity in &mut self.velocities {
            *velocity = velocity.add(gravity.scale(dt));
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
    const LAYOUT: &'static str = "soa";

    fn new(count: usize) -> Self {
        ParticleSystem::new(count)
    }

    fn try_new(count: usize) -> Result<Self, Error> {
        ParticleSystem::try_new(count)
    }

    #[inline]
    fn len(&self) -> usize {
        debug_assert_eq!(self.positions.len(), self.velocities.len());
        debug_assert_eq!(self.positions.len(), self.masses.len());
        self.positions.len()
    }

    #[inline]
    fn position(&self, index: usize) -> Vec3 {
        self.positions[index]
    }

    #[inline]
    fn velocity(&self, index: usize) -> Vec3 {
        self.velocities[index]
    }

    #[inline]
    fn mass(&self, index: usize) -> f32 {
        self.masses[index]
    }

    fn storage_bytes(&self) -> usize {
        mem::size_of_val(self.positions.as_slice())
            + mem::size_of_val(self.velocities.as_slice())
            + mem::size_of_val(self.masses.as_slice())
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
