/*!
Particle systems in two memory layouts.

The crate ships the same tiny particle simulation twice:

  - [`aos::ParticleSystem`] keeps one contiguous `Vec` of [`aos::Particle`] records,
    so every pass over the particles drags the whole record through the cache.
  - [`soa::ParticleSystem`] keeps positions, velocities and masses in three parallel
    `Vec`s, so every pass only loads the fields it actually reads.

Both are built from the same deterministic initial state and perform the same
floating point operations in the same order, so their results are bitwise identical.
What differs is the memory traffic, which is what the benchmarks measure.

```rust
# use particle_layout::{aos, soa, Simulation, Vec3};
let gravity = Vec3::new(0.0, -9.81, 0.0);
let mut a = aos::ParticleSystem::new(1000);
let mut s = soa::ParticleSystem::new(1000);
assert_eq!(a.update(gravity, 0.016), s.update(gravity, 0.016));
```
*/
#![warn(missing_docs)]

pub mod aos;
mod error;
pub mod soa;
mod vec3;

pub use crate::error::Error;
pub use crate::vec3::Vec3;

/// Initial `(position, velocity, mass)` of the particle at `index`.
///
/// The index is converted to `f32` before any product, so the state depends
/// on nothing but the index.
#[inline]
pub fn initial_state(index: usize) -> (Vec3, Vec3, f32) {
    let fi = index as f32;
    (
        Vec3::new(fi, fi * 2.0, fi * 3.0),
        Vec3::new(fi * 0.1, fi * 0.2, fi * 0.3),
        1.0 + fi * 0.01,
    )
}

/// Kinetic energy of a single particle: `0.5 * mass * |velocity|^2`.
#[inline]
pub(crate) fn kinetic_energy(velocity: Vec3, mass: f32) -> f32 {
    0.5 * mass * velocity.length_squared()
}

/// Common interface of both particle layouts.
///
/// Everything that drives a simulation generically (tests, benchmarks, the demo)
/// goes through this trait. It is meant for static dispatch only.
pub trait Simulation: Sized {
    /// Short name of the layout, used in reports.
    const LAYOUT: &'static str;

    /// Build a system of `count` particles, panicking if the storage can't be allocated.
    fn new(count: usize) -> Self;

    /// Build a system of `count` particles.
    fn try_new(count: usize) -> Result<Self, Error>;

    /// Number of particles.
    fn len(&self) -> usize;

    /// Returns `true` if the system holds no particles.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of the particle at `index`.
    fn position(&self, index: usize) -> Vec3;

    /// Velocity of the particle at `index`.
    fn velocity(&self, index: usize) -> Vec3;

    /// Mass of the particle at `index`.
    fn mass(&self, index: usize) -> f32;

    /// Bytes of backing storage holding the particles.
    fn storage_bytes(&self) -> usize;

    /// Advance every position by `velocity * dt`.
    fn update_positions(&mut self, dt: f32);

    /// Sum of the kinetic energies, accumulated in index order.
    fn compute_kinetic_energy(&self) -> f32;

    /// Advance every velocity by `gravity * dt`.
    fn apply_gravity(&mut self, gravity: Vec3, dt: f32);

    /// One full frame: gravity, then positions, then the resulting energy.
    fn update(&mut self, gravity: Vec3, dt: f32) -> f32 {
        self.apply_gravity(gravity, dt);
        self.update_positions(dt);
        self.compute_kinetic_energy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_formulas() {
        assert_eq!(initial_state(0), (Vec3::ZERO, Vec3::ZERO, 1.0));
        let (pos, vel, mass) = initial_state(2);
        assert_eq!(pos, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(vel, Vec3::new(2.0 * 0.1, 2.0 * 0.2, 2.0 * 0.3));
        assert_eq!(mass, 1.0 + 2.0 * 0.01);
    }

    #[test]
    fn single_particle_energy() {
        assert_eq!(kinetic_energy(Vec3::new(1.0, 2.0, 2.0), 2.0), 9.0);
        assert_eq!(kinetic_energy(Vec3::ZERO, 5.0), 0.0);
    }
}
