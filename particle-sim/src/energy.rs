// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Energy and momentum diagnostics
//!
//! Aggregates over every particle in a world. With the `parallel` feature the
//! sums run on Rayon's thread pool; results match the sequential path up to
//! floating-point summation order.

use crate::ecs::components::{Body, Particle};
use crate::ecs::World;
use crate::math::Vec2;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Kinetic energy of one particle
///
/// KE = 0.5 * m * v²
pub fn kinetic_energy(particle: &Particle) -> f64 {
    0.5 * particle.mass() * Vec2::dot(particle.velocity, particle.velocity)
}

/// Linear momentum of one particle
pub fn momentum(particle: &Particle) -> Vec2 {
    particle.velocity * particle.mass()
}

fn particles(world: &World<Body>) -> Vec<&Particle> {
    world.iter().filter_map(|(_, body)| body.as_particle()).collect()
}

/// Total kinetic energy of all particles
pub fn total_kinetic_energy(world: &World<Body>) -> f64 {
    let particles = particles(world);

    #[cfg(feature = "parallel")]
    {
        particles.par_iter().map(|p| kinetic_energy(p)).sum()
    }
    #[cfg(not(feature = "parallel"))]
    {
        particles.iter().map(|p| kinetic_energy(p)).sum()
    }
}

/// Total linear momentum of all particles
pub fn total_momentum(world: &World<Body>) -> Vec2 {
    let particles = particles(world);

    #[cfg(feature = "parallel")]
    {
        particles
            .par_iter()
            .map(|p| momentum(p))
            .reduce(|| Vec2::ZERO, |a, b| a + b)
    }
    #[cfg(not(feature = "parallel"))]
    {
        particles.iter().fold(Vec2::ZERO, |acc, p| acc + momentum(p))
    }
}
