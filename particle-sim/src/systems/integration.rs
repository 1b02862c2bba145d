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
//! Semi-implicit Euler integration
//!
//! For every particle, in order:
//!
//! 1. v ← v + a·dt
//! 2. p ← p + v·dt, using the velocity just updated
//! 3. a ← 0
//!
//! Clearing the acceleration is what lets force systems start from zero each
//! tick; skipping it would make acceleration grow without bound.

use crate::ecs::components::{Body, Particle};
use crate::ecs::{EntityId, System, World};
use crate::error::SimResult;
use crate::math::Vec2;
use crate::resources::SimResources;

/// Advance one particle by `dt`
pub fn integrate_particle(particle: &mut Particle, dt: f64) {
    particle.velocity += particle.acceleration * dt;
    particle.position += particle.velocity * dt;
    particle.acceleration = Vec2::ZERO;
}

/// Advances velocity and position of every particle by the fixed timestep
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegrationSystem;

impl IntegrationSystem {
    /// Create the integration system
    pub fn new() -> Self {
        IntegrationSystem
    }
}

impl System<Body, SimResources> for IntegrationSystem {
    fn filter(&self, component: &Body, _resources: &SimResources) -> bool {
        component.is_particle()
    }

    fn update(
        &mut self,
        entities: &[EntityId],
        world: &mut World<Body>,
        resources: &mut SimResources,
    ) -> SimResult<()> {
        let dt = resources.dt;
        for entity in entities {
            if let Some(particle) = world.get_mut(*entity).and_then(Body::as_particle_mut) {
                integrate_particle(particle, dt);
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "IntegrationSystem"
    }
}
