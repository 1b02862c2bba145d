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
//! Uniform gravity
//!
//! By default gravity *assigns* the acceleration of every particle, discarding
//! whatever another system wrote earlier in the tick. A simulation with more
//! than one force source should build gravity with
//! [`GravitySystem::accumulating`] so every force adds into the acceleration
//! and only integration clears it.

use crate::ecs::components::Body;
use crate::ecs::{EntityId, System, World};
use crate::error::SimResult;
use crate::math::Vec2;
use crate::resources::SimResources;

/// Default downward acceleration in units per second squared
pub const STANDARD_GRAVITY: f64 = 9.81;

/// How the gravity contribution is combined with existing acceleration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityMode {
    /// Replace the acceleration with `(0, g)`
    Overwrite,
    /// Add `(0, g)` to the acceleration
    Accumulate,
}

/// Applies a constant downward acceleration to every particle
#[derive(Debug, Clone, Copy)]
pub struct GravitySystem {
    g: f64,
    mode: GravityMode,
}

impl GravitySystem {
    /// Gravity of strength `g` that overwrites acceleration
    pub fn new(g: f64) -> Self {
        GravitySystem {
            g,
            mode: GravityMode::Overwrite,
        }
    }

    /// Gravity of strength `g` that adds into acceleration
    pub fn accumulating(g: f64) -> Self {
        GravitySystem {
            g,
            mode: GravityMode::Accumulate,
        }
    }

    /// Get the gravitational acceleration
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Get the combination mode
    pub fn mode(&self) -> GravityMode {
        self.mode
    }
}

impl Default for GravitySystem {
    fn default() -> Self {
        GravitySystem::new(STANDARD_GRAVITY)
    }
}

impl System<Body, SimResources> for GravitySystem {
    fn filter(&self, component: &Body, _resources: &SimResources) -> bool {
        component.is_particle()
    }

    fn update(
        &mut self,
        entities: &[EntityId],
        world: &mut World<Body>,
        _resources: &mut SimResources,
    ) -> SimResult<()> {
        let gravity = Vec2::new(0.0, self.g);
        for entity in entities {
            let Some(particle) = world.get_mut(*entity).and_then(Body::as_particle_mut) else {
                continue;
            };
            match self.mode {
                GravityMode::Overwrite => particle.acceleration = gravity,
                GravityMode::Accumulate => particle.acceleration += gravity,
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "GravitySystem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{BoundingBox, Particle};

    fn world_with_particle(acceleration: Vec2) -> (World<Body>, EntityId) {
        let mut world = World::new();
        let entity = world.create_entity(
            Particle::new(Vec2::ZERO, 1.0).with_acceleration(acceleration).into(),
        );
        (world, entity)
    }

    #[test]
    fn test_gravity_overwrites() {
        let (mut world, entity) = world_with_particle(Vec2::new(5.0, -3.0));
        let mut gravity = GravitySystem::default();

        gravity.update(&[entity], &mut world, &mut SimResources::default()).unwrap();

        let particle = world.get(entity).and_then(Body::as_particle).unwrap();
        assert_eq!(particle.acceleration, Vec2::new(0.0, STANDARD_GRAVITY));
    }

    #[test]
    fn test_gravity_accumulates() {
        let (mut world, entity) = world_with_particle(Vec2::new(5.0, -3.0));
        let mut gravity = GravitySystem::accumulating(2.0);

        gravity.update(&[entity], &mut world, &mut SimResources::default()).unwrap();

        let particle = world.get(entity).and_then(Body::as_particle).unwrap();
        assert_eq!(particle.acceleration, Vec2::new(5.0, -1.0));
    }

    #[test]
    fn test_gravity_filter() {
        let gravity = GravitySystem::new(1.0);
        let resources = SimResources::default();
        let bounds: Body = BoundingBox::new(Vec2::ZERO, Vec2::new(1.0, 1.0)).into();
        let particle: Body = Particle::new(Vec2::ZERO, 1.0).into();

        assert!(gravity.filter(&particle, &resources));
        assert!(!gravity.filter(&bounds, &resources));
    }

    #[test]
    fn test_gravity_skips_removed_entities() {
        let (mut world, entity) = world_with_particle(Vec2::ZERO);
        world.remove_entity(entity);

        let mut gravity = GravitySystem::default();
        assert!(gravity.update(&[entity], &mut world, &mut SimResources::default()).is_ok());
    }
}
