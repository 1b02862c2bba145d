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
//! Slingshot spawning
//!
//! When the pointer gesture completes, a square grid ("bundle") of particles
//! is created around the release point. The bundle flies opposite to the drag,
//! with speed equal to the drag length.

use crate::ecs::components::{Body, Particle};
use crate::ecs::{EntityId, System, World};
use crate::error::{SimError, SimResult};
use crate::math::Vec2;
use crate::resources::SimResources;

/// Grid extent of a bundle, counted in particles either side of the center
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundleShape {
    half_width: u32,
    half_height: u32,
}

impl BundleShape {
    /// Create a shape from integer half-extents
    pub fn new(half_width: u32, half_height: u32) -> Self {
        BundleShape { half_width, half_height }
    }

    /// Create a shape from half-extents given as floats
    ///
    /// # Errors
    ///
    /// Returns [`SimError::NonIntegerBundleExtent`] unless both values are
    /// non-negative whole numbers.
    pub fn try_new(half_width: f64, half_height: f64) -> SimResult<Self> {
        fn whole(value: f64) -> Option<u32> {
            (value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64)
                .then_some(value as u32)
        }

        match (whole(half_width), whole(half_height)) {
            (Some(w), Some(h)) => Ok(BundleShape::new(w, h)),
            _ => Err(SimError::NonIntegerBundleExtent { half_width, half_height }),
        }
    }

    /// Particles either side of the center, horizontally
    pub fn half_width(&self) -> u32 {
        self.half_width
    }

    /// Particles either side of the center, vertically
    pub fn half_height(&self) -> u32 {
        self.half_height
    }

    /// Number of particles in the bundle
    pub fn count(&self) -> usize {
        (2 * self.half_width as usize + 1) * (2 * self.half_height as usize + 1)
    }
}

impl Default for BundleShape {
    fn default() -> Self {
        BundleShape::new(2, 2)
    }
}

/// Create a bundle of copies of `template` centered on `center`
///
/// Neighbors are spaced one diameter apart, so the particles start out just
/// touching. Entities are created column by column, left to right.
pub fn spawn_bundle(
    world: &mut World<Body>,
    shape: BundleShape,
    center: Vec2,
    template: &Particle,
) -> Vec<EntityId> {
    let spacing = template.radius() * 2.0;
    let (w, h) = (shape.half_width as i64, shape.half_height as i64);
    let mut spawned = Vec::with_capacity(shape.count());

    for i in -w..=w {
        for j in -h..=h {
            let mut particle = *template;
            particle.position = center + Vec2::new(i as f64 * spacing, j as f64 * spacing);
            spawned.push(world.create_entity(particle.into()));
        }
    }

    spawned
}

/// Spawns a bundle from a completed pointer gesture
#[derive(Debug, Clone, Copy)]
pub struct SpawnSystem {
    half_width: f64,
    half_height: f64,
    radius: f64,
    density: f64,
}

impl SpawnSystem {
    /// Default particle radius of spawned bundles
    pub const DEFAULT_RADIUS: f64 = 10.0;

    /// Create a spawn system
    ///
    /// The half-extents are checked when a bundle is spawned; a fractional
    /// value makes that tick fail.
    pub fn new(half_width: f64, half_height: f64, radius: f64, density: f64) -> Self {
        SpawnSystem {
            half_width,
            half_height,
            radius,
            density,
        }
    }
}

impl Default for SpawnSystem {
    fn default() -> Self {
        SpawnSystem::new(2.0, 2.0, Self::DEFAULT_RADIUS, Particle::DEFAULT_DENSITY)
    }
}

impl System<Body, SimResources> for SpawnSystem {
    fn filter(&self, _component: &Body, _resources: &SimResources) -> bool {
        true
    }

    fn update(
        &mut self,
        _entities: &[EntityId],
        world: &mut World<Body>,
        resources: &mut SimResources,
    ) -> SimResult<()> {
        let Some((clicked, released)) = resources.input.completed() else {
            return Ok(());
        };

        let shape = BundleShape::try_new(self.half_width, self.half_height)?;
        let velocity = -(released - clicked);
        let template = Particle::new(released, self.radius)
            .with_velocity(velocity)
            .with_density(self.density);

        let spawned = spawn_bundle(world, shape, released, &template);
        log::debug!("spawned {} particles at {} with velocity {}", spawned.len(), released, velocity);

        resources.input.clear();
        Ok(())
    }

    fn name(&self) -> &str {
        "SpawnSystem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_count() {
        assert_eq!(BundleShape::default().count(), 25);
        assert_eq!(BundleShape::new(0, 0).count(), 1);
        assert_eq!(BundleShape::new(1, 0).count(), 3);
    }

    #[test]
    fn test_shape_rejects_fractions() {
        assert_eq!(BundleShape::try_new(2.0, 3.0).unwrap(), BundleShape::new(2, 3));
        assert!(matches!(
            BundleShape::try_new(2.5, 2.0),
            Err(SimError::NonIntegerBundleExtent { .. })
        ));
        assert!(BundleShape::try_new(2.0, -1.0).is_err());
        assert!(BundleShape::try_new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_bundle_layout() {
        let mut world = World::new();
        let template = Particle::new(Vec2::ZERO, 1.5);
        let ids = spawn_bundle(&mut world, BundleShape::new(1, 0), Vec2::new(10.0, 10.0), &template);

        let xs: Vec<f64> = ids
            .iter()
            .map(|id| world.get(*id).unwrap().position().x)
            .collect();
        assert_eq!(xs, vec![7.0, 10.0, 13.0]);
    }

    #[test]
    fn test_no_gesture_no_spawn() {
        let mut world = World::new();
        let mut resources = SimResources::default();
        resources.input.press(Vec2::ZERO);

        SpawnSystem::default().update(&[], &mut world, &mut resources).unwrap();

        assert_eq!(world.entity_count(), 0);
        assert_eq!(resources.input.clicked, Some(Vec2::ZERO));
    }

    #[test]
    fn test_fractional_extent_fails_on_spawn() {
        let mut world = World::new();
        let mut resources = SimResources::default();
        resources.input.press(Vec2::ZERO);
        resources.input.release(Vec2::new(1.0, 1.0));

        let mut spawn = SpawnSystem::new(1.5, 2.0, 1.0, 1.0);
        let result = spawn.update(&[], &mut world, &mut resources);

        assert!(matches!(result, Err(SimError::NonIntegerBundleExtent { .. })));
        assert_eq!(world.entity_count(), 0);
    }
}
