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
//! Box containment
//!
//! Keeps every particle inside the live bounding box. Each of the four box
//! edges is checked on its own against the particle's extent (center ± radius),
//! so a particle wedged in a corner is corrected on both axes in one tick. A
//! particle that has crossed an edge is moved back until its rim touches it and
//! its velocity is replaced by the surface collision response.
//!
//! # Surface response
//!
//! For an edge normal **n**, incoming velocity **v**, friction *f* and
//! restitution *e*:
//!
//! **v' = f·v − n·(v·n)·(f + e)**
//!
//! The normal component comes out reversed and scaled by *e*; the tangential
//! component is scaled by *f*. Both coefficients are meant to lie in `[0, 1]`.

use crate::diagnostics::Diagnostic;
use crate::ecs::components::{Axis, Body, BoundingBox, Particle, Side};
use crate::ecs::{EntityId, System, World};
use crate::error::SimResult;
use crate::math::Vec2;
use crate::resources::SimResources;

/// Default wall friction coefficient
pub const DEFAULT_WALL_FRICTION: f64 = 0.8;

/// Default wall restitution coefficient
pub const DEFAULT_WALL_RESTITUTION: f64 = 0.8;

/// Order in which the edges are tested; on a box narrower than the particle
/// the min side is corrected last and wins
const EDGES: [(Side, Axis); 4] = [
    (Side::Max, Axis::Horizontal),
    (Side::Max, Axis::Vertical),
    (Side::Min, Axis::Horizontal),
    (Side::Min, Axis::Vertical),
];

/// Check if surface response coefficients lie in `[0, 1]`
pub fn coefficients_in_range(friction: f64, restitution: f64) -> bool {
    (0.0..=1.0).contains(&friction) && (0.0..=1.0).contains(&restitution)
}

fn reflect(normal: Vec2, velocity: Vec2, friction: f64, restitution: f64) -> Vec2 {
    let dot = Vec2::dot(velocity, normal);
    velocity * friction - normal * (dot * (friction + restitution))
}

/// Velocity after bouncing off a surface with unit normal `normal`
///
/// Out-of-range coefficients are still applied; the returned diagnostic says so.
///
/// # Examples
///
/// ```
/// use particle_sim::math::Vec2;
/// use particle_sim::systems::surface_collision_response;
///
/// let (v, warning) = surface_collision_response(Vec2::new(0.0, -1.0), Vec2::new(0.0, 10.0), 1.0, 1.0);
/// assert_eq!(v, Vec2::new(0.0, -10.0));
/// assert!(warning.is_none());
/// ```
pub fn surface_collision_response(
    normal: Vec2,
    velocity: Vec2,
    friction: f64,
    restitution: f64,
) -> (Vec2, Option<Diagnostic>) {
    let diagnostic = (!coefficients_in_range(friction, restitution))
        .then_some(Diagnostic::CoefficientsOutOfRange { friction, restitution });
    (reflect(normal, velocity, friction, restitution), diagnostic)
}

/// Push `particle` back inside `bounds`
///
/// Returns the number of edges the particle had crossed. All edges are tested
/// against the position the particle had on entry.
pub fn constrain_particle(
    particle: &mut Particle,
    bounds: &BoundingBox,
    friction: f64,
    restitution: f64,
) -> usize {
    let start = particle.position;
    let radius = particle.radius();
    let mut corrections = 0;

    for (side, axis) in EDGES {
        let edge = bounds.edge(axis, side);
        let rim = axis.of(start) + side.direction() * radius;
        let crossed = match side {
            Side::Min => rim < edge,
            Side::Max => rim > edge,
        };
        if !crossed {
            continue;
        }

        *axis.of_mut(&mut particle.position) = edge - side.direction() * radius;
        let normal = axis.unit(-side.direction());
        particle.velocity = reflect(normal, particle.velocity, friction, restitution);
        corrections += 1;
    }

    corrections
}

/// Keeps particles inside the bounding box
///
/// Resolves against the box with the lowest entity id. With no box live the
/// system does nothing; with several, the extras are ignored and reported.
#[derive(Debug, Clone)]
pub struct ConstrainSystem {
    friction: f64,
    restitution: f64,
    warned: bool,
}

impl ConstrainSystem {
    /// Create a containment system with the given wall coefficients
    pub fn new(friction: f64, restitution: f64) -> Self {
        ConstrainSystem {
            friction,
            restitution,
            warned: false,
        }
    }

    /// Get the friction coefficient
    pub fn friction(&self) -> f64 {
        self.friction
    }

    /// Get the restitution coefficient
    pub fn restitution(&self) -> f64 {
        self.restitution
    }

    fn bounding_box(
        entities: &[EntityId],
        world: &World<Body>,
        resources: &mut SimResources,
    ) -> Option<BoundingBox> {
        let mut boxes = entities
            .iter()
            .filter_map(|id| world.get(*id).and_then(Body::as_bounding_box).map(|b| (*id, *b)));
        let (used, bounds) = boxes.next()?;

        let extra = boxes.count();
        if extra > 0 {
            resources.report(Diagnostic::MultipleBoundingBoxes {
                count: extra + 1,
                used,
            });
        }
        Some(bounds)
    }
}

impl Default for ConstrainSystem {
    fn default() -> Self {
        ConstrainSystem::new(DEFAULT_WALL_FRICTION, DEFAULT_WALL_RESTITUTION)
    }
}

impl System<Body, SimResources> for ConstrainSystem {
    fn filter(&self, _component: &Body, _resources: &SimResources) -> bool {
        true
    }

    fn update(
        &mut self,
        entities: &[EntityId],
        world: &mut World<Body>,
        resources: &mut SimResources,
    ) -> SimResult<()> {
        let Some(bounds) = Self::bounding_box(entities, world, resources) else {
            return Ok(());
        };

        let mut corrections = 0;
        for entity in entities {
            if let Some(particle) = world.get_mut(*entity).and_then(Body::as_particle_mut) {
                corrections += constrain_particle(particle, &bounds, self.friction, self.restitution);
            }
        }

        if corrections > 0 && !self.warned && !coefficients_in_range(self.friction, self.restitution) {
            self.warned = true;
            resources.report(Diagnostic::CoefficientsOutOfRange {
                friction: self.friction,
                restitution: self.restitution,
            });
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "ConstrainSystem"
    }
}
