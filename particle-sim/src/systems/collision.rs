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
//! Pairwise circle collisions
//!
//! Every unordered pair of particles is tested (O(n²), no broad phase). An
//! overlapping pair is first pushed apart along the line between centers, each
//! particle moving half the penetration depth regardless of mass. Elastic
//! collision systems then exchange an impulse along the same normal:
//!
//! **j = −(1 + e)·(v_rel · n) / (1/m_a + 1/m_b)**
//!
//! where **n** points from b to a. Pairs already moving apart get no impulse.
//! Pairs are resolved one after another, so a later pair sees the positions and
//! velocities left by an earlier one.

use crate::diagnostics::Diagnostic;
use crate::ecs::components::{Body, Particle};
use crate::ecs::{EntityId, System, World};
use crate::error::SimResult;
use crate::math::Vec2;
use crate::resources::SimResources;

/// Separation direction used when two centers coincide
pub const FALLBACK_NORMAL: Vec2 = Vec2::new(1.0, 0.0);

/// Result of testing one pair of particles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// The particles do not overlap
    Separate,
    /// The overlap was resolved along the center line
    Resolved,
    /// The centers coincided and [`FALLBACK_NORMAL`] was used
    Coincident,
}

fn apply_impulse(a: &mut Particle, b: &mut Particle, normal: Vec2, restitution: f64) {
    let along_normal = Vec2::dot(a.velocity - b.velocity, normal);
    if along_normal >= 0.0 {
        return;
    }

    let inv_mass_a = 1.0 / a.mass();
    let inv_mass_b = 1.0 / b.mass();
    let impulse = normal * (-(1.0 + restitution) * along_normal / (inv_mass_a + inv_mass_b));
    a.velocity += impulse * inv_mass_a;
    b.velocity -= impulse * inv_mass_b;
}

/// Separate `a` and `b` if they overlap
///
/// With `restitution` set, an elastic impulse is applied after the positional
/// correction; with `None` velocities are left alone.
pub fn resolve_pair(a: &mut Particle, b: &mut Particle, restitution: Option<f64>) -> Contact {
    let delta = a.position - b.position;
    let distance = delta.magnitude();
    let combined_radii = a.radius() + b.radius();
    if distance >= combined_radii {
        return Contact::Separate;
    }

    let (normal, contact) = match delta.try_normalized() {
        Some(normal) => (normal, Contact::Resolved),
        None => (FALLBACK_NORMAL, Contact::Coincident),
    };

    let overlap = 0.5 * (combined_radii - distance);
    a.position += normal * overlap;
    b.position -= normal * overlap;

    if let Some(restitution) = restitution {
        apply_impulse(a, b, normal, restitution);
    }
    contact
}

/// Resolves overlaps between every pair of particles
#[derive(Debug, Clone, Copy)]
pub struct CollisionSystem {
    elastic: bool,
    restitution: f64,
}

impl CollisionSystem {
    /// Create a collision system
    ///
    /// `restitution` only matters when `elastic` is set.
    pub fn new(elastic: bool, restitution: f64) -> Self {
        CollisionSystem { elastic, restitution }
    }

    /// Positional correction only
    pub fn inelastic() -> Self {
        CollisionSystem::new(false, 1.0)
    }

    /// Positional correction plus an impulse with the given restitution
    pub fn elastic(restitution: f64) -> Self {
        CollisionSystem::new(true, restitution)
    }

    /// Check if velocities are corrected
    pub fn is_elastic(&self) -> bool {
        self.elastic
    }

    /// Get the restitution coefficient
    pub fn restitution(&self) -> f64 {
        self.restitution
    }
}

impl Default for CollisionSystem {
    fn default() -> Self {
        CollisionSystem::inelastic()
    }
}

impl System<Body, SimResources> for CollisionSystem {
    fn filter(&self, component: &Body, _resources: &SimResources) -> bool {
        component.is_particle()
    }

    fn update(
        &mut self,
        entities: &[EntityId],
        world: &mut World<Body>,
        resources: &mut SimResources,
    ) -> SimResult<()> {
        let mut particles: Vec<(EntityId, Particle)> = entities
            .iter()
            .filter_map(|id| world.get(*id).and_then(Body::as_particle).map(|p| (*id, *p)))
            .collect();
        let restitution = self.elastic.then_some(self.restitution);

        for i in 0..particles.len() {
            let (head, tail) = particles.split_at_mut(i + 1);
            let (id_a, a) = &mut head[i];
            for (id_b, b) in tail.iter_mut() {
                if resolve_pair(a, b, restitution) == Contact::Coincident {
                    resources.report(Diagnostic::CoincidentParticles { a: *id_a, b: *id_b });
                }
            }
        }

        for (id, particle) in particles {
            if let Some(slot) = world.get_mut(id).and_then(Body::as_particle_mut) {
                *slot = particle;
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "CollisionSystem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_separate_pair_untouched() {
        let mut a = Particle::new(Vec2::new(0.0, 0.0), 1.0);
        let mut b = Particle::new(Vec2::new(2.0, 0.0), 1.0);
        assert_eq!(resolve_pair(&mut a, &mut b, Some(1.0)), Contact::Separate);
        assert_eq!(a.position, Vec2::new(0.0, 0.0));
        assert_eq!(b.position, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_overlap_split_evenly() {
        let mut a = Particle::new(Vec2::new(0.0, 0.0), 1.0);
        let mut b = Particle::new(Vec2::new(0.0, 1.0), 3.0);
        assert_eq!(resolve_pair(&mut a, &mut b, None), Contact::Resolved);

        // Penetration 3, each moves 1.5 along the center line
        assert!((a.position.y + 1.5).abs() < EPSILON);
        assert!((b.position.y - 2.5).abs() < EPSILON);
    }

    #[test]
    fn test_coincident_uses_fallback() {
        let mut a = Particle::new(Vec2::new(5.0, 5.0), 1.0);
        let mut b = Particle::new(Vec2::new(5.0, 5.0), 1.0);
        assert_eq!(resolve_pair(&mut a, &mut b, Some(1.0)), Contact::Coincident);
        assert_eq!(a.position, Vec2::new(6.0, 5.0));
        assert_eq!(b.position, Vec2::new(4.0, 5.0));
        assert!(a.is_valid() && b.is_valid());
    }

    #[test]
    fn test_separating_pair_keeps_velocity() {
        let mut a = Particle::new(Vec2::new(0.0, 0.0), 1.0).with_velocity(Vec2::new(-1.0, 0.0));
        let mut b = Particle::new(Vec2::new(1.0, 0.0), 1.0).with_velocity(Vec2::new(1.0, 0.0));
        resolve_pair(&mut a, &mut b, Some(1.0));
        assert_eq!(a.velocity, Vec2::new(-1.0, 0.0));
        assert_eq!(b.velocity, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_heavier_particle_deflects_less() {
        let mut light = Particle::new(Vec2::new(0.0, 0.0), 1.0).with_velocity(Vec2::new(1.0, 0.0));
        let mut heavy = Particle::new(Vec2::new(2.5, 0.0), 2.0).with_velocity(Vec2::new(-1.0, 0.0));
        resolve_pair(&mut light, &mut heavy, Some(1.0));

        let light_change = (light.velocity.x - 1.0).abs();
        let heavy_change = (heavy.velocity.x + 1.0).abs();
        assert!(light_change > heavy_change);

        // Momentum along the normal is conserved
        let before = light.mass() * 1.0 - heavy.mass() * 1.0;
        let after = light.mass() * light.velocity.x + heavy.mass() * heavy.velocity.x;
        assert!((before - after).abs() < EPSILON * heavy.mass());
    }

    #[test]
    fn test_system_reports_coincident() {
        let mut world = World::new();
        let a = world.create_entity(Particle::new(Vec2::ZERO, 1.0).into());
        let b = world.create_entity(Particle::new(Vec2::ZERO, 1.0).into());
        let mut resources = SimResources::default();

        CollisionSystem::default().update(&[a, b], &mut world, &mut resources).unwrap();

        assert_eq!(resources.diagnostics, vec![Diagnostic::CoincidentParticles { a, b }]);
        let pa = world.get(a).and_then(Body::as_particle).unwrap();
        assert_eq!(pa.position, Vec2::new(1.0, 0.0));
    }
}
