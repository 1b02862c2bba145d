//! Rendering hook
//!
//! Drawing itself lives outside the crate. A front end implements
//! [`Renderer`] for its surface and registers a [`RenderSystem`] after the
//! physics systems, so it sees the final positions of the tick.

use crate::ecs::components::{Body, BodyKind};
use crate::ecs::{EntityId, System, World};
use crate::error::SimResult;
use crate::resources::SimResources;

/// A drawing surface
pub trait Renderer {
    /// Draw one body
    fn draw(&mut self, body: &Body);
}

/// Draws bodies in entity order
pub struct RenderSystem<D> {
    surface: D,
    kind: Option<BodyKind>,
}

impl<D: Renderer> RenderSystem<D> {
    /// Draw every body
    pub fn new(surface: D) -> Self {
        RenderSystem { surface, kind: None }
    }

    /// Draw only bodies of `kind`
    pub fn only(surface: D, kind: BodyKind) -> Self {
        RenderSystem {
            surface,
            kind: Some(kind),
        }
    }

    /// Get the drawing surface
    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// Take the drawing surface back
    pub fn into_surface(self) -> D {
        self.surface
    }
}

impl<D: Renderer> System<Body, SimResources> for RenderSystem<D> {
    fn filter(&self, component: &Body, _resources: &SimResources) -> bool {
        self.kind.map_or(true, |kind| component.kind() == kind)
    }

    fn update(
        &mut self,
        entities: &[EntityId],
        world: &mut World<Body>,
        _resources: &mut SimResources,
    ) -> SimResult<()> {
        for entity in entities {
            if let Some(body) = world.get(*entity) {
                self.surface.draw(body);
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "RenderSystem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{BoundingBox, Particle};
    use crate::math::Vec2;

    #[derive(Default)]
    struct Recorder {
        drawn: Vec<BodyKind>,
    }

    impl Renderer for Recorder {
        fn draw(&mut self, body: &Body) {
            self.drawn.push(body.kind());
        }
    }

    #[test]
    fn test_draws_filtered_kind() {
        let mut world = World::new();
        let bounds: Body = BoundingBox::new(Vec2::ZERO, Vec2::new(1.0, 1.0)).into();
        let particle: Body = Particle::new(Vec2::ZERO, 1.0).into();
        let ids = [world.create_entity(bounds), world.create_entity(particle)];
        let resources = SimResources::default();

        let mut system = RenderSystem::only(Recorder::default(), BodyKind::Particle);
        let selected: Vec<EntityId> = ids
            .iter()
            .copied()
            .filter(|id| system.filter(world.get(*id).unwrap(), &resources))
            .collect();
        system.update(&selected, &mut world, &mut SimResources::default()).unwrap();

        assert_eq!(system.surface().drawn, vec![BodyKind::Particle]);
    }

    #[test]
    fn test_draws_everything_by_default() {
        let mut world = World::new();
        let ids = vec![
            world.create_entity(BoundingBox::new(Vec2::ZERO, Vec2::new(1.0, 1.0)).into()),
            world.create_entity(Particle::new(Vec2::ZERO, 1.0).into()),
        ];

        let mut system = RenderSystem::new(Recorder::default());
        system.update(&ids, &mut world, &mut SimResources::default()).unwrap();

        assert_eq!(
            system.into_surface().drawn,
            vec![BodyKind::BoundingBox, BodyKind::Particle]
        );
    }
}
