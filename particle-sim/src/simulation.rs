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
//! Frame driver
//!
//! [`Simulation`] is the thin loop around the scheduler that a front end
//! calls once per frame. Each [`Simulation::step`] creates the viewport's
//! bounding box, runs one tick, and removes the box again, so the containment
//! region always follows the current view.

use crate::config::SimulationConfig;
use crate::diagnostics::Diagnostic;
use crate::ecs::components::{Body, BoundingBox, Particle};
use crate::ecs::{EntityId, System};
use crate::error::{SimError, SimResult};
use crate::math::Vec2;
use crate::resources::{InputState, SimResources};
use crate::systems::{
    CollisionSystem, ConstrainSystem, GravitySystem, IntegrationSystem, SimScheduler, SimWorld,
    SpawnSystem,
};

/// A configured particle simulation
pub struct Simulation {
    scheduler: SimScheduler,
    config: SimulationConfig,
    ticks: u64,
}

impl Simulation {
    /// Build a simulation with the standard systems
    ///
    /// Systems are registered as spawn, gravity, containment, collision
    /// (unless disabled) and integration.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] if the configuration does not validate.
    pub fn new(config: SimulationConfig) -> SimResult<Self> {
        config.validate()?;

        let mut scheduler = SimScheduler::new();
        scheduler.add_resource(SimResources::new(config.timestep));
        scheduler.add_system(SpawnSystem::new(
            config.spawn.half_width,
            config.spawn.half_height,
            config.spawn.radius,
            config.spawn.density,
        ));
        scheduler.add_system(GravitySystem::new(config.gravity));
        scheduler.add_system(ConstrainSystem::new(config.wall.friction, config.wall.restitution));
        if config.collision.enabled {
            scheduler.add_system(CollisionSystem::new(
                config.collision.elastic,
                config.collision.restitution,
            ));
        }
        scheduler.add_system(IntegrationSystem::new());

        log::debug!("simulation systems: {:?}", scheduler.system_names());

        Ok(Simulation {
            scheduler,
            config,
            ticks: 0,
        })
    }

    /// Append a system after the standard ones, e.g. a renderer
    pub fn add_system<S: System<Body, SimResources> + 'static>(&mut self, system: S) {
        self.scheduler.add_system(system);
    }

    /// Run the setup phase once
    pub fn setup(&mut self) -> SimResult<()> {
        self.scheduler.run_setup_phase()
    }

    /// Advance one tick with `viewport` as the containment box
    ///
    /// The box is removed again even if the tick fails.
    pub fn step(&mut self, viewport: BoundingBox) -> SimResult<()> {
        let bounds = self.scheduler.create_entity(viewport.into());
        let result = self.scheduler.run_update_phase();
        self.scheduler.remove_entity(bounds);

        match &result {
            Ok(()) => self.ticks += 1,
            Err(err) => log::warn!("tick {} aborted: {}", self.ticks, err),
        }
        result
    }

    /// Add a particle directly
    pub fn add_particle(&mut self, particle: Particle) -> EntityId {
        self.scheduler.create_entity(particle.into())
    }

    /// Remove an entity; a no-op if it is not live
    pub fn remove_entity(&mut self, entity: EntityId) -> Option<Body> {
        self.scheduler.remove_entity(entity)
    }

    /// Iterate over all particles
    pub fn particles(&self) -> impl Iterator<Item = (EntityId, &Particle)> {
        self.scheduler
            .world()
            .iter()
            .filter_map(|(id, body)| body.as_particle().map(|p| (id, p)))
    }

    /// Number of live particles
    pub fn particle_count(&self) -> usize {
        self.particles().count()
    }

    /// Get the entity store
    pub fn world(&self) -> &SimWorld {
        self.scheduler.world()
    }

    /// Get the configuration the simulation was built from
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Number of ticks completed
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Get mutable access to the pointer state
    ///
    /// `None` only if the resources were taken out of the scheduler, which
    /// the public API never does.
    pub fn input_mut(&mut self) -> Option<&mut InputState> {
        self.scheduler.resources_mut().map(|resources| &mut resources.input)
    }

    /// Pointer pressed at `p`
    pub fn press(&mut self, p: Vec2) {
        if let Some(input) = self.input_mut() {
            input.press(p);
        }
    }

    /// Pointer moved to `p`
    pub fn drag_to(&mut self, p: Vec2) {
        if let Some(input) = self.input_mut() {
            input.drag_to(p);
        }
    }

    /// Pointer released at `p`
    pub fn release(&mut self, p: Vec2) {
        if let Some(input) = self.input_mut() {
            input.release(p);
        }
    }

    /// Take the diagnostics reported since the last call
    pub fn drain_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.scheduler
            .resources_mut()
            .map(SimResources::drain_diagnostics)
            .unwrap_or_default()
    }
}

impl TryFrom<SimulationConfig> for Simulation {
    type Error = SimError;

    fn try_from(config: SimulationConfig) -> SimResult<Self> {
        Simulation::new(config)
    }
}
