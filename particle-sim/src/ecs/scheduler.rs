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
//! System scheduler
//!
//! The scheduler owns the entity store, the shared resources and an ordered
//! list of systems. Running a phase visits every system of that phase in
//! registration order; for each one it first computes the live entities that
//! pass the system's filter and then invokes the system with that list, the
//! whole world and the resources. Systems run strictly one after another, so a
//! later system observes everything an earlier one changed in the same tick,
//! including entities it created or removed.

use crate::ecs::{EntityId, Phase, System, World};
use crate::error::{SimError, SimResult};

/// Entity store plus ordered systems and shared resources
///
/// # Examples
///
/// ```
/// use particle_sim::ecs::{EntityId, Scheduler, System, World};
/// use particle_sim::error::SimResult;
///
/// struct Doubler;
/// impl System<i64, ()> for Doubler {
///     fn filter(&self, value: &i64, _: &()) -> bool {
///         *value > 0
///     }
///     fn update(&mut self, ids: &[EntityId], world: &mut World<i64>, _: &mut ()) -> SimResult<()> {
///         for id in ids {
///             if let Some(value) = world.get_mut(*id) {
///                 *value *= 2;
///             }
///         }
///         Ok(())
///     }
/// }
///
/// let mut scheduler = Scheduler::new();
/// scheduler.add_resource(());
/// scheduler.add_system(Doubler);
/// let positive = scheduler.create_entity(3);
/// let negative = scheduler.create_entity(-3);
/// scheduler.run_update_phase().unwrap();
/// assert_eq!(scheduler.world().get(positive), Some(&6));
/// assert_eq!(scheduler.world().get(negative), Some(&-3));
/// ```
pub struct Scheduler<C, R> {
    world: World<C>,
    systems: Vec<Box<dyn System<C, R>>>,
    resources: Option<R>,
    /// Reused between systems to avoid a fresh allocation per filter pass
    filtered: Vec<EntityId>,
}

impl<C, R> Scheduler<C, R> {
    /// Create a scheduler with an empty world and no resources
    pub fn new() -> Self {
        Scheduler {
            world: World::new(),
            systems: Vec::new(),
            resources: None,
            filtered: Vec::new(),
        }
    }

    /// Create a new entity holding `component`
    pub fn create_entity(&mut self, component: C) -> EntityId {
        self.world.create_entity(component)
    }

    /// Remove an entity; a no-op if it is not live
    pub fn remove_entity(&mut self, entity: EntityId) -> Option<C> {
        self.world.remove_entity(entity)
    }

    /// Attach the shared resources, replacing any previous value
    pub fn add_resource(&mut self, resources: R) {
        self.resources = Some(resources);
    }

    /// Append a system after every system registered so far
    pub fn add_system<S: System<C, R> + 'static>(&mut self, system: S) {
        self.systems.push(Box::new(system));
    }

    /// Append several systems, keeping their order
    pub fn add_systems(&mut self, systems: Vec<Box<dyn System<C, R>>>) {
        self.systems.extend(systems);
    }

    /// Get the number of registered systems
    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    /// Names of the registered systems in execution order
    pub fn system_names(&self) -> Vec<&str> {
        self.systems.iter().map(|s| s.name()).collect()
    }

    /// Run every setup system once, in registration order
    pub fn run_setup_phase(&mut self) -> SimResult<()> {
        self.run_phase(Phase::Setup)
    }

    /// Run every update system, in registration order
    ///
    /// This is one tick of the simulation.
    pub fn run_update_phase(&mut self) -> SimResult<()> {
        self.run_phase(Phase::Update)
    }

    fn run_phase(&mut self, phase: Phase) -> SimResult<()> {
        let resources = self.resources.as_mut().ok_or(SimError::MissingResources)?;

        for system in self.systems.iter_mut().filter(|s| s.phase() == phase) {
            self.filtered.clear();
            self.filtered.extend(
                self.world
                    .iter()
                    .filter(|(_, component)| system.filter(component, &*resources))
                    .map(|(entity, _)| entity),
            );

            log::trace!("running {} over {} entities", system.name(), self.filtered.len());
            system.update(&self.filtered, &mut self.world, resources)?;
        }

        Ok(())
    }

    /// Get the entity store
    pub fn world(&self) -> &World<C> {
        &self.world
    }

    /// Get mutable access to the entity store
    pub fn world_mut(&mut self) -> &mut World<C> {
        &mut self.world
    }

    /// Get the shared resources, if attached
    pub fn resources(&self) -> Option<&R> {
        self.resources.as_ref()
    }

    /// Get mutable access to the shared resources, if attached
    pub fn resources_mut(&mut self) -> Option<&mut R> {
        self.resources.as_mut()
    }

    /// Clear all systems from the scheduler
    pub fn clear_systems(&mut self) {
        self.systems.clear();
    }
}

impl<C, R> Default for Scheduler<C, R> {
    fn default() -> Self {
        Self::new()
    }
}
