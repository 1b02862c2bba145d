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
//! System execution framework
//!
//! Systems contain the logic that operates on entities and components. Each
//! system declares the phase it runs in and a filter selecting the entities it
//! wants; the [`Scheduler`](crate::ecs::Scheduler) hands it the filtered ids
//! together with the whole world, so a system may read components it did not
//! select and may create or remove entities.

use crate::ecs::{EntityId, World};
use crate::error::SimResult;

/// When a system runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Run exactly once, before the first tick
    Setup,
    /// Run every tick
    Update,
}

/// Trait for systems that operate on the ECS world
///
/// `C` is the component payload stored per entity and `R` the shared
/// resources threaded through every call.
pub trait System<C, R> {
    /// Phase this system belongs to
    fn phase(&self) -> Phase {
        Phase::Update
    }

    /// Decide whether an entity with `component` is handed to [`System::update`]
    fn filter(&self, component: &C, resources: &R) -> bool;

    /// Run the system over the filtered entities
    ///
    /// `entities` is in ascending id order. Ids removed earlier in the same
    /// call may no longer resolve in `world`; lookups must treat absence as a
    /// skip.
    fn update(
        &mut self,
        entities: &[EntityId],
        world: &mut World<C>,
        resources: &mut R,
    ) -> SimResult<()>;

    /// Get the name of this system for debugging
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
