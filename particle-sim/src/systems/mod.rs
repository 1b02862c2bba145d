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
//! Simulation systems
//!
//! Each system is one scheduled behavior over [`Body`] components. The usual
//! per-tick order is:
//!
//! 1. [`SpawnSystem`]: turn a finished pointer gesture into a bundle
//! 2. [`GravitySystem`]: set particle acceleration
//! 3. [`ConstrainSystem`]: keep particles inside the bounding box
//! 4. [`CollisionSystem`]: separate overlapping particles
//! 5. [`IntegrationSystem`]: advance velocity and position, clear acceleration
//!
//! Rendering, when present, runs last.

use crate::ecs::components::Body;
use crate::ecs::{Scheduler, World};
use crate::resources::SimResources;

mod collision;
mod constrain;
mod gravity;
mod integration;
mod render;
mod spawn;

pub use collision::{resolve_pair, CollisionSystem, Contact, FALLBACK_NORMAL};
pub use constrain::{
    coefficients_in_range, constrain_particle, surface_collision_response, ConstrainSystem,
    DEFAULT_WALL_FRICTION, DEFAULT_WALL_RESTITUTION,
};
pub use gravity::{GravityMode, GravitySystem, STANDARD_GRAVITY};
pub use integration::{integrate_particle, IntegrationSystem};
pub use render::{RenderSystem, Renderer};
pub use spawn::{spawn_bundle, BundleShape, SpawnSystem};

/// World holding simulation bodies
pub type SimWorld = World<Body>;

/// Scheduler over simulation bodies and resources
pub type SimScheduler = Scheduler<Body, SimResources>;
