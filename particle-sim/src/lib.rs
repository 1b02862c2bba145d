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
//! # Particle Sim
//!
//! A small real-time 2D particle sandbox built on a minimal entity component
//! system. Circular particles fall under gravity, bounce off the walls of an
//! axis-aligned box and push each other apart; a pointer drag launches a new
//! bundle of particles like a slingshot.
//!
//! ## Features
//!
//! - **ECS Architecture**: One component per entity, phase-tagged systems with
//!   per-system filters, run strictly in registration order
//! - **Semi-implicit Euler**: Velocity first, then position from the new velocity
//! - **Containment**: Per-edge clamping with friction/restitution response
//! - **Collisions**: Brute-force pairwise overlap resolution with optional
//!   elastic impulses
//! - **Diagnostics**: Structured reports plus `log` output, no printing
//!
//! ## Example
//!
//! ```rust
//! use particle_sim::config::SimulationConfig;
//! use particle_sim::ecs::components::{BoundingBox, Particle};
//! use particle_sim::math::Vec2;
//! use particle_sim::Simulation;
//!
//! let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
//! sim.setup().unwrap();
//! sim.add_particle(Particle::new(Vec2::new(400.0, 300.0), 10.0));
//!
//! let viewport = BoundingBox::new(Vec2::ZERO, Vec2::new(800.0, 600.0));
//! for _ in 0..60 {
//!     sim.step(viewport).unwrap();
//! }
//! assert_eq!(sim.particle_count(), 1);
//! ```

#![warn(missing_docs)]

/// Simulation configuration
pub mod config;

/// Structured diagnostics
pub mod diagnostics;

/// Entity Component System implementation
pub mod ecs;

/// Energy and momentum diagnostics
pub mod energy;

/// Error types
pub mod error;

/// Vector math
pub mod math;

/// Shared resources
pub mod resources;

/// Frame driver
pub mod simulation;

/// Physics, spawning and rendering systems
pub mod systems;

pub use ecs::{EntityId, Scheduler, World};
pub use error::{SimError, SimResult};
pub use simulation::Simulation;
