//! Entity Component System (ECS) core implementation
//!
//! This module provides the foundational ECS architecture including:
//! - Entity management with never-reused identifiers
//! - A single-component-per-entity store
//! - Phase-tagged systems with per-system entity filters
//! - A scheduler that runs systems strictly in registration order

mod entity;
mod scheduler;
mod system;
mod world;

/// Particle and bounding box components
pub mod components;

pub use entity::EntityId;
pub use scheduler::Scheduler;
pub use system::{Phase, System};
pub use world::World;
