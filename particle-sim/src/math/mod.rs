//! Vector and geometry helpers shared by components and systems

mod sphere;
mod vec2;

pub use sphere::{sphere_mass, sphere_radius};
pub use vec2::Vec2;
