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
//! Simulation components
//!
//! Every entity carries one [`Body`]: either a circular [`Particle`] or the
//! axis-aligned [`BoundingBox`] the particles are kept inside. Systems select
//! entities by matching on the variant.

use crate::math::{sphere_mass, sphere_radius, Vec2};

/// Circular particle with Newtonian state
///
/// Mass is not stored: it is derived from radius and density as a sphere, and
/// [`Particle::set_mass`] writes back through the radius so the two views
/// always agree.
///
/// # Examples
///
/// ```
/// use particle_sim::ecs::components::Particle;
/// use particle_sim::math::Vec2;
///
/// let mut particle = Particle::new(Vec2::new(10.0, 10.0), 2.0)
///     .with_velocity(Vec2::new(1.0, 0.0));
/// let mass = particle.mass();
/// particle.set_mass(mass * 8.0);
/// assert!((particle.radius() - 4.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Center of the particle
    pub position: Vec2,
    /// Velocity in units per second
    pub velocity: Vec2,
    /// Acceleration for the current tick, cleared after integration
    pub acceleration: Vec2,
    radius: f64,
    density: f64,
}

impl Particle {
    /// Density used when none is given
    pub const DEFAULT_DENSITY: f64 = 1.0;

    /// Create a particle at rest
    ///
    /// # Panics
    ///
    /// Panics if `radius` is not positive and finite.
    pub fn new(position: Vec2, radius: f64) -> Self {
        assert!(radius > 0.0 && radius.is_finite(), "Radius must be positive and finite");
        Particle {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            radius,
            density: Self::DEFAULT_DENSITY,
        }
    }

    /// Try to create a particle at rest
    ///
    /// Returns `None` if `radius` is not positive and finite.
    pub fn try_new(position: Vec2, radius: f64) -> Option<Self> {
        if radius > 0.0 && radius.is_finite() {
            Some(Particle::new(position, radius))
        } else {
            None
        }
    }

    /// Set the initial velocity
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the initial acceleration
    pub fn with_acceleration(mut self, acceleration: Vec2) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// Set the density
    ///
    /// # Panics
    ///
    /// Panics if `density` is not positive and finite.
    pub fn with_density(mut self, density: f64) -> Self {
        assert!(density > 0.0 && density.is_finite(), "Density must be positive and finite");
        self.density = density;
        self
    }

    /// Get the radius
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Set the radius
    ///
    /// # Panics
    ///
    /// Panics if `radius` is not positive and finite.
    pub fn set_radius(&mut self, radius: f64) {
        assert!(radius > 0.0 && radius.is_finite(), "Radius must be positive and finite");
        self.radius = radius;
    }

    /// Get the density
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Mass of the particle, treated as a sphere
    pub fn mass(&self) -> f64 {
        sphere_mass(self.radius, self.density)
    }

    /// Set the mass by resizing the particle at constant density
    ///
    /// # Panics
    ///
    /// Panics if `mass` is not positive and finite.
    pub fn set_mass(&mut self, mass: f64) {
        assert!(mass > 0.0 && mass.is_finite(), "Mass must be positive and finite");
        self.radius = sphere_radius(mass, self.density);
    }

    /// Check if the kinematic state is finite
    pub fn is_valid(&self) -> bool {
        self.position.is_valid() && self.velocity.is_valid() && self.acceleration.is_valid()
    }
}

/// Coordinate axis of a box edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis; its edges are the left and right sides
    Horizontal,
    /// The y axis; its edges are the top and bottom sides
    Vertical,
}

impl Axis {
    /// Component of `v` along this axis
    pub fn of(self, v: Vec2) -> f64 {
        match self {
            Axis::Horizontal => v.x,
            Axis::Vertical => v.y,
        }
    }

    /// Mutable component of `v` along this axis
    pub fn of_mut(self, v: &mut Vec2) -> &mut f64 {
        match self {
            Axis::Horizontal => &mut v.x,
            Axis::Vertical => &mut v.y,
        }
    }

    /// Unit vector along this axis scaled by `sign`
    pub fn unit(self, sign: f64) -> Vec2 {
        match self {
            Axis::Horizontal => Vec2::new(sign, 0.0),
            Axis::Vertical => Vec2::new(0.0, sign),
        }
    }
}

/// Which of the two edges on an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Lower coordinate (left or top), direction -1
    Min,
    /// Higher coordinate (right or bottom), direction +1
    Max,
}

impl Side {
    /// Direction of this side: -1 for `Min`, +1 for `Max`
    pub fn direction(self) -> f64 {
        match self {
            Side::Min => -1.0,
            Side::Max => 1.0,
        }
    }
}

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Top-left corner
    pub position: Vec2,
    size: Vec2,
}

impl BoundingBox {
    /// Create a box from its top-left corner and size
    ///
    /// # Panics
    ///
    /// Panics if either dimension is negative or not finite.
    pub fn new(position: Vec2, size: Vec2) -> Self {
        assert!(
            size.x >= 0.0 && size.y >= 0.0 && size.is_valid(),
            "Box size must be non-negative and finite"
        );
        BoundingBox { position, size }
    }

    /// Create a box of `size` centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        BoundingBox::new(center - size / 2.0, size)
    }

    /// Width and height
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Top-left corner
    pub fn min(&self) -> Vec2 {
        self.position
    }

    /// Bottom-right corner
    pub fn max(&self) -> Vec2 {
        self.position + self.size
    }

    /// Check if `p` lies inside the closed rectangle
    pub fn contains(&self, p: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        !(p.x < min.x || p.x > max.x || p.y < min.y || p.y > max.y)
    }

    /// Coordinate of one of the four sides
    ///
    /// `edge(Axis::Vertical, Side::Min)` is the y of the top side,
    /// `edge(Axis::Horizontal, Side::Max)` the x of the right side.
    pub fn edge(&self, axis: Axis, side: Side) -> f64 {
        match side {
            Side::Min => axis.of(self.min()),
            Side::Max => axis.of(self.max()),
        }
    }
}

/// Discriminant of [`Body`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    /// [`Body::Particle`]
    Particle,
    /// [`Body::BoundingBox`]
    BoundingBox,
}

/// The component payload attached to each entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Body {
    /// A simulated particle
    Particle(Particle),
    /// The containment box
    BoundingBox(BoundingBox),
}

impl Body {
    /// Which variant this is
    pub fn kind(&self) -> BodyKind {
        match self {
            Body::Particle(_) => BodyKind::Particle,
            Body::BoundingBox(_) => BodyKind::BoundingBox,
        }
    }

    /// Check if this is a particle
    pub fn is_particle(&self) -> bool {
        matches!(self, Body::Particle(_))
    }

    /// Check if this is a bounding box
    pub fn is_bounding_box(&self) -> bool {
        matches!(self, Body::BoundingBox(_))
    }

    /// Get the particle, if this is one
    pub fn as_particle(&self) -> Option<&Particle> {
        match self {
            Body::Particle(p) => Some(p),
            _ => None,
        }
    }

    /// Get the particle mutably, if this is one
    pub fn as_particle_mut(&mut self) -> Option<&mut Particle> {
        match self {
            Body::Particle(p) => Some(p),
            _ => None,
        }
    }

    /// Get the bounding box, if this is one
    pub fn as_bounding_box(&self) -> Option<&BoundingBox> {
        match self {
            Body::BoundingBox(b) => Some(b),
            _ => None,
        }
    }

    /// Position of the body (particle center or box corner)
    pub fn position(&self) -> Vec2 {
        match self {
            Body::Particle(p) => p.position,
            Body::BoundingBox(b) => b.position,
        }
    }
}

impl From<Particle> for Body {
    fn from(particle: Particle) -> Self {
        Body::Particle(particle)
    }
}

impl From<BoundingBox> for Body {
    fn from(bounds: BoundingBox) -> Self {
        Body::BoundingBox(bounds)
    }
}
