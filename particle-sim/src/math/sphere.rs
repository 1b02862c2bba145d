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
//! Sphere mass/radius relations
//!
//! Particles are drawn as circles but weighted as spheres, so mass grows with
//! the cube of the radius:
//!
//! **m = ρ · (4/3) · π · r³**

use std::f64::consts::PI;

/// Mass of a sphere with the given radius and density
pub fn sphere_mass(radius: f64, density: f64) -> f64 {
    density * (4.0 / 3.0) * PI * radius.powi(3)
}

/// Radius of a sphere with the given mass and density
///
/// Inverse of [`sphere_mass`].
pub fn sphere_radius(mass: f64, density: f64) -> f64 {
    (mass / ((4.0 / 3.0) * PI * density)).cbrt()
}
