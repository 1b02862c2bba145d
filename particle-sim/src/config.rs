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
//! Simulation configuration
//!
//! [`SimulationConfig`] gathers every tunable constant. Values can be loaded
//! from TOML; any key left out keeps its default, so a file only needs the
//! settings it changes:
//!
//! ```toml
//! timestep = 0.01
//! gravity = 20.0
//!
//! [collision]
//! elastic = true
//! restitution = 0.9
//! ```

use crate::error::{SimError, SimResult};
use crate::systems::{DEFAULT_WALL_FRICTION, DEFAULT_WALL_RESTITUTION, STANDARD_GRAVITY};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Bounding box bounce coefficients
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallConfig {
    /// Fraction of tangential velocity kept on a bounce
    pub friction: f64,
    /// Fraction of normal velocity returned on a bounce
    pub restitution: f64,
}

impl Default for WallConfig {
    fn default() -> Self {
        WallConfig {
            friction: DEFAULT_WALL_FRICTION,
            restitution: DEFAULT_WALL_RESTITUTION,
        }
    }
}

/// Particle-particle collision settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Register the collision system at all
    pub enabled: bool,
    /// Exchange impulses as well as separating positions
    pub elastic: bool,
    /// Restitution for elastic impulses
    pub restitution: f64,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        CollisionConfig {
            enabled: true,
            elastic: false,
            restitution: 1.0,
        }
    }
}

/// Bundle spawning settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Particles either side of the center, horizontally; must be whole
    pub half_width: f64,
    /// Particles either side of the center, vertically; must be whole
    pub half_height: f64,
    /// Radius of every spawned particle
    pub radius: f64,
    /// Density of every spawned particle
    pub density: f64,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        SpawnConfig {
            half_width: 2.0,
            half_height: 2.0,
            radius: 10.0,
            density: 1.0,
        }
    }
}

/// Complete simulation configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed timestep in seconds per tick
    pub timestep: f64,
    /// Downward acceleration
    pub gravity: f64,
    /// Bounding box bounce
    pub wall: WallConfig,
    /// Particle-particle collisions
    pub collision: CollisionConfig,
    /// Bundle spawning
    pub spawn: SpawnConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            timestep: 1.0 / 60.0,
            gravity: STANDARD_GRAVITY,
            wall: WallConfig::default(),
            collision: CollisionConfig::default(),
            spawn: SpawnConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Parse a configuration from TOML text and validate it
    pub fn from_toml_str(text: &str) -> SimResult<Self> {
        let config: SimulationConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration from a TOML file and validate it
    pub fn from_file(path: impl AsRef<Path>) -> SimResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check values that would break the simulation outright
    ///
    /// Bundle half-extents are deliberately not checked here; they are
    /// validated when a bundle is spawned. Wall coefficients outside `[0, 1]`
    /// are allowed and reported as diagnostics at runtime.
    pub fn validate(&self) -> SimResult<()> {
        if !(self.timestep > 0.0 && self.timestep.is_finite()) {
            return Err(SimError::InvalidConfig(format!(
                "timestep must be positive and finite, got {}",
                self.timestep
            )));
        }
        if !self.gravity.is_finite() {
            return Err(SimError::InvalidConfig(format!(
                "gravity must be finite, got {}",
                self.gravity
            )));
        }
        if !(self.spawn.radius > 0.0 && self.spawn.radius.is_finite()) {
            return Err(SimError::InvalidConfig(format!(
                "spawn radius must be positive and finite, got {}",
                self.spawn.radius
            )));
        }
        if !(self.spawn.density > 0.0 && self.spawn.density.is_finite()) {
            return Err(SimError::InvalidConfig(format!(
                "spawn density must be positive and finite, got {}",
                self.spawn.density
            )));
        }
        Ok(())
    }
}
