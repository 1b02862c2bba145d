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
//! Error types for the simulation
//!
//! Only precondition violations surface as errors. Numeric oddities that the
//! simulation can live with are reported through [`crate::diagnostics`].

use thiserror::Error;

/// Errors raised while configuring or stepping the simulation
#[derive(Debug, Error)]
pub enum SimError {
    /// A phase was run before resources were attached to the scheduler
    #[error("resources must be added before running a phase")]
    MissingResources,

    /// A particle bundle was requested with fractional half-extents
    #[error("bundle half-extents must be non-negative integers (half_width = {half_width}, half_height = {half_height})")]
    NonIntegerBundleExtent {
        /// Requested half-width
        half_width: f64,
        /// Requested half-height
        half_height: f64,
    },

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration file is not valid TOML for [`crate::config::SimulationConfig`]
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration file could not be read
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate
pub type SimResult<T> = Result<T, SimError>;
