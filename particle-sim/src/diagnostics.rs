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
//! Structured diagnostics
//!
//! Systems report recoverable anomalies by pushing a [`Diagnostic`] onto the
//! shared resources instead of printing. The driver decides what to do with
//! them; every diagnostic is also forwarded to the `log` facade.

use crate::ecs::EntityId;
use std::fmt;

/// A non-fatal anomaly observed during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Diagnostic {
    /// Surface response coefficients outside `[0, 1]`
    CoefficientsOutOfRange {
        /// Friction coefficient in use
        friction: f64,
        /// Restitution coefficient in use
        restitution: f64,
    },
    /// More than one bounding box was live during containment
    MultipleBoundingBoxes {
        /// Number of boxes found
        count: usize,
        /// The box that containment resolved against
        used: EntityId,
    },
    /// Two particles shared the same center, so a fallback normal was used
    CoincidentParticles {
        /// First particle of the pair
        a: EntityId,
        /// Second particle of the pair
        b: EntityId,
    },
}

impl Diagnostic {
    /// Forward this diagnostic to the `log` facade
    pub fn log(&self) {
        match self {
            Diagnostic::CoefficientsOutOfRange { .. } => log::warn!("{}", self),
            Diagnostic::MultipleBoundingBoxes { .. } => log::warn!("{}", self),
            Diagnostic::CoincidentParticles { .. } => log::debug!("{}", self),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::CoefficientsOutOfRange { friction, restitution } => write!(
                f,
                "surface collision coefficients are out of bounds and may give obscure results (f = {}, e = {})",
                friction, restitution
            ),
            Diagnostic::MultipleBoundingBoxes { count, used } => write!(
                f,
                "{} bounding boxes are live, containing against {}",
                count, used
            ),
            Diagnostic::CoincidentParticles { a, b } => {
                write!(f, "{} and {} share a center, separating along +x", a, b)
            }
        }
    }
}
