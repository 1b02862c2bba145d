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
//! Shared simulation resources
//!
//! One [`SimResources`] value is threaded by reference through every system
//! call. Changes a system makes (for example the spawn system consuming the
//! input gesture) are seen by the systems after it and by the next tick.

use crate::diagnostics::Diagnostic;
use crate::math::Vec2;

/// Pointer gesture state, already mapped into simulation space
///
/// A gesture goes press → (drag)* → release. The spawn system consumes a
/// completed gesture and clears the state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputState {
    /// Where the pointer went down
    pub clicked: Option<Vec2>,
    /// Latest pointer position while held
    pub drag: Option<Vec2>,
    /// Where the pointer was let go
    pub released: Option<Vec2>,
}

impl InputState {
    /// Pointer pressed at `p`; starts a new gesture
    pub fn press(&mut self, p: Vec2) {
        self.clicked = Some(p);
        self.released = None;
    }

    /// Pointer moved to `p`; only recorded while the gesture is open
    pub fn drag_to(&mut self, p: Vec2) {
        if self.clicked.is_some() && self.released.is_none() {
            self.drag = Some(p);
        }
    }

    /// Pointer released at `p`
    pub fn release(&mut self, p: Vec2) {
        self.released = Some(p);
        self.drag = None;
    }

    /// Forget the current gesture
    pub fn clear(&mut self) {
        *self = InputState::default();
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.clicked.is_none() && self.drag.is_none() && self.released.is_none()
    }

    /// The press and release points of a completed gesture
    pub fn completed(&self) -> Option<(Vec2, Vec2)> {
        self.clicked.zip(self.released)
    }
}

/// Resources shared by every system
#[derive(Debug, Clone, PartialEq)]
pub struct SimResources {
    /// Fixed timestep in seconds per tick
    pub dt: f64,
    /// Pointer gesture state
    pub input: InputState,
    /// Diagnostics collected since the driver last drained them
    pub diagnostics: Vec<Diagnostic>,
}

impl SimResources {
    /// Create resources with the given fixed timestep
    ///
    /// # Panics
    ///
    /// Panics if `dt` is not positive and finite.
    pub fn new(dt: f64) -> Self {
        assert!(dt > 0.0 && dt.is_finite(), "Timestep must be positive and finite");
        SimResources {
            dt,
            input: InputState::default(),
            diagnostics: Vec::new(),
        }
    }

    /// Record a diagnostic and forward it to the log
    pub fn report(&mut self, diagnostic: Diagnostic) {
        diagnostic.log();
        self.diagnostics.push(diagnostic);
    }

    /// Take every diagnostic recorded so far
    pub fn drain_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

impl Default for SimResources {
    fn default() -> Self {
        SimResources::new(1.0 / 60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_sequence() {
        let mut input = InputState::default();
        assert!(input.is_empty());

        input.press(Vec2::new(1.0, 1.0));
        input.drag_to(Vec2::new(2.0, 2.0));
        assert_eq!(input.drag, Some(Vec2::new(2.0, 2.0)));
        assert!(input.completed().is_none());

        input.release(Vec2::new(3.0, 3.0));
        assert_eq!(input.drag, None);
        assert_eq!(input.completed(), Some((Vec2::new(1.0, 1.0), Vec2::new(3.0, 3.0))));

        // Moves after release are ignored
        input.drag_to(Vec2::new(9.0, 9.0));
        assert_eq!(input.drag, None);

        input.clear();
        assert!(input.is_empty());
    }

    #[test]
    fn test_drag_without_press_ignored() {
        let mut input = InputState::default();
        input.drag_to(Vec2::new(1.0, 0.0));
        assert!(input.is_empty());
    }

    #[test]
    fn test_press_reopens_gesture() {
        let mut input = InputState::default();
        input.press(Vec2::ZERO);
        input.release(Vec2::new(1.0, 0.0));
        input.press(Vec2::new(5.0, 5.0));
        assert_eq!(input.released, None);
        assert!(input.completed().is_none());
    }

    #[test]
    fn test_drain_diagnostics() {
        let mut resources = SimResources::default();
        resources.report(Diagnostic::CoefficientsOutOfRange { friction: 2.0, restitution: 0.5 });
        assert_eq!(resources.drain_diagnostics().len(), 1);
        assert!(resources.diagnostics.is_empty());
    }

    #[test]
    #[should_panic(expected = "Timestep must be positive and finite")]
    fn test_zero_timestep_panics() {
        SimResources::new(0.0);
    }
}
