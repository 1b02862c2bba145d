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
//! Headless slingshot demo
//!
//! Drags out a bundle of particles, lets it fly into an 800x600 viewport
//! and prints energy and momentum as the particles settle under gravity.
//!
//! # Running
//!
//! ```bash
//! cargo run --example slingshot --release
//!
//! # Longer run with a custom configuration file
//! cargo run --example slingshot --release -- --ticks 1200 --config sim.toml
//! ```

use std::cell::Cell;
use std::rc::Rc;

use particle_sim::config::SimulationConfig;
use particle_sim::ecs::components::{Body, BodyKind, BoundingBox};
use particle_sim::energy::{total_kinetic_energy, total_momentum};
use particle_sim::math::Vec2;
use particle_sim::systems::{RenderSystem, Renderer};
use particle_sim::{SimResult, Simulation};

/// Counts draw calls instead of putting pixels anywhere
struct DrawCounter {
    calls: Rc<Cell<usize>>,
}

impl Renderer for DrawCounter {
    fn draw(&mut self, _body: &Body) {
        self.calls.set(self.calls.get() + 1);
    }
}

struct DemoArgs {
    ticks: u64,
    config: Option<String>,
}

fn parse_args() -> DemoArgs {
    let mut args = DemoArgs {
        ticks: 600,
        config: None,
    };
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--ticks" => match iter.next().map(|v| v.parse::<u64>()) {
                Some(Ok(ticks)) => args.ticks = ticks,
                _ => eprintln!("Warning: --ticks needs a whole number, using {}", args.ticks),
            },
            "--config" => match iter.next() {
                Some(path) => args.config = Some(path),
                None => eprintln!("Error: --config requires a path"),
            },
            other => eprintln!("Warning: ignoring unknown argument '{}'", other),
        }
    }
    args
}

fn report(sim: &Simulation) {
    let momentum = total_momentum(sim.world());
    println!(
        "tick {:>5}: {:>3} particles, KE {:.3e}, p = ({:.1}, {:.1})",
        sim.ticks(),
        sim.particle_count(),
        total_kinetic_energy(sim.world()),
        momentum.x,
        momentum.y,
    );
}

fn main() -> SimResult<()> {
    let args = parse_args();
    let config = match &args.config {
        Some(path) => SimulationConfig::from_file(path)?,
        None => SimulationConfig::default(),
    };

    println!("==========================================================");
    println!("                Particle Slingshot Demo");
    println!("==========================================================");
    println!("timestep {:.4} s, gravity {:.2}, {} ticks", config.timestep, config.gravity, args.ticks);
    println!();

    let mut sim = Simulation::new(config)?;
    let draw_calls = Rc::new(Cell::new(0));
    let counter = DrawCounter {
        calls: Rc::clone(&draw_calls),
    };
    sim.add_system(RenderSystem::only(counter, BodyKind::Particle));
    sim.setup()?;

    let viewport = BoundingBox::new(Vec2::ZERO, Vec2::new(800.0, 600.0));

    // Pull back and to the left, so the bundle launches up and to the right
    sim.press(Vec2::new(200.0, 300.0));
    sim.drag_to(Vec2::new(170.0, 320.0));
    sim.release(Vec2::new(140.0, 340.0));

    for _ in 0..args.ticks {
        sim.step(viewport)?;

        for diagnostic in sim.drain_diagnostics() {
            println!("  note: {}", diagnostic);
        }
        if sim.ticks() % 60 == 1 {
            report(&sim);
        }
    }

    println!();
    report(&sim);
    println!("particle draw calls: {}", draw_calls.get());
    Ok(())
}
