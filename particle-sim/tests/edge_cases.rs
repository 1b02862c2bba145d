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
//! Edge case tests
//!
//! Tests fatal preconditions, silent no-ops and the diagnostics reported for
//! degenerate geometry and unusual coefficients.

use particle_sim::config::SimulationConfig;
use particle_sim::diagnostics::Diagnostic;
use particle_sim::ecs::components::{Body, BoundingBox, Particle};
use particle_sim::ecs::Scheduler;
use particle_sim::math::Vec2;
use particle_sim::resources::SimResources;
use particle_sim::systems::{CollisionSystem, ConstrainSystem, SimScheduler, SpawnSystem};
use particle_sim::{SimError, Simulation};

fn viewport() -> BoundingBox {
    BoundingBox::new(Vec2::ZERO, Vec2::new(640.0, 480.0))
}

#[test]
fn test_update_without_resources() {
    let mut scheduler: SimScheduler = Scheduler::new();
    scheduler.add_system(ConstrainSystem::default());
    scheduler.create_entity(Particle::new(Vec2::ZERO, 1.0).into());

    assert!(matches!(scheduler.run_update_phase(), Err(SimError::MissingResources)));
}

#[test]
fn test_setup_without_resources() {
    let mut scheduler: SimScheduler = Scheduler::new();
    assert!(matches!(scheduler.run_setup_phase(), Err(SimError::MissingResources)));
}

#[test]
fn test_fractional_bundle_aborts_tick() {
    let mut scheduler: SimScheduler = Scheduler::new();
    scheduler.add_resource(SimResources::default());
    scheduler.add_system(SpawnSystem::new(2.0, 1.25, 5.0, 1.0));
    scheduler.add_system(CollisionSystem::inelastic());
    if let Some(resources) = scheduler.resources_mut() {
        resources.input.press(Vec2::ZERO);
        resources.input.release(Vec2::new(5.0, 5.0));
    }

    let err = scheduler.run_update_phase().unwrap_err();
    assert!(matches!(
        err,
        SimError::NonIntegerBundleExtent { half_width, half_height }
            if half_width == 2.0 && half_height == 1.25
    ));
    assert_eq!(scheduler.world().entity_count(), 0);

    // The gesture is not consumed, so the same tick fails again
    assert!(scheduler.run_update_phase().is_err());
}

#[test]
fn test_fractional_bundle_from_config() {
    let config = SimulationConfig::from_toml_str("[spawn]\nhalf_height = 0.5").unwrap();
    let mut sim = Simulation::new(config).unwrap();
    sim.press(Vec2::new(100.0, 100.0));
    sim.release(Vec2::new(120.0, 100.0));

    assert!(matches!(sim.step(viewport()), Err(SimError::NonIntegerBundleExtent { .. })));
}

#[test]
fn test_zero_extent_bundle_is_single_particle() {
    let mut config = SimulationConfig::default();
    config.spawn.half_width = 0.0;
    config.spawn.half_height = 0.0;
    let mut sim = Simulation::new(config).unwrap();
    sim.press(Vec2::new(100.0, 100.0));
    sim.release(Vec2::new(120.0, 100.0));

    sim.step(viewport()).unwrap();
    assert_eq!(sim.particle_count(), 1);
}

#[test]
fn test_no_box_means_no_containment() {
    let mut scheduler: SimScheduler = Scheduler::new();
    scheduler.add_resource(SimResources::default());
    scheduler.add_system(ConstrainSystem::default());
    let id = scheduler.create_entity(Particle::new(Vec2::new(-1000.0, -1000.0), 1.0).into());

    scheduler.run_update_phase().unwrap();

    let particle = scheduler.world().get(id).and_then(Body::as_particle).unwrap();
    assert_eq!(particle.position, Vec2::new(-1000.0, -1000.0));
    assert!(scheduler.resources().unwrap().diagnostics.is_empty());
}

#[test]
fn test_multiple_boxes_use_first_created() {
    let small = BoundingBox::new(Vec2::ZERO, Vec2::new(100.0, 100.0));
    let mut scheduler: SimScheduler = Scheduler::new();
    scheduler.add_resource(SimResources::default());
    scheduler.add_system(ConstrainSystem::default());
    let first = scheduler.create_entity(small.into());
    scheduler.create_entity(viewport().into());
    let particle = scheduler.create_entity(Particle::new(Vec2::new(300.0, 300.0), 10.0).into());

    scheduler.run_update_phase().unwrap();

    let p = scheduler.world().get(particle).and_then(Body::as_particle).unwrap();
    assert_eq!(p.position, Vec2::new(90.0, 90.0));
    assert_eq!(
        scheduler.resources().unwrap().diagnostics,
        vec![Diagnostic::MultipleBoundingBoxes { count: 2, used: first }]
    );
}

#[test]
fn test_driver_box_is_the_only_box() {
    let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
    let id = sim.add_particle(Particle::new(Vec2::new(300.0, 300.0), 10.0));

    sim.step(viewport()).unwrap();

    assert!(sim.drain_diagnostics().is_empty());
    assert!(sim.world().is_entity_alive(id));
    assert_eq!(sim.world().entity_count(), 1);
}

#[test]
fn test_coincident_particles_separate() {
    let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
    let a = sim.add_particle(Particle::new(Vec2::new(320.0, 240.0), 10.0));
    let b = sim.add_particle(Particle::new(Vec2::new(320.0, 240.0), 10.0));

    sim.step(viewport()).unwrap();

    let positions: Vec<Vec2> = sim.particles().map(|(_, p)| p.position).collect();
    assert!(positions.iter().all(|p| p.is_valid()));
    assert!((Vec2::distance(positions[0], positions[1]) - 20.0).abs() < 1e-6);
    assert_eq!(sim.drain_diagnostics(), vec![Diagnostic::CoincidentParticles { a, b }]);
}

#[test]
fn test_out_of_range_wall_coefficients_warn() {
    let config = SimulationConfig::from_toml_str("[wall]\nfriction = 1.5").unwrap();
    let mut sim = Simulation::new(config).unwrap();
    sim.add_particle(Particle::new(Vec2::new(0.0, 240.0), 10.0).with_velocity(Vec2::new(-30.0, 0.0)));

    sim.step(viewport()).unwrap();
    sim.step(viewport()).unwrap();

    assert_eq!(
        sim.drain_diagnostics(),
        vec![Diagnostic::CoefficientsOutOfRange { friction: 1.5, restitution: 0.8 }]
    );
}

#[test]
fn test_remove_unknown_entity_is_noop() {
    let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
    let id = sim.add_particle(Particle::new(Vec2::ZERO, 1.0));

    assert!(sim.remove_entity(id).is_some());
    assert!(sim.remove_entity(id).is_none());
    assert_eq!(sim.particle_count(), 0);
}

#[test]
fn test_invalid_config_values() {
    for text in ["timestep = -0.1", "[spawn]\nradius = 0.0", "[spawn]\ndensity = -1.0"] {
        assert!(
            matches!(SimulationConfig::from_toml_str(text), Err(SimError::InvalidConfig(_))),
            "expected {:?} to be rejected",
            text
        );
    }
}
