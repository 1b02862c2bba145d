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
//! Benchmarks for pairwise particle collision
//!
//! Resolution is quadratic in the particle count, so these runs show where
//! the all-pairs pass stops fitting in a frame budget.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use particle_sim::ecs::components::{Body, Particle};
use particle_sim::ecs::{EntityId, System, World};
use particle_sim::math::Vec2;
use particle_sim::resources::SimResources;
use particle_sim::systems::{resolve_pair, CollisionSystem};

/// Build a square lattice of touching particles, slightly compressed so
/// every neighbour pair overlaps
fn setup_lattice(side: usize, radius: f64) -> (World<Body>, Vec<EntityId>) {
    let mut world = World::new();
    let mut entities = Vec::with_capacity(side * side);
    let spacing = 1.9 * radius;

    for i in 0..side {
        for j in 0..side {
            let position = Vec2::new(i as f64 * spacing, j as f64 * spacing);
            let velocity = Vec2::new((j as f64).sin(), (i as f64).cos());
            let particle = Particle::new(position, radius).with_velocity(velocity);
            entities.push(world.create_entity(Body::from(particle)));
        }
    }

    (world, entities)
}

fn bench_collision_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("collision_pass");

    for side in [4usize, 10, 20].iter() {
        let count = side * side;
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("inelastic", count), side, |b, &side| {
            let (world, entities) = setup_lattice(side, 5.0);
            let mut system = CollisionSystem::inelastic();
            let mut resources = SimResources::default();

            b.iter_batched(
                || world.clone(),
                |mut world| {
                    system
                        .update(black_box(&entities), &mut world, &mut resources)
                        .ok();
                    world
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("elastic", count), side, |b, &side| {
            let (world, entities) = setup_lattice(side, 5.0);
            let mut system = CollisionSystem::elastic(0.9);
            let mut resources = SimResources::default();

            b.iter_batched(
                || world.clone(),
                |mut world| {
                    system
                        .update(black_box(&entities), &mut world, &mut resources)
                        .ok();
                    world
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_resolve_pair(c: &mut Criterion) {
    let a = Particle::new(Vec2::new(0.0, 0.0), 3.0).with_velocity(Vec2::new(1.0, 0.0));
    let b = Particle::new(Vec2::new(3.0, 4.0), 3.0).with_velocity(Vec2::new(-1.0, 0.5));

    c.bench_function("resolve_pair", |bencher| {
        bencher.iter(|| {
            let mut a = a;
            let mut b = b;
            black_box(resolve_pair(&mut a, &mut b, black_box(Some(1.0))))
        });
    });
}

criterion_group!(benches, bench_collision_pass, bench_resolve_pair);
criterion_main!(benches);
