//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `barrage::game::configure_headless` to install gameplay plugins.
//!
//! The fixed rate is dropped to 1 Hz so `app.update()` never sneaks in a fixed tick;
//! tests advance bullet frames explicitly with [`run_ticks`].

#![allow(dead_code)]

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use barrage::common::tunables::Tunables;
use barrage::plugins::bullets::BulletPool;

pub fn app_headless() -> App {
    app_with_capacity(64)
}

pub fn app_with_capacity(pool_capacity: usize) -> App {
    let mut app = App::new();

    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_resource(Tunables { pool_capacity, ticks_per_second: 1.0, ..default() });

    barrage::game::configure_headless(&mut app);

    // Run a first update so schedules and states initialize.
    app.update();
    app
}

/// Run `n` bullet frames: the fixed gameplay chain and the message buffer flip.
pub fn run_ticks(app: &mut App, n: usize) {
    for _ in 0..n {
        app.world_mut().run_schedule(FixedUpdate);
        app.world_mut().run_schedule(FixedPostUpdate);
    }
}

pub fn pool(app: &App) -> &BulletPool {
    app.world().resource::<BulletPool>()
}

/// Angular distance on the circle, in `[0, π]`.
pub fn angle_gap(a: f32, b: f32) -> f32 {
    let d = (a - b).rem_euclid(std::f32::consts::TAU);
    d.min(std::f32::consts::TAU - d)
}
