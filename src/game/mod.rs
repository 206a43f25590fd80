//! Game composition root.
//!
//! Provides two public configuration functions:
//! - `configure_demo`: minimal runtime + logging + the demo pattern scene.
//! - `configure_headless`: minimal configuration for integration tests.

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::common::state::GameState;
use crate::plugins;

/// Default log filter; `RUST_LOG` takes precedence.
const LOG_FILTER: &str = "info,barrage=debug";

pub fn run() {
    App::new().add_plugins(configure_demo).run();
}

/// Headless demo for `cargo run`: no window, fixed ticks driven by the schedule runner.
pub fn configure_demo(app: &mut App) {
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        LogPlugin {
            filter: LOG_FILTER.into(),
            ..default()
        },
    ));

    configure_game(app);
    plugins::patterns::plugin(app);
}

/// Headless configuration for integration tests.
///
/// Notes:
/// - Do NOT add MinimalPlugins here; the test harness owns the runtime.
/// - Do NOT add the demo scene.
pub fn configure_headless(app: &mut App) {
    configure_game(app);
}

/// Configuration shared by both demo and headless apps.
fn configure_game(app: &mut App) {
    app.init_state::<GameState>();
    plugins::register_gameplay(app);
}
