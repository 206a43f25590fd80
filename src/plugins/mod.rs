//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::bullets::BulletsPlugin;

pub mod bullets;
pub mod core;
pub mod patterns;

/// Register the bullet engine (pool + scheduler). Works in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    app.add_plugins(BulletsPlugin);
}
