//! Core plugin: shared resources and global settings.

use crate::common::tunables::Tunables;
use bevy::prelude::*;

/// Installs [`Tunables`] (keeping any already inserted) and derives the fixed tick rate
/// from it.
pub fn plugin(app: &mut App) {
    app.init_resource::<Tunables>();
    let hz = app.world().resource::<Tunables>().ticks_per_second;
    app.insert_resource(Time::<Fixed>::from_hz(hz));
}
