//! Tunable engine constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    /// Number of bullet slots pre-allocated by the pool.
    pub pool_capacity: usize,
    /// Fixed simulation rate. One tick = one bullet frame.
    pub ticks_per_second: f64,
    /// Ticks between pool statistics log lines in the demo.
    pub stats_interval: u32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self { pool_capacity: 512, ticks_per_second: 60.0, stats_interval: 120 }
    }
}
