//! Buffered bullet traffic.
//!
//! Producers (game code, emitter behaviors) never touch the pool. They write a
//! [`SpawnBulletRequest`]; the allocator is the single writer that pops free slots.
//! The recycler reports freed slots with [`BulletRecycled`].

use bevy::prelude::*;

use crate::bullet::{BehaviorId, Bullet};

use super::pool::BulletHandle;

/// Intent to spawn one bullet, carried as a full bullet template.
///
/// The allocator copies the template into a freshly reset slot, so every field
/// (including the life-cycle) arrives exactly as built here.
#[derive(Message, Clone, Debug, PartialEq)]
pub struct SpawnBulletRequest {
    pub bullet: Bullet,
}

impl SpawnBulletRequest {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        let mut bullet = Bullet::new();
        bullet.set_data(position, velocity);
        Self { bullet }
    }

    /// Spawn at `position` moving at `speed` toward `dir`.
    pub fn polar(position: Vec2, speed: f32, dir: f32) -> Self {
        let mut bullet = Bullet::new();
        bullet.set_position(position);
        bullet.set_speed_and_direction(speed, dir);
        Self { bullet }
    }

    /// Clone an existing bullet, turn counter and behavior included.
    pub fn from_bullet(bullet: &Bullet) -> Self {
        Self { bullet: bullet.clone() }
    }

    pub fn with_model(mut self, model: u32) -> Self {
        self.bullet.set_model(model);
        self
    }

    pub fn with_behavior(mut self, behavior: BehaviorId) -> Self {
        self.bullet.set_behavior(Some(behavior));
        self
    }
}

/// A dead bullet's slot went back to the free list this tick.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BulletRecycled {
    pub handle: BulletHandle,
}
