//! Spawn consumer: activate bullets from the pool.
//!
//! The only system that pops the free list. Pool exhaustion is a capacity decision,
//! not a correctness failure: the request is dropped and logged.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::messages::SpawnBulletRequest;
use super::pool::BulletPool;

pub fn allocate_bullets_from_pool(
    mut pool: ResMut<BulletPool>,
    mut reader: MessageReader<SpawnBulletRequest>,
) {
    let mut dropped = 0usize;

    for req in reader.read() {
        let Some((_, bullet)) = pool.acquire() else {
            dropped += 1;
            continue;
        };
        bullet.copy_from(&req.bullet);
    }

    if dropped > 0 {
        debug!(
            "bullet pool exhausted: dropped {dropped} spawn requests (capacity {})",
            pool.capacity()
        );
    }
}
