//! Return commit: recycle dead bullets back into the pool.
//!
//! Runs after `advance_bullets`, so death is read only once every bullet has been
//! updated this tick. This is the only system that pushes onto the free list.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use super::messages::BulletRecycled;
use super::pool::BulletPool;

pub fn recycle_dead_bullets(
    mut pool: ResMut<BulletPool>,
    mut writer: MessageWriter<BulletRecycled>,
) {
    let recycled = pool.recycle_dead(|handle| {
        writer.write(BulletRecycled { handle });
    });

    if recycled > 0 {
        trace!("recycled {recycled} bullets, {} active", pool.active_len());
    }
}
