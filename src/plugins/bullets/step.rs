//! Per-frame advance: behavior first, then `update()`, for every active bullet.
//!
//! Ordering per bullet is fixed:
//! 1. the bound behavior runs and sees the turn counter *before* this frame's tick
//!    (a freshly spawned bullet observes turn 0);
//! 2. `update()` displaces and ticks the life-cycle, so a bullet killed by its own
//!    behavior is observably dead once this pass is over.
//!
//! Bullets spawned by behaviors are queued and written as messages after the pass;
//! the allocator picks them up on the next tick.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use super::behavior::{AimTarget, BehaviorContext, BehaviorRegistry};
use super::messages::SpawnBulletRequest;
use super::pool::BulletPool;

pub fn advance_bullets(
    mut pool: ResMut<BulletPool>,
    registry: Res<BehaviorRegistry>,
    aim: Res<AimTarget>,
    mut writer: MessageWriter<SpawnBulletRequest>,
    mut spawns: Local<Vec<SpawnBulletRequest>>,
) {
    let mut cursor = pool.first_active();

    while let Some(handle) = cursor {
        cursor = pool.next(handle);
        let Some(bullet) = pool.get_mut(handle) else { continue; };

        if let Some(id) = bullet.behavior() {
            match registry.get(id) {
                Some(handler) => {
                    let mut ctx = BehaviorContext::new(handle, aim.0, &mut spawns);
                    handler.advance(bullet, &mut ctx);
                }
                None => warn!("bullet {handle:?} bound to unregistered behavior {id:?}"),
            }
        }

        bullet.update();
    }

    for req in spawns.drain(..) {
        writer.write(req);
    }
}
