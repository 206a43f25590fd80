//! Bullets plugin: the pool and the per-frame scheduler around [`crate::bullet::Bullet`].
//!
//! # Data flow (one fixed tick)
//! ```text
//!   FixedUpdate (BulletSystems, chained, InGame only)
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (A) allocate_bullets_from_pool                                            │
//!│      - reads: SpawnBulletRequest messages                                  │
//!│      - mutates: BulletPool.free → active list (copy template into slot)    │
//!│                                                                            │
//!│  (B) advance_bullets                                                       │
//!│      - for each active bullet, in spawn order:                             │
//!│          behavior.advance(bullet, ctx)  then  bullet.update()              │
//!│      - writes: SpawnBulletRequest (children queued by behaviors)           │
//!│                                                                            │
//!│  (C) recycle_dead_bullets                                                  │
//!│      - reads: bullet.is_dead()                                             │
//!│      - mutates: active list → BulletPool.free                              │
//!│      - writes: BulletRecycled                                              │
//!└────────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   FixedPostUpdate
//!     update_bullet_messages (advance the double buffers once per tick)
//!
//! Feedback loop:
//!   children written in (B) are allocated by (A) on the next tick
//!   and run their first behavior call at turn 0.
//! ```
//!
//! Message buffers advance in the fixed schedule, not in `PostUpdate`: requests must
//! survive frames in which no fixed tick runs.

pub mod allocator;
pub mod behavior;
pub mod commit;
pub mod messages;
pub mod pool;
pub mod step;

use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::{state::GameState, tunables::Tunables};

pub use behavior::{AimTarget, BehaviorContext, BehaviorHandler, BehaviorRegistry};
pub use messages::{BulletRecycled, SpawnBulletRequest};
pub use pool::{BulletHandle, BulletPool};

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct BulletSystems;

pub struct BulletsPlugin;

fn update_bullet_messages(
    mut spawns: ResMut<Messages<SpawnBulletRequest>>,
    mut recycled: ResMut<Messages<BulletRecycled>>,
) {
    spawns.update();
    recycled.update();
}

impl Plugin for BulletsPlugin {
    fn build(&self, app: &mut App) {
        let capacity = app.world().resource::<Tunables>().pool_capacity;

        app.insert_resource(BulletPool::new(capacity))
            .init_resource::<BehaviorRegistry>()
            .init_resource::<AimTarget>();

        app.init_resource::<Messages<SpawnBulletRequest>>()
            .init_resource::<Messages<BulletRecycled>>();

        app.add_systems(
            FixedUpdate,
            (
                allocator::allocate_bullets_from_pool,
                step::advance_bullets,
                commit::recycle_dead_bullets,
            )
                .chain()
                .in_set(BulletSystems)
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            FixedPostUpdate,
            update_bullet_messages.run_if(in_state(GameState::InGame)),
        );
    }
}
