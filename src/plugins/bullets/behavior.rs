//! Behavior dispatch: the scripted logic that steers a bullet each frame.
//!
//! The bullet only stores a [`BehaviorId`]. The scheduler resolves it through the
//! [`BehaviorRegistry`] and calls [`BehaviorHandler::advance`] once per frame, right
//! before the bullet's `update()`.

use bevy::prelude::*;

use crate::bullet::{BehaviorId, Bullet};

use super::messages::SpawnBulletRequest;
use super::pool::BulletHandle;

/// Per-frame logic bound to a bullet.
///
/// Handlers are shared by every bullet bound to the same id, so per-bullet progress
/// should be derived from the bullet itself (turn counter, position, velocity).
pub trait BehaviorHandler: Send + Sync + 'static {
    fn advance(&self, bullet: &mut Bullet, ctx: &mut BehaviorContext<'_>);
}

impl<F> BehaviorHandler for F
where
    F: Fn(&mut Bullet, &mut BehaviorContext<'_>) + Send + Sync + 'static,
{
    #[inline]
    fn advance(&self, bullet: &mut Bullet, ctx: &mut BehaviorContext<'_>) {
        self(bullet, ctx);
    }
}

/// What a behavior can see and do beyond its own bullet.
pub struct BehaviorContext<'a> {
    handle: BulletHandle,
    target: Vec2,
    spawns: &'a mut Vec<SpawnBulletRequest>,
}

impl<'a> BehaviorContext<'a> {
    pub fn new(handle: BulletHandle, target: Vec2, spawns: &'a mut Vec<SpawnBulletRequest>) -> Self {
        Self { handle, target, spawns }
    }

    /// Pool handle of the bullet being advanced.
    #[inline]
    pub fn handle(&self) -> BulletHandle {
        self.handle
    }

    /// Current aim point (usually the player).
    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Queue a new bullet. It is allocated on the next tick, so its behavior first
    /// runs at turn 0.
    #[inline]
    pub fn spawn(&mut self, request: SpawnBulletRequest) {
        self.spawns.push(request);
    }
}

#[derive(Resource, Default)]
pub struct BehaviorRegistry {
    handlers: Vec<Box<dyn BehaviorHandler>>,
}

impl BehaviorRegistry {
    pub fn register(&mut self, handler: impl BehaviorHandler) -> BehaviorId {
        let id = BehaviorId(self.handlers.len() as u32);
        self.handlers.push(Box::new(handler));
        id
    }

    /// Closure flavour of [`BehaviorRegistry::register`]; lets the compiler infer the
    /// closure's argument types.
    pub fn register_fn<F>(&mut self, f: F) -> BehaviorId
    where
        F: Fn(&mut Bullet, &mut BehaviorContext<'_>) + Send + Sync + 'static,
    {
        self.register(f)
    }

    pub fn get(&self, id: BehaviorId) -> Option<&dyn BehaviorHandler> {
        self.handlers.get(id.index()).map(|h| h.as_ref())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for BehaviorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BehaviorRegistry").field("handlers", &self.handlers.len()).finish()
    }
}

/// Point that aiming behaviors track.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct AimTarget(pub Vec2);
