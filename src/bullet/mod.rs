//! The bullet entity: kinematic state, life-cycle, and the operations pattern
//! behaviors use to steer it frame by frame.
//!
//! # Scene conventions
//! - Positions are scene units with y growing **downward**.
//! - Velocity is displacement per update (per fixed tick), not per second.
//! - Direction 0 points up (negative y) and grows clockwise.
//!
//! # What this type does NOT do
//! - It never allocates, frees, or links itself. The pool owns the slot and the list
//!   link (see [`crate::plugins::bullets::pool`]).
//! - It never calls its behavior. It only stores the [`BehaviorId`]; the scheduler
//!   resolves and invokes it before calling [`Bullet::update`].

mod error;
mod kinematics;
mod life;

pub use error::KinematicsError;
pub use kinematics::{direction_of, polar_velocity, VY_EPSILON};
pub use life::{LifePhase, DEAD_FRAME, DEFAULT_FRAMES_UNTIL_DEATH};

use bevy::math::Vec2;

/// Opaque handle to a behavior registered with the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BehaviorId(pub(crate) u32);

impl BehaviorId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    position: Vec2,
    velocity: Vec2,
    model: u32,
    life: LifePhase,
    behavior: Option<BehaviorId>,
}

impl Default for Bullet {
    fn default() -> Self {
        Self::new()
    }
}

impl Bullet {
    /// A bullet at the origin, at rest, alive at turn 0, with no behavior.
    pub fn new() -> Self {
        let mut bullet = Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            model: 0,
            life: LifePhase::default(),
            behavior: None,
        };
        bullet.fix_speed();
        bullet
    }

    /// Reinitialize a recycled bullet to the fresh state of [`Bullet::new`].
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Deep copy of every field of `from`.
    ///
    /// List membership is owned by the pool slot, so it is never part of the copy.
    #[inline]
    pub fn copy_from(&mut self, from: &Bullet) {
        self.clone_from(from);
    }

    pub fn set_data(&mut self, position: Vec2, velocity: Vec2) {
        self.position = position;
        self.set_velocity(velocity);
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn model(&self) -> u32 {
        self.model
    }

    #[inline]
    pub fn set_model(&mut self, model: u32) {
        self.model = model;
    }

    #[inline]
    pub fn behavior(&self) -> Option<BehaviorId> {
        self.behavior
    }

    /// Bind (or clear) the behavior and restart the turn counter at 0, see
    /// [`Bullet::restart_turns`].
    pub fn set_behavior(&mut self, behavior: Option<BehaviorId>) {
        self.behavior = behavior;
        self.restart_turns();
    }

    /// Put the bullet back at turn 0. A dying bullet is revived and its countdown dropped.
    /// Dead bullets stay dead.
    pub fn restart_turns(&mut self) {
        if !self.life.is_dead() {
            self.life = LifePhase::Alive { turns: 0 };
        }
    }

    // -------------------------------------------------------------------------
    // Life-cycle
    // -------------------------------------------------------------------------

    #[inline]
    pub fn life(&self) -> LifePhase {
        self.life
    }

    /// Signed frame counter, see [`LifePhase::frame_count`].
    #[inline]
    pub fn frame_count(&self) -> i64 {
        self.life.frame_count()
    }

    /// Turns elapsed while alive.
    pub fn turn(&self) -> Option<u32> {
        match self.life {
            LifePhase::Alive { turns } => Some(turns),
            _ => None,
        }
    }

    /// Frames left before death while dying, for fade-out effects.
    pub fn remaining_frames(&self) -> Option<u32> {
        match self.life {
            // `ticks_left` is at most `u32::MAX + 1`.
            LifePhase::Dying { ticks_left } => Some((ticks_left - 1) as u32),
            _ => None,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life.is_alive()
    }

    #[inline]
    pub fn is_dying(&self) -> bool {
        self.life.is_dying()
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.life.is_dead()
    }

    /// Start a fade-out: the bullet dies on the `(frames + 1)`-th update from now.
    ///
    /// Does nothing unless the bullet is alive, so the first scheduled countdown wins.
    pub fn schedule_death(&mut self, frames: u32) {
        if self.life.is_alive() {
            self.life = LifePhase::Dying { ticks_left: u64::from(frames) + 1 };
        }
    }

    /// [`Bullet::schedule_death`] with [`DEFAULT_FRAMES_UNTIL_DEATH`].
    #[inline]
    pub fn vanish(&mut self) {
        self.schedule_death(DEFAULT_FRAMES_UNTIL_DEATH);
    }

    /// Mark the bullet for death on the next update, overriding any fade-out.
    pub fn kill(&mut self) {
        if !self.life.is_dead() {
            self.life = LifePhase::Dying { ticks_left: 1 };
        }
    }

    /// Advance one frame: displace by the velocity, then tick the life-cycle.
    ///
    /// Displacement always happens, whatever the phase.
    pub fn update(&mut self) {
        self.position += self.velocity;
        self.life = self.life.tick();
    }
}

#[cfg(test)]
mod tests;
