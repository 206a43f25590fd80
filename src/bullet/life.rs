//! Bullet life-cycle.
//!
//! ```text
//!   Alive{turns} ──schedule_death(n)──▶ Dying{n + 1}
//!        │                                   │ update()
//!        └────────kill()────────▶ Dying{1} ◀─┘ (counts down)
//!                                    │ update()
//!                                    ▼
//!                                  Dead   (terminal until the pool resets the slot)
//! ```
//!
//! `kill()` never lands on `Dead` directly. A behavior that kills its own bullet
//! finishes its turn on a Dying bullet; the scheduler's `update()` right after the
//! behavior completes the transition.
//!
//! Binding a behavior (`restart_turns`) sends a dying bullet back to `Alive{0}`.

/// Encoded frame count of a dead bullet.
pub const DEAD_FRAME: i64 = -1;

/// Fade-out length used by [`Bullet::vanish`](super::Bullet::vanish).
pub const DEFAULT_FRAMES_UNTIL_DEATH: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifePhase {
    /// Normal operation; `turns` updates have elapsed since (re)initialization.
    Alive { turns: u32 },
    /// Counting down; the bullet becomes `Dead` after `ticks_left` more updates.
    ///
    /// `ticks_left` is always at least 1. It is wider than the `u32` frame argument of
    /// `schedule_death` so that `u32::MAX` frames still die on the following update.
    Dying { ticks_left: u64 },
    Dead,
}

impl Default for LifePhase {
    fn default() -> Self {
        Self::Alive { turns: 0 }
    }
}

impl LifePhase {
    #[inline]
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive { .. })
    }

    #[inline]
    pub const fn is_dying(self) -> bool {
        matches!(self, Self::Dying { .. })
    }

    #[inline]
    pub const fn is_dead(self) -> bool {
        matches!(self, Self::Dead)
    }

    /// Signed frame counter: turns while alive, `-(frames until death) - 2` while
    /// dying, [`DEAD_FRAME`] once dead.
    pub const fn frame_count(self) -> i64 {
        match self {
            Self::Alive { turns } => turns as i64,
            Self::Dying { ticks_left } => -(ticks_left as i64) - 1,
            Self::Dead => DEAD_FRAME,
        }
    }

    /// Phase after one more update.
    pub(crate) const fn tick(self) -> Self {
        match self {
            Self::Alive { turns } => Self::Alive { turns: turns.saturating_add(1) },
            Self::Dying { ticks_left } if ticks_left <= 1 => Self::Dead,
            Self::Dying { ticks_left } => Self::Dying { ticks_left: ticks_left - 1 },
            Self::Dead => Self::Dead,
        }
    }
}
