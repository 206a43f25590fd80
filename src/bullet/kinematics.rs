//! Speed / direction view of the velocity vector.
//!
//! Speed and direction are always derived from `velocity`, never stored.
//! Every velocity writer ends in [`Bullet::fix_speed`].

use std::f32::consts::PI;

use bevy::math::Vec2;

use super::{Bullet, KinematicsError};

/// Smallest `|vy|` a bullet may carry.
pub const VY_EPSILON: f32 = f32::EPSILON;

/// Velocity of magnitude `speed` pointing at `dir` (0 = up, clockwise).
#[inline]
pub fn polar_velocity(speed: f32, dir: f32) -> Vec2 {
    Vec2::new(speed * dir.sin(), -speed * dir.cos())
}

/// Inverse of [`polar_velocity`]'s angle convention. Result lies in `[0, 2π]`.
#[inline]
pub fn direction_of(v: Vec2) -> f32 {
    PI - v.x.atan2(v.y)
}

impl Bullet {
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
        self.fix_speed();
    }

    pub fn set_speed_and_direction(&mut self, speed: f32, dir: f32) {
        self.velocity = polar_velocity(speed, dir);
        self.fix_speed();
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Rescale the velocity to `speed`, keeping its direction.
    pub fn set_speed(&mut self, speed: f32) -> Result<(), KinematicsError> {
        let mag = self.rescalable_speed()?;
        self.velocity = self.velocity * speed / mag;
        self.fix_speed();
        Ok(())
    }

    /// Rescale the velocity to `speed() + delta`, keeping its direction.
    pub fn set_speed_relative(&mut self, delta: f32) -> Result<(), KinematicsError> {
        let mag = self.rescalable_speed()?;
        self.velocity = self.velocity * (mag + delta) / mag;
        self.fix_speed();
        Ok(())
    }

    #[inline]
    pub fn direction(&self) -> f32 {
        direction_of(self.velocity)
    }

    /// Point the velocity at `dir`, keeping the current speed.
    pub fn set_direction(&mut self, dir: f32) {
        self.velocity = polar_velocity(self.speed(), dir);
        self.fix_speed();
    }

    #[inline]
    pub fn set_direction_relative(&mut self, delta: f32) {
        self.set_direction(self.direction() + delta);
    }

    /// Direction from the bullet's position toward `target`.
    #[inline]
    pub fn aim_direction(&self, target: Vec2) -> f32 {
        direction_of(target - self.position)
    }

    #[inline]
    pub fn aim_at_point(&mut self, target: Vec2) {
        self.set_direction(self.aim_direction(target));
    }

    /// Velocity that reaches `target` after exactly `steps` updates.
    pub fn linear_interpolate(&mut self, target: Vec2, steps: u32) -> Result<(), KinematicsError> {
        if steps == 0 {
            return Err(KinematicsError::ZeroSteps);
        }
        self.set_velocity((target - self.position) / steps as f32);
        Ok(())
    }

    fn rescalable_speed(&self) -> Result<f32, KinematicsError> {
        let mag = self.speed();
        if mag > 0.0 && mag.is_finite() {
            Ok(mag)
        } else {
            Err(KinematicsError::ZeroSpeed)
        }
    }

    /// Keep `vy` away from zero so `direction()` stays well defined for horizontal
    /// and resting bullets.
    #[inline]
    pub(super) fn fix_speed(&mut self) {
        if self.velocity.y.abs() < VY_EPSILON {
            self.velocity.y = VY_EPSILON;
        }
    }
}
