//! Unit tests for the bullet core: kinematics, the `vy` guard, and life-cycle timing.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use approx::assert_abs_diff_eq;
use bevy::math::Vec2;
use rstest::rstest;

use super::*;

const TOL: f32 = 1e-4;

/// Angular distance on the circle, in `[0, π]`.
fn angle_gap(a: f32, b: f32) -> f32 {
    let d = (a - b).rem_euclid(TAU);
    d.min(TAU - d)
}

fn moving(velocity: Vec2) -> Bullet {
    let mut b = Bullet::new();
    b.set_velocity(velocity);
    b
}

// -----------------------------------------------------------------------------
// Fresh state
// -----------------------------------------------------------------------------

#[test]
fn new_bullet_is_alive_at_turn_zero_without_behavior() {
    let b = Bullet::new();
    assert_eq!(b.life(), LifePhase::Alive { turns: 0 });
    assert_eq!(b.frame_count(), 0);
    assert_eq!(b.position(), Vec2::ZERO);
    assert_eq!(b.model(), 0);
    assert_eq!(b.behavior(), None);
    assert_eq!(b.velocity(), Vec2::new(0.0, VY_EPSILON));
}

#[test]
fn reset_restores_fresh_state() {
    let mut b = Bullet::new();
    b.set_data(Vec2::new(5.0, 6.0), Vec2::new(1.0, 2.0));
    b.set_model(7);
    b.set_behavior(Some(BehaviorId(3)));
    b.update();
    b.kill();

    b.reset();

    assert_eq!(b, Bullet::new());
}

// -----------------------------------------------------------------------------
// Kinematics
// -----------------------------------------------------------------------------

#[test]
fn speed_and_direction_zero_points_up() {
    let mut b = Bullet::new();
    b.set_speed_and_direction(1.0, 0.0);

    assert_abs_diff_eq!(b.velocity().x, 0.0, epsilon = TOL);
    assert_abs_diff_eq!(b.velocity().y, -1.0, epsilon = TOL);
    assert!(angle_gap(b.direction(), 0.0) < TOL);
}

#[test]
fn direction_grows_clockwise() {
    let mut b = Bullet::new();

    b.set_speed_and_direction(2.0, FRAC_PI_2);
    assert_abs_diff_eq!(b.velocity().x, 2.0, epsilon = TOL);

    b.set_speed_and_direction(2.0, PI);
    assert_abs_diff_eq!(b.velocity().y, 2.0, epsilon = TOL);
}

#[test]
fn speed_and_direction_round_trip() {
    let speeds = [0.25_f32, 1.0, 3.5, 12.0];
    for &speed in &speeds {
        for step in 0..32 {
            let dir = step as f32 * TAU / 32.0;
            let mut b = Bullet::new();
            b.set_speed_and_direction(speed, dir);

            assert_abs_diff_eq!(b.speed(), speed, epsilon = TOL * speed.max(1.0));
            assert!(
                angle_gap(b.direction(), dir) < 1e-3,
                "speed {speed} dir {dir} came back as {}",
                b.direction()
            );
        }
    }
}

#[rstest]
#[case(0.0)]
#[case(VY_EPSILON / 2.0)]
#[case(-VY_EPSILON / 2.0)]
fn velocity_guard_snaps_tiny_vy(#[case] vy: f32) {
    let b = moving(Vec2::new(3.0, vy));
    assert_eq!(b.velocity().y, VY_EPSILON);
    assert_eq!(b.velocity().x, 3.0);
}

#[test]
fn velocity_guard_leaves_real_vy_alone() {
    let b = moving(Vec2::new(0.0, -VY_EPSILON * 4.0));
    assert_eq!(b.velocity().y, -VY_EPSILON * 4.0);
}

#[test]
fn horizontal_heading_still_has_a_direction() {
    let mut b = Bullet::new();
    b.set_speed_and_direction(5.0, FRAC_PI_2);

    assert!(b.velocity().y.abs() >= VY_EPSILON);
    assert!(angle_gap(b.direction(), FRAC_PI_2) < 1e-3);
}

#[test]
fn zero_speed_set_keeps_guard() {
    let mut b = Bullet::new();
    b.set_speed_and_direction(0.0, 1.0);
    assert_eq!(b.velocity().y, VY_EPSILON);
    assert!(b.set_speed(2.0).is_ok());
    assert_abs_diff_eq!(b.speed(), 2.0, epsilon = TOL);
}

#[test]
fn set_speed_keeps_direction() {
    let mut b = Bullet::new();
    b.set_speed_and_direction(2.0, 1.0);

    b.set_speed(6.0).unwrap();

    assert_abs_diff_eq!(b.speed(), 6.0, epsilon = TOL);
    assert!(angle_gap(b.direction(), 1.0) < 1e-3);
}

#[test]
fn set_speed_relative_adds_to_magnitude() {
    let mut b = Bullet::new();
    b.set_speed_and_direction(2.0, 2.5);

    b.set_speed_relative(1.5).unwrap();

    assert_abs_diff_eq!(b.speed(), 3.5, epsilon = TOL);
    assert!(angle_gap(b.direction(), 2.5) < 1e-3);
}

#[test]
fn rescale_rejects_non_finite_velocity() {
    let mut b = moving(Vec2::new(f32::NAN, 1.0));
    assert_eq!(b.set_speed(1.0), Err(KinematicsError::ZeroSpeed));
    assert_eq!(b.set_speed_relative(1.0), Err(KinematicsError::ZeroSpeed));

    let mut b = moving(Vec2::new(f32::INFINITY, 1.0));
    assert_eq!(b.set_speed(1.0), Err(KinematicsError::ZeroSpeed));
    assert_eq!(b.velocity().x, f32::INFINITY);
}

#[test]
fn set_direction_keeps_speed() {
    let mut b = Bullet::new();
    b.set_speed_and_direction(4.0, 0.3);

    b.set_direction(2.0);

    assert_abs_diff_eq!(b.speed(), 4.0, epsilon = TOL);
    assert!(angle_gap(b.direction(), 2.0) < 1e-3);
}

#[test]
fn set_direction_relative_rotates() {
    let mut b = Bullet::new();
    b.set_speed_and_direction(1.0, 0.5);

    b.set_direction_relative(0.25);

    assert!(angle_gap(b.direction(), 0.75) < 1e-3);
}

#[test]
fn aim_at_diagonal_point() {
    let mut b = Bullet::new();
    b.set_speed_and_direction(1.0, 0.0);
    let target = Vec2::new(1.0, 1.0);

    let aim = b.aim_direction(target);
    assert_abs_diff_eq!(aim, PI - 1.0_f32.atan2(1.0), epsilon = TOL);
    assert_abs_diff_eq!(aim, 3.0 * FRAC_PI_4, epsilon = TOL);

    b.aim_at_point(target);
    assert!(angle_gap(b.direction(), aim) < 1e-3);
    // Heading down-right in scene space.
    assert!(b.velocity().x > 0.0 && b.velocity().y > 0.0);
}

#[test]
fn aim_direction_is_relative_to_position() {
    let mut b = Bullet::new();
    b.set_position(Vec2::new(10.0, 10.0));

    assert!(angle_gap(b.aim_direction(Vec2::new(10.0, 0.0)), 0.0) < TOL);
    assert!(angle_gap(b.aim_direction(Vec2::new(20.0, 10.0)), FRAC_PI_2) < TOL);
}

#[test]
fn linear_interpolate_lands_on_target() {
    let mut b = Bullet::new();
    b.set_position(Vec2::new(-3.0, 4.0));
    let target = Vec2::new(9.0, -2.0);

    b.linear_interpolate(target, 6).unwrap();
    for _ in 0..6 {
        b.update();
    }

    assert_abs_diff_eq!(b.position().x, target.x, epsilon = TOL);
    assert_abs_diff_eq!(b.position().y, target.y, epsilon = TOL);
}

#[test]
fn linear_interpolate_rejects_zero_steps() {
    let mut b = moving(Vec2::new(1.0, 1.0));
    assert_eq!(
        b.linear_interpolate(Vec2::new(5.0, 5.0), 0),
        Err(KinematicsError::ZeroSteps)
    );
    assert_eq!(b.velocity(), Vec2::new(1.0, 1.0));
}

// -----------------------------------------------------------------------------
// Copy
// -----------------------------------------------------------------------------

#[test]
fn copy_is_value_independent() {
    let mut from = Bullet::new();
    from.set_data(Vec2::new(1.0, 2.0), Vec2::new(0.5, -0.5));
    from.set_model(4);
    from.set_behavior(Some(BehaviorId(9)));
    from.update();

    let mut to = Bullet::new();
    to.copy_from(&from);
    assert_eq!(to, from);
    assert_eq!(to.frame_count(), 1);

    from.set_position(Vec2::new(100.0, 100.0));
    assert_eq!(to.position(), Vec2::new(1.5, 1.5));
}

// -----------------------------------------------------------------------------
// Life-cycle
// -----------------------------------------------------------------------------

#[test]
fn first_update_counts_one_turn_and_displaces() {
    let mut b = Bullet::new();
    b.set_data(Vec2::new(1.0, 1.0), Vec2::new(2.0, -3.0));

    b.update();

    assert_eq!(b.frame_count(), 1);
    assert_eq!(b.turn(), Some(1));
    assert_eq!(b.position(), Vec2::new(3.0, -2.0));
}

#[test]
fn kill_is_dying_until_next_update() {
    let mut b = Bullet::new();
    b.kill();

    assert!(b.is_dying());
    assert!(!b.is_dead());
    assert_eq!(b.frame_count(), DEAD_FRAME - 1);

    b.update();

    assert!(b.is_dead());
    assert!(!b.is_dying());
    assert_eq!(b.frame_count(), DEAD_FRAME);
}

#[test]
fn kill_overrides_fade_out() {
    let mut b = Bullet::new();
    b.schedule_death(10);
    b.kill();
    b.update();
    assert!(b.is_dead());
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(5)]
#[case(DEFAULT_FRAMES_UNTIL_DEATH)]
fn schedule_death_dies_on_update_n_plus_one(#[case] n: u32) {
    let mut b = Bullet::new();
    b.schedule_death(n);
    assert_eq!(b.frame_count(), -(n as i64) - 2);
    assert_eq!(b.remaining_frames(), Some(n));

    for _ in 0..n {
        b.update();
        assert!(!b.is_dead());
        assert!(b.is_dying());
    }
    b.update();
    assert!(b.is_dead());
}

#[test]
fn second_schedule_death_keeps_first_countdown() {
    let mut b = Bullet::new();
    b.schedule_death(3);
    b.update();
    b.schedule_death(50);
    b.schedule_death(0);

    assert_eq!(b.remaining_frames(), Some(2));
    for _ in 0..2 {
        b.update();
    }
    assert!(!b.is_dead());
    b.update();
    assert!(b.is_dead());
}

#[test]
fn vanish_uses_default_fade() {
    let mut b = Bullet::new();
    b.vanish();
    assert_eq!(b.remaining_frames(), Some(DEFAULT_FRAMES_UNTIL_DEATH));
}

#[test]
fn dead_is_terminal() {
    let mut b = moving(Vec2::new(1.0, 1.0));
    b.kill();
    b.update();

    b.kill();
    b.schedule_death(4);
    b.set_behavior(Some(BehaviorId(1)));
    b.restart_turns();
    b.update();

    assert!(b.is_dead());
    // Still displaced.
    assert_eq!(b.position(), Vec2::new(2.0, 2.0));
}

#[test]
fn binding_behavior_restarts_turns() {
    let mut b = Bullet::new();
    b.update();
    b.update();
    assert_eq!(b.turn(), Some(2));

    b.set_behavior(Some(BehaviorId(0)));
    assert_eq!(b.turn(), Some(0));
    assert_eq!(b.behavior(), Some(BehaviorId(0)));
}

#[test]
fn binding_behavior_revives_dying_bullet_at_turn_zero() {
    let mut b = Bullet::new();
    b.schedule_death(5);
    assert_eq!(b.frame_count(), -7);

    b.set_behavior(Some(BehaviorId(0)));

    assert_eq!(b.frame_count(), 0);
    assert!(b.is_alive());
    assert_eq!(b.remaining_frames(), None);
    b.update();
    assert_eq!(b.turn(), Some(1));
}

#[test]
fn restart_turns_revives_killed_bullet() {
    let mut b = Bullet::new();
    b.kill();
    b.restart_turns();
    b.update();
    assert_eq!(b.turn(), Some(1));
}

#[test]
fn longest_fade_out_keeps_n_plus_one_encoding() {
    let mut b = Bullet::new();
    b.schedule_death(u32::MAX);

    assert_eq!(b.frame_count(), -(u32::MAX as i64) - 2);
    assert_eq!(b.remaining_frames(), Some(u32::MAX));
    assert_eq!(b.life(), LifePhase::Dying { ticks_left: u32::MAX as u64 + 1 });

    b.update();
    assert_eq!(b.remaining_frames(), Some(u32::MAX - 1));
    assert!(b.is_dying());
}
