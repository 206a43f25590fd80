//! Pattern behaviors built on the public bullet API, plus a small demo scene.
//!
//! Every pattern is a plain struct implementing [`BehaviorHandler`]. Per-bullet progress
//! comes from the bullet's own turn counter, so one registered pattern can drive any
//! number of bullets.

use std::f32::consts::{PI, TAU};

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::bullet::{BehaviorId, Bullet};
use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::bullets::{
    AimTarget, BehaviorContext, BehaviorHandler, BehaviorRegistry, BulletPool, BulletSystems,
    SpawnBulletRequest,
};

/// Wrap an angle difference into `(-π, π]`.
#[inline]
fn wrap_angle(a: f32) -> f32 {
    let a = a.rem_euclid(TAU);
    if a > PI { a - TAU } else { a }
}

// -----------------------------------------------------------------------------
// Patterns
// -----------------------------------------------------------------------------

/// Stationary emitter firing rotating rings.
#[derive(Debug, Clone)]
pub struct RingEmitter {
    /// Bullets per ring.
    pub count: u32,
    pub speed: f32,
    /// Turns between rings (0 is treated as 1).
    pub interval: u32,
    /// Ring rotation per elapsed turn, radians.
    pub spin: f32,
    pub child_model: u32,
    pub child_behavior: Option<BehaviorId>,
    /// Turns before the emitter fades out.
    pub lifetime: u32,
}

impl BehaviorHandler for RingEmitter {
    fn advance(&self, bullet: &mut Bullet, ctx: &mut BehaviorContext<'_>) {
        let Some(turn) = bullet.turn() else { return; };

        if turn >= self.lifetime {
            bullet.vanish();
            return;
        }
        if turn % self.interval.max(1) != 0 || self.count == 0 {
            return;
        }

        let base = self.spin * turn as f32;
        let step = TAU / self.count as f32;
        for i in 0..self.count {
            let mut request = SpawnBulletRequest::polar(bullet.position(), self.speed, base + step * i as f32)
                .with_model(self.child_model);
            if let Some(behavior) = self.child_behavior {
                request = request.with_behavior(behavior);
            }
            ctx.spawn(request);
        }
    }
}

/// Steers toward the aim target, turning at most `max_turn` radians per frame.
#[derive(Debug, Clone, Copy)]
pub struct Homing {
    pub max_turn: f32,
}

impl BehaviorHandler for Homing {
    fn advance(&self, bullet: &mut Bullet, ctx: &mut BehaviorContext<'_>) {
        let wanted = wrap_angle(bullet.aim_direction(ctx.target()) - bullet.direction());
        bullet.set_direction_relative(wanted.clamp(-self.max_turn, self.max_turn));
    }
}

/// Flies as spawned for `delay` turns, then snaps toward the aim target at `speed`.
#[derive(Debug, Clone, Copy)]
pub struct AimAfter {
    pub delay: u32,
    pub speed: f32,
}

impl BehaviorHandler for AimAfter {
    fn advance(&self, bullet: &mut Bullet, ctx: &mut BehaviorContext<'_>) {
        if bullet.turn() != Some(self.delay) {
            return;
        }
        bullet.aim_at_point(ctx.target());
        if let Err(err) = bullet.set_speed(self.speed) {
            warn!("AimAfter on {:?}: {err}", ctx.handle());
        }
    }
}

/// Glides to `target` over `steps` frames, stops there, then fades out over `fade` frames.
#[derive(Debug, Clone, Copy)]
pub struct GlideTo {
    pub target: Vec2,
    pub steps: u32,
    pub fade: u32,
}

impl BehaviorHandler for GlideTo {
    fn advance(&self, bullet: &mut Bullet, ctx: &mut BehaviorContext<'_>) {
        match bullet.turn() {
            Some(0) => {
                if let Err(err) = bullet.linear_interpolate(self.target, self.steps) {
                    warn!("GlideTo on {:?}: {err}", ctx.handle());
                    bullet.kill();
                }
            }
            Some(turn) if turn == self.steps => {
                bullet.set_position(self.target);
                bullet.set_velocity(Vec2::ZERO);
                bullet.schedule_death(self.fade);
            }
            _ => {}
        }
    }
}

// -----------------------------------------------------------------------------
// Demo scene
// -----------------------------------------------------------------------------

/// Ids of the demo patterns, registered at startup.
#[derive(Resource, Debug, Clone, Copy)]
pub struct DemoPatterns {
    pub emitter: BehaviorId,
    pub homing: BehaviorId,
}

/// Register the demo patterns and park the aim target below the emitter.
pub fn plugin(app: &mut App) {
    let demo = {
        let mut registry = app.world_mut().resource_mut::<BehaviorRegistry>();
        let homing = registry.register(Homing { max_turn: 0.02 });
        let emitter = registry.register(RingEmitter {
            count: 16,
            speed: 2.5,
            interval: 12,
            spin: 0.05,
            child_model: 1,
            child_behavior: Some(homing),
            lifetime: 600,
        });
        DemoPatterns { emitter, homing }
    };

    app.insert_resource(demo)
        .insert_resource(AimTarget(Vec2::new(0.0, 240.0)))
        .add_systems(Startup, spawn_demo_emitter)
        .add_systems(
            FixedUpdate,
            log_pool_stats
                .after(BulletSystems)
                .run_if(in_state(GameState::InGame)),
        );
}

fn spawn_demo_emitter(demo: Res<DemoPatterns>, mut writer: MessageWriter<SpawnBulletRequest>) {
    writer.write(SpawnBulletRequest::new(Vec2::ZERO, Vec2::ZERO).with_behavior(demo.emitter));
    info!("demo emitter queued");
}

fn log_pool_stats(pool: Res<BulletPool>, tunables: Res<Tunables>, mut ticks: Local<u32>) {
    *ticks = ticks.wrapping_add(1);
    if *ticks % tunables.stats_interval.max(1) == 0 {
        info!(
            "tick {}: {} active bullets, {} free of {}",
            *ticks,
            pool.active_len(),
            pool.free_len(),
            pool.capacity()
        );
    }
}
