//! Per-frame respawn policy: balls that drop below the floor threshold are teleported
//! back to the restart point with zero linear velocity.
//!
//! Per ball: `Falling -> (y < floor_y) -> Respawned -> Falling`. The controller reads the
//! live ball query every frame, so balls replaced by a reset are picked up immediately.

use bevy::prelude::*;
use bevy_rapier3d::prelude::Velocity;

use crate::app::state::SimulationState;
use crate::core::components::{Ball, BallIndex, BallLifecycle};
use crate::core::config::{BallPitConfig, RespawnConfig};
use crate::core::system::system_order::PostPhysicsAdjustSet;

/// Emitted once per floor crossing.
#[derive(Event, Debug, Clone, Copy)]
pub struct BallRespawned {
    pub entity: Entity,
    pub index: usize,
}

#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct RespawnStats {
    pub total: u64,
}

pub struct RespawnPlugin;

impl Plugin for RespawnPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RespawnStats>()
            .add_event::<BallRespawned>()
            .add_systems(
                PostUpdate,
                respawn_lost_balls
                    .in_set(PostPhysicsAdjustSet)
                    .run_if(in_state(SimulationState::Running)),
            );
    }
}

#[inline]
pub fn is_lost(y: f32, cfg: &RespawnConfig) -> bool {
    y < cfg.floor_y
}

#[inline]
pub fn restart_point(cfg: &RespawnConfig) -> Vec3 {
    Vec3::new(cfg.restart_x, cfg.restart_y, 0.0)
}

pub fn respawn_lost_balls(
    cfg: Res<BallPitConfig>,
    mut balls: Query<
        (Entity, &BallIndex, &mut Transform, &mut Velocity, &mut BallLifecycle),
        With<Ball>,
    >,
    mut stats: ResMut<RespawnStats>,
    mut respawned: EventWriter<BallRespawned>,
) {
    let policy = &cfg.respawn;
    for (entity, index, mut transform, mut velocity, mut lifecycle) in &mut balls {
        if is_lost(transform.translation.y, policy) {
            transform.translation = restart_point(policy);
            velocity.linvel = Vec3::ZERO;
            *lifecycle = BallLifecycle::Respawned;
            stats.total += 1;
            debug!(target: "respawn", "ball {} respawned (total {})", index.0, stats.total);
            respawned.write(BallRespawned { entity, index: index.0 });
        } else if *lifecycle == BallLifecycle::Respawned {
            *lifecycle = BallLifecycle::Falling;
        }
    }
}
