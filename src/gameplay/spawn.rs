use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::components::{Ball, BallIndex, BallLifecycle, BallMaterialIndex, BallRadius};
use crate::core::config::BallConfig;
use crate::physics::impostor::impostor;
use crate::rendering::materials::BallVisuals;
use crate::rendering::palette::palette_slot;

/// Spawn point of ball `index`: a column above `spawn_x`, staggered by `spawn_interval`.
pub fn spawn_position(cfg: &BallConfig, index: usize) -> Vec3 {
    Vec3::new(
        cfg.spawn_x,
        cfg.spawn_y + index as f32 * cfg.spawn_interval,
        0.0,
    )
}

pub fn spawn_ball_entity(
    commands: &mut Commands,
    cfg: &BallConfig,
    visuals: &BallVisuals,
    index: usize,
) -> Entity {
    commands
        .spawn((
            Ball,
            BallIndex(index),
            BallRadius(cfg.radius),
            BallMaterialIndex(palette_slot(index, visuals.palette.len())),
            BallLifecycle::Falling,
            Mesh3d(visuals.mesh.clone()),
            MeshMaterial3d(visuals.material_for(index)),
            Transform::from_translation(spawn_position(cfg, index)),
            impostor(&cfg.body, Collider::ball(cfg.radius)),
            Velocity::zero(),
            Name::new(format!("Ball{index}")),
        ))
        .id()
}

/// Spawns the full batch of `cfg.count` balls.
pub fn spawn_ball_batch(commands: &mut Commands, cfg: &BallConfig, visuals: &BallVisuals) -> Vec<Entity> {
    (0..cfg.count)
        .map(|i| spawn_ball_entity(commands, cfg, visuals, i))
        .collect()
}
