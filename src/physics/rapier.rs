use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::config::BallPitConfig;

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier & world gravity

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
            .add_systems(
                Update,
                apply_configured_gravity.run_if(resource_changed::<BallPitConfig>),
            );
    }
}

/// Pushes `gravity` from config into every Rapier context (startup and hot reload).
pub fn apply_configured_gravity(
    cfg: Res<BallPitConfig>,
    mut contexts: Query<&mut RapierConfiguration>,
) {
    let gravity = cfg.gravity.as_vec3();
    for mut rapier_cfg in &mut contexts {
        if rapier_cfg.gravity != gravity {
            info!(target: "physics", ?gravity, "applying world gravity");
            rapier_cfg.gravity = gravity;
        }
    }
}

/// Starts or stops the Rapier pipeline without touching any body.
pub fn set_physics_active(contexts: &mut Query<&mut RapierConfiguration>, active: bool) {
    for mut rapier_cfg in contexts.iter_mut() {
        rapier_cfg.physics_pipeline_active = active;
    }
}
