//! Central system ordering labels to make update sequence explicit.
//! Stages (high-level):
//! 1. PrePhysics (`Update`: input, reset requests, texture binding)
//! 2. Rapier (`PostUpdate`, handled by plugin)
//! 3. PostPhysicsAdjust (`PostUpdate`, after Rapier writeback: ball respawn)
//! 4. Transform propagation + rendering (implicit)
use bevy::prelude::*;
use bevy_rapier3d::prelude::PhysicsSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PrePhysicsSet; // input and reset requests before the physics step

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PostPhysicsAdjustSet; // lightweight corrections after physics

/// Registers both sets in their schedules.
pub fn configure_system_order(app: &mut App) {
    app.configure_sets(Update, PrePhysicsSet).configure_sets(
        PostUpdate,
        PostPhysicsAdjustSet
            .after(PhysicsSet::Writeback)
            .before(bevy::transform::TransformSystem::TransformPropagate),
    );
}
