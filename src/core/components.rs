use bevy::prelude::*;

/// Marker component identifying a ball entity (holds physics body, collider and mesh).
#[derive(Component)]
pub struct Ball;

/// Position of the ball within its spawn batch; drives spawn height and palette slot.
#[derive(Component, Debug, Deref, Copy, Clone, PartialEq, Eq)]
pub struct BallIndex(pub usize);

/// Logical radius used both for the collider and the sphere mesh.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct BallRadius(pub f32);

/// Palette slot (`index % palette_len`) of the ball material.
#[derive(Component, Debug, Copy, Clone, PartialEq, Eq)]
pub struct BallMaterialIndex(pub usize);

/// Respawn state of a single ball.
#[derive(Component, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum BallLifecycle {
    /// Free-falling under physics control.
    #[default]
    Falling,
    /// Teleported back to the restart point during the last observed frame.
    Respawned,
}

/// Static tilted box the balls roll down.
#[derive(Component, Debug, Copy, Clone)]
pub struct Slope {
    pub index: usize,
}

/// Static ground plane under the slopes.
#[derive(Component)]
pub struct Ground;
