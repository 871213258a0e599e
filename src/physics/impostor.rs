//! Rigid-body "impostors": the physics proxy attached to a visual mesh.
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::config::BodyConfig;

/// Zero (or negative) mass produces a fixed body, anything else a dynamic one.
pub fn body_kind(body: &BodyConfig) -> RigidBody {
    if body.mass > 0.0 {
        RigidBody::Dynamic
    } else {
        RigidBody::Fixed
    }
}

/// Physics components for a mesh: body kind, collider shape and material parameters.
pub fn impostor(body: &BodyConfig, collider: Collider) -> impl Bundle {
    (
        body_kind(body),
        collider,
        ColliderMassProperties::Mass(body.mass.max(0.0)),
        Friction::coefficient(body.friction),
        Restitution::coefficient(body.restitution),
    )
}
