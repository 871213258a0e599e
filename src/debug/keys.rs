use bevy::prelude::*;
use bevy_rapier3d::render::DebugRenderContext;

use super::DebugState;

/// F1 flips the Rapier wireframe flag.
pub fn debug_key_input_system(keys: Option<Res<ButtonInput<KeyCode>>>, mut state: ResMut<DebugState>) {
    let Some(keys) = keys else {
        return;
    };
    if keys.just_pressed(KeyCode::F1) {
        state.rapier_wireframe = !state.rapier_wireframe;
        info!(target: "debug", "rapier wireframe {}", if state.rapier_wireframe { "on" } else { "off" });
    }
}

pub fn apply_wireframe(state: Res<DebugState>, ctx: Option<ResMut<DebugRenderContext>>) {
    if let Some(mut ctx) = ctx {
        if ctx.enabled != state.rapier_wireframe {
            ctx.enabled = state.rapier_wireframe;
        }
    }
}

pub fn sync_wireframe_from_context(mut state: ResMut<DebugState>, ctx: Option<Res<DebugRenderContext>>) {
    if let Some(ctx) = ctx {
        state.rapier_wireframe = ctx.enabled;
    }
}
