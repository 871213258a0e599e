//! Feature gated runtime stats and the physics wireframe toggle.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
pub mod keys; // pub for testing
#[cfg(feature = "debug")]
mod stats;

#[cfg(feature = "debug")]
pub use stats::DebugStats;

#[cfg(feature = "debug")]
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
use crate::core::system::system_order::PostPhysicsAdjustSet;

#[cfg(feature = "debug")]
#[derive(Resource)]
pub struct DebugState {
    pub rapier_wireframe: bool,
    pub log_interval: f32,
    pub time_accum: f32,
    pub frame_counter: u64,
}

#[cfg(feature = "debug")]
impl Default for DebugState {
    fn default() -> Self {
        Self { rapier_wireframe: false, log_interval: 1.0, time_accum: 0.0, frame_counter: 0 }
    }
}

pub struct DebugPlugin;

#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<FrameTimeDiagnosticsPlugin>() {
            app.add_plugins(FrameTimeDiagnosticsPlugin::default());
        }
        app.init_resource::<DebugState>()
            .init_resource::<DebugStats>()
            .add_systems(Startup, keys::sync_wireframe_from_context)
            .add_systems(Update, (keys::debug_key_input_system, keys::apply_wireframe).chain())
            .add_systems(
                PostUpdate,
                (stats::collect_stats, stats::log_stats)
                    .chain()
                    .after(PostPhysicsAdjustSet),
            );
    }
}

#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}
