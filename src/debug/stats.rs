use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::core::components::Ball;
use crate::gameplay::reset::ResetCount;
use crate::gameplay::respawn::RespawnStats;

/// Snapshot refreshed every frame, logged every `DebugState::log_interval` seconds.
#[derive(Resource, Default, Debug, Clone)]
pub struct DebugStats {
    pub fps: f64,
    pub ball_count: usize,
    pub respawns: u64,
    pub resets: u32,
}

pub fn collect_stats(
    mut stats: ResMut<DebugStats>,
    diagnostics: Option<Res<DiagnosticsStore>>,
    balls: Query<(), With<Ball>>,
    respawns: Option<Res<RespawnStats>>,
    resets: Option<Res<ResetCount>>,
) {
    if let Some(fps) = diagnostics
        .as_deref()
        .and_then(|d| d.get(&FrameTimeDiagnosticsPlugin::FPS))
        .and_then(|fps| fps.smoothed())
    {
        stats.fps = fps;
    }
    stats.ball_count = balls.iter().count();
    stats.respawns = respawns.map_or(0, |r| r.total);
    stats.resets = resets.map_or(0, |r| r.0);
}

pub fn log_stats(time: Res<Time>, mut state: ResMut<super::DebugState>, stats: Res<DebugStats>) {
    state.frame_counter += 1;
    state.time_accum += time.delta_secs();
    if state.time_accum < state.log_interval {
        return;
    }
    state.time_accum = 0.0;
    info!(
        target: "debug",
        frame = state.frame_counter,
        fps = stats.fps.round(),
        balls = stats.ball_count,
        respawns = stats.respawns,
        resets = stats.resets,
        wireframe = state.rapier_wireframe,
        "SIM t={:.3}s",
        time.elapsed_secs()
    );
}
