//! Reset sequence: stop the respawn policy and the physics step, replace every ball,
//! then restart both. Static geometry is never touched here.
use bevy::prelude::*;
use bevy_rapier3d::prelude::RapierConfiguration;

use crate::app::state::SimulationState;
use crate::core::components::Ball;
use crate::core::config::BallPitConfig;
use crate::core::system::system_order::PrePhysicsSet;
use crate::gameplay::spawn::spawn_ball_batch;
use crate::physics::rapier::set_physics_active;
use crate::rendering::materials::{BallVisuals, MaterialsInitSet};

/// Request to tear down and recreate the ball batch.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ResetBalls;

/// Number of completed ball batches (startup counts as the first).
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct ResetCount(pub u32);

pub struct ResetPlugin;

impl Plugin for ResetPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<SimulationState>()
            .init_resource::<ResetCount>()
            .add_event::<ResetBalls>()
            .add_systems(Startup, begin_first_batch.after(MaterialsInitSet))
            .add_systems(
                Update,
                request_reset
                    .in_set(PrePhysicsSet)
                    .run_if(in_state(SimulationState::Running)),
            )
            .add_systems(
                OnEnter(SimulationState::Resetting),
                (pause_physics, despawn_balls, respawn_batch, finish_reset).chain(),
            )
            .add_systems(OnExit(SimulationState::Resetting), resume_physics);
    }
}

fn begin_first_batch(mut next: ResMut<NextState<SimulationState>>) {
    next.set(SimulationState::Resetting);
}

fn request_reset(
    mut requests: EventReader<ResetBalls>,
    mut next: ResMut<NextState<SimulationState>>,
) {
    if requests.is_empty() {
        return;
    }
    requests.clear();
    info!(target: "reset", "reset requested");
    next.set(SimulationState::Resetting);
}

fn pause_physics(mut contexts: Query<&mut RapierConfiguration>) {
    set_physics_active(&mut contexts, false);
}

fn resume_physics(mut contexts: Query<&mut RapierConfiguration>) {
    set_physics_active(&mut contexts, true);
}

/// Removes every ball; a world with no balls yet is left alone.
fn despawn_balls(mut commands: Commands, balls: Query<Entity, With<Ball>>) {
    let mut removed = 0usize;
    for e in &balls {
        commands.entity(e).despawn();
        removed += 1;
    }
    if removed > 0 {
        debug!(target: "reset", "despawned {removed} balls");
    }
}

fn respawn_batch(
    mut commands: Commands,
    cfg: Res<BallPitConfig>,
    visuals: Option<Res<BallVisuals>>,
    mut count: ResMut<ResetCount>,
) {
    let Some(visuals) = visuals else {
        error!(target: "reset", "ball visuals missing; no balls spawned");
        return;
    };
    let spawned = spawn_ball_batch(&mut commands, &cfg.balls, &visuals);
    count.0 += 1;
    info!(target: "reset", "spawned {} balls (batch #{})", spawned.len(), count.0);
}

fn finish_reset(mut next: ResMut<NextState<SimulationState>>) {
    next.set(SimulationState::Running);
}
