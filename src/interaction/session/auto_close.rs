use crate::core::config::BallPitConfig;
use bevy::prelude::*;

/// Countdown to a clean exit, present only when `window.autoClose > 0`.
#[derive(Resource, Deref, DerefMut)]
struct AutoCloseTimer(Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_autoclose).add_systems(
            Update,
            request_exit_when_due.run_if(resource_exists::<AutoCloseTimer>),
        );
    }
}

fn arm_autoclose(mut commands: Commands, cfg: Res<BallPitConfig>) {
    let secs = cfg.window.auto_close;
    if secs <= 0.0 {
        return;
    }
    info!(target: "session", seconds = secs, "auto-close armed");
    commands.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)));
}

fn request_exit_when_due(
    mut commands: Commands,
    time: Res<Time>,
    mut timer: ResMut<AutoCloseTimer>,
    mut exit: EventWriter<AppExit>,
) {
    if timer.tick(time.delta()).finished() {
        info!(target: "session", "auto-close elapsed; exiting");
        exit.write(AppExit::Success);
        commands.remove_resource::<AutoCloseTimer>();
    }
}
