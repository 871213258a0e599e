mod common;

use ball_pit::core::components::{Ball, BallIndex, BallMaterialIndex, Slope};
use ball_pit::core::config::BallPitConfig;
use ball_pit::gameplay::reset::{ResetBalls, ResetCount};
use ball_pit::SimulationState;
use bevy::prelude::*;
use bevy_rapier3d::prelude::Velocity;
use common::{ball_entities, lifecycle_app};

fn state(app: &App) -> SimulationState {
    *app.world().resource::<State<SimulationState>>().get()
}

#[test]
fn first_batch_is_staggered_column() {
    let mut app = lifecycle_app(BallPitConfig::default());
    app.update();
    assert_eq!(state(&app), SimulationState::Resetting);
    app.update();
    assert_eq!(state(&app), SimulationState::Running);

    let mut q = app
        .world_mut()
        .query_filtered::<(&BallIndex, &Transform, &Velocity, &BallMaterialIndex), With<Ball>>();
    let mut balls: Vec<_> = q
        .iter(app.world())
        .map(|(i, t, v, m)| (i.0, t.translation, v.linvel, m.0))
        .collect();
    balls.sort_by_key(|b| b.0);
    assert_eq!(balls.len(), 10);
    for (i, pos, vel, material) in balls {
        assert_eq!(pos, Vec3::new(-4.0, 30.0 + i as f32 * 10.0, 0.0));
        assert_eq!(vel, Vec3::ZERO);
        assert_eq!(material, i % 4);
    }
    assert_eq!(app.world().resource::<ResetCount>().0, 1);
}

#[test]
fn reset_replaces_every_ball_and_keeps_slopes() {
    let mut app = lifecycle_app(BallPitConfig::default());
    let slope = app.world_mut().spawn((Slope { index: 0 }, Transform::default())).id();
    app.update();
    app.update();

    let before = ball_entities(&mut app);
    assert_eq!(before.len(), 10);
    // Mid-fall: push one ball down the course.
    app.world_mut()
        .get_mut::<Transform>(before[3])
        .unwrap()
        .translation = Vec3::new(6.0, 4.0, 0.0);

    app.world_mut().send_event(ResetBalls);
    app.update();
    app.update();
    app.update();
    assert_eq!(state(&app), SimulationState::Running);

    let after = ball_entities(&mut app);
    assert_eq!(after.len(), 10);
    assert!(after.iter().all(|e| !before.contains(e)));
    for e in &before {
        assert!(app.world().get_entity(*e).is_err());
    }
    let mut q = app
        .world_mut()
        .query_filtered::<(&BallIndex, &Transform), With<Ball>>();
    for (i, t) in q.iter(app.world()) {
        assert_eq!(t.translation, Vec3::new(-4.0, 30.0 + i.0 as f32 * 10.0, 0.0));
    }
    assert!(app.world().get::<Slope>(slope).is_some());
    assert_eq!(app.world().resource::<ResetCount>().0, 2);
}

#[test]
fn ball_count_follows_config() {
    let mut cfg = BallPitConfig::default();
    cfg.balls.count = 3;
    let mut app = lifecycle_app(cfg);
    app.update();
    app.update();
    assert_eq!(ball_entities(&mut app).len(), 3);

    app.world_mut().resource_mut::<BallPitConfig>().balls.count = 0;
    app.world_mut().send_event(ResetBalls);
    app.update();
    app.update();
    app.update();
    assert!(ball_entities(&mut app).is_empty());
    assert_eq!(state(&app), SimulationState::Running);
}
