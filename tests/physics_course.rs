use std::time::Duration;

use ball_pit::core::components::{Ball, BallIndex, Ground, Slope};
use ball_pit::core::config::BallPitConfig;
use ball_pit::core::system::system_order::configure_system_order;
use ball_pit::gameplay::course::CoursePlugin;
use ball_pit::gameplay::reset::{ResetBalls, ResetPlugin};
use ball_pit::gameplay::respawn::{RespawnPlugin, RespawnStats};
use ball_pit::physics::rapier::PhysicsSetupPlugin;
use ball_pit::rendering::materials::MaterialsPlugin;
use ball_pit::rendering::textures::TextureLoaded;
use ball_pit::SimulationState;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier3d::prelude::*;

/// Headless app with Rapier stepping at a fixed 60 Hz and the real course.
fn physics_app(cfg: BallPitConfig) -> App {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        TransformPlugin,
        AssetPlugin::default(),
        bevy::scene::ScenePlugin,
    ))
    .init_asset::<Mesh>()
    .init_asset::<StandardMaterial>()
    .add_event::<TextureLoaded>()
    .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(1.0 / 60.0)))
    .insert_resource(cfg);
    configure_system_order(&mut app);
    app.add_plugins((
        MaterialsPlugin,
        PhysicsSetupPlugin,
        CoursePlugin,
        ResetPlugin,
        RespawnPlugin,
    ));
    app
}

fn state(app: &App) -> SimulationState {
    *app.world().resource::<State<SimulationState>>().get()
}

fn rapier_config(app: &mut App) -> RapierConfiguration {
    let mut q = app.world_mut().query::<&RapierConfiguration>();
    q.single(app.world()).unwrap().clone()
}

fn count<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> usize {
    let mut q = app.world_mut().query_filtered::<Entity, F>();
    q.iter(app.world()).count()
}

fn slope_entities(app: &mut App) -> Vec<Entity> {
    let mut q = app.world_mut().query_filtered::<Entity, With<Slope>>();
    let mut slopes: Vec<Entity> = q.iter(app.world()).collect();
    slopes.sort();
    slopes
}

#[test]
fn startup_builds_course_and_applies_gravity() {
    let mut app = physics_app(BallPitConfig::default());
    app.update();

    assert_eq!(count::<With<Slope>>(&mut app), 5);
    assert_eq!(count::<With<Ground>>(&mut app), 1);
    assert_eq!(rapier_config(&mut app).gravity, Vec3::new(0.0, -9.81, 0.0));
}

#[test]
fn config_gravity_reaches_rapier() {
    let mut cfg = BallPitConfig::default();
    cfg.gravity.y = -3.5;
    let mut app = physics_app(cfg);
    app.update();
    assert_eq!(rapier_config(&mut app).gravity, Vec3::new(0.0, -3.5, 0.0));
}

#[test]
fn pipeline_paused_only_while_resetting() {
    let mut app = physics_app(BallPitConfig::default());
    app.update();
    assert_eq!(state(&app), SimulationState::Resetting);
    assert!(!rapier_config(&mut app).physics_pipeline_active);

    app.update();
    assert_eq!(state(&app), SimulationState::Running);
    assert!(rapier_config(&mut app).physics_pipeline_active);

    let slopes_before = slope_entities(&mut app);
    app.world_mut().send_event(ResetBalls);
    app.update();
    app.update();
    assert_eq!(state(&app), SimulationState::Resetting);
    assert!(!rapier_config(&mut app).physics_pipeline_active);

    app.update();
    assert_eq!(state(&app), SimulationState::Running);
    assert!(rapier_config(&mut app).physics_pipeline_active);
    assert_eq!(count::<With<Ball>>(&mut app), 10);

    assert_eq!(slope_entities(&mut app), slopes_before);
    assert_eq!(count::<With<Ground>>(&mut app), 1);
}

#[test]
fn stepped_ball_below_floor_returns_to_restart_point() {
    let mut app = physics_app(BallPitConfig::default());
    app.update();
    app.update();
    // A few real steps so every body exists in the Rapier world.
    for _ in 0..3 {
        app.update();
    }

    let ball = {
        let mut q = app.world_mut().query_filtered::<(Entity, &BallIndex), With<Ball>>();
        q.iter(app.world())
            .find(|(_, i)| i.0 == 0)
            .map(|(e, _)| e)
            .unwrap()
    };
    app.world_mut()
        .get_mut::<Transform>(ball)
        .unwrap()
        .translation = Vec3::new(25.0, -12.0, 0.0);

    for _ in 0..5 {
        app.update();
    }

    let pos = app.world().get::<Transform>(ball).unwrap().translation;
    assert!((pos.x + 4.0).abs() < 1e-3, "x = {}", pos.x);
    assert!(pos.z.abs() < 1e-3, "z = {}", pos.z);
    assert!(pos.y > 29.0 && pos.y <= 30.0, "y = {}", pos.y);
    assert_eq!(app.world().resource::<RespawnStats>().total, 1);
}
