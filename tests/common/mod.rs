use ball_pit::core::config::BallPitConfig;
use ball_pit::core::system::system_order::configure_system_order;
use ball_pit::gameplay::reset::ResetPlugin;
use ball_pit::gameplay::respawn::RespawnPlugin;
use ball_pit::rendering::materials::BallVisuals;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

/// Headless app with the ball lifecycle only: no renderer, no physics step.
pub fn lifecycle_app(cfg: BallPitConfig) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .insert_resource(cfg)
        .insert_resource(BallVisuals {
            mesh: Handle::default(),
            palette: (0..4u128).map(|i| Handle::weak_from_u128(900 + i)).collect(),
        });
    configure_system_order(&mut app);
    app.add_plugins((ResetPlugin, RespawnPlugin));
    app
}

pub fn ball_entities(app: &mut App) -> Vec<Entity> {
    let mut q = app
        .world_mut()
        .query_filtered::<Entity, With<ball_pit::Ball>>();
    q.iter(app.world()).collect()
}
