//! Clear color, ambient + key light, and the skybox cubemap.
use bevy::asset::LoadState;
use bevy::core_pipeline::Skybox;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureViewDescriptor, TextureViewDimension};

use crate::core::config::BallPitConfig;
use crate::rendering::camera::CameraSetupSet;

/// Skybox image and whether its cube view has been applied yet.
#[derive(Resource, Debug, Clone)]
pub struct SkyboxCubemap {
    pub handle: Handle<Image>,
    pub settled: bool,
}

#[derive(Component)]
pub struct KeyLight;

pub struct LightingPlugin;

impl Plugin for LightingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (setup_lights, attach_skybox.after(CameraSetupSet)),
        )
        .add_systems(Update, apply_cubemap_view);
    }
}

fn setup_lights(mut commands: Commands, cfg: Res<BallPitConfig>) {
    let [r, g, b] = cfg.scene.clear_color;
    commands.insert_resource(ClearColor(Color::srgb(r, g, b)));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: cfg.scene.ambient_brightness,
        ..default()
    });
    // Sky-down key light standing in for a hemispheric light.
    commands.spawn((
        DirectionalLight {
            illuminance: cfg.scene.light_illuminance,
            shadows_enabled: false,
            ..default()
        },
        Transform::default().looking_to(Vec3::NEG_Y, Vec3::Z),
        KeyLight,
        Name::new("KeyLight"),
    ));
}

fn attach_skybox(
    mut commands: Commands,
    cfg: Res<BallPitConfig>,
    asset_server: Res<AssetServer>,
    cameras: Query<Entity, With<Camera3d>>,
) {
    let handle: Handle<Image> = asset_server.load(cfg.scene.skybox.clone());
    for cam in &cameras {
        commands.entity(cam).insert(Skybox {
            image: handle.clone(),
            brightness: cfg.scene.skybox_brightness,
            rotation: Quat::IDENTITY,
        });
    }
    commands.insert_resource(SkyboxCubemap { handle, settled: false });
}

/// Six array layers of square faces.
pub fn is_cubemap_layout(size: Extent3d) -> bool {
    size.depth_or_array_layers == 6 && size.width == size.height
}

fn apply_cubemap_view(
    asset_server: Res<AssetServer>,
    mut images: ResMut<Assets<Image>>,
    cubemap: Option<ResMut<SkyboxCubemap>>,
) {
    let Some(mut cubemap) = cubemap else { return };
    if cubemap.settled {
        return;
    }
    match asset_server.get_load_state(cubemap.handle.id()) {
        Some(LoadState::Loaded) => {
            cubemap.settled = true;
            let Some(image) = images.get_mut(&cubemap.handle) else { return };
            if is_cubemap_layout(image.texture_descriptor.size) {
                image.texture_view_descriptor = Some(TextureViewDescriptor {
                    dimension: Some(TextureViewDimension::Cube),
                    ..default()
                });
                info!(target: "assets", "skybox cubemap ready");
            } else {
                warn!(
                    target: "assets",
                    "skybox image is not a six-face cubemap ({:?}); sky left as loaded",
                    image.texture_descriptor.size
                );
            }
        }
        Some(LoadState::Failed(err)) => {
            cubemap.settled = true;
            warn!(target: "assets", "skybox load failed: {err}");
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubemap_layout_detection() {
        let cube = Extent3d { width: 512, height: 512, depth_or_array_layers: 6 };
        let flat = Extent3d { width: 512, height: 3072, depth_or_array_layers: 1 };
        let odd = Extent3d { width: 512, height: 256, depth_or_array_layers: 6 };
        assert!(is_cubemap_layout(cube));
        assert!(!is_cubemap_layout(flat));
        assert!(!is_cubemap_layout(odd));
    }
}
