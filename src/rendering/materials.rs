use bevy::prelude::*;

use crate::core::config::BallPitConfig;
use crate::core::system::system_order::PrePhysicsSet;
use crate::rendering::palette::{palette_slot, BASE_COLORS, COLOR_NAMES};
use crate::rendering::textures::TextureLoaded;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct MaterialsInitSet;

/// Shared sphere mesh and the ordered ball palette.
#[derive(Resource, Debug, Clone)]
pub struct BallVisuals {
    pub mesh: Handle<Mesh>,
    pub palette: Vec<Handle<StandardMaterial>>,
}

impl BallVisuals {
    /// Material for ball `index` (round-robin over the palette).
    pub fn material_for(&self, index: usize) -> Handle<StandardMaterial> {
        self.palette
            .get(palette_slot(index, self.palette.len()))
            .cloned()
            .unwrap_or_default()
    }
}

/// Material shared by slopes and ground; gains its texture once the texture task resolves.
#[derive(Resource, Debug, Clone)]
pub struct CourseMaterial(pub Handle<StandardMaterial>);

pub struct MaterialsPlugin;

impl Plugin for MaterialsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_materials.in_set(MaterialsInitSet))
            .add_systems(Update, bind_course_texture.in_set(PrePhysicsSet));
    }
}

fn setup_materials(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<BallPitConfig>,
) {
    let mesh = meshes.add(
        Sphere::new(cfg.balls.radius)
            .mesh()
            .uv(cfg.balls.segments, cfg.balls.segments),
    );
    let palette = BASE_COLORS
        .iter()
        .map(|c| {
            materials.add(StandardMaterial {
                base_color: *c,
                emissive: c.to_linear(),
                ..default()
            })
        })
        .collect::<Vec<_>>();
    debug!("ball palette: {}", COLOR_NAMES.join(", "));
    commands.insert_resource(BallVisuals { mesh, palette });

    // Untextured until the course texture task resolves.
    let course = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        perceptual_roughness: 0.9,
        ..default()
    });
    info!("load course material (texture '{}')", cfg.course.texture);
    commands.insert_resource(CourseMaterial(course));
}

/// Apply phase of the course texture: binds the image when its task reports completion.
pub fn bind_course_texture(
    mut loaded: EventReader<TextureLoaded>,
    cfg: Res<BallPitConfig>,
    course: Option<Res<CourseMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(course) = course else {
        loaded.clear();
        return;
    };
    for ev in loaded.read() {
        if ev.name != cfg.course.texture {
            continue;
        }
        if let Some(mat) = materials.get_mut(&course.0) {
            mat.base_color_texture = Some(ev.handle.clone());
            info!("course material textured with '{}'", ev.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_for_wraps_palette() {
        let palette: Vec<Handle<StandardMaterial>> = (0..4)
            .map(|i| Handle::weak_from_u128(1000 + i as u128))
            .collect();
        let visuals = BallVisuals { mesh: Handle::default(), palette: palette.clone() };
        for i in 0..10 {
            assert_eq!(visuals.material_for(i), palette[i % 4]);
        }
    }

    #[test]
    fn binds_texture_on_matching_event_only() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<Assets<StandardMaterial>>()
            .insert_resource(BallPitConfig::default())
            .add_event::<TextureLoaded>()
            .add_systems(Update, bind_course_texture);
        let handle = app
            .world_mut()
            .resource_mut::<Assets<StandardMaterial>>()
            .add(StandardMaterial::default());
        app.insert_resource(CourseMaterial(handle.clone()));

        app.world_mut().send_event(TextureLoaded {
            name: "rock".into(),
            handle: Handle::weak_from_u128(7),
        });
        app.update();
        let mats = app.world().resource::<Assets<StandardMaterial>>();
        assert!(mats.get(&handle).unwrap().base_color_texture.is_none());

        app.world_mut().send_event(TextureLoaded {
            name: "tree".into(),
            handle: Handle::weak_from_u128(8),
        });
        app.update();
        let mats = app.world().resource::<Assets<StandardMaterial>>();
        assert_eq!(
            mats.get(&handle).unwrap().base_color_texture,
            Some(Handle::weak_from_u128(8))
        );
    }
}
