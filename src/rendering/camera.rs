use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::core::config::BallPitConfig;

const PITCH_LIMIT: f32 = 1.54;
const SPRINT_MULTIPLIER: f32 = 3.0;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct CameraSetupSet;

/// Free-fly controls: WASD / arrows move, Q/E sink and rise, right mouse drag looks around.
#[derive(Component, Debug, Clone)]
pub struct FreeCamera {
    pub move_speed: f32,
    pub look_sensitivity: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl FreeCamera {
    pub fn from_transform(transform: &Transform, move_speed: f32, look_sensitivity: f32) -> Self {
        let (yaw, pitch, _) = transform.rotation.to_euler(EulerRot::YXZ);
        Self {
            move_speed,
            look_sensitivity,
            yaw,
            pitch,
        }
    }

    /// Applies a mouse delta (pixels) and returns the resulting orientation.
    pub fn look(&mut self, delta: Vec2) -> Quat {
        self.yaw -= delta.x * self.look_sensitivity;
        self.pitch = (self.pitch - delta.y * self.look_sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera.in_set(CameraSetupSet))
            .add_systems(Update, drive_free_camera);
    }
}

fn setup_camera(mut commands: Commands, cfg: Res<BallPitConfig>) {
    let scene = &cfg.scene;
    let transform = Transform::from_translation(Vec3::from_array(scene.camera_position))
        .looking_at(Vec3::from_array(scene.camera_target), Vec3::Y);
    commands.spawn((
        Camera3d::default(),
        transform,
        FreeCamera::from_transform(&transform, scene.camera_move_speed, scene.camera_look_sensitivity),
        Name::new("MainCamera"),
    ));
}

/// Camera-local movement intent from the keyboard: x = right, y = up, z = forward.
pub fn movement_intent(keys: &ButtonInput<KeyCode>) -> Vec3 {
    let mut dir = Vec3::ZERO;
    if keys.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]) {
        dir.z += 1.0;
    }
    if keys.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]) {
        dir.z -= 1.0;
    }
    if keys.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        dir.x += 1.0;
    }
    if keys.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
        dir.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyE) {
        dir.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyQ) {
        dir.y -= 1.0;
    }
    dir
}

fn drive_free_camera(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    mut cameras: Query<(&mut Transform, &mut FreeCamera)>,
) {
    let intent = movement_intent(&keys);
    let sprint = if keys.pressed(KeyCode::ShiftLeft) { SPRINT_MULTIPLIER } else { 1.0 };
    for (mut transform, mut cam) in &mut cameras {
        if mouse_buttons.pressed(MouseButton::Right) && motion.delta != Vec2::ZERO {
            transform.rotation = cam.look(motion.delta);
        }
        if intent != Vec3::ZERO {
            let world = transform.right() * intent.x + Vec3::Y * intent.y + transform.forward() * intent.z;
            transform.translation +=
                world.normalize_or_zero() * cam.move_speed * sprint * time.delta_secs();
        }
    }
}
