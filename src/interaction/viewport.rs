use bevy::prelude::*;
use bevy::window::WindowResized;

/// Last viewport size reported by the window backend.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct ViewportSize(pub Vec2);

pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewportSize>()
            .add_systems(Update, track_viewport_resize);
    }
}

/// Bevy resizes the surface itself; this only records and logs the new size.
pub fn track_viewport_resize(
    mut resized: EventReader<WindowResized>,
    mut viewport: ResMut<ViewportSize>,
) {
    if let Some(ev) = resized.read().last() {
        let size = Vec2::new(ev.width, ev.height);
        if viewport.0 != size {
            debug!(target: "window", "viewport resized to {}x{}", ev.width, ev.height);
            viewport.0 = size;
        }
    }
}
