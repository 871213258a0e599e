use bevy::prelude::*;

use crate::core::system::system_order::PrePhysicsSet;
use crate::gameplay::reset::ResetBalls;

/// On-screen button that triggers a ball reset.
#[derive(Component)]
pub struct ResetButton;

const IDLE_COLOR: Color = Color::srgba(0.1, 0.1, 0.1, 0.8);
const HOVER_COLOR: Color = Color::srgba(0.25, 0.25, 0.25, 0.9);
const PRESSED_COLOR: Color = Color::srgba(0.35, 0.6, 0.35, 0.9);

pub struct ResetInputPlugin;

impl Plugin for ResetInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_reset_button).add_systems(
            Update,
            (reset_button_interaction, reset_key_input).in_set(PrePhysicsSet),
        );
    }
}

fn spawn_reset_button(mut commands: Commands) {
    commands
        .spawn((
            ResetButton,
            Button,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(12.0),
                left: Val::Px(12.0),
                padding: UiRect::axes(Val::Px(14.0), Val::Px(6.0)),
                ..default()
            },
            BackgroundColor(IDLE_COLOR),
            Name::new("ResetButton"),
        ))
        .with_children(|b| {
            b.spawn((
                Text::new("Reset (R)"),
                TextFont { font_size: 18.0, ..default() },
                TextColor(Color::WHITE),
            ));
        });
}

pub fn reset_button_interaction(
    mut buttons: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<ResetButton>)>,
    mut resets: EventWriter<ResetBalls>,
) {
    for (interaction, mut bg) in &mut buttons {
        match interaction {
            Interaction::Pressed => {
                info!(target: "input", "reset event fired.");
                resets.write(ResetBalls);
                bg.0 = PRESSED_COLOR;
            }
            Interaction::Hovered => bg.0 = HOVER_COLOR,
            Interaction::None => bg.0 = IDLE_COLOR,
        }
    }
}

pub fn reset_key_input(keys: Res<ButtonInput<KeyCode>>, mut resets: EventWriter<ResetBalls>) {
    if keys.just_pressed(KeyCode::KeyR) {
        info!(target: "input", "reset event fired (key).");
        resets.write(ResetBalls);
    }
}
