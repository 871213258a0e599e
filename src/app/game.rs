// This file is part of Ball Pit.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use bevy_rapier3d::render::RapierDebugRenderPlugin;

use crate::core::config::{BallPitConfig, ConfigDiagnostics};
use crate::core::system::system_order::configure_system_order;
use crate::debug::DebugPlugin;
use crate::gameplay::course::CoursePlugin;
use crate::gameplay::reset::ResetPlugin;
use crate::gameplay::respawn::RespawnPlugin;
use crate::interaction::dom::DomResetPlugin;
use crate::interaction::reset_input::ResetInputPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::interaction::session::config_hot_reload::ConfigHotReloadPlugin;
use crate::interaction::viewport::ViewportPlugin;
use crate::physics::rapier::PhysicsSetupPlugin;
use crate::rendering::camera::CameraPlugin;
use crate::rendering::lighting::LightingPlugin;
use crate::rendering::materials::MaterialsPlugin;
use crate::rendering::textures::TextureTasksPlugin;

/// Whole demo: scene, course, balls, reset and respawn. Expects `BallPitConfig` to be inserted.
pub struct BallPitPlugin;

impl Plugin for BallPitPlugin {
    fn build(&self, app: &mut App) {
        configure_system_order(app);

        let rapier_debug = app
            .world()
            .get_resource::<BallPitConfig>()
            .is_some_and(|cfg| cfg.rapier_debug);

        app.init_resource::<ConfigDiagnostics>()
            .add_systems(Startup, log_config_diagnostics)
            .add_plugins((
                CameraPlugin,
                LightingPlugin,
                TextureTasksPlugin,
                MaterialsPlugin,
                PhysicsSetupPlugin,
                CoursePlugin,
                ResetPlugin,
                RespawnPlugin,
            ))
            .add_plugins((
                ResetInputPlugin,
                DomResetPlugin,
                ViewportPlugin,
                ConfigHotReloadPlugin,
                AutoClosePlugin,
                DebugPlugin,
            ));

        // Wireframe starts hidden unless `rapier_debug` is set; F1 toggles it in debug builds.
        app.add_plugins(RapierDebugRenderPlugin {
            enabled: rapier_debug,
            ..default()
        });
    }
}

fn log_config_diagnostics(diag: Res<ConfigDiagnostics>, cfg: Res<BallPitConfig>) {
    for layer in &diag.layers_used {
        info!(target: "config", "config layer loaded: {layer}");
    }
    for e in &diag.errors {
        warn!(target: "config", "config layer issue: {e}");
    }
    for w in &diag.warnings {
        warn!(target: "config", "{w}");
    }
    info!(
        target: "config",
        balls = cfg.balls.count,
        slopes = cfg.course.slope_count,
        "ball pit configured"
    );
}
