use std::path::PathBuf;

use bevy::prelude::*;

use ball_pit::core::config::{BallPitConfig, ConfigDiagnostics, ConfigOverrides};
use ball_pit::interaction::session::config_hot_reload::ConfigReloadSettings;
use ball_pit::BallPitPlugin;

#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(about = "Balls tumbling down a staircase of tilted slopes", version)]
struct Cli {
    /// Extra config layer, applied after the default layers. Repeatable.
    #[arg(long = "config")]
    config: Vec<PathBuf>,
    /// Override `balls.count`.
    #[arg(long)]
    balls: Option<usize>,
    /// Exit after this many seconds.
    #[arg(long)]
    auto_close: Option<f32>,
}

/// Everything `main` needs from the config stage.
struct LoadedConfig {
    cfg: BallPitConfig,
    diag: ConfigDiagnostics,
    overrides: ConfigOverrides,
    /// Layers the config was merged from, in order; watched by hot reload.
    layers: Vec<PathBuf>,
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> LoadedConfig {
    // Embed base config (no layered local override on wasm).
    const RAW: &str = include_str!("../assets/config/ball_pit.ron");
    let mut diag = ConfigDiagnostics::default();
    let cfg = match ron::from_str(RAW) {
        Ok(cfg) => {
            diag.layers_used.push("embedded ball_pit.ron".into());
            cfg
        }
        Err(e) => {
            diag.errors.push(format!("embedded config parse failure: {e}; using defaults"));
            BallPitConfig::default()
        }
    };
    LoadedConfig { cfg, diag, overrides: ConfigOverrides::default(), layers: Vec::new() }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> LoadedConfig {
    use ball_pit::core::config::DEFAULT_CONFIG_LAYERS;
    use clap::Parser;

    let cli = Cli::parse();
    let layers: Vec<PathBuf> = DEFAULT_CONFIG_LAYERS
        .iter()
        .map(PathBuf::from)
        .chain(cli.config)
        .collect();
    let overrides = ConfigOverrides { ball_count: cli.balls, auto_close: cli.auto_close };
    let (mut cfg, layers_used, errors) = BallPitConfig::load_layered(layers.iter());
    overrides.apply(&mut cfg);
    let diag = ConfigDiagnostics {
        layers_used,
        errors,
        warnings: Vec::new(),
    };
    LoadedConfig { cfg, diag, overrides, layers }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        // Better panic messages on wasm
        console_error_panic_hook::set_once();
    }

    let LoadedConfig { cfg, mut diag, overrides, layers } = load_config();
    diag.warnings = cfg.validate();

    let window = Window {
        title: cfg.window.title.clone(),
        resolution: (cfg.window.width, cfg.window.height).into(),
        resizable: true,
        #[cfg(target_arch = "wasm32")]
        canvas: Some(cfg.window.canvas.clone()),
        #[cfg(target_arch = "wasm32")]
        fit_canvas_to_parent: true,
        ..default()
    };

    App::new()
        .insert_resource(cfg)
        .insert_resource(diag)
        .insert_resource(overrides)
        .insert_resource(ConfigReloadSettings { paths: layers, ..default() })
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        .add_plugins(BallPitPlugin)
        .run();
}
