//! Native-only polling reload of the config layers. Gravity follows through change
//! detection on `BallPitConfig`; window title and size are pushed here. Ball count and
//! course layout changes wait for the next reset or restart. Command-line overrides
//! (`ConfigOverrides`) are re-applied on top of every reload.
use bevy::prelude::*;
use std::{collections::HashMap, path::PathBuf, time::SystemTime};

use crate::core::config::{BallPitConfig, ConfigOverrides, WindowConfig, DEFAULT_CONFIG_LAYERS};

/// Layers to watch, in merge order. Must match the layers the running config was built from.
#[derive(Resource, Debug, Clone)]
pub struct ConfigReloadSettings {
    pub paths: Vec<PathBuf>,
    pub interval_secs: f32,
}

impl Default for ConfigReloadSettings {
    fn default() -> Self {
        Self {
            paths: DEFAULT_CONFIG_LAYERS.iter().map(PathBuf::from).collect(),
            interval_secs: 0.5,
        }
    }
}

/// Last seen modification time per layer.
#[derive(Resource, Debug, Default)]
struct LayerStamps(HashMap<PathBuf, SystemTime>);

impl LayerStamps {
    /// Records fresh stamps; true when any readable layer is newer than last seen.
    fn refresh(&mut self, paths: &[PathBuf]) -> bool {
        let mut changed = false;
        for path in paths {
            let Ok(stamp) = std::fs::metadata(path).and_then(|m| m.modified()) else {
                continue;
            };
            if self.0.get(path).is_none_or(|seen| stamp > *seen) {
                self.0.insert(path.clone(), stamp);
                changed = true;
            }
        }
        changed
    }
}

#[derive(Resource, Deref, DerefMut)]
struct PollTimer(Timer);

pub struct ConfigHotReloadPlugin;

impl Plugin for ConfigHotReloadPlugin {
    fn build(&self, app: &mut App) {
        if cfg!(target_arch = "wasm32") {
            return;
        }
        app.init_resource::<ConfigReloadSettings>()
            .init_resource::<ConfigOverrides>()
            .init_resource::<LayerStamps>()
            .add_systems(Startup, (start_poll_timer, record_startup_stamps))
            .add_systems(Update, poll_config_layers);
    }
}

fn start_poll_timer(mut commands: Commands, settings: Res<ConfigReloadSettings>) {
    let secs = settings.interval_secs.max(0.05);
    commands.insert_resource(PollTimer(Timer::from_seconds(secs, TimerMode::Repeating)));
}

/// The running config already reflects the files as they are now; only later edits reload.
fn record_startup_stamps(settings: Res<ConfigReloadSettings>, mut stamps: ResMut<LayerStamps>) {
    stamps.refresh(&settings.paths);
}

fn poll_config_layers(
    time: Res<Time>,
    settings: Res<ConfigReloadSettings>,
    overrides: Res<ConfigOverrides>,
    timer: Option<ResMut<PollTimer>>,
    mut stamps: ResMut<LayerStamps>,
    mut cfg: ResMut<BallPitConfig>,
    mut windows: Query<&mut Window>,
) {
    let Some(mut timer) = timer else { return };
    if !timer.tick(time.delta()).just_finished() || !stamps.refresh(&settings.paths) {
        return;
    }
    let (mut reloaded, _used, errors) = BallPitConfig::load_layered(settings.paths.iter());
    overrides.apply(&mut reloaded);
    for e in errors {
        warn!(target: "config", "hot-reload: {e}");
    }
    if *cfg == reloaded {
        return;
    }
    for w in reloaded.validate() {
        warn!(target: "config", "{w}");
    }
    if let Ok(mut window) = windows.single_mut() {
        apply_window_settings(&mut window, &reloaded.window);
    }
    info!(target: "config", "config hot-reload applied");
    *cfg = reloaded;
}

fn apply_window_settings(window: &mut Window, wanted: &WindowConfig) {
    if window.width() != wanted.width || window.height() != wanted.height {
        window.resolution.set(wanted.width, wanted.height);
    }
    if window.title != wanted.title {
        window.title.clone_from(&wanted.title);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use std::time::Duration;

    fn reload_app(paths: Vec<PathBuf>, cfg: BallPitConfig, overrides: ConfigOverrides) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(cfg)
            .insert_resource(overrides)
            .insert_resource(ConfigReloadSettings { paths, interval_secs: 0.05 })
            .add_plugins(ConfigHotReloadPlugin);
        app.update();
        app
    }

    fn force_poll(app: &mut App) {
        let mut due = Timer::from_seconds(0.05, TimerMode::Repeating);
        due.set_elapsed(Duration::from_secs_f32(0.05));
        app.insert_resource(PollTimer(due));
        app.update();
    }

    fn touch(file: &tempfile::NamedTempFile, contents: &[u8]) {
        std::fs::write(file.path(), contents).unwrap();
        file.as_file()
            .set_modified(SystemTime::now() + Duration::from_secs(10))
            .unwrap();
    }

    #[test]
    fn edited_layer_replaces_config() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"()").unwrap();
        let mut app = reload_app(
            vec![file.path().to_path_buf()],
            BallPitConfig::default(),
            ConfigOverrides::default(),
        );

        touch(&file, br"(gravity: (y: -3.0), balls: (count: 4))");
        force_poll(&mut app);

        let cfg = app.world().resource::<BallPitConfig>();
        assert_eq!(cfg.gravity.y, -3.0);
        assert_eq!(cfg.balls.count, 4);
    }

    #[test]
    fn untouched_layers_keep_cli_overrides() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), br"(balls: (count: 10))").unwrap();
        let paths = vec![file.path().to_path_buf()];
        let overrides = ConfigOverrides { ball_count: Some(3), auto_close: Some(2.0) };
        let (mut cfg, _, _) = BallPitConfig::load_layered(paths.iter());
        overrides.apply(&mut cfg);
        let mut app = reload_app(paths, cfg, overrides);

        force_poll(&mut app);
        force_poll(&mut app);

        let cfg = app.world().resource::<BallPitConfig>();
        assert_eq!(cfg.balls.count, 3);
        assert_eq!(cfg.window.auto_close, 2.0);
    }

    #[test]
    fn reload_reapplies_cli_overrides() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), br"(balls: (count: 10))").unwrap();
        let paths = vec![file.path().to_path_buf()];
        let overrides = ConfigOverrides { ball_count: Some(3), auto_close: None };
        let (mut cfg, _, _) = BallPitConfig::load_layered(paths.iter());
        overrides.apply(&mut cfg);
        let mut app = reload_app(paths, cfg, overrides);

        touch(&file, br"(balls: (count: 10), gravity: (y: -4.0))");
        force_poll(&mut app);

        let cfg = app.world().resource::<BallPitConfig>();
        assert_eq!(cfg.gravity.y, -4.0);
        assert_eq!(cfg.balls.count, 3);
    }

    #[test]
    fn stamps_only_report_newer_files() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let paths = vec![file.path().to_path_buf(), PathBuf::from("no/such/layer.ron")];
        let mut stamps = LayerStamps::default();
        assert!(stamps.refresh(&paths));
        assert!(!stamps.refresh(&paths));
    }
}
