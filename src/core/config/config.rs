use anyhow::Context;
use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

/// Default config layers, later files override earlier ones.
pub const DEFAULT_CONFIG_LAYERS: [&str; 2] = [
    "assets/config/ball_pit.ron",
    "assets/config/ball_pit.local.ron",
];

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
    /// CSS selector of the canvas to render into (web builds only).
    pub canvas: String,
    /// DOM id of the page button that triggers a reset (web builds only).
    pub reset_button_id: String,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Ball Pit".into(),
            auto_close: 0.0,
            canvas: "#renderCanvas".into(),
            reset_button_id: "restartBtn".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        Self { x: 0.0, y: -9.81, z: 0.0 }
    }
}
impl GravityConfig {
    pub fn as_vec3(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// Rigid-body parameters attached to a mesh. Zero mass means a fixed body.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct BodyConfig {
    pub mass: f32,
    pub friction: f32,
    pub restitution: f32,
}
impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            mass: 0.0,
            friction: 0.2,
            restitution: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BallConfig {
    pub count: usize,
    pub radius: f32,
    /// Sphere mesh tessellation (sectors and stacks).
    pub segments: u32,
    pub spawn_x: f32,
    /// Height of ball 0; ball i spawns at `spawn_y + i * spawn_interval`.
    pub spawn_y: f32,
    pub spawn_interval: f32,
    pub body: BodyConfig,
}
impl Default for BallConfig {
    fn default() -> Self {
        Self {
            count: 10,
            radius: 0.5,
            segments: 16,
            spawn_x: -4.0,
            spawn_y: 30.0,
            spawn_interval: 10.0,
            body: BodyConfig {
                mass: 1.0,
                friction: 0.0,
                restitution: 0.2,
            },
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RespawnConfig {
    /// Balls strictly below this height are considered lost.
    pub floor_y: f32,
    pub restart_x: f32,
    pub restart_y: f32,
}
impl Default for RespawnConfig {
    fn default() -> Self {
        Self {
            floor_y: -10.0,
            restart_x: -4.0,
            restart_y: 30.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CourseConfig {
    pub slope_count: usize,
    /// Full slope extents (width, height, depth).
    pub slope_size: [f32; 3],
    /// Even slopes sit at `-slope_offset_x`, odd ones at `+slope_offset_x`.
    pub slope_offset_x: f32,
    pub slope_base_y: f32,
    pub slope_step_y: f32,
    /// Tilt magnitude in radians about +Z.
    pub slope_angle: f32,
    pub slope_body: BodyConfig,
    pub ground_size: f32,
    pub ground_subdivisions: u32,
    pub ground_thickness: f32,
    pub ground_body: BodyConfig,
    /// Name of the texture task whose image is bound to the course material.
    pub texture: String,
}
impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            slope_count: 5,
            slope_size: [20.0, 0.5, 5.0],
            slope_offset_x: 10.0,
            slope_base_y: 5.0,
            slope_step_y: 5.0,
            slope_angle: std::f32::consts::PI / 2.0 / 12.0,
            slope_body: BodyConfig {
                mass: 0.0,
                friction: 0.2,
                restitution: 0.1,
            },
            ground_size: 20.0,
            ground_subdivisions: 2,
            ground_thickness: 0.1,
            ground_body: BodyConfig {
                mass: 0.0,
                friction: 0.5,
                restitution: 0.9,
            },
            texture: "tree".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TextureEntry {
    pub name: String,
    pub path: String,
}
impl Default for TextureEntry {
    fn default() -> Self {
        Self {
            name: "tree".into(),
            path: "textures/tree.png".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    pub clear_color: [f32; 3],
    pub ambient_brightness: f32,
    pub light_illuminance: f32,
    pub camera_position: [f32; 3],
    pub camera_target: [f32; 3],
    pub camera_move_speed: f32,
    pub camera_look_sensitivity: f32,
    /// Cubemap image (ktx2) used for the skybox.
    pub skybox: String,
    pub skybox_brightness: f32,
    pub textures: Vec<TextureEntry>,
}
impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            clear_color: [0.2, 0.2, 0.2],
            ambient_brightness: 400.0,
            light_illuminance: 3_000.0,
            camera_position: [0.0, 10.0, -40.0],
            camera_target: [0.0, 10.0, 0.0],
            camera_move_speed: 15.0,
            camera_look_sensitivity: 0.003,
            skybox: "textures/skybox/tropical_sunny_day.ktx2".into(),
            skybox_brightness: 1_000.0,
            textures: vec![TextureEntry::default()],
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct BallPitConfig {
    pub window: WindowConfig,
    pub gravity: GravityConfig,
    pub balls: BallConfig,
    pub respawn: RespawnConfig,
    pub course: CourseConfig,
    pub scene: SceneConfig,
    pub rapier_debug: bool,
}
impl Default for BallPitConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            gravity: Default::default(),
            balls: Default::default(),
            respawn: Default::default(),
            course: Default::default(),
            scene: Default::default(),
            rapier_debug: false,
        }
    }
}

/// Outcome of startup config loading, logged once the log plugin is up.
#[derive(Resource, Debug, Clone, Default)]
pub struct ConfigDiagnostics {
    pub layers_used: Vec<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Command-line overrides, applied on top of the merged layers at startup and after every reload.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub ball_count: Option<usize>,
    pub auto_close: Option<f32>,
}

impl ConfigOverrides {
    pub fn apply(&self, cfg: &mut BallPitConfig) {
        if let Some(count) = self.ball_count {
            cfg.balls.count = count;
        }
        if let Some(secs) = self.auto_close {
            cfg.window.auto_close = secs;
        }
    }
}

impl BallPitConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        ron::from_str(&data).with_context(|| format!("parse RON {}", path.display()))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(format!("{e:#}"))),
        }
    }

    /// Load multiple config layers, later files overriding earlier ones (deep merge).
    /// Missing files are skipped; returns (config, list_of_layer_paths_used, list_of_errors).
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();

        for p in paths {
            let path = p.as_ref();
            let txt = match fs::read_to_string(path) {
                Ok(txt) => txt,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => {
                    errors.push(format!("{}: read error: {e}", path.display()));
                    continue;
                }
            };
            let layer = match ron::from_str::<Value>(&txt) {
                Ok(layer) => layer,
                Err(e) => {
                    errors.push(format!("{}: parse error: {e}", path.display()));
                    continue;
                }
            };
            match merged.as_mut() {
                Some(base) => merge_value(base, layer),
                None => merged = Some(layer),
            }
            used.push(path.display().to_string());
        }

        let Some(val) = merged else {
            return (Self::default(), used, errors);
        };
        match val.into_rust::<BallPitConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (Self::default(), used, errors)
            }
        }
    }

    /// Validate the configuration returning a list of human-readable warning strings.
    /// These represent suspicious / potentially unintended values but are not hard errors.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.gravity.as_vec3().length() < 1e-4 {
            w.push("gravity magnitude near zero; balls may float".into());
        }
        if self.gravity.y > 0.0 {
            w.push(format!(
                "gravity.y is positive ({}); balls will fall upwards and never respawn",
                self.gravity.y
            ));
        }
        if self.balls.count == 0 {
            w.push("balls.count is 0; nothing will spawn".into());
        }
        if self.balls.radius <= 0.0 {
            w.push("balls.radius must be > 0".into());
        }
        if self.balls.segments < 3 {
            w.push(format!("balls.segments {} too low for a sphere", self.balls.segments));
        }
        if self.balls.spawn_interval < self.balls.radius * 2.0 {
            w.push(format!(
                "balls.spawn_interval {} smaller than ball diameter; spawns overlap",
                self.balls.spawn_interval
            ));
        }
        if self.balls.body.mass <= 0.0 {
            w.push("balls.body.mass must be > 0 for dynamic balls".into());
        }
        check_body(&mut w, "balls.body", &self.balls.body);
        check_body(&mut w, "course.slope_body", &self.course.slope_body);
        check_body(&mut w, "course.ground_body", &self.course.ground_body);
        if self.respawn.restart_y <= self.respawn.floor_y {
            w.push(format!(
                "respawn.restart_y {} not above respawn.floor_y {}; balls respawn forever",
                self.respawn.restart_y, self.respawn.floor_y
            ));
        }
        if self.balls.spawn_y <= self.respawn.floor_y {
            w.push("balls.spawn_y at or below respawn.floor_y".into());
        }
        if self.course.slope_size.iter().any(|s| *s <= 0.0) {
            w.push("course.slope_size components must be > 0".into());
        }
        if self.course.slope_step_y < 0.0 {
            w.push("course.slope_step_y negative; slopes descend with index".into());
        }
        if self.course.slope_angle.abs() >= std::f32::consts::FRAC_PI_2 {
            w.push(format!(
                "course.slope_angle {} at or beyond vertical",
                self.course.slope_angle
            ));
        }
        if self.course.ground_size <= 0.0 {
            w.push("course.ground_size must be > 0".into());
        }
        if !self.course.texture.is_empty()
            && !self.scene.textures.iter().any(|t| t.name == self.course.texture)
        {
            w.push(format!(
                "course.texture '{}' has no matching scene.textures entry",
                self.course.texture
            ));
        }
        if self.scene.camera_position == self.scene.camera_target {
            w.push("scene.camera_position equals camera_target".into());
        }
        w
    }
}

fn check_body(w: &mut Vec<String>, label: &str, body: &BodyConfig) {
    if body.mass < 0.0 {
        w.push(format!("{label}.mass negative"));
    }
    if body.friction < 0.0 {
        w.push(format!("{label}.friction negative"));
    }
    if !(0.0..=1.5).contains(&body.restitution) {
        w.push(format!(
            "{label}.restitution {} outside recommended 0..1.5",
            body.restitution
        ));
    }
}

fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
    use ron::value::Value;
    match (base, overlay) {
        (Value::Map(bm), Value::Map(om)) => {
            for (k, v) in om.into_iter() {
                let mut incoming = Some(v);
                for (ek, ev) in bm.iter_mut() {
                    if *ek == k {
                        if let Some(val) = incoming.take() {
                            merge_value(ev, val);
                        }
                        break;
                    }
                }
                if let Some(val) = incoming {
                    bm.insert(k, val);
                }
            }
        }
        (b, o) => *b = o,
    }
}
