pub mod config;

pub use config::{
    BallConfig, BallPitConfig, BodyConfig, ConfigDiagnostics, ConfigOverrides, CourseConfig,
    GravityConfig, RespawnConfig, SceneConfig, TextureEntry, WindowConfig, DEFAULT_CONFIG_LAYERS,
};
