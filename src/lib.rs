pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use crate::app::game::BallPitPlugin;
pub use crate::app::state::SimulationState;
pub use crate::core::components::{Ball, BallIndex, Ground, Slope};
pub use crate::core::config::{BallPitConfig, WindowConfig};
