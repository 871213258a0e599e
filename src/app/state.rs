use bevy::prelude::*;

/// Ball simulation lifecycle.
/// Booting -> Resetting -> Running -> (reset requested) -> Resetting -> ...
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum SimulationState {
    /// Startup systems are building the scene; no balls exist yet.
    #[default]
    Booting,
    /// Balls are being torn down and recreated; physics and respawn are stopped.
    /// The first batch goes through here too, so startup and reset share one path.
    Resetting,
    /// Physics steps and the respawn controller watches the balls.
    Running,
}
