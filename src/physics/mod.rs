pub mod impostor;
pub mod rapier;
