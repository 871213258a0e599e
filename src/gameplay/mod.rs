pub mod course;
pub mod reset;
pub mod respawn;
pub mod spawn;
