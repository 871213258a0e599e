pub mod layout;

pub use layout::{slope_placement, slope_placements, SlopePlacement};
