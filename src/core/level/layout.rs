use bevy::prelude::*;

use crate::core::config::CourseConfig;

/// World placement of one slope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlopePlacement {
    pub index: usize,
    pub translation: Vec3,
    /// Signed tilt about +Z; even slopes tilt negative, odd ones positive.
    pub tilt: f32,
    pub half_extents: Vec3,
}

impl SlopePlacement {
    pub fn rotation(&self) -> Quat {
        Quat::from_axis_angle(Vec3::Z, self.tilt)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.translation).with_rotation(self.rotation())
    }
}

/// Placement of slope `index`: alternating side and tilt, rising by `slope_step_y` per index.
pub fn slope_placement(cfg: &CourseConfig, index: usize) -> SlopePlacement {
    let even = index % 2 == 0;
    let x = if even { -cfg.slope_offset_x } else { cfg.slope_offset_x };
    let y = cfg.slope_step_y * index as f32 + cfg.slope_base_y;
    let tilt = if even { -cfg.slope_angle } else { cfg.slope_angle };
    let [w, h, d] = cfg.slope_size;
    SlopePlacement {
        index,
        translation: Vec3::new(x, y, 0.0),
        tilt,
        half_extents: Vec3::new(w, h, d) * 0.5,
    }
}

pub fn slope_placements(cfg: &CourseConfig) -> Vec<SlopePlacement> {
    (0..cfg.slope_count).map(|i| slope_placement(cfg, i)).collect()
}
