use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::components::{Ground, Slope};
use crate::core::config::BallPitConfig;
use crate::core::level::slope_placements;
use crate::physics::impostor::impostor;
use crate::rendering::materials::{CourseMaterial, MaterialsInitSet};

pub struct CoursePlugin;

impl Plugin for CoursePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_slopes, setup_ground).after(MaterialsInitSet));
    }
}

fn setup_slopes(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    course_material: Res<CourseMaterial>,
    cfg: Res<BallPitConfig>,
) {
    let course = &cfg.course;
    let [w, h, d] = course.slope_size;
    let mesh = meshes.add(Cuboid::new(w, h, d));
    for p in slope_placements(course) {
        commands.spawn((
            Slope { index: p.index },
            Mesh3d(mesh.clone()),
            MeshMaterial3d(course_material.0.clone()),
            p.transform(),
            impostor(
                &course.slope_body,
                Collider::cuboid(p.half_extents.x, p.half_extents.y, p.half_extents.z),
            ),
            Name::new(format!("Slope{}", p.index)),
        ));
    }
    info!("course: {} slopes placed", course.slope_count);
}

fn setup_ground(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    course_material: Res<CourseMaterial>,
    cfg: Res<BallPitConfig>,
) {
    let course = &cfg.course;
    let half = course.ground_size * 0.5;
    commands.spawn((
        Ground,
        Mesh3d(
            meshes.add(
                Plane3d::default()
                    .mesh()
                    .size(course.ground_size, course.ground_size)
                    .subdivisions(course.ground_subdivisions),
            ),
        ),
        MeshMaterial3d(course_material.0.clone()),
        Transform::IDENTITY,
        impostor(
            &course.ground_body,
            Collider::cuboid(half, course.ground_thickness * 0.5, half),
        ),
        Name::new("Ground"),
    ));
}
