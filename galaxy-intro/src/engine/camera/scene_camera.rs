use bevy::prelude::*;
use bevy::render::camera::RenderTarget;
use bevy::window::WindowRef;
use constants::render_settings::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR};

use crate::engine::scene::scene_id::SceneId;

pub fn scene_projection() -> Projection {
    Projection::Perspective(PerspectiveProjection {
        fov: CAMERA_FOV_DEGREES.to_radians(),
        near: CAMERA_NEAR,
        far: CAMERA_FAR,
        ..default()
    })
}

/// Spawn a camera on the +Z axis looking at the origin, rendering only the
/// scene's layer into `window` over a transparent background.
pub fn spawn_scene_camera(
    commands: &mut Commands,
    scene: SceneId,
    window: Entity,
    distance: f32,
) -> Entity {
    commands
        .spawn((
            Camera3d::default(),
            Camera {
                order: scene.camera_order(),
                target: RenderTarget::Window(WindowRef::Entity(window)),
                clear_color: ClearColorConfig::Custom(Color::NONE),
                ..default()
            },
            scene_projection(),
            Transform::from_xyz(0.0, 0.0, distance),
            scene.render_layers(),
            scene,
        ))
        .id()
}

/// Match the projection to a viewport. Zero-height viewports are ignored.
pub fn fit_projection(projection: &mut Projection, viewport: Vec2) {
    if viewport.y <= 0.0 {
        return;
    }
    if let Projection::Perspective(perspective) = projection {
        perspective.aspect_ratio = viewport.x / viewport.y;
    }
}
