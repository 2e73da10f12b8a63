use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::engine::animation::transition::TransitionPhase;
use crate::engine::camera::scene_camera::fit_projection;
use crate::engine::scene::scene_id::SceneId;

/// On a scene window resize, fit both scene cameras to the new aspect and
/// bring both scene windows to the same size.
///
/// Empty viewports are ignored, as is the galaxy window once it has been
/// retired: its hidden canvas reports 0x0, which must not reach the backdrop.
pub fn handle_viewport_resize(
    mut resized: EventReader<WindowResized>,
    phase: Option<Res<State<TransitionPhase>>>,
    mut windows: Query<(&mut Window, &SceneId)>,
    mut cameras: Query<&mut Projection, (With<Camera>, With<SceneId>)>,
) {
    let galaxy_retired = phase.is_some_and(|phase| *phase.get() == TransitionPhase::Revealed);

    let Some(viewport) = resized
        .read()
        .filter(|event| event.width > 0.0 && event.height > 0.0)
        .filter(|event| {
            windows
                .get(event.window)
                .is_ok_and(|(_, scene)| *scene == SceneId::Cosmic || !galaxy_retired)
        })
        .last()
        .map(|event| Vec2::new(event.width, event.height))
    else {
        return;
    };

    debug!("Viewport resized to {}x{}", viewport.x, viewport.y);

    for mut projection in &mut cameras {
        fit_projection(&mut projection, viewport);
    }

    for (mut window, _) in &mut windows {
        if window.width() != viewport.x || window.height() != viewport.y {
            window.resolution.set(viewport.x, viewport.y);
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy::state::app::StatesPlugin;

    use super::*;
    use crate::engine::camera::scene_camera::scene_projection;

    fn aspect(app: &App, camera: Entity) -> f32 {
        match app.world().get::<Projection>(camera).unwrap() {
            Projection::Perspective(p) => p.aspect_ratio,
            _ => panic!("expected perspective"),
        }
    }

    struct Scenes {
        galaxy_window: Entity,
        cosmic_window: Entity,
        galaxy_camera: Entity,
        cosmic_camera: Entity,
    }

    fn resize_app() -> (App, Scenes) {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .init_state::<TransitionPhase>()
            .add_event::<WindowResized>()
            .add_systems(Update, handle_viewport_resize);

        let world = app.world_mut();
        let scenes = Scenes {
            galaxy_window: world.spawn((Window::default(), SceneId::Galaxy)).id(),
            cosmic_window: world.spawn((Window::default(), SceneId::Cosmic)).id(),
            galaxy_camera: world
                .spawn((Camera::default(), scene_projection(), SceneId::Galaxy))
                .id(),
            cosmic_camera: world
                .spawn((Camera::default(), scene_projection(), SceneId::Cosmic))
                .id(),
        };
        (app, scenes)
    }

    #[test]
    fn both_scenes_follow_the_viewport() {
        let (mut app, scenes) = resize_app();

        app.world_mut().send_event(WindowResized {
            window: scenes.galaxy_window,
            width: 1600.0,
            height: 900.0,
        });
        app.update();

        for camera in [scenes.galaxy_camera, scenes.cosmic_camera] {
            assert!((aspect(&app, camera) - 1600.0 / 900.0).abs() < 1e-6);
        }
        for window in [scenes.galaxy_window, scenes.cosmic_window] {
            let window = app.world().get::<Window>(window).unwrap();
            assert_eq!((window.width(), window.height()), (1600.0, 900.0));
        }
    }

    #[test]
    fn repeated_resizes_are_idempotent() {
        let (mut app, scenes) = resize_app();

        for _ in 0..3 {
            app.world_mut().send_event(WindowResized {
                window: scenes.cosmic_window,
                width: 640.0,
                height: 480.0,
            });
            app.update();
        }

        assert!((aspect(&app, scenes.galaxy_camera) - 4.0 / 3.0).abs() < 1e-6);
        let window = app.world().get::<Window>(scenes.galaxy_window).unwrap();
        assert_eq!((window.width(), window.height()), (640.0, 480.0));
    }

    #[test]
    fn unrelated_windows_are_ignored() {
        let (mut app, scenes) = resize_app();
        let other = app.world_mut().spawn(Window::default()).id();

        app.world_mut().send_event(WindowResized {
            window: other,
            width: 100.0,
            height: 100.0,
        });
        app.update();

        let window = app.world().get::<Window>(scenes.cosmic_window).unwrap();
        assert_eq!(window.width(), Window::default().width());
    }

    fn resize(app: &mut App, window: Entity, width: f32, height: f32) {
        app.world_mut().send_event(WindowResized {
            window,
            width,
            height,
        });
        app.update();
    }

    fn size(app: &App, window: Entity) -> (f32, f32) {
        let window = app.world().get::<Window>(window).unwrap();
        (window.width(), window.height())
    }

    #[test]
    fn collapsed_viewport_keeps_the_backdrop_size() {
        let (mut app, scenes) = resize_app();
        resize(&mut app, scenes.cosmic_window, 1280.0, 720.0);

        resize(&mut app, scenes.galaxy_window, 0.0, 0.0);

        assert_eq!(size(&app, scenes.cosmic_window), (1280.0, 720.0));
        assert!((aspect(&app, scenes.cosmic_camera) - 1280.0 / 720.0).abs() < 1e-6);
    }

    #[test]
    fn retired_galaxy_window_no_longer_drives_the_viewport() {
        let (mut app, scenes) = resize_app();
        resize(&mut app, scenes.cosmic_window, 1280.0, 720.0);

        app.world_mut()
            .resource_mut::<NextState<TransitionPhase>>()
            .set(TransitionPhase::Revealed);
        app.update();

        resize(&mut app, scenes.galaxy_window, 300.0, 200.0);
        assert_eq!(size(&app, scenes.cosmic_window), (1280.0, 720.0));

        // The backdrop itself still follows the page.
        resize(&mut app, scenes.cosmic_window, 1920.0, 1080.0);
        assert_eq!(size(&app, scenes.cosmic_window), (1920.0, 1080.0));
        assert!((aspect(&app, scenes.cosmic_camera) - 1920.0 / 1080.0).abs() < 1e-6);
    }
}
