use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::scene_id::SceneId;

/// Which scenes got a canvas inside their page container.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSurfaces {
    galaxy: bool,
    cosmic: bool,
}

impl RenderSurfaces {
    pub fn new(galaxy: bool, cosmic: bool) -> Self {
        Self { galaxy, cosmic }
    }

    pub fn is_mounted(&self, scene: SceneId) -> bool {
        match scene {
            SceneId::Galaxy => self.galaxy,
            SceneId::Cosmic => self.cosmic,
        }
    }

    /// Drop the canvas selector of a window whose canvas is missing, so winit
    /// creates its own surface instead of failing the lookup.
    pub fn bind(&self, scene: SceneId, window: &mut Window) {
        if self.is_mounted(scene) {
            return;
        }
        if let Some(selector) = window.canvas.take() {
            warn!("{} not mounted, {:?} scene gets a detached canvas", selector, scene);
        }
    }
}

/// Mounts the scene canvases while the app is being built, after logging is
/// up and before winit creates the windows.
pub struct RenderSurfacePlugin;

impl Plugin for RenderSurfacePlugin {
    fn build(&self, app: &mut App) {
        let surfaces = mount_render_surfaces();

        let world = app.world_mut();
        let mut primary = world.query_filtered::<&mut Window, With<PrimaryWindow>>();
        for mut window in primary.iter_mut(world) {
            surfaces.bind(SceneId::Galaxy, &mut window);
        }

        app.insert_resource(surfaces);
    }
}

/// Put a canvas for each scene into its page container so the windows can
/// bind to them by selector.
#[cfg(target_arch = "wasm32")]
fn mount_render_surfaces() -> RenderSurfaces {
    use crate::page::PageElement;
    use crate::page::dom::mount_canvas;
    use constants::page::{COSMIC_CANVAS_ID, GALAXY_CANVAS_ID};

    let mount = |container: PageElement, canvas_id: &'static str| match mount_canvas(
        container, canvas_id,
    ) {
        Ok(()) => {
            info!("Mounted #{} in #{}", canvas_id, container.id());
            true
        }
        Err(e) => {
            warn!("Could not mount #{}: {}", canvas_id, e);
            false
        }
    };

    RenderSurfaces::new(
        mount(PageElement::GalaxyContainer, GALAXY_CANVAS_ID),
        mount(PageElement::CosmicContainer, COSMIC_CANVAS_ID),
    )
}

/// Native windows own their surfaces.
#[cfg(not(target_arch = "wasm32"))]
fn mount_render_surfaces() -> RenderSurfaces {
    debug!("Native build, no page containers to mount into");
    RenderSurfaces::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas_window(selector: &str) -> Window {
        Window {
            canvas: Some(selector.into()),
            ..default()
        }
    }

    #[test]
    fn mounted_scene_keeps_its_canvas() {
        let surfaces = RenderSurfaces::new(true, false);
        let mut window = canvas_window("#galaxy-canvas");

        surfaces.bind(SceneId::Galaxy, &mut window);
        assert_eq!(window.canvas.as_deref(), Some("#galaxy-canvas"));
    }

    #[test]
    fn missing_canvas_is_detached() {
        let surfaces = RenderSurfaces::new(true, false);
        let mut window = canvas_window("#cosmic-canvas");

        surfaces.bind(SceneId::Cosmic, &mut window);
        assert_eq!(window.canvas, None);
    }

    #[test]
    fn plugin_detaches_the_primary_window_without_a_page() {
        let mut app = App::new();
        app.world_mut()
            .spawn((canvas_window("#galaxy-canvas"), PrimaryWindow));
        app.add_plugins(RenderSurfacePlugin);

        let window = app
            .world_mut()
            .query_filtered::<&Window, With<PrimaryWindow>>()
            .single(app.world())
            .unwrap();
        assert_eq!(window.canvas, None);
        assert_eq!(
            *app.world().resource::<RenderSurfaces>(),
            RenderSurfaces::default()
        );
    }
}
