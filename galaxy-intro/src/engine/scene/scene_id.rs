use bevy::prelude::*;
use bevy::render::view::RenderLayers;
use constants::render_settings::{COSMIC_LAYER, GALAXY_LAYER};

/// Tags the windows, cameras and particle objects of one scene.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    /// Spiral galaxy the camera flies into
    Galaxy,
    /// Starfield and purple spiral behind the page content
    Cosmic,
}

impl SceneId {
    pub fn render_layers(self) -> RenderLayers {
        match self {
            SceneId::Galaxy => RenderLayers::layer(GALAXY_LAYER),
            SceneId::Cosmic => RenderLayers::layer(COSMIC_LAYER),
        }
    }

    pub fn camera_order(self) -> isize {
        match self {
            SceneId::Galaxy => 0,
            SceneId::Cosmic => 1,
        }
    }
}
