use bevy::prelude::*;
use bevy::window::PresentMode;
#[cfg(target_arch = "wasm32")]
use constants::page::{COSMIC_CANVAS_ID, GALAXY_CANVAS_ID};

/// Primary window, used by the galaxy intro.
pub fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        canvas_window("Galaxy", GALAXY_CANVAS_ID)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "Galaxy".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

/// Secondary window for the cosmic backdrop.
pub fn create_cosmic_window() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        canvas_window("Cosmic", COSMIC_CANVAS_ID)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "Cosmic".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

/// Window drawn into an existing page canvas, sized by its container and
/// composited over the page.
#[cfg(target_arch = "wasm32")]
fn canvas_window(title: &str, canvas_id: &str) -> Window {
    Window {
        title: title.into(),
        canvas: Some(format!("#{canvas_id}")),
        fit_canvas_to_parent: true,
        prevent_default_event_handling: false,
        transparent: true,
        present_mode: PresentMode::AutoVsync,
        ..default()
    }
}
