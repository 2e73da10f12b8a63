use bevy::prelude::*;

use crate::engine::animation::transition::{TransitionController, TransitionPhase};
use crate::engine::scene::scene_id::SceneId;
use crate::rpc::web_rpc::WebRpcInterface;

/// Step the Bevy state one phase towards the controller's phase, so every
/// `OnEnter` runs even if the controller moved twice in one frame.
pub fn sync_transition_phase(
    controller: Res<TransitionController>,
    state: Res<State<TransitionPhase>>,
    mut next_state: ResMut<NextState<TransitionPhase>>,
) {
    let current = *state.get();
    if current < controller.phase() {
        if let Some(next) = current.next() {
            next_state.set(next);
        }
    }
}

pub fn notify_phase_change(
    state: Res<State<TransitionPhase>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let phase = state.get().label();
    info!("→ Intro phase: {}", phase);
    rpc_interface.send_notification("intro_phase", serde_json::json!({ "phase": phase }));
}

/// Stop rendering the galaxy once it is covered by page content.
pub fn retire_galaxy_scene(
    mut cameras: Query<(&mut Camera, &SceneId)>,
    #[cfg(not(target_arch = "wasm32"))] mut windows: Query<(&mut Window, &SceneId)>,
) {
    for (mut camera, scene) in &mut cameras {
        if *scene == SceneId::Galaxy {
            camera.is_active = false;
        }
    }

    // In the browser the container is hidden by the page itself.
    #[cfg(not(target_arch = "wasm32"))]
    for (mut window, scene) in &mut windows {
        if *scene == SceneId::Galaxy {
            window.visible = false;
        }
    }

    info!("Galaxy scene retired, cosmic backdrop continues");
}
