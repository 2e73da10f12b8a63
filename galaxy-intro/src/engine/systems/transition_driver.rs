use bevy::prelude::*;

use crate::engine::animation::transition::TransitionController;
use crate::page::{Page, PageCommand};

/// Tick the flash fade and push its output to the page.
pub fn drive_transition(
    time: Res<Time>,
    mut transition: ResMut<TransitionController>,
    mut page: ResMut<Page>,
    mut pending: Local<Vec<PageCommand>>,
) {
    if !transition.is_animating() {
        return;
    }

    transition.advance(time.delta_secs(), &mut pending);
    for command in pending.drain(..) {
        if let Err(e) = page.apply(command) {
            warn!("Page update {:?} failed: {}", command, e);
        }
    }
}
