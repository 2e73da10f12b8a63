use bevy::prelude::*;

use crate::engine::animation::fly_through::{FlyThrough, FlyThroughCamera, fly_through_frame};
use crate::engine::animation::spin::ParticleSpin;
use crate::engine::animation::transition::{TransitionController, TransitionPhase};

/// Rotate every particle object by its per-frame rate.
pub fn spin_particle_fields(mut fields: Query<(&mut ParticleSpin, &mut Transform)>) {
    for (mut spin, mut transform) in &mut fields {
        transform.rotation = spin.advance();
    }
}

/// Move the galaxy camera towards the core until the flash starts.
pub fn advance_fly_through(
    mut fly_through: ResMut<FlyThrough>,
    mut transition: ResMut<TransitionController>,
    mut cameras: Query<&mut Transform, With<FlyThroughCamera>>,
) {
    if transition.phase() != TransitionPhase::Flying {
        return;
    }

    if fly_through_frame(&mut fly_through, &mut transition) {
        info!(
            "Fly-through reached {:.2}, starting flash",
            fly_through.distance
        );
    }

    for mut transform in &mut cameras {
        transform.translation.z = fly_through.distance;
    }
}
