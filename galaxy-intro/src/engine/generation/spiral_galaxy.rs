use std::f32::consts::TAU;

use constants::galaxy::{
    GALAXY_ANGLE_JITTER, GALAXY_ARMS, GALAXY_HEIGHT_SPREAD, GALAXY_RADIUS, GALAXY_SPIN,
    GALAXY_STARS, GALAXY_SWEEP_PER_UNIT_RADIUS,
};
use rand::Rng;

use super::{ParticleField, centred, uniform};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralGalaxyParams {
    pub count: usize,
    pub arm_count: usize,
    /// Larger values wind the arms tighter
    pub spin: f32,
    pub radius_max: f32,
    pub height_spread: f32,
}

impl Default for SpiralGalaxyParams {
    fn default() -> Self {
        Self {
            count: GALAXY_STARS,
            arm_count: GALAXY_ARMS,
            spin: GALAXY_SPIN,
            radius_max: GALAXY_RADIUS,
            height_spread: GALAXY_HEIGHT_SPREAD,
        }
    }
}

/// Arm a particle belongs to. Particles are split into contiguous runs of
/// `count / arm_count`, so the result never decreases as `index` grows.
pub fn arm_index(index: usize, count: usize, arm_count: usize) -> usize {
    if count == 0 || arm_count == 0 {
        return 0;
    }
    let per_arm = count as f64 / arm_count as f64;
    ((index as f64 / per_arm).floor() as usize).min(arm_count - 1)
}

/// Flat disk of stars with `arm_count` spiral arms and a warm/blue-white palette.
pub fn spiral_galaxy<R: Rng>(params: &SpiralGalaxyParams, rng: &mut R) -> ParticleField {
    if params.arm_count == 0 {
        return ParticleField::default();
    }

    let arm_angle = TAU / params.arm_count as f32;
    let mut field = ParticleField::with_capacity(params.count);

    for i in 0..params.count {
        let arm = arm_index(i, params.count, params.arm_count);
        let radius = uniform(rng, 0.0, params.radius_max);
        let angle = arm_angle * arm as f32
            + uniform(rng, 0.0, GALAXY_ANGLE_JITTER)
            + radius * GALAXY_SWEEP_PER_UNIT_RADIUS * params.spin;

        let position = [
            angle.cos() * radius,
            centred(rng, params.height_spread),
            angle.sin() * radius,
        ];
        let colour = [
            uniform(rng, 0.7, 1.0),
            uniform(rng, 0.7, 1.0),
            uniform(rng, 0.9, 1.0),
        ];
        field.push(position, colour);
    }

    field
}
