use std::f32::consts::{PI, TAU};

use constants::cosmic::{
    SPIRAL_ARMS, SPIRAL_HEIGHT_SPREAD, SPIRAL_RADIUS_MAX, SPIRAL_RADIUS_MIN, SPIRAL_STARS_PER_ARM,
};
use rand::Rng;

use super::{ParticleField, centred, uniform};

/// Angle swept by each arm from its first star to its last: two full turns.
const ARM_SWEEP: f32 = 4.0 * PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmSpiralParams {
    pub arm_count: usize,
    pub particles_per_arm: usize,
    pub radius_min: f32,
    /// Radial extent beyond `radius_min`
    pub radius_max: f32,
    pub height_spread: f32,
}

impl Default for ArmSpiralParams {
    fn default() -> Self {
        Self {
            arm_count: SPIRAL_ARMS,
            particles_per_arm: SPIRAL_STARS_PER_ARM,
            radius_min: SPIRAL_RADIUS_MIN,
            radius_max: SPIRAL_RADIUS_MAX,
            height_spread: SPIRAL_HEIGHT_SPREAD,
        }
    }
}

impl ArmSpiralParams {
    pub fn count(&self) -> usize {
        self.arm_count * self.particles_per_arm
    }
}

/// Dense spiral where stars advance along their arm by index, tinted with a single colour.
pub fn arm_spiral<R: Rng>(params: &ArmSpiralParams, colour: [f32; 3], rng: &mut R) -> ParticleField {
    let mut field = ParticleField::with_capacity(params.count());

    for arm in 0..params.arm_count {
        let base_angle = (arm as f32 / params.arm_count as f32) * TAU;
        for j in 0..params.particles_per_arm {
            let radius = uniform(rng, params.radius_min, params.radius_min + params.radius_max);
            let angle = base_angle + (j as f32 / params.particles_per_arm as f32) * ARM_SWEEP;
            let position = [
                angle.cos() * radius,
                centred(rng, params.height_spread),
                angle.sin() * radius,
            ];
            field.push(position, colour);
        }
    }

    field
}
