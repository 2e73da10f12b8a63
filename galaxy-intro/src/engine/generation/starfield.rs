use rand::Rng;

use super::{ParticleField, uniform};

/// `count` stars spread uniformly through the cube `[-half_width, half_width)³`,
/// all sharing one colour.
pub fn starfield<R: Rng>(
    count: usize,
    half_width: f32,
    colour: [f32; 3],
    rng: &mut R,
) -> ParticleField {
    let mut field = ParticleField::with_capacity(count);
    for _ in 0..count {
        let position = [
            uniform(rng, -half_width, half_width),
            uniform(rng, -half_width, half_width),
            uniform(rng, -half_width, half_width),
        ];
        field.push(position, colour);
    }
    field
}
