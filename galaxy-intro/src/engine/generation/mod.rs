//! Procedural point-cloud generation.
//!
//! Every generator draws independent uniform samples per particle from the
//! supplied RNG. Callers pass `rand::thread_rng()` at runtime and a seeded
//! `StdRng` in tests; the structure of each pattern is fixed, only the
//! scatter varies between page loads.

use rand::Rng;

/// Ordered positions with parallel colours.
pub mod particle_field;

/// Disk galaxy whose arms sweep further the further a star sits from the core.
pub mod spiral_galaxy;

/// Unstructured stars filling a cube.
pub mod starfield;

/// Multi-turn spiral with a fixed number of stars per arm.
pub mod arm_spiral;

pub use arm_spiral::{ArmSpiralParams, arm_spiral};
pub use particle_field::ParticleField;
pub use spiral_galaxy::{SpiralGalaxyParams, arm_index, spiral_galaxy};
pub use starfield::starfield;

/// Uniform draw in `[low, high)`. An empty range collapses to `low`.
pub(crate) fn uniform<R: Rng>(rng: &mut R, low: f32, high: f32) -> f32 {
    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}

/// Uniform draw centred on zero with total width `spread`.
pub(crate) fn centred<R: Rng>(rng: &mut R, spread: f32) -> f32 {
    uniform(rng, -spread * 0.5, spread * 0.5)
}
