//! Particle material: billboarded, additive, with vertex or solid colour.

/// Material and shader uniform shared by every particle object.
pub mod particle_material;
