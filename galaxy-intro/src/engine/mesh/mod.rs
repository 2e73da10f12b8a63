//! Mesh generation for particle rendering.
//!
//! WebGPU has no point size, so each particle is drawn as a small quad that
//! the vertex shader turns to face the camera.

/// Quad-per-particle mesh built from a [`ParticleField`](crate::engine::generation::ParticleField).
pub mod particle_mesh;
