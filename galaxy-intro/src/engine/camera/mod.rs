//! Perspective cameras for the two scenes.

/// Camera spawning and projection fitting.
pub mod scene_camera;
