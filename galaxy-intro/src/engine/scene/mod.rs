//! Construction of the two independent scenes.
//!
//! The galaxy intro renders into the primary window, the cosmic backdrop into
//! a second window. In the browser each window is a canvas mounted inside its
//! page container.

/// Which scene an entity belongs to.
pub mod scene_id;

/// Startup system spawning windows, cameras and particle objects.
pub mod scene_builder;

/// Canvas creation inside the page containers, and window binding to them.
pub mod surfaces;
