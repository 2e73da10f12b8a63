//! Per-frame systems for the intro.
//!
//! Systems run chained in `Update`: spin, fly-through, transition fade, so a
//! fade completing is always seen by the next frame's animation step.

/// Particle rotation and the galaxy fly-through.
pub mod animation_driver;

/// Flash fade ticking and page updates.
pub mod transition_driver;

/// Keeps both scene cameras and windows matched to the viewport.
pub mod resize;

/// FPS notifications to the host page.
pub mod fps_tracking;
