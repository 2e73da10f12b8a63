//! Core application setup and state management.
//!
//! Handles application construction, window configuration, and the intro
//! phase state for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the app with the particle material, both scenes, and the intro
/// animation systems.
pub mod app_setup;

/// Intro phase state mirroring and the systems hooked to phase changes.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Binds each scene window to its page canvas on web targets.
pub mod window_config;
