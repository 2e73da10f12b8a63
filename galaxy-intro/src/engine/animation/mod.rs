//! Frame-by-frame intro state, kept free of rendering so it can be stepped in tests.
//!
//! Systems in `engine::systems` own the Bevy wiring; everything here is plain
//! data plus the functions that advance it by one frame.

/// Per-object rotation advanced by a fixed amount every frame.
pub mod spin;

/// Scripted camera approach that hands over to the flash transition.
pub mod fly_through;

/// Eased scalar animation used for overlay opacity.
pub mod tween;

/// One-shot flash and reveal state machine.
pub mod transition;
