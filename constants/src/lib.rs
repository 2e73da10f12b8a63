//! Shared tuning values for the galaxy intro.

pub mod cosmic;
pub mod galaxy;
pub mod page;
pub mod render_settings;
