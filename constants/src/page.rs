/// Container the intro galaxy canvas is mounted into
pub const GALAXY_CONTAINER_ID: &str = "galaxy-container";

/// Container the cosmic backdrop canvas is mounted into
pub const COSMIC_CONTAINER_ID: &str = "cosmic-3d";

/// Full-screen white overlay faded in and out by the transition
pub const FLASH_ID: &str = "flash";

/// Page content revealed once the flash peaks
pub const CONTENT_ID: &str = "content";

/// Canvas ids created inside the containers, also used as Bevy canvas selectors
pub const GALAXY_CANVAS_ID: &str = "galaxy-canvas";
pub const COSMIC_CANVAS_ID: &str = "cosmic-canvas";

/// Duration of each half of the flash, in seconds
pub const FLASH_FADE_SECONDS: f32 = 0.5;
