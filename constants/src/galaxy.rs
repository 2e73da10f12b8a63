use bevy::math::Vec3;

/// Number of stars in the intro galaxy
pub const GALAXY_STARS: usize = 15_000;

/// Spiral arm count for the intro galaxy
pub const GALAXY_ARMS: usize = 7;

/// How far outer stars are swept along their arm
pub const GALAXY_SPIN: f32 = 5.0;

/// Disk radius (exclusive upper bound)
pub const GALAXY_RADIUS: f32 = 50.0;

/// Total vertical thickness of the disk
pub const GALAXY_HEIGHT_SPREAD: f32 = 10.0;

/// Random angular offset added to every star, upper bound
pub const GALAXY_ANGLE_JITTER: f32 = 0.2;

/// Radius to angle coupling, multiplied by the spin
pub const GALAXY_SWEEP_PER_UNIT_RADIUS: f32 = 0.05;

/// Per-frame rotation of the galaxy (radians about X, Y, Z)
pub const GALAXY_SPIN_RATE: Vec3 = Vec3::new(0.0, 0.001, 0.0);

/// Camera distance along +Z at startup
pub const FLY_THROUGH_START: f32 = 30.0;

/// Distance travelled by the camera each frame
pub const FLY_THROUGH_STEP: f32 = 0.25;

/// Distance at or below which the flash transition starts
pub const FLY_THROUGH_THRESHOLD: f32 = 5.0;
