use bevy::math::Vec3;

/// Backdrop star count
pub const STARFIELD_STARS: usize = 5_000;

/// Half width of the cube the backdrop stars fill
pub const STARFIELD_HALF_WIDTH: f32 = 1_000.0;

/// Backdrop star colour (linear-ish RGB, 0..1)
pub const STARFIELD_COLOUR: [f32; 3] = [1.0, 1.0, 1.0];

/// Per-frame rotation of the starfield (radians about X, Y, Z)
pub const STARFIELD_SPIN_RATE: Vec3 = Vec3::new(0.0001, 0.0002, 0.0);

/// Arm count of the backdrop spiral
pub const SPIRAL_ARMS: usize = 3;

/// Stars placed along each backdrop arm
pub const SPIRAL_STARS_PER_ARM: usize = 500;

/// Inner radius of the backdrop spiral
pub const SPIRAL_RADIUS_MIN: f32 = 50.0;

/// Radial extent added on top of the inner radius
pub const SPIRAL_RADIUS_MAX: f32 = 300.0;

/// Total vertical thickness of the backdrop spiral
pub const SPIRAL_HEIGHT_SPREAD: f32 = 40.0;

/// Purple tint, #7e22ce
pub const SPIRAL_COLOUR: [f32; 3] = [126.0 / 255.0, 34.0 / 255.0, 206.0 / 255.0];

/// Per-frame rotation of the backdrop spiral
pub const SPIRAL_SPIN_RATE: Vec3 = Vec3::new(0.0, 0.001, 0.0);

/// Backdrop camera distance along +Z
pub const COSMIC_CAMERA_DISTANCE: f32 = 200.0;
