/// Appearance of one point-cloud object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleStyle {
    /// Billboard edge length in world units
    pub size: f32,
    pub opacity: f32,
    /// Use the per-particle colours instead of `tint`
    pub vertex_colours: bool,
    pub tint: [f32; 3],
}

pub const GALAXY_STYLE: ParticleStyle = ParticleStyle {
    size: 0.1,
    opacity: 0.8,
    vertex_colours: true,
    tint: [1.0, 1.0, 1.0],
};

pub const STARFIELD_STYLE: ParticleStyle = ParticleStyle {
    size: 0.2,
    opacity: 0.8,
    vertex_colours: false,
    tint: [1.0, 1.0, 1.0],
};

pub const COSMIC_SPIRAL_STYLE: ParticleStyle = ParticleStyle {
    size: 0.5,
    opacity: 0.6,
    vertex_colours: false,
    tint: crate::cosmic::SPIRAL_COLOUR,
};

/// Vertical field of view of both scene cameras, in degrees
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// Render layer for each scene; cameras only see their own layer
pub const GALAXY_LAYER: usize = 0;
pub const COSMIC_LAYER: usize = 1;

/// Interval between frame rate notifications to the host page
pub const FPS_NOTIFY_SECONDS: f32 = 0.5;
