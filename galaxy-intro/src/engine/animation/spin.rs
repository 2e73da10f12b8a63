use bevy::prelude::*;

/// Rotation of a particle object, advanced by `rate` radians per frame.
///
/// Angles accumulate without wrapping; the rotation built from them is periodic.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ParticleSpin {
    pub rate: Vec3,
    pub angles: Vec3,
}

impl ParticleSpin {
    pub fn new(rate: Vec3) -> Self {
        Self {
            rate,
            angles: Vec3::ZERO,
        }
    }

    /// Step one frame and return the resulting rotation.
    pub fn advance(&mut self) -> Quat {
        self.angles += self.rate;
        self.rotation()
    }

    fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.angles.x, self.angles.y, self.angles.z)
    }
}
