use bevy::math::curve::{Curve, EaseFunction, EasingCurve};

/// Animates a value from `from` to `to` over `duration` seconds, easing
/// out quadratically.
#[derive(Debug, Clone)]
pub struct Tween {
    curve: EasingCurve<f32>,
    to: f32,
    duration: f32,
    elapsed: f32,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            curve: EasingCurve::new(from, to, EaseFunction::QuadraticOut),
            to,
            duration,
            elapsed: 0.0,
        }
    }

    /// Add `dt` seconds and return the new value.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed += dt.max(0.0);
        self.value()
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        self.curve.sample_clamped(self.progress())
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }
}
