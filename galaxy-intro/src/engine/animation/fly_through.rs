use bevy::prelude::*;
use constants::galaxy::{FLY_THROUGH_START, FLY_THROUGH_STEP, FLY_THROUGH_THRESHOLD};

use super::transition::{TransitionController, TransitionPhase};

/// Marks the camera whose distance follows [`FlyThrough`].
#[derive(Component, Debug, Default)]
pub struct FlyThroughCamera;

/// Galaxy camera distance from the origin along +Z.
///
/// Moves a fixed `step` per frame, not per second, so the approach takes
/// the same number of frames at any refresh rate.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct FlyThrough {
    pub distance: f32,
    pub step: f32,
    pub threshold: f32,
}

impl Default for FlyThrough {
    fn default() -> Self {
        Self {
            distance: FLY_THROUGH_START,
            step: FLY_THROUGH_STEP,
            threshold: FLY_THROUGH_THRESHOLD,
        }
    }
}

impl FlyThrough {
    /// Move one step closer. Returns whether the threshold has been reached.
    pub fn advance(&mut self) -> bool {
        self.distance -= self.step;
        self.has_arrived()
    }

    fn has_arrived(&self) -> bool {
        self.distance <= self.threshold
    }
}

/// One frame of the approach. Only moves while the transition is still
/// `Flying`; on the frame the threshold is crossed the flash is started.
/// Returns `true` only on that frame.
pub fn fly_through_frame(fly: &mut FlyThrough, transition: &mut TransitionController) -> bool {
    if transition.phase() != TransitionPhase::Flying {
        return false;
    }
    fly.advance() && transition.begin_flash()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_flying_until_the_hundredth_frame() {
        let mut fly = FlyThrough::default();
        let mut transition = TransitionController::default();

        for frame in 1..100 {
            assert!(!fly_through_frame(&mut fly, &mut transition), "frame {frame}");
            assert_eq!(transition.phase(), TransitionPhase::Flying);
        }
        assert_eq!(fly.distance, 5.25);

        assert!(fly_through_frame(&mut fly, &mut transition));
        assert_eq!(fly.distance, 5.0);
        assert_eq!(transition.phase(), TransitionPhase::Flashing);
    }

    #[test]
    fn triggers_exactly_once() {
        let mut fly = FlyThrough::default();
        let mut transition = TransitionController::default();

        let triggers = (0..500)
            .filter(|_| fly_through_frame(&mut fly, &mut transition))
            .count();

        assert_eq!(triggers, 1);
        // Camera stops where the flash began.
        assert_eq!(fly.distance, 5.0);
    }

    #[test]
    fn short_approach_follows_the_same_rule() {
        let start = 12.0;
        let mut fly = FlyThrough {
            distance: start,
            ..Default::default()
        };
        let mut transition = TransitionController::default();

        let mut frames = 0;
        while transition.phase() == TransitionPhase::Flying {
            frames += 1;
            let before = frames as f32 * fly.step;
            fly_through_frame(&mut fly, &mut transition);
            if before < start - fly.threshold {
                assert_eq!(transition.phase(), TransitionPhase::Flying);
            }
        }
        assert_eq!(frames, 28);
    }
}
