use bevy::prelude::*;
use constants::page::FLASH_FADE_SECONDS;

use super::tween::Tween;
use crate::page::{PageCommand, PageElement};

/// Where the intro is. Only ever moves forward.
///
/// Also registered as a Bevy state, mirrored from [`TransitionController`]
/// so systems can hook `OnEnter` and run conditions.
#[derive(States, Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TransitionPhase {
    #[default]
    Flying,
    Flashing,
    Revealed,
}

impl TransitionPhase {
    pub fn label(self) -> &'static str {
        match self {
            TransitionPhase::Flying => "flying",
            TransitionPhase::Flashing => "flashing",
            TransitionPhase::Revealed => "revealed",
        }
    }

    /// Following phase, `None` once revealed.
    pub fn next(self) -> Option<Self> {
        match self {
            TransitionPhase::Flying => Some(TransitionPhase::Flashing),
            TransitionPhase::Flashing => Some(TransitionPhase::Revealed),
            TransitionPhase::Revealed => None,
        }
    }
}

/// Drives the flash overlay and content reveal.
///
/// `Flying -> Flashing` fades the flash in; once it is opaque the galaxy
/// container is hidden, the content shown, and the flash faded back out
/// (`Flashing -> Revealed`). Each edge is guarded by the current phase.
#[derive(Resource, Debug, Clone)]
pub struct TransitionController {
    phase: TransitionPhase,
    flash: Option<Tween>,
    fade_seconds: f32,
}

impl Default for TransitionController {
    fn default() -> Self {
        Self::new(FLASH_FADE_SECONDS)
    }
}

impl TransitionController {
    pub fn new(fade_seconds: f32) -> Self {
        Self {
            phase: TransitionPhase::Flying,
            flash: None,
            fade_seconds,
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// Whether a flash fade is running.
    pub fn is_animating(&self) -> bool {
        self.flash.is_some()
    }

    /// Start fading the flash in. No effect unless still flying.
    pub fn begin_flash(&mut self) -> bool {
        if self.phase != TransitionPhase::Flying {
            return false;
        }
        self.phase = TransitionPhase::Flashing;
        self.flash = Some(Tween::new(0.0, 1.0, self.fade_seconds));
        true
    }

    /// Swap the galaxy for the page content and start fading the flash out.
    /// Called when the fade-in completes; no effect outside `Flashing`.
    pub fn finish_flash(&mut self, commands: &mut Vec<PageCommand>) -> bool {
        if self.phase != TransitionPhase::Flashing {
            return false;
        }
        self.phase = TransitionPhase::Revealed;
        commands.push(PageCommand::Hide(PageElement::GalaxyContainer));
        commands.push(PageCommand::SetOpacity {
            element: PageElement::Content,
            opacity: 1.0,
        });
        self.flash = Some(Tween::new(1.0, 0.0, self.fade_seconds));
        true
    }

    /// Advance the running fade by `dt` seconds, pushing the page updates it produces.
    pub fn advance(&mut self, dt: f32, commands: &mut Vec<PageCommand>) {
        let Some(tween) = self.flash.as_mut() else {
            return;
        };

        let opacity = tween.advance(dt);
        let finished = tween.is_finished();
        commands.push(PageCommand::SetOpacity {
            element: PageElement::Flash,
            opacity,
        });

        if finished {
            self.flash = None;
            self.finish_flash(commands);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flash_opacity(commands: &[PageCommand]) -> Option<f32> {
        commands.iter().rev().find_map(|c| match c {
            PageCommand::SetOpacity {
                element: PageElement::Flash,
                opacity,
            } => Some(*opacity),
            _ => None,
        })
    }

    #[test]
    fn full_sequence_reveals_content() {
        let mut controller = TransitionController::new(0.5);
        let mut commands = Vec::new();

        assert!(controller.begin_flash());
        assert_eq!(controller.phase(), TransitionPhase::Flashing);

        controller.advance(0.25, &mut commands);
        assert_eq!(controller.phase(), TransitionPhase::Flashing);
        assert!((flash_opacity(&commands).unwrap() - 0.75).abs() < 1e-6);

        commands.clear();
        controller.advance(0.25, &mut commands);
        assert_eq!(controller.phase(), TransitionPhase::Revealed);
        assert_eq!(
            commands,
            vec![
                PageCommand::SetOpacity {
                    element: PageElement::Flash,
                    opacity: 1.0
                },
                PageCommand::Hide(PageElement::GalaxyContainer),
                PageCommand::SetOpacity {
                    element: PageElement::Content,
                    opacity: 1.0
                },
            ]
        );

        commands.clear();
        controller.advance(0.5, &mut commands);
        assert_eq!(flash_opacity(&commands), Some(0.0));
        assert!(!controller.is_animating());

        commands.clear();
        controller.advance(0.5, &mut commands);
        assert!(commands.is_empty());
    }

    #[test]
    fn double_begin_starts_one_fade() {
        let mut controller = TransitionController::default();
        assert!(controller.begin_flash());
        let mut commands = Vec::new();
        controller.advance(0.1, &mut commands);

        assert!(!controller.begin_flash());
        // The running fade was not restarted.
        commands.clear();
        controller.advance(0.0, &mut commands);
        assert!(flash_opacity(&commands).unwrap() > 0.0);
    }

    #[test]
    fn double_completion_hides_and_reveals_once() {
        let mut controller = TransitionController::default();
        controller.begin_flash();

        let mut commands = Vec::new();
        assert!(controller.finish_flash(&mut commands));
        assert!(!controller.finish_flash(&mut commands));

        let hides = commands
            .iter()
            .filter(|c| matches!(c, PageCommand::Hide(_)))
            .count();
        assert_eq!(hides, 1);
        assert_eq!(commands.len(), 2);
        assert_eq!(controller.phase(), TransitionPhase::Revealed);
    }

    #[test]
    fn completion_before_flash_is_ignored() {
        let mut controller = TransitionController::default();
        let mut commands = Vec::new();
        assert!(!controller.finish_flash(&mut commands));
        assert!(commands.is_empty());
        assert_eq!(controller.phase(), TransitionPhase::Flying);
    }

    #[test]
    fn phases_only_move_forward() {
        assert_eq!(TransitionPhase::Flying.next(), Some(TransitionPhase::Flashing));
        assert_eq!(TransitionPhase::Flashing.next(), Some(TransitionPhase::Revealed));
        assert_eq!(TransitionPhase::Revealed.next(), None);
        assert!(TransitionPhase::Flying < TransitionPhase::Revealed);
    }
}
