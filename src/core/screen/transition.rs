//=========================================================================
// Screen Transition
//=========================================================================
//
// Pacing arithmetic for a screen's animated entry and exit.
//
// Each screen owns its transition: the controller never advances a
// position itself, it only reads the state a screen reports after the
// screen has ticked its own transition.
//
// Position convention:
//   1.0 = fully off screen (hidden)
//   0.0 = fully on screen (active)
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::ScreenState;

//=== Transition ==========================================================

/// Normalized transition progress with separate on/off pacing.
///
/// A freshly created transition starts fully off (position 1.0) so the
/// first updates animate the screen in. Durations are in seconds; a zero
/// duration snaps to the rail in a single step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    on_duration: f32,
    off_duration: f32,
    position: f32,
}

impl Transition {
    /// Creates a transition with the given on/off durations in seconds.
    pub fn new(on_duration: f32, off_duration: f32) -> Self {
        Self {
            on_duration,
            off_duration,
            position: 1.0,
        }
    }

    /// Creates a transition that snaps instantly in both directions.
    pub fn instant() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Current normalized position: 1.0 is fully off, 0.0 is fully on.
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Convenience for fade effects: 1.0 when fully on, 0.0 when fully off.
    pub fn alpha(&self) -> f32 {
        1.0 - self.position
    }

    //--- State Machine Step -----------------------------------------------

    /// Advances the transition for one frame and returns the resulting
    /// screen state.
    ///
    /// The screen moves toward "off" while it is exiting or covered by a
    /// non-popup screen above it, and toward "on" otherwise. The rails
    /// map to `Active` (fully on) and `Hidden` (fully off).
    pub fn advance(&mut self, dt: f32, exiting: bool, covered: bool) -> ScreenState {
        if exiting || covered {
            if self.step(dt, self.off_duration, 1.0) {
                ScreenState::TransitionOff
            } else {
                ScreenState::Hidden
            }
        } else if self.step(dt, self.on_duration, -1.0) {
            ScreenState::TransitionOn
        } else {
            ScreenState::Active
        }
    }

    // Moves the position toward one rail. Returns true while still in
    // motion, false once the rail has been reached.
    fn step(&mut self, dt: f32, duration: f32, direction: f32) -> bool {
        let delta = if duration <= 0.0 { 1.0 } else { dt / duration };

        self.position += delta * direction;

        let reached_rail = (direction < 0.0 && self.position <= 0.0)
            || (direction > 0.0 && self.position >= 1.0);

        if reached_rail {
            self.position = self.position.clamp(0.0, 1.0);
            return false;
        }

        true
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_fully_off() {
        let transition = Transition::new(0.5, 0.5);
        assert_eq!(transition.position(), 1.0);
        assert_eq!(transition.alpha(), 0.0);
    }

    #[test]
    fn instant_transition_snaps_on() {
        let mut transition = Transition::instant();
        assert_eq!(transition.advance(0.016, false, false), ScreenState::Active);
        assert_eq!(transition.position(), 0.0);
    }

    #[test]
    fn instant_transition_snaps_off_when_exiting() {
        let mut transition = Transition::instant();
        transition.advance(0.016, false, false);
        assert_eq!(transition.advance(0.016, true, false), ScreenState::Hidden);
        assert_eq!(transition.position(), 1.0);
    }

    #[test]
    fn reaches_active_after_on_duration() {
        let mut transition = Transition::new(0.5, 0.5);

        // Half way through: still transitioning on.
        assert_eq!(transition.advance(0.25, false, false), ScreenState::TransitionOn);
        assert!((transition.position() - 0.5).abs() < 1e-5);

        // Remaining half: rail reached.
        assert_eq!(transition.advance(0.25, false, false), ScreenState::Active);
        assert_eq!(transition.position(), 0.0);
    }

    #[test]
    fn coverage_pushes_toward_hidden() {
        let mut transition = Transition::new(0.0, 0.2);
        transition.advance(0.016, false, false);
        assert_eq!(transition.position(), 0.0);

        assert_eq!(transition.advance(0.1, false, true), ScreenState::TransitionOff);
        assert_eq!(transition.advance(0.1, false, true), ScreenState::Hidden);
    }

    #[test]
    fn resumes_animating_back_in_after_coverage_ends() {
        let mut transition = Transition::new(0.2, 0.0);
        transition.advance(1.0, false, false);
        transition.advance(0.016, false, true);
        assert_eq!(transition.position(), 1.0);

        // Coverage lifted: the screen animates back toward active.
        assert_eq!(transition.advance(0.1, false, false), ScreenState::TransitionOn);
        assert_eq!(transition.advance(0.1, false, false), ScreenState::Active);
    }

    #[test]
    fn active_state_is_stable_with_zero_delta() {
        let mut transition = Transition::instant();
        transition.advance(0.016, false, false);
        assert_eq!(transition.advance(0.0, false, false), ScreenState::Active);
    }

    #[test]
    fn exiting_takes_priority_over_coverage_state() {
        let mut transition = Transition::new(0.0, 0.1);
        transition.advance(0.016, false, false);

        assert_eq!(transition.advance(0.05, true, true), ScreenState::TransitionOff);
        assert_eq!(transition.advance(0.05, true, true), ScreenState::Hidden);
    }
}
