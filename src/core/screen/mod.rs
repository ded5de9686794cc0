//=========================================================================
// Screen System
//=========================================================================
//
// Stack-based screen lifecycle with per-screen transition state machines.
//
// Architecture:
//   ScreenManager
//     ├─ screens: HashMap<ScreenId, Box<dyn Screen>>
//     ├─ stack:   Vec<ScreenId>        (back = top, drawn last)
//     └─ pending: Vec<Box<dyn Screen>> (removed, not yet destroyed)
//
// Flow:
//   update() → per-screen Screen::update() → focus routing → commands
//   draw()   → bottom-to-top Screen::draw() for non-hidden screens
//
//=========================================================================

//=== External Dependencies ===============================================

use crate::core::input::InputSnapshot;
use crate::core::render::RenderTarget;

//=== Module Declarations =================================================

mod context;
mod error;
mod screen_manager;
mod transition;

//=== Public API ==========================================================

pub use context::{CommandQueue, ScreenContext, StackCommand};
pub use error::{Result, StackError};
pub use screen_manager::ScreenManager;
pub use transition::Transition;

//=== ScreenState =========================================================

/// Lifecycle state a screen reports after ticking its own transition.
///
/// The manager never writes this state; it only reads it to decide input
/// routing and draw skipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenState {
    /// Animating in. Receives input if nothing above it already has focus.
    TransitionOn,

    /// Fully on screen. Receives input if nothing above it already has focus.
    Active,

    /// Animating out. Drawn, never given input.
    TransitionOff,

    /// Fully transitioned out or deliberately suppressed. Still updated
    /// every frame (so it can animate back in later) but never drawn and
    /// never given input.
    Hidden,
}

//=== PlayerIndex =========================================================

/// Identifies one of up to four local input sources.
///
/// A screen with `controlling_player == None` responds to any source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerIndex {
    One,
    Two,
    Three,
    Four,
}

//=== ScreenId ============================================================

/// Stable handle for a screen held by a [`ScreenManager`].
///
/// Ids are assigned monotonically and never reused, so a stale handle
/// after removal simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenId(pub(crate) u64);

//=== Screen Trait ========================================================

/// Capability contract every presentable screen implements.
///
/// The manager decides *whether* a screen gets a turn, gets input, and
/// when it is loaded, unloaded or destroyed. What a screen renders and
/// how it interprets input is entirely its own business.
///
/// Screens mutate the stack through the [`ScreenContext`] handed to
/// `update` and `handle_input`; those mutations are buffered and applied
/// once the frame's iteration has finished.
///
/// # Minimal Implementation
///
/// Only `update` plus the state accessors are required. A typical screen
/// embeds a [`ScreenBase`] and delegates the accessors to it:
///
/// ```
/// use limelight::core::screen::{Screen, ScreenBase, ScreenContext, ScreenState, Transition};
/// use limelight::core::screen::PlayerIndex;
///
/// struct MenuScreen {
///     base: ScreenBase,
/// }
///
/// impl MenuScreen {
///     fn new() -> Self {
///         Self { base: ScreenBase::new(Transition::new(0.3, 0.2)) }
///     }
/// }
///
/// impl Screen for MenuScreen {
///     fn update(&mut self, dt: f32, _ctx: &mut ScreenContext, _other_focus: bool, covered: bool) {
///         self.base.update_transition(dt, covered);
///     }
///
///     fn state(&self) -> ScreenState { self.base.state() }
///     fn is_exiting(&self) -> bool { self.base.is_exiting() }
///     fn set_exiting(&mut self, exiting: bool) { self.base.set_exiting(exiting) }
///     fn controlling_player(&self) -> Option<PlayerIndex> { self.base.controlling_player() }
///     fn set_controlling_player(&mut self, player: Option<PlayerIndex>) {
///         self.base.set_controlling_player(player)
///     }
/// }
/// ```
pub trait Screen: Send {
    /// Called when the screen should acquire its resources: immediately
    /// on add if the manager is initialized, otherwise when the manager
    /// initializes.
    fn load(&mut self) {}

    /// Called when the screen should release its resources, either on
    /// removal or when the manager tears down.
    fn unload(&mut self) {}

    /// Called every frame while the screen is on the stack, hidden or not.
    ///
    /// `other_screen_has_focus` is true when something above this screen
    /// (or outside the process) already owns input this frame.
    /// `covered_by_other_screen` is true when a non-popup screen higher
    /// in the stack is live; screens typically transition off while
    /// covered.
    fn update(
        &mut self,
        dt: f32,
        ctx: &mut ScreenContext,
        other_screen_has_focus: bool,
        covered_by_other_screen: bool,
    );

    /// Called at most once per frame, only on the topmost screen that is
    /// `TransitionOn` or `Active` while the host window owns OS focus.
    fn handle_input(&mut self, _input: &InputSnapshot, _ctx: &mut ScreenContext) {}

    /// Called every frame unless the screen is `Hidden`, bottom-to-top.
    fn draw(&mut self, _target: &mut dyn RenderTarget, _dt: f32) {}

    /// The state reached by this screen's own transition logic.
    fn state(&self) -> ScreenState;

    /// Popups do not count as covering the screens beneath them.
    fn is_popup(&self) -> bool {
        false
    }

    /// Whether removal has been requested; once the off-transition also
    /// completes (state `Hidden`) the manager retires the screen.
    fn is_exiting(&self) -> bool;

    fn set_exiting(&mut self, exiting: bool);

    /// Which input source this screen responds to; `None` means any.
    fn controlling_player(&self) -> Option<PlayerIndex>;

    fn set_controlling_player(&mut self, player: Option<PlayerIndex>);

    /// Short label used by the diagnostic trace.
    fn name(&self) -> &str {
        std::any::type_name::<Self>().rsplit("::").next().unwrap_or("screen")
    }
}

//=== ScreenBase ==========================================================

/// Storage for the per-screen state machine that most screens share.
///
/// Embedding this and delegating the [`Screen`] accessors to it gives a
/// screen the standard transition behavior; screens with bespoke state
/// machines can skip it and drive [`ScreenState`] however they like.
#[derive(Debug, Clone)]
pub struct ScreenBase {
    state: ScreenState,
    transition: Transition,
    popup: bool,
    exiting: bool,
    controlling_player: Option<PlayerIndex>,
}

impl ScreenBase {
    /// Creates a full-screen (non-popup) base with the given transition.
    pub fn new(transition: Transition) -> Self {
        Self {
            state: ScreenState::TransitionOn,
            transition,
            popup: false,
            exiting: false,
            controlling_player: None,
        }
    }

    /// Creates a popup base: the screen will not count as covering
    /// whatever is beneath it.
    pub fn popup(transition: Transition) -> Self {
        let mut base = Self::new(transition);
        base.popup = true;
        base
    }

    //--- Frame Step -------------------------------------------------------

    /// Ticks the transition and stores the resulting state. Call this
    /// from `Screen::update`.
    pub fn update_transition(&mut self, dt: f32, covered_by_other_screen: bool) {
        self.state = self.transition.advance(dt, self.exiting, covered_by_other_screen);
    }

    //--- Accessors --------------------------------------------------------

    pub fn state(&self) -> ScreenState {
        self.state
    }

    /// Overrides the stored state directly, for screens that do not use
    /// the standard transition arithmetic.
    pub fn set_state(&mut self, state: ScreenState) {
        self.state = state;
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Fade factor for rendering: 1.0 fully on, 0.0 fully off.
    pub fn transition_alpha(&self) -> f32 {
        self.transition.alpha()
    }

    pub fn is_popup(&self) -> bool {
        self.popup
    }

    pub fn is_exiting(&self) -> bool {
        self.exiting
    }

    pub fn set_exiting(&mut self, exiting: bool) {
        self.exiting = exiting;
    }

    pub fn controlling_player(&self) -> Option<PlayerIndex> {
        self.controlling_player
    }

    pub fn set_controlling_player(&mut self, player: Option<PlayerIndex>) {
        self.controlling_player = player;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_starts_transitioning_on() {
        let base = ScreenBase::new(Transition::instant());
        assert_eq!(base.state(), ScreenState::TransitionOn);
        assert!(!base.is_popup());
        assert!(!base.is_exiting());
        assert_eq!(base.controlling_player(), None);
    }

    #[test]
    fn popup_base_reports_popup() {
        let base = ScreenBase::popup(Transition::instant());
        assert!(base.is_popup());
    }

    #[test]
    fn update_transition_reaches_active() {
        let mut base = ScreenBase::new(Transition::instant());
        base.update_transition(0.016, false);
        assert_eq!(base.state(), ScreenState::Active);
        assert_eq!(base.transition_alpha(), 1.0);
    }

    #[test]
    fn exiting_base_transitions_off() {
        let mut base = ScreenBase::new(Transition::instant());
        base.update_transition(0.016, false);

        base.set_exiting(true);
        base.update_transition(0.016, false);
        assert_eq!(base.state(), ScreenState::Hidden);
    }

    #[test]
    fn screen_ids_compare_by_value() {
        assert_eq!(ScreenId(3), ScreenId(3));
        assert_ne!(ScreenId(3), ScreenId(4));
    }
}
