//=========================================================================
// Input Capture
//=========================================================================
//
// Per-frame input capture consumed by the screen manager.
//
// Raw device polling lives entirely on the host side, behind the
// `InputSource` contract: once per update the manager asks the source to
// refresh, receives a snapshot, and routes it to at most one focused
// screen.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;
mod snapshot;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode, Modifiers, MouseButton};
pub use snapshot::InputSnapshot;

//=== InputSource Trait ===================================================

/// Produces the frame's input capture.
///
/// Called exactly once per `ScreenManager::update`. A typical host
/// implementation keeps an [`InputSnapshot`] alive across frames, calls
/// `begin_frame`, folds in the platform events that arrived since the
/// last tick, and returns a copy:
///
/// ```
/// use limelight::core::input::{InputEvent, InputSnapshot, InputSource};
///
/// struct BufferedInput {
///     snapshot: InputSnapshot,
///     queued: Vec<InputEvent>,
/// }
///
/// impl InputSource for BufferedInput {
///     fn refresh(&mut self) -> InputSnapshot {
///         self.snapshot.begin_frame();
///         self.snapshot.apply(&self.queued);
///         self.queued.clear();
///         self.snapshot.clone()
///     }
/// }
/// ```
pub trait InputSource: Send {
    /// Captures the input state for the coming frame.
    fn refresh(&mut self) -> InputSnapshot;
}
