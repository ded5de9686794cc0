//=========================================================================
// Input Snapshot
//=========================================================================
//
// A single per-frame capture of raw input state.
//
// The host's input source maintains one snapshot across frames, feeds it
// the events that arrived since the last tick, and hands a copy to the
// screen manager. The manager routes the capture by reference to at most
// one focused screen per frame.
//
// Frame lifecycle on the host side:
//   begin_frame() → apply(events) → clone into refresh() result
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, Modifiers, MouseButton};

//=== InputSnapshot =======================================================

/// Keyboard and mouse state for one frame.
///
/// Tracks persistent state (keys and buttons currently held, cursor
/// position, modifiers) and per-frame deltas (keys and buttons that went
/// down this frame).
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    //--- Persistent State (survives frame boundary) ----------------------
    keys_down: HashSet<KeyCode>,
    buttons_down: HashSet<MouseButton>,
    mouse_position: (f32, f32),
    modifiers: Modifiers,

    //--- Frame Deltas (reset by begin_frame) -----------------------------
    keys_pressed: HashSet<KeyCode>,
    buttons_pressed: HashSet<MouseButton>,
}

impl InputSnapshot {
    /// Creates an empty snapshot with nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Frame Processing -------------------------------------------------

    /// Clears the per-frame deltas. Call once at the start of each frame,
    /// before applying the frame's events.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.buttons_pressed.clear();
    }

    /// Folds a batch of events into the snapshot.
    ///
    /// Duplicate presses and spurious releases are ignored, so a press
    /// only counts as "pressed this frame" on the actual transition.
    pub fn apply(&mut self, events: &[InputEvent]) {
        for event in events {
            match *event {
                InputEvent::KeyDown { key, modifiers } => {
                    self.modifiers = modifiers;
                    if self.keys_down.insert(key) {
                        self.keys_pressed.insert(key);
                    }
                }

                InputEvent::KeyUp { key, modifiers } => {
                    self.modifiers = modifiers;
                    self.keys_down.remove(&key);
                }

                InputEvent::MouseButtonDown { button, modifiers } => {
                    self.modifiers = modifiers;
                    if self.buttons_down.insert(button) {
                        self.buttons_pressed.insert(button);
                    }
                }

                InputEvent::MouseButtonUp { button, modifiers } => {
                    self.modifiers = modifiers;
                    self.buttons_down.remove(&button);
                }

                InputEvent::MouseMoved { x, y } => {
                    self.mouse_position = (x, y);
                }

                InputEvent::Unidentified => {
                    // Ignore unrecognized events
                }
            }
        }
    }

    //=====================================================================
    // Query API - Keyboard
    //=====================================================================

    /// Returns `true` if the key transitioned UP → DOWN this frame.
    ///
    /// Use for discrete actions like confirming a menu entry.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Returns `true` while the key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    //=====================================================================
    // Query API - Mouse
    //=====================================================================

    /// Like [`is_key_pressed`](Self::is_key_pressed) but for mouse buttons.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    /// Like [`is_key_down`](Self::is_key_down) but for mouse buttons.
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    /// Cursor position in screen coordinates (pixels, top-left origin).
    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse_position
    }

    //=====================================================================
    // Query API - Modifiers
    //=====================================================================

    /// The modifier state carried by the most recent discrete event.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
