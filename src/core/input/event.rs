//=========================================================================
// Input Event Types
//=========================================================================
//
// Internal representation of low-level input events.
//
// The host converts whatever its platform layer reports (Winit, SDL,
// a test script) into these types before feeding an input snapshot.
// The presentation core itself never talks to an input device.
//
// Responsibilities:
// - Represent keyboard and mouse inputs in a stable, portable way
// - Support modifier key combinations (Shift, Ctrl, Alt)
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// The `Other` variant covers side buttons, macro buttons, and any
/// non-standard inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced, so
/// `KeyA` is the same key on QWERTY and AZERTY layouts. Additional keys
/// can be added as needed without breaking existing code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Fallback for keys not explicitly mapped by the host.
    Unidentified,
}

//=== Modifiers ===========================================================

/// Modifier key state (Shift, Ctrl, Alt).
///
/// Left and right variants are not distinguished; Ctrl maps to Command
/// and Alt to Option on macOS hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self { shift: false, ctrl: false, alt: false };

    /// Shift only.
    pub const SHIFT: Self = Self { shift: true, ctrl: false, alt: false };

    /// Ctrl only.
    pub const CTRL: Self = Self { shift: false, ctrl: true, alt: false };

    /// Alt only.
    pub const ALT: Self = Self { shift: false, ctrl: false, alt: true };
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

//=== InputEvent ==========================================================

/// Low-level input event fed into an [`InputSnapshot`].
///
/// Discrete events (keys, buttons) carry the modifier state at the time
/// they fired; `MouseMoved` carries screen-space coordinates in pixels
/// with a top-left origin.
///
/// [`InputSnapshot`]: super::InputSnapshot
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown { key: KeyCode, modifiers: Modifiers },

    /// Key released.
    KeyUp { key: KeyCode, modifiers: Modifiers },

    /// Mouse button pressed.
    MouseButtonDown { button: MouseButton, modifiers: Modifiers },

    /// Mouse button released.
    MouseButtonUp { button: MouseButton, modifiers: Modifiers },

    /// Mouse cursor moved to a new position.
    MouseMoved { x: f32, y: f32 },

    /// Unrecognized event; silently ignored by the snapshot.
    Unidentified,
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_default_to_none() {
        assert_eq!(Modifiers::default(), Modifiers::NONE);
        assert!(!Modifiers::NONE.shift && !Modifiers::NONE.ctrl && !Modifiers::NONE.alt);
    }

    #[test]
    fn modifier_constants_set_single_flags() {
        assert!(Modifiers::SHIFT.shift && !Modifiers::SHIFT.ctrl);
        assert!(Modifiers::CTRL.ctrl && !Modifiers::CTRL.alt);
        assert!(Modifiers::ALT.alt && !Modifiers::ALT.shift);
    }

    #[test]
    fn events_compare_by_payload() {
        let a = InputEvent::KeyDown { key: KeyCode::KeyA, modifiers: Modifiers::NONE };
        let b = InputEvent::KeyDown { key: KeyCode::KeyA, modifiers: Modifiers::NONE };
        let c = InputEvent::KeyDown { key: KeyCode::KeyA, modifiers: Modifiers::CTRL };

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn key_down_and_key_up_differ() {
        let down = InputEvent::KeyDown { key: KeyCode::Space, modifiers: Modifiers::NONE };
        let up = InputEvent::KeyUp { key: KeyCode::Space, modifiers: Modifiers::NONE };
        assert_ne!(down, up);
    }
}
