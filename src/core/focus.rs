//=========================================================================
// Focus Contract
//=========================================================================
//
// Answers one question, re-asked every update: does this process
// currently own foreground input focus?
//
// Modeling the OS focus check as an injected contract (instead of an ad
// hoc foreground-window query) keeps the update algorithm testable
// without a real window system.
//
//=========================================================================

//=== FocusSource Trait ===================================================

/// Reports whether the host window owns foreground input focus.
///
/// When it does not, no screen receives input that frame, regardless of
/// stack contents. The manager queries this every update and never
/// caches the answer.
pub trait FocusSource: Send {
    fn has_focus(&self) -> bool;
}

//=== AlwaysFocused =======================================================

/// Focus source for hosts without a window system (servers, tests,
/// kiosk-style embedded targets): the process is always considered
/// focused.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysFocused;

impl FocusSource for AlwaysFocused {
    fn has_focus(&self) -> bool {
        true
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
