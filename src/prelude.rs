//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use limelight::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Screen system
pub use crate::core::screen::{
    PlayerIndex, Screen, ScreenBase, ScreenContext, ScreenId, ScreenManager, ScreenState,
    StackError, Transition,
};

// Input capture
pub use crate::core::input::{InputEvent, InputSnapshot, InputSource, KeyCode, Modifiers, MouseButton};

// Collaborator contracts
pub use crate::core::focus::{AlwaysFocused, FocusSource};
pub use crate::core::render::{Color, Rect, RenderTarget, Viewport};

// Host frame loop
pub use crate::runner::{FrameLoop, FrameLoopBuilder, HostEvent};
