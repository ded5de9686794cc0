//=========================================================================
// Presentation Core
//=========================================================================
//
// All internal systems of the presentation layer: the screen stack and
// its focus-resolution algorithm, the per-frame input capture, and the
// narrow contracts through which rendering, input polling and the OS
// focus check are consumed.
//
// Subsystems:
// - `screen`: Screen trait, transition state machine, ScreenManager
// - `input`:  InputSnapshot and the InputSource contract
// - `render`: Viewport/Rect/Color and the RenderTarget contract
// - `focus`:  the FocusSource contract
//
//=========================================================================

pub mod focus;
pub mod input;
pub mod render;
pub mod screen;
