//=========================================================================
// Limelight — Library Root
//
// This crate defines the public API surface of the Limelight
// presentation core: a stack of presentable screens (menus, gameplay
// views, pause overlays, loading screens) driven once per frame, with
// exactly one screen holding the input limelight at a time.
//
// Responsibilities:
// - Expose the screen stack controller (`ScreenManager`) and the
//   `Screen` capability contract
// - Keep the graphics device, input polling and OS focus checks behind
//   narrow injected contracts (`RenderTarget`, `InputSource`,
//   `FocusSource`)
// - Provide an optional fixed-rate host driver (`FrameLoop`)
//
// Typical usage:
// ```no_run
// use crossbeam_channel::unbounded;
// use limelight::prelude::*;
//
// # fn collaborators() -> (Box<dyn RenderTarget>, Box<dyn InputSource>) { unimplemented!() }
// fn main() {
//     limelight::logging::init_logging(Default::default());
//
//     let (render, input) = collaborators();
//     let mut manager = ScreenManager::new(render, input, Box::new(AlwaysFocused));
//     // manager.add_screen(Box::new(MainMenu::new()), None);
//
//     let (_host, events) = unbounded();
//     FrameLoopBuilder::new().build().run(&mut manager, &events).unwrap();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the presentation systems (screen stack, input capture,
// collaborator contracts). It is exposed publicly for host-level
// extensibility, but most application code only needs the re-exports
// below or the prelude.
//
pub mod core;

//--- Supporting Modules --------------------------------------------------
//
// `runner` is the optional fixed-rate frame loop for hosts that do not
// already own a loop; `logging` bootstraps `env_logger` for hosts and
// tests.
//
pub mod logging;
pub mod prelude;
pub mod runner;

//--- Public Exports ------------------------------------------------------
//
// The two types almost every consumer touches, exported at the root so
// simple hosts can `use limelight::{Screen, ScreenManager};` without
// knowing the module structure.
//
pub use crate::core::screen::{Screen, ScreenManager};
