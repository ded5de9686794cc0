//=========================================================================
// Frame Loop
//=========================================================================
//
// Fixed-rate host driver for a ScreenManager.
//
// Architecture:
// ```text
//  Host / OS integration:           Presentation thread:
//  ┌──────────────────────┐        ┌──────────────────────────┐
//  │  window events,      │        │  FrameLoop::run          │
//  │  lifecycle signals   │        │    drain HostEvents      │
//  │   ↓                  │  MPSC  │    update(dt)            │
//  │  Sender<HostEvent> ──┼───────→│    draw(dt)              │
//  └──────────────────────┘        │    flush deletions       │
//                                  │    sleep to tick rate    │
//                                  └──────────────────────────┘
// ```
//
// The loop is cooperative and single-threaded: one manager, one caller,
// update then draw then flush each tick. Suspend unloads the screens and
// idles the loop; resume reloads them. Channel disconnect counts as a
// quit so an abandoned loop never spins forever.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, TryRecvError};
use log::{info, warn};

//=== Internal Dependencies ===============================================

use crate::core::screen::{Result, ScreenManager};

//=== HostEvent ===========================================================

/// Lifecycle signals the host feeds into the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The rendering context is going away (minimize, app switch).
    /// Screens are unloaded but kept on the stack.
    Suspended,

    /// The rendering context is back; screens are reloaded.
    Resumed,

    /// Stop the loop and return.
    Quit,
}

//=== FrameLoopBuilder ====================================================

/// Builder for configuring a [`FrameLoop`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (frames per second)
pub struct FrameLoopBuilder {
    tps: f64,
}

impl FrameLoopBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { tps: 60.0 }
    }

    /// Sets the target ticks per second.
    ///
    /// The loop sleeps out the remainder of each frame to hold this rate;
    /// the measured delta time handed to screens is real elapsed time,
    /// used purely for transition pacing.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Builds the frame loop.
    pub fn build(self) -> FrameLoop {
        FrameLoop { tps: self.tps }
    }
}

impl Default for FrameLoopBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== FrameLoop ===========================================================

/// Drives one [`ScreenManager`] at a fixed tick rate until the host asks
/// it to stop or a screen requests an application exit.
pub struct FrameLoop {
    tps: f64,
}

impl FrameLoop {
    /// Runs the loop on the calling thread.
    ///
    /// Initializes the manager if needed, then per tick: drains host
    /// events, updates, draws, flushes pending deletions, and sleeps out
    /// the rest of the frame. Returns when a [`HostEvent::Quit`] arrives,
    /// the event channel disconnects, or a screen raises the exit flag.
    pub fn run(&self, manager: &mut ScreenManager, events: &Receiver<HostEvent>) -> Result<()> {
        if !manager.is_initialized() {
            manager.initialize()?;
        }

        let frame_duration = Duration::from_secs_f64(1.0 / self.tps);
        info!(target: "runner", "frame loop started ({} tps)", self.tps);

        let mut last_tick = Instant::now();

        loop {
            //--- Step 1: Drain host lifecycle events ----------------------
            loop {
                match events.try_recv() {
                    Ok(HostEvent::Quit) => {
                        info!(target: "runner", "quit requested by host");
                        return Ok(());
                    }
                    Ok(HostEvent::Suspended) => {
                        if manager.is_initialized() {
                            manager.teardown()?;
                        } else {
                            warn!(target: "runner", "suspend while already suspended, ignoring");
                        }
                    }
                    Ok(HostEvent::Resumed) => {
                        if manager.is_initialized() {
                            warn!(target: "runner", "resume while already running, ignoring");
                        } else {
                            manager.initialize()?;
                        }
                    }
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        info!(target: "runner", "host event channel disconnected, exiting");
                        return Ok(());
                    }
                }
            }

            //--- Step 2: Idle while suspended -----------------------------
            if !manager.is_initialized() {
                last_tick = Instant::now();
                thread::sleep(frame_duration);
                continue;
            }

            //--- Step 3: Tick the presentation layer ----------------------
            let now = Instant::now();
            let dt = now.duration_since(last_tick).as_secs_f32();
            last_tick = now;

            manager.update(dt)?;
            manager.draw(dt)?;
            manager.flush_pending_deletions();

            if manager.exit_requested() {
                info!(target: "runner", "exit requested by a screen");
                return Ok(());
            }

            //--- Step 4: Hold the tick rate -------------------------------
            let elapsed = now.elapsed();
            if elapsed < frame_duration {
                thread::sleep(frame_duration - elapsed);
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::focus::AlwaysFocused;
    use crate::core::input::{InputSnapshot, InputSource};
    use crate::core::render::{Color, Rect, RenderTarget, Viewport};
    use crate::core::screen::{
        PlayerIndex, Screen, ScreenBase, ScreenContext, ScreenState, Transition,
    };

    use crossbeam_channel::unbounded;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    //--- Test Doubles -----------------------------------------------------

    struct NullRender;

    impl RenderTarget for NullRender {
        fn viewport(&self) -> Viewport {
            Viewport::new(640.0, 360.0)
        }
        fn begin(&mut self) {}
        fn fill_rect(&mut self, _rect: Rect, _color: Color) {}
        fn draw_text(&mut self, _position: (f32, f32), _text: &str, _color: Color) {}
        fn end(&mut self) {}
    }

    struct NullInput;

    impl InputSource for NullInput {
        fn refresh(&mut self) -> InputSnapshot {
            InputSnapshot::new()
        }
    }

    #[derive(Default)]
    struct Counters {
        loads: AtomicUsize,
        unloads: AtomicUsize,
        updates: AtomicUsize,
    }

    struct CountingScreen {
        base: ScreenBase,
        counters: Arc<Counters>,
        quit_after_updates: Option<usize>,
    }

    impl CountingScreen {
        fn boxed(counters: &Arc<Counters>) -> Box<Self> {
            Box::new(Self {
                base: ScreenBase::new(Transition::instant()),
                counters: counters.clone(),
                quit_after_updates: None,
            })
        }

        fn quitting_after(counters: &Arc<Counters>, updates: usize) -> Box<Self> {
            let mut screen = Self::boxed(counters);
            screen.quit_after_updates = Some(updates);
            screen
        }
    }

    impl Screen for CountingScreen {
        fn load(&mut self) {
            self.counters.loads.fetch_add(1, Ordering::SeqCst);
        }

        fn unload(&mut self) {
            self.counters.unloads.fetch_add(1, Ordering::SeqCst);
        }

        fn update(&mut self, dt: f32, ctx: &mut ScreenContext, _other: bool, covered: bool) {
            let updates = self.counters.updates.fetch_add(1, Ordering::SeqCst) + 1;
            self.base.update_transition(dt, covered);

            if let Some(limit) = self.quit_after_updates {
                if updates >= limit {
                    ctx.request_exit();
                }
            }
        }

        fn state(&self) -> ScreenState {
            self.base.state()
        }

        fn is_exiting(&self) -> bool {
            self.base.is_exiting()
        }

        fn set_exiting(&mut self, exiting: bool) {
            self.base.set_exiting(exiting);
        }

        fn controlling_player(&self) -> Option<PlayerIndex> {
            self.base.controlling_player()
        }

        fn set_controlling_player(&mut self, player: Option<PlayerIndex>) {
            self.base.set_controlling_player(player);
        }
    }

    fn manager() -> ScreenManager {
        ScreenManager::new(Box::new(NullRender), Box::new(NullInput), Box::new(AlwaysFocused))
    }

    //--- Builder ----------------------------------------------------------

    #[test]
    fn builder_defaults_to_sixty_tps() {
        let frame_loop = FrameLoopBuilder::new().build();
        assert_eq!(frame_loop.tps, 60.0);
    }

    #[test]
    fn builder_with_tps() {
        let frame_loop = FrameLoopBuilder::new().with_tps(120.0).build();
        assert_eq!(frame_loop.tps, 120.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_rejects_zero_tps() {
        FrameLoopBuilder::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_rejects_negative_tps() {
        FrameLoopBuilder::new().with_tps(-30.0);
    }

    //--- Loop Behavior ----------------------------------------------------

    #[test]
    fn quit_before_first_tick_runs_no_frames() {
        let mut manager = manager();
        let counters = Arc::new(Counters::default());
        manager.add_screen(CountingScreen::boxed(&counters), None);

        let (tx, rx) = unbounded();
        tx.send(HostEvent::Quit).unwrap();

        FrameLoopBuilder::new().build().run(&mut manager, &rx).unwrap();

        assert_eq!(counters.updates.load(Ordering::SeqCst), 0);
        assert!(manager.is_initialized(), "run still initializes the manager");
    }

    #[test]
    fn suspend_resume_cycle_reloads_screens() {
        crate::logging::init_logging(Default::default());

        let mut manager = manager();
        let counters = Arc::new(Counters::default());
        manager.add_screen(CountingScreen::boxed(&counters), None);

        let (tx, rx) = unbounded();
        tx.send(HostEvent::Suspended).unwrap();
        tx.send(HostEvent::Resumed).unwrap();
        tx.send(HostEvent::Quit).unwrap();

        FrameLoopBuilder::new().build().run(&mut manager, &rx).unwrap();

        assert_eq!(counters.loads.load(Ordering::SeqCst), 2, "initial load plus resume reload");
        assert_eq!(counters.unloads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn disconnected_channel_stops_the_loop() {
        let mut manager = manager();
        let (tx, rx) = unbounded::<HostEvent>();
        drop(tx);

        FrameLoopBuilder::new().build().run(&mut manager, &rx).unwrap();
    }

    #[test]
    fn screen_requested_exit_stops_the_loop() {
        let mut manager = manager();
        let counters = Arc::new(Counters::default());
        manager.add_screen(CountingScreen::quitting_after(&counters, 3), None);

        // Sender kept alive so the loop only stops via the exit flag.
        let (_tx, rx) = unbounded();

        FrameLoopBuilder::new().with_tps(240.0).build().run(&mut manager, &rx).unwrap();

        assert_eq!(counters.updates.load(Ordering::SeqCst), 3);
        assert!(manager.exit_requested());
    }
}
