//=========================================================================
// Screen Manager
//=========================================================================
//
// Owns the screen collection and its lifecycle; the single entry point
// the host calls once per frame.
//
// Screens are stored in a HashMap by id and ordered via a stack of ids,
// so handles stay stable while the stack reorders around them. Update
// iterates a copy of the stack order, which keeps iteration safe while
// screens add or remove siblings; removed screens are parked on a
// pending list and destroyed only at the end-of-frame flush.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::focus::FocusSource;
use crate::core::input::{InputSnapshot, InputSource};
use crate::core::render::{Color, RenderTarget, Viewport};

use super::context::{ScreenContext, StackCommand};
use super::error::{Result, StackError};
use super::{PlayerIndex, Screen, ScreenId, ScreenState};

//=== Screen Manager ======================================================

/// Stack-based controller for an application's presentable screens.
///
/// The manager arbitrates three things and nothing else: whether a
/// screen currently gets a turn (update/draw), whether it currently gets
/// input, and when it is loaded, unloaded and destroyed. Rendering,
/// input polling and the OS focus check are consumed through the
/// injected [`RenderTarget`], [`InputSource`] and [`FocusSource`]
/// contracts.
///
/// The host drives one instance per frame: `update(dt)`, then `draw(dt)`,
/// then `flush_pending_deletions()`.
pub struct ScreenManager {
    //--- Screen Storage ---------------------------------------------------
    screens: HashMap<ScreenId, Box<dyn Screen>>,
    stack: Vec<ScreenId>,
    working: Vec<ScreenId>,
    pending_delete: Vec<Box<dyn Screen>>,
    next_id: u64,

    //--- Collaborators ----------------------------------------------------
    render: Box<dyn RenderTarget>,
    input: Box<dyn InputSource>,
    focus: Box<dyn FocusSource>,

    //--- Frame State ------------------------------------------------------
    context: ScreenContext,
    snapshot: InputSnapshot,
    viewport: Viewport,

    //--- Flags ------------------------------------------------------------
    initialized: bool,
    trace_enabled: bool,
    exit_requested: bool,
}

impl ScreenManager {
    //--- Construction -----------------------------------------------------

    /// Creates a manager wired to its collaborators.
    ///
    /// The manager starts uninitialized: screens can already be added
    /// (their `load` is deferred) but per-frame operations fail with
    /// [`StackError::NotInitialized`] until [`initialize`] succeeds.
    ///
    /// [`initialize`]: Self::initialize
    pub fn new(
        render: Box<dyn RenderTarget>,
        input: Box<dyn InputSource>,
        focus: Box<dyn FocusSource>,
    ) -> Self {
        Self {
            screens: HashMap::new(),
            stack: Vec::new(),
            working: Vec::new(),
            pending_delete: Vec::new(),
            next_id: 0,
            render,
            input,
            focus,
            context: ScreenContext::new(),
            snapshot: InputSnapshot::new(),
            viewport: Viewport::default(),
            initialized: false,
            trace_enabled: false,
            exit_requested: false,
        }
    }

    //--- Lifecycle Barrier ------------------------------------------------

    /// One-time setup: caches the viewport and loads every screen already
    /// on the stack.
    ///
    /// Calling this while initialized fails with
    /// [`StackError::AlreadyInitialized`] instead of silently
    /// re-acquiring resources. After a [`teardown`] the barrier is open
    /// again, so a suspend/resume cycle is `teardown` then `initialize`.
    ///
    /// [`teardown`]: Self::teardown
    pub fn initialize(&mut self) -> Result<()> {
        if self.initialized {
            return Err(StackError::AlreadyInitialized);
        }

        self.viewport = self.render.viewport();
        self.context.set_viewport_hint(self.viewport.width, self.viewport.height);

        for &id in &self.stack {
            if let Some(screen) = self.screens.get_mut(&id) {
                screen.load();
            }
        }

        self.initialized = true;
        info!(
            target: "screens",
            "screen manager initialized ({} screens, viewport {}x{})",
            self.stack.len(),
            self.viewport.width,
            self.viewport.height
        );
        Ok(())
    }

    /// Unloads every screen without destroying them, for hosts releasing
    /// their rendering context (suspend, device loss).
    pub fn teardown(&mut self) -> Result<()> {
        if !self.initialized {
            return Err(StackError::NotInitialized);
        }

        for &id in &self.stack {
            if let Some(screen) = self.screens.get_mut(&id) {
                screen.unload();
            }
        }

        self.initialized = false;
        info!(target: "screens", "screen manager torn down ({} screens kept)", self.stack.len());
        Ok(())
    }

    /// Whether the initialization barrier has been passed.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    //--- Stack Mutation ---------------------------------------------------

    /// Appends a screen to the top of the stack and returns its handle.
    ///
    /// The controlling player is assigned and the exiting flag cleared.
    /// If the manager is initialized the screen's `load` runs before this
    /// method returns; otherwise it is deferred until [`initialize`].
    ///
    /// [`initialize`]: Self::initialize
    pub fn add_screen(
        &mut self,
        screen: Box<dyn Screen>,
        player: Option<PlayerIndex>,
    ) -> ScreenId {
        self.insert(screen, player)
    }

    /// Removes a screen from the live stack immediately.
    ///
    /// The screen stops receiving updates and draws this frame, but its
    /// destruction is deferred to the next [`flush_pending_deletions`] so
    /// callers further up the frame still holding its id stay safe.
    /// Prefer [`exit_screen`] so the screen can transition off rather
    /// than being instantly removed. Removing an unknown id is a no-op.
    ///
    /// [`flush_pending_deletions`]: Self::flush_pending_deletions
    /// [`exit_screen`]: Self::exit_screen
    pub fn remove_screen(&mut self, id: ScreenId) {
        let Some(mut screen) = self.screens.remove(&id) else {
            debug!(target: "screens", "remove of unknown screen {:?}, ignoring", id);
            return;
        };

        if self.initialized {
            screen.unload();
        }

        self.stack.retain(|&stacked| stacked != id);
        debug!(target: "screens", "removed screen {} ({:?})", screen.name(), id);
        self.pending_delete.push(screen);
    }

    /// Marks a screen as exiting so it transitions off gracefully; the
    /// update loop retires it once its off-transition completes.
    pub fn exit_screen(&mut self, id: ScreenId) {
        match self.screens.get_mut(&id) {
            Some(screen) => screen.set_exiting(true),
            None => debug!(target: "screens", "exit of unknown screen {:?}, ignoring", id),
        }
    }

    /// Destroys every screen removed since the last flush and returns how
    /// many were dropped. Host calls this once per frame, after drawing.
    pub fn flush_pending_deletions(&mut self) -> usize {
        let flushed = self.pending_delete.len();
        if flushed > 0 {
            debug!(target: "screens", "flushing {} retired screen(s)", flushed);
            self.pending_delete.clear();
        }
        flushed
    }

    //--- Per-Frame Update -------------------------------------------------

    /// Advances every screen and routes input to at most one of them.
    ///
    /// Iterates a copy of the stack top-to-bottom: each screen ticks its
    /// own transition with two hints (whether something above it already
    /// owns focus, whether a non-popup above covers it), the topmost
    /// `TransitionOn`/`Active` screen receives the frame's input capture,
    /// and live non-popups mark everything beneath them covered. Screens
    /// whose exit transition has completed are retired. Stack commands
    /// queued by callbacks are applied after the loop, before this
    /// frame's draw.
    pub fn update(&mut self, dt: f32) -> Result<()> {
        if !self.initialized {
            return Err(StackError::NotInitialized);
        }

        // One capture per frame, handed by reference to the focused screen.
        self.snapshot = self.input.refresh();

        // Work on a copy of the stack order so mid-frame mutations only
        // affect the real stack, consulted again next frame.
        self.working.clear();
        self.working.extend(self.stack.iter().copied());

        // Re-derived every frame, never cached.
        let mut other_screen_has_focus = !self.focus.has_focus();
        let mut covered_by_other_screen = false;

        // Pop the topmost remaining screen each step.
        while let Some(id) = self.working.pop() {
            let Some(screen) = self.screens.get_mut(&id) else {
                continue;
            };

            self.context.begin(id);
            screen.update(dt, &mut self.context, other_screen_has_focus, covered_by_other_screen);

            if matches!(screen.state(), ScreenState::TransitionOn | ScreenState::Active) {
                // First live screen from the top gets the input capture.
                if !other_screen_has_focus {
                    screen.handle_input(&self.snapshot, &mut self.context);
                    other_screen_has_focus = true;
                }

                // A live non-popup obscures everything beneath it.
                if !screen.is_popup() {
                    covered_by_other_screen = true;
                }
            }

            // Exit transition finished: leave the live stack.
            let finished_exit = screen.is_exiting() && screen.state() == ScreenState::Hidden;
            if finished_exit {
                self.remove_screen(id);
            }
        }
        self.context.end();

        self.apply_commands();

        if self.trace_enabled {
            self.trace_screens();
        }

        Ok(())
    }

    /// Draws every non-hidden screen, bottom of the stack first.
    pub fn draw(&mut self, dt: f32) -> Result<()> {
        if !self.initialized {
            return Err(StackError::NotInitialized);
        }

        for &id in &self.stack {
            let Some(screen) = self.screens.get_mut(&id) else {
                continue;
            };

            if screen.state() == ScreenState::Hidden {
                continue;
            }

            screen.draw(self.render.as_mut(), dt);
        }

        Ok(())
    }

    //--- Rendering Helpers ------------------------------------------------

    /// Darkens the whole viewport with a translucent black quad, the
    /// usual backdrop for popups and pause overlays.
    pub fn fade_to_black(&mut self, alpha: f32) -> Result<()> {
        if !self.initialized {
            return Err(StackError::NotInitialized);
        }

        let viewport = self.render.viewport();
        self.render.begin();
        self.render.fill_rect(viewport.bounds(), Color::BLACK.with_alpha(alpha));
        self.render.end();
        Ok(())
    }

    //--- Introspection ----------------------------------------------------

    /// Snapshot of the current stack order, bottom to top. The copy does
    /// not stay live; mutations after the call are not reflected.
    pub fn screens(&self) -> Vec<ScreenId> {
        self.stack.clone()
    }

    /// Borrows a live screen for inspection.
    pub fn screen(&self, id: ScreenId) -> Option<&dyn Screen> {
        self.screens.get(&id).map(|screen| screen.as_ref())
    }

    /// Viewport dimensions cached at the last [`initialize`].
    ///
    /// [`initialize`]: Self::initialize
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    //--- Flags ------------------------------------------------------------

    /// Enables or disables the per-frame diagnostic trace.
    pub fn set_trace_enabled(&mut self, enabled: bool) {
        self.trace_enabled = enabled;
    }

    pub fn trace_enabled(&self) -> bool {
        self.trace_enabled
    }

    /// Raises the cooperative application-exit flag. Screens reach this
    /// via [`ScreenContext::request_exit`].
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    /// Whether an application exit has been requested. The host loop
    /// polls this once per frame.
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    //--- Internal Helpers -------------------------------------------------

    fn insert(&mut self, mut screen: Box<dyn Screen>, player: Option<PlayerIndex>) -> ScreenId {
        screen.set_controlling_player(player);
        screen.set_exiting(false);

        if self.initialized {
            screen.load();
        }

        let id = ScreenId(self.next_id);
        self.next_id += 1;

        debug!(target: "screens", "added screen {} as {:?}", screen.name(), id);
        self.screens.insert(id, screen);
        self.stack.push(id);
        id
    }

    // Applies the stack mutations buffered during this frame's callbacks.
    fn apply_commands(&mut self) {
        let commands = self.context.take_commands();

        for command in commands {
            match command {
                StackCommand::Add { screen, player } => {
                    self.insert(screen, player);
                }
                StackCommand::Remove(id) => self.remove_screen(id),
                StackCommand::Exit(id) => self.exit_screen(id),
                StackCommand::RequestExit => {
                    info!(target: "screens", "application exit requested by a screen");
                    self.exit_requested = true;
                }
            }
        }
    }

    // One line per stacked screen; purely observational.
    fn trace_screens(&self) {
        for (index, id) in self.stack.iter().enumerate() {
            match self.screens.get(id) {
                Some(screen) => debug!(
                    target: "screens",
                    "[{}] {} {:?} state={:?} popup={} exiting={}",
                    index,
                    screen.name(),
                    id,
                    screen.state(),
                    screen.is_popup(),
                    screen.is_exiting()
                ),
                None => warn!(target: "screens", "[{}] dangling id {:?}", index, id),
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
