//=========================================================================
// Screen Context
//=========================================================================
//
// Buffered stack mutation for code running inside screen callbacks.
//
// Screens never touch the live stack directly. During `update` and
// `handle_input` they queue commands here; the manager applies the queue
// once the frame's iteration has finished, keeping iteration safe while
// screens add or remove siblings mid-frame.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use log::warn;

//=== Internal Dependencies ===============================================

use super::{PlayerIndex, Screen, ScreenId};

//=== Stack Command =======================================================

/// A deferred mutation of the screen stack.
pub enum StackCommand {
    /// Appends a new screen to the top of the stack.
    Add {
        screen: Box<dyn Screen>,
        player: Option<PlayerIndex>,
    },

    /// Removes a screen immediately, skipping its off-transition.
    Remove(ScreenId),

    /// Marks a screen as exiting so it transitions off before removal.
    Exit(ScreenId),

    /// Asks the host to shut the whole presentation loop down.
    RequestExit,
}

impl fmt::Debug for StackCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add { screen, player } => f
                .debug_struct("Add")
                .field("screen", &screen.name())
                .field("player", player)
                .finish(),
            Self::Remove(id) => f.debug_tuple("Remove").field(id).finish(),
            Self::Exit(id) => f.debug_tuple("Exit").field(id).finish(),
            Self::RequestExit => f.write_str("RequestExit"),
        }
    }
}

//=== Command Queue =======================================================

/// Queue of stack commands awaiting the end of the frame's iteration.
pub struct CommandQueue {
    queue: Vec<StackCommand>,
}

impl CommandQueue {
    /// Creates a new empty command queue.
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a command to be applied at the next reconciliation point.
    pub fn push(&mut self, command: StackCommand) {
        self.queue.push(command);
    }

    /// Returns true if no commands are queued.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of queued commands.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes all queued commands, leaving the queue empty.
    pub fn take(&mut self) -> Vec<StackCommand> {
        std::mem::take(&mut self.queue)
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}

//=== Screen Context ======================================================

/// The handle screens use to reach back into their owning manager.
///
/// All mutations are buffered: they affect only the real stack, which is
/// reconciled after the update loop and consulted again next frame.
pub struct ScreenContext {
    commands: CommandQueue,
    current: Option<ScreenId>,
    viewport_hint: (f32, f32),
}

impl ScreenContext {
    pub(crate) fn new() -> Self {
        Self {
            commands: CommandQueue::new(),
            current: None,
            viewport_hint: (0.0, 0.0),
        }
    }

    //--- Manager Bookkeeping ----------------------------------------------

    pub(crate) fn begin(&mut self, id: ScreenId) {
        self.current = Some(id);
    }

    pub(crate) fn end(&mut self) {
        self.current = None;
    }

    pub(crate) fn set_viewport_hint(&mut self, width: f32, height: f32) {
        self.viewport_hint = (width, height);
    }

    pub(crate) fn take_commands(&mut self) -> Vec<StackCommand> {
        self.commands.take()
    }

    //--- Introspection ----------------------------------------------------

    /// Id of the screen whose callback is currently running, if any.
    pub fn current_screen(&self) -> Option<ScreenId> {
        self.current
    }

    /// Viewport dimensions cached at initialization, for layout decisions
    /// made during update rather than draw.
    pub fn viewport_hint(&self) -> (f32, f32) {
        self.viewport_hint
    }

    //--- Stack Mutation ---------------------------------------------------

    /// Queues a sibling screen for addition at the top of the stack.
    pub fn add_screen(&mut self, screen: Box<dyn Screen>, player: Option<PlayerIndex>) {
        self.commands.push(StackCommand::Add { screen, player });
    }

    /// Queues the immediate removal of a screen. Prefer [`exit_screen`]
    /// so the screen can transition off instead of vanishing.
    ///
    /// [`exit_screen`]: Self::exit_screen
    pub fn remove_screen(&mut self, id: ScreenId) {
        self.commands.push(StackCommand::Remove(id));
    }

    /// Queues the immediate removal of the screen currently updating.
    pub fn remove_self(&mut self) {
        match self.current {
            Some(id) => self.commands.push(StackCommand::Remove(id)),
            None => warn!(target: "screens", "remove_self called outside a screen callback"),
        }
    }

    /// Marks a screen as exiting; it is retired once its off-transition
    /// completes.
    pub fn exit_screen(&mut self, id: ScreenId) {
        self.commands.push(StackCommand::Exit(id));
    }

    /// Marks the screen currently updating as exiting.
    pub fn exit_self(&mut self) {
        match self.current {
            Some(id) => self.commands.push(StackCommand::Exit(id)),
            None => warn!(target: "screens", "exit_self called outside a screen callback"),
        }
    }

    /// Raises the manager's application-exit flag for the host loop.
    pub fn request_exit(&mut self) {
        self.commands.push(StackCommand::RequestExit);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_starts_empty() {
        let queue = CommandQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn take_drains_the_queue() {
        let mut queue = CommandQueue::new();
        queue.push(StackCommand::Remove(ScreenId(1)));
        queue.push(StackCommand::RequestExit);

        let commands = queue.take();
        assert_eq!(commands.len(), 2);
        assert!(queue.is_empty());
    }

    #[test]
    fn remove_self_targets_the_current_screen() {
        let mut ctx = ScreenContext::new();
        ctx.begin(ScreenId(7));
        ctx.remove_self();
        ctx.end();

        let commands = ctx.take_commands();
        assert_eq!(commands.len(), 1);
        assert!(matches!(commands[0], StackCommand::Remove(ScreenId(7))));
    }

    #[test]
    fn remove_self_outside_callback_is_dropped() {
        let mut ctx = ScreenContext::new();
        ctx.remove_self();
        assert!(ctx.take_commands().is_empty());
    }

    #[test]
    fn exit_self_targets_the_current_screen() {
        let mut ctx = ScreenContext::new();
        ctx.begin(ScreenId(3));
        ctx.exit_self();

        let commands = ctx.take_commands();
        assert!(matches!(commands[0], StackCommand::Exit(ScreenId(3))));
    }

    #[test]
    fn current_screen_is_cleared_after_end() {
        let mut ctx = ScreenContext::new();
        ctx.begin(ScreenId(2));
        assert_eq!(ctx.current_screen(), Some(ScreenId(2)));
        ctx.end();
        assert_eq!(ctx.current_screen(), None);
    }
}
