//=========================================================================
// Stack Errors
//=========================================================================
//
// The error surface is deliberately narrow: everything here is in-process
// control logic, so failures are programmer-level precondition violations
// rather than recoverable I/O conditions.
//
//=========================================================================

use thiserror::Error;

/// Result alias for fallible [`ScreenManager`] operations.
///
/// [`ScreenManager`]: super::ScreenManager
pub type Result<T> = std::result::Result<T, StackError>;

/// Precondition violations surfaced by the screen manager.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// `initialize` was called while the manager was already initialized.
    /// Re-running initialization would double-acquire resources, so it
    /// fails loudly instead.
    #[error("screen manager is already initialized")]
    AlreadyInitialized,

    /// An operation that requires loaded resources ran before
    /// `initialize` succeeded (or after `teardown`).
    #[error("screen manager is not initialized")]
    NotInitialized,
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_a_message() {
        assert_eq!(
            StackError::AlreadyInitialized.to_string(),
            "screen manager is already initialized"
        );
        assert_eq!(
            StackError::NotInitialized.to_string(),
            "screen manager is not initialized"
        );
    }

    #[test]
    fn errors_compare_by_variant() {
        assert_eq!(StackError::NotInitialized, StackError::NotInitialized);
        assert_ne!(StackError::NotInitialized, StackError::AlreadyInitialized);
    }
}
