//! Error types for roll sessions.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while driving a roll session.
///
/// Rolling itself never fails — unparseable notation degrades to a
/// zero-total result. Errors only arise from the command surface.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No shortcut is registered under the given handle.
    #[error("no shortcut #{0}")]
    UnknownShortcut(u32),

    /// A command was given missing or unusable arguments.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// The input named no known command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}
