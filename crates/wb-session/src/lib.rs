//! Process-lifetime state for a dice-rolling session.
//!
//! `RollSession` owns the append-only roll history, the custom-roll
//! shortcut registry, and a seeded RNG. It exposes a typed rolling API and
//! a line-command processor for REPL frontends. Nothing persists past the
//! process: history and shortcuts are in-memory only.

pub mod config;
pub mod error;
pub mod history;
pub mod session;
pub mod shortcuts;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use history::{History, HistoryEntry};
pub use session::RollSession;
pub use shortcuts::{Shortcut, ShortcutId, ShortcutList};
