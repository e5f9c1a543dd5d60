//! Custom roll shortcuts: saved expressions invoked by handle.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Handle identifying a registered shortcut within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortcutId(pub u32);

impl fmt::Display for ShortcutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A saved dice expression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shortcut {
    /// Handle for invoking or removing this shortcut.
    pub id: ShortcutId,
    /// The stored dice expression.
    pub expression: String,
}

/// Registry of custom roll shortcuts.
///
/// Handles start at `#1` and are never reused within a session, so a
/// removed shortcut's handle stays dead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortcutList {
    shortcuts: Vec<Shortcut>,
    next_id: u32,
}

impl Default for ShortcutList {
    fn default() -> Self {
        Self {
            shortcuts: Vec::new(),
            next_id: 1,
        }
    }
}

impl ShortcutList {
    /// Create an empty shortcut list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an expression and return its handle.
    pub fn add(&mut self, expression: impl Into<String>) -> ShortcutId {
        let id = ShortcutId(self.next_id);
        self.next_id += 1;
        self.shortcuts.push(Shortcut {
            id,
            expression: expression.into(),
        });
        id
    }

    /// Remove a shortcut by handle. Returns true if found.
    pub fn remove(&mut self, id: ShortcutId) -> bool {
        let len_before = self.shortcuts.len();
        self.shortcuts.retain(|s| s.id != id);
        self.shortcuts.len() < len_before
    }

    /// Look up the stored expression for a handle.
    pub fn get(&self, id: ShortcutId) -> Option<&str> {
        self.shortcuts
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.expression.as_str())
    }

    /// All registered shortcuts in registration order.
    pub fn all(&self) -> &[Shortcut] {
        &self.shortcuts
    }

    /// Number of registered shortcuts.
    pub fn len(&self) -> usize {
        self.shortcuts.len()
    }

    /// Whether no shortcuts are registered.
    pub fn is_empty(&self) -> bool {
        self.shortcuts.is_empty()
    }
}
