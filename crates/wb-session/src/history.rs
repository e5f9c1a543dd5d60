//! Roll history: an append-only log of everything rolled this session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wb_dice::Die;

/// A single entry in the roll history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum HistoryEntry {
    /// A free-form expression roll.
    Expression {
        /// The expression as entered.
        expression: String,
        /// Per-term breakdown lines.
        lines: Vec<String>,
        /// Final total.
        total: i64,
        /// When rolled.
        timestamp: DateTime<Utc>,
    },
    /// A single die rolled from the quick-roll list.
    Fixed {
        /// The die rolled.
        die: Die,
        /// Breakdown lines.
        lines: Vec<String>,
        /// Final total.
        total: i64,
        /// When rolled.
        timestamp: DateTime<Utc>,
    },
    /// An advantage or disadvantage roll: two d20s, keep one.
    KeepOne {
        /// Fixed label, e.g. "1d20 with advantage".
        label: String,
        /// The first d20.
        first: u32,
        /// The second d20.
        second: u32,
        /// The kept die.
        result: u32,
        /// When rolled.
        timestamp: DateTime<Utc>,
    },
}

/// A chronological, append-only log of rolls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the history.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Truncate the history to empty.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the history as plain text, entries separated by `---`.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Roll History\n============\n\n");
        for entry in &self.entries {
            match entry {
                HistoryEntry::Expression { lines, total, .. }
                | HistoryEntry::Fixed { lines, total, .. } => {
                    for line in lines {
                        out.push_str(line);
                        out.push('\n');
                    }
                    out.push_str(&format!("\nFinal Result: {total}\n---\n"));
                }
                HistoryEntry::KeepOne {
                    label,
                    first,
                    second,
                    result,
                    ..
                } => {
                    out.push_str(&format!("{label}: {first} | {second} = {result}\n---\n"));
                }
            }
        }
        out
    }

    /// Export the history as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Roll History\n\n");
        for entry in &self.entries {
            match entry {
                HistoryEntry::Expression {
                    expression,
                    lines,
                    total,
                    ..
                } => {
                    out.push_str(&format!("**Roll** {expression}:\n"));
                    for line in lines {
                        out.push_str(&format!("  {line}\n"));
                    }
                    out.push_str(&format!("**Final Result**: {total}\n\n"));
                }
                HistoryEntry::Fixed {
                    die, lines, total, ..
                } => {
                    out.push_str(&format!("**Roll** 1{die}:\n"));
                    for line in lines {
                        out.push_str(&format!("  {line}\n"));
                    }
                    out.push_str(&format!("**Final Result**: {total}\n\n"));
                }
                HistoryEntry::KeepOne {
                    label,
                    first,
                    second,
                    result,
                    ..
                } => {
                    out.push_str(&format!("**{label}**: {first} | {second} = {result}\n\n"));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn expression_entry() -> HistoryEntry {
        HistoryEntry::Expression {
            expression: "2d6+3".to_string(),
            lines: vec!["2d6: 3 + 5 = 8".to_string(), "Modifier: 3".to_string()],
            total: 11,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn empty_history() {
        let h = History::new();
        assert!(h.is_empty());
        assert_eq!(h.len(), 0);
    }

    #[test]
    fn append_and_clear() {
        let mut h = History::new();
        h.append(expression_entry());
        assert_eq!(h.len(), 1);
        h.clear();
        assert!(h.is_empty());
    }

    #[test]
    fn export_text_expression() {
        let mut h = History::new();
        h.append(expression_entry());
        let txt = h.export_text();
        assert!(txt.contains("2d6: 3 + 5 = 8\nModifier: 3\n\nFinal Result: 11\n---\n"));
    }

    #[test]
    fn export_text_keep_one() {
        let mut h = History::new();
        h.append(HistoryEntry::KeepOne {
            label: "1d20 with advantage".to_string(),
            first: 12,
            second: 5,
            result: 12,
            timestamp: Utc::now(),
        });
        let txt = h.export_text();
        assert!(txt.contains("1d20 with advantage: 12 | 5 = 12"));
    }

    #[test]
    fn export_markdown_expression() {
        let mut h = History::new();
        h.append(expression_entry());
        let md = h.export_markdown();
        assert!(md.contains("**Roll** 2d6+3:"));
        assert!(md.contains("  Modifier: 3"));
        assert!(md.contains("**Final Result**: 11"));
    }

    #[test]
    fn export_markdown_fixed() {
        let mut h = History::new();
        h.append(HistoryEntry::Fixed {
            die: Die::D20,
            lines: vec!["1d20: 14 = 14".to_string()],
            total: 14,
            timestamp: Utc::now(),
        });
        let md = h.export_markdown();
        assert!(md.contains("**Roll** 1d20:"));
    }

    #[test]
    fn serde_roundtrip() {
        let mut h = History::new();
        h.append(expression_entry());
        let json = serde_json::to_string(&h).unwrap();
        let h2: History = serde_json::from_str(&json).unwrap();
        assert_eq!(h2.len(), 1);
    }
}
