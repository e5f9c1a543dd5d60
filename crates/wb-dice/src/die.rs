//! Polyhedral die types.

use serde::{Deserialize, Serialize};

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
    /// A die with a custom number of sides.
    Custom(u32),
}

impl Die {
    /// The standard polyhedral set offered by the quick-roll list.
    pub const STANDARD: [Self; 7] = [
        Self::D4,
        Self::D6,
        Self::D8,
        Self::D10,
        Self::D12,
        Self::D20,
        Self::D100,
    ];

    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// Parse a die from a string like "d20", "1d20", "d100".
    ///
    /// A leading "1" is accepted so the quick-roll labels ("1d4".."1d100")
    /// map back to their die. Custom dice need at least 2 sides.
    pub fn from_notation(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        let tag = lower.strip_prefix('1').unwrap_or(&lower);
        match tag {
            "d4" => Some(Self::D4),
            "d6" => Some(Self::D6),
            "d8" => Some(Self::D8),
            "d10" => Some(Self::D10),
            "d12" => Some(Self::D12),
            "d20" => Some(Self::D20),
            "d100" => Some(Self::D100),
            other => {
                let num = other.strip_prefix('d')?.parse::<u32>().ok()?;
                if num >= 2 { Some(Self::Custom(num)) } else { None }
            }
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::D4 => write!(f, "d4"),
            Self::D6 => write!(f, "d6"),
            Self::D8 => write!(f, "d8"),
            Self::D10 => write!(f, "d10"),
            Self::D12 => write!(f, "d12"),
            Self::D20 => write!(f, "d20"),
            Self::D100 => write!(f, "d100"),
            Self::Custom(n) => write!(f, "d{n}"),
        }
    }
}
