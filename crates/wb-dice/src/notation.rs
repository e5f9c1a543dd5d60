//! Dice-notation tokenizer.
//!
//! Scans an expression left to right for dice groups ("2d6", "-1d4") and
//! flat modifiers ("+3", "7"). Whitespace is stripped before scanning, and
//! anything that matches neither pattern contributes no term: "2d6+x+3"
//! parses to the same terms as "2d6+3". Silent discard is the contract —
//! callers never see a parse error.

use logos::Logos;
use serde::{Deserialize, Serialize};

/// Sign applied to a dice group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    /// The group adds to the total.
    Plus,
    /// The group subtracts from the total.
    Minus,
}

impl Sign {
    /// The multiplier for this sign: +1 or -1.
    pub fn factor(self) -> i64 {
        match self {
            Self::Plus => 1,
            Self::Minus => -1,
        }
    }
}

/// A group of identical dice rolled together, e.g. "2d6" or "-1d4".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceGroup {
    /// Number of dice rolled. Always >= 1.
    pub count: u32,
    /// Sides per die. Always >= 1.
    pub sides: u32,
    /// Whether the group adds to or subtracts from the total.
    pub sign: Sign,
}

/// A parsed unit of a dice expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Term {
    /// Dice to roll.
    Dice(DiceGroup),
    /// A flat integer added to the total.
    Modifier(i64),
}

/// Raw logos tokens. A dice group wins over a bare integer at the same
/// position because logos keeps the longest match ("2d6" beats "2").
#[derive(Logos, Debug)]
enum RawToken {
    #[regex(r"[+-]?[0-9]*d[0-9]+")]
    Dice,

    #[regex(r"[+-]?[0-9]+")]
    Number,
}

/// Parse an expression into terms, skipping anything unrecognized.
///
/// Empty input, or input with nothing recognizable in it, yields an empty
/// term list rather than an error.
pub fn parse(input: &str) -> Vec<Term> {
    let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    let mut terms = Vec::new();
    let mut lexer = RawToken::lexer(&stripped);
    while let Some(result) = lexer.next() {
        let Ok(raw) = result else {
            // Unparseable fragment: no term, no error.
            continue;
        };
        match raw {
            RawToken::Dice => {
                if let Some(group) = parse_group(lexer.slice()) {
                    terms.push(Term::Dice(group));
                }
            }
            RawToken::Number => {
                if let Ok(value) = lexer.slice().parse::<i64>() {
                    terms.push(Term::Modifier(value));
                }
            }
        }
    }
    terms
}

/// Split a matched dice-group slice into sign, count, and sides.
///
/// An omitted count defaults to 1. Degenerate groups ("0d6", "2d0") are
/// dropped like any other unrecognized fragment, keeping the `DiceGroup`
/// invariants intact.
fn parse_group(slice: &str) -> Option<DiceGroup> {
    let (sign, rest) = match slice.as_bytes().first() {
        Some(b'-') => (Sign::Minus, &slice[1..]),
        Some(b'+') => (Sign::Plus, &slice[1..]),
        _ => (Sign::Plus, slice),
    };
    let (count_str, sides_str) = rest.split_once('d')?;
    let count = if count_str.is_empty() {
        1
    } else {
        count_str.parse().ok()?
    };
    let sides = sides_str.parse().ok()?;
    if count == 0 || sides == 0 {
        return None;
    }
    Some(DiceGroup { count, sides, sign })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dice(count: u32, sides: u32, sign: Sign) -> Term {
        Term::Dice(DiceGroup { count, sides, sign })
    }

    #[test]
    fn single_group() {
        assert_eq!(parse("2d6"), vec![dice(2, 6, Sign::Plus)]);
    }

    #[test]
    fn count_defaults_to_one() {
        assert_eq!(parse("d20"), vec![dice(1, 20, Sign::Plus)]);
    }

    #[test]
    fn group_with_modifier() {
        assert_eq!(
            parse("2d6+3"),
            vec![dice(2, 6, Sign::Plus), Term::Modifier(3)]
        );
    }

    #[test]
    fn negative_group() {
        assert_eq!(
            parse("-1d4+2"),
            vec![dice(1, 4, Sign::Minus), Term::Modifier(2)]
        );
    }

    #[test]
    fn multiple_groups() {
        assert_eq!(
            parse("1d20+2d6+3"),
            vec![
                dice(1, 20, Sign::Plus),
                dice(2, 6, Sign::Plus),
                Term::Modifier(3)
            ]
        );
    }

    #[test]
    fn negative_modifier() {
        assert_eq!(parse("1d8-2"), vec![dice(1, 8, Sign::Plus), Term::Modifier(-2)]);
    }

    #[test]
    fn whitespace_stripped_before_scanning() {
        assert_eq!(parse(" 2 d 6 + 3 "), parse("2d6+3"));
    }

    #[test]
    fn empty_input_yields_no_terms() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn garbage_yields_no_terms() {
        assert!(parse("banana").is_empty());
    }

    #[test]
    fn garbage_between_terms_is_skipped() {
        assert_eq!(parse("2d6+x+3"), parse("2d6+3"));
    }

    #[test]
    fn dangling_d_leaves_the_count_as_modifier() {
        // "2dx" has no valid dice group; the "2" still parses as a number.
        assert_eq!(parse("2dx"), vec![Term::Modifier(2)]);
    }

    #[test]
    fn degenerate_groups_dropped() {
        assert!(parse("0d6").is_empty());
        assert!(parse("2d0").is_empty());
    }

    #[test]
    fn bare_integer_is_a_modifier() {
        assert_eq!(parse("7"), vec![Term::Modifier(7)]);
        assert_eq!(parse("-7"), vec![Term::Modifier(-7)]);
    }

    #[test]
    fn sign_factor() {
        assert_eq!(Sign::Plus.factor(), 1);
        assert_eq!(Sign::Minus.factor(), -1);
    }

    #[test]
    fn serde_roundtrip() {
        let terms = parse("2d6+3");
        let json = serde_json::to_string(&terms).unwrap();
        let back: Vec<Term> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, terms);
    }
}
