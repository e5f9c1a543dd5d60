//! Roll evaluation and result rendering.
//!
//! Pure functions of (terms, RNG): the same seed always produces the same
//! `Evaluation`. Nothing here can fail — an empty term list evaluates to
//! a total of 0 with an empty breakdown.

use std::fmt;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::notation::{self, DiceGroup, Sign, Term};

/// The resolved outcome of a single term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Individual die values in roll order. Empty for modifiers.
    pub rolls: Vec<u32>,
    /// Signed contribution of this term to the total.
    pub subtotal: i64,
    /// Human-readable rendering, e.g. "2d6: 3 + 5 = 8" or "Modifier: 3".
    pub line: String,
}

/// The result of evaluating a full dice expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Sum of all term subtotals. 0 when nothing parsed.
    pub total: i64,
    /// Per-term outcomes in input order.
    pub outcomes: Vec<RollOutcome>,
}

impl Evaluation {
    /// Breakdown lines in input order.
    pub fn lines(&self) -> Vec<String> {
        self.outcomes.iter().map(|o| o.line.clone()).collect()
    }

    /// The trailing total line, always present in rendered output.
    pub fn final_line(&self) -> String {
        format!("Final Result: {}", self.total)
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            writeln!(f, "{}", outcome.line)?;
        }
        write!(f, "{}", self.final_line())
    }
}

/// Result of an advantage or disadvantage roll: two d20s, keep one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvantageRoll {
    /// The first d20.
    pub first: u32,
    /// The second d20.
    pub second: u32,
    /// The kept die: the higher for advantage, the lower for disadvantage.
    pub result: u32,
}

impl fmt::Display for AdvantageRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} = {}", self.first, self.second, self.result)
    }
}

/// Roll one dice group.
fn roll_group(group: &DiceGroup, rng: &mut StdRng) -> RollOutcome {
    let rolls: Vec<u32> = (0..group.count)
        .map(|_| rng.random_range(1..=group.sides))
        .collect();
    // Saturate rather than wrap: totals stay a non-failure even for
    // absurdly large but parseable input.
    let sum: i64 = rolls
        .iter()
        .fold(0i64, |acc, &r| acc.saturating_add(i64::from(r)));
    let subtotal = group.sign.factor() * sum;

    let shown: Vec<String> = rolls.iter().map(ToString::to_string).collect();
    let label = match group.sign {
        Sign::Plus => "",
        Sign::Minus => "-",
    };
    let line = format!(
        "{label}{}d{}: {} = {subtotal}",
        group.count,
        group.sides,
        shown.join(" + ")
    );

    RollOutcome {
        rolls,
        subtotal,
        line,
    }
}

/// Evaluate a sequence of parsed terms against the given RNG.
pub fn eval_terms(terms: &[Term], rng: &mut StdRng) -> Evaluation {
    let outcomes: Vec<RollOutcome> = terms
        .iter()
        .map(|term| match term {
            Term::Dice(group) => roll_group(group, rng),
            Term::Modifier(value) => RollOutcome {
                rolls: Vec::new(),
                subtotal: *value,
                line: format!("Modifier: {value}"),
            },
        })
        .collect();
    let total = outcomes
        .iter()
        .fold(0i64, |acc, o| acc.saturating_add(o.subtotal));
    Evaluation { total, outcomes }
}

/// Tokenize and evaluate an expression in one step.
pub fn eval_expression(input: &str, rng: &mut StdRng) -> Evaluation {
    eval_terms(&notation::parse(input), rng)
}

fn two_d20(rng: &mut StdRng) -> (u32, u32) {
    (rng.random_range(1..=20), rng.random_range(1..=20))
}

/// Roll 1d20 twice and keep the higher die.
pub fn advantage(rng: &mut StdRng) -> AdvantageRoll {
    let (first, second) = two_d20(rng);
    AdvantageRoll {
        first,
        second,
        result: first.max(second),
    }
}

/// Roll 1d20 twice and keep the lower die.
pub fn disadvantage(rng: &mut StdRng) -> AdvantageRoll {
    let (first, second) = two_d20(rng);
    AdvantageRoll {
        first,
        second,
        result: first.min(second),
    }
}
