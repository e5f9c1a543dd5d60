//! Dice notation parsing and roll evaluation for Würfelbecher.
//!
//! Parses tabletop dice notation ("2d6+1", "-1d4+2") into a sequence of
//! terms, resolves each term against a random source, and renders a
//! per-term breakdown. Parsing is permissive: fragments that are neither
//! a dice group nor a flat modifier are skipped, never rejected.

pub mod die;
pub mod eval;
pub mod notation;

pub use die::Die;
pub use eval::{
    AdvantageRoll, Evaluation, RollOutcome, advantage, disadvantage, eval_expression, eval_terms,
};
pub use notation::{DiceGroup, Sign, Term, parse};
