use colored::Colorize;

use wb_dice::Die;
use wb_session::{RollSession, SessionConfig};

/// Which of the two d20s an adv/dis roll keeps.
pub enum Keep {
    /// Advantage: keep the higher die.
    Higher,
    /// Disadvantage: keep the lower die.
    Lower,
}

/// Roll a dice expression once and print the breakdown.
pub fn run(expression: &str, seed: Option<u64>) -> Result<(), String> {
    let config = SessionConfig::default().with_seed(super::resolve_seed(seed));
    let mut session = RollSession::new(&config);

    let eval = session.roll_expression(expression);
    for line in eval.lines() {
        println!("  {line}");
    }
    println!("  {}", eval.final_line().bold());
    Ok(())
}

/// Roll two d20s and keep one, printing both dice and the result.
pub fn run_keep_one(keep: Keep, seed: Option<u64>) -> Result<(), String> {
    let config = SessionConfig::default().with_seed(super::resolve_seed(seed));
    let mut session = RollSession::new(&config);

    let (label, roll) = match keep {
        Keep::Higher => ("1d20 with advantage", session.roll_advantage()),
        Keep::Lower => ("1d20 with disadvantage", session.roll_disadvantage()),
    };
    println!("  {label}: {}", roll.to_string().bold());
    Ok(())
}

/// Print the standard dice set.
pub fn run_dice_list() -> Result<(), String> {
    for die in Die::STANDARD {
        println!("  1{die}");
    }
    Ok(())
}
