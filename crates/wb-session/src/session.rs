//! Interactive roll session.
//!
//! `RollSession` is the process-lifetime owner of everything the roller
//! needs: history, shortcuts, and the random source. Frontends either call
//! the typed API (`roll_expression`, `roll_advantage`, ...) or feed lines
//! to `process` and print whatever comes back.

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;

use wb_dice::{AdvantageRoll, Die, Evaluation, advantage, disadvantage, eval_expression};

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::history::{History, HistoryEntry};
use crate::shortcuts::{ShortcutId, ShortcutList};

/// Fixed label for advantage rolls.
const ADVANTAGE_LABEL: &str = "1d20 with advantage";
/// Fixed label for disadvantage rolls.
const DISADVANTAGE_LABEL: &str = "1d20 with disadvantage";

/// An interactive dice-rolling session.
pub struct RollSession {
    history: History,
    shortcuts: ShortcutList,
    rng: StdRng,
}

impl RollSession {
    /// Create a session from a config.
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            history: History::new(),
            shortcuts: ShortcutList::new(),
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// The roll history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The shortcut registry.
    pub fn shortcuts(&self) -> &ShortcutList {
        &self.shortcuts
    }

    /// Evaluate an expression and record it in the history.
    ///
    /// Never fails: input that parses to no terms yields a total of 0.
    pub fn roll_expression(&mut self, expression: &str) -> Evaluation {
        let eval = eval_expression(expression, &mut self.rng);
        self.history.append(HistoryEntry::Expression {
            expression: expression.trim().to_string(),
            lines: eval.lines(),
            total: eval.total,
            timestamp: Utc::now(),
        });
        eval
    }

    /// Roll a single die of the given type (the quick-roll surface).
    pub fn roll_fixed(&mut self, die: Die) -> Evaluation {
        let eval = eval_expression(&format!("1{die}"), &mut self.rng);
        self.history.append(HistoryEntry::Fixed {
            die,
            lines: eval.lines(),
            total: eval.total,
            timestamp: Utc::now(),
        });
        eval
    }

    /// Roll 1d20 twice and keep the higher die.
    pub fn roll_advantage(&mut self) -> AdvantageRoll {
        let roll = advantage(&mut self.rng);
        self.record_keep_one(ADVANTAGE_LABEL, roll);
        roll
    }

    /// Roll 1d20 twice and keep the lower die.
    pub fn roll_disadvantage(&mut self) -> AdvantageRoll {
        let roll = disadvantage(&mut self.rng);
        self.record_keep_one(DISADVANTAGE_LABEL, roll);
        roll
    }

    fn record_keep_one(&mut self, label: &str, roll: AdvantageRoll) {
        self.history.append(HistoryEntry::KeepOne {
            label: label.to_string(),
            first: roll.first,
            second: roll.second,
            result: roll.result,
            timestamp: Utc::now(),
        });
    }

    /// Register a custom roll shortcut and return its handle.
    pub fn add_shortcut(&mut self, expression: impl Into<String>) -> ShortcutId {
        self.shortcuts.add(expression)
    }

    /// Remove a shortcut by handle.
    pub fn remove_shortcut(&mut self, id: ShortcutId) -> SessionResult<()> {
        if self.shortcuts.remove(id) {
            Ok(())
        } else {
            Err(SessionError::UnknownShortcut(id.0))
        }
    }

    /// Roll a registered shortcut's expression.
    pub fn roll_shortcut(&mut self, id: ShortcutId) -> SessionResult<Evaluation> {
        let expression = self
            .shortcuts
            .get(id)
            .ok_or(SessionError::UnknownShortcut(id.0))?
            .to_string();
        Ok(self.roll_expression(&expression))
    }

    /// Forget every recorded roll.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> SessionResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "roll" | "r" => self.do_roll(rest),
            "adv" | "advantage" => {
                let roll = self.roll_advantage();
                Ok(format!("{ADVANTAGE_LABEL}: {roll}"))
            }
            "dis" | "disadvantage" => {
                let roll = self.roll_disadvantage();
                Ok(format!("{DISADVANTAGE_LABEL}: {roll}"))
            }
            "add" => self.do_add(rest),
            "remove" | "rm" => self.do_remove(rest),
            "shortcuts" => Ok(self.render_shortcut_list()),
            "history" => Ok(self.render_history()),
            "export" => self.do_export(rest),
            "dice" => Ok(Self::render_dice_list()),
            "clear" => {
                self.clear_history();
                Ok("History cleared.".to_string())
            }
            "help" => Ok(Self::help().to_string()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            handle if handle.starts_with('#') => self.do_shortcut_roll(handle),
            _ => self.do_bare_expression(trimmed),
        }
    }

    fn do_roll(&mut self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            return Err(SessionError::InvalidChoice(
                "usage: roll <expression>".to_string(),
            ));
        }
        Ok(self.roll_expression(rest).to_string())
    }

    /// A line that names no command still rolls if it parses to any terms,
    /// so "2d6+3" works without the "roll" prefix.
    fn do_bare_expression(&mut self, input: &str) -> SessionResult<String> {
        if wb_dice::parse(input).is_empty() {
            return Err(SessionError::UnknownCommand(input.to_string()));
        }
        Ok(self.roll_expression(input).to_string())
    }

    fn do_add(&mut self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            return Err(SessionError::InvalidChoice(
                "usage: add <expression>".to_string(),
            ));
        }
        let id = self.add_shortcut(rest);
        Ok(format!("Added shortcut {id}: {rest}"))
    }

    fn do_remove(&mut self, rest: &str) -> SessionResult<String> {
        let id = parse_handle(rest)?;
        self.remove_shortcut(id)?;
        Ok(format!("Removed shortcut {id}."))
    }

    fn do_shortcut_roll(&mut self, handle: &str) -> SessionResult<String> {
        let id = parse_handle(handle)?;
        let eval = self.roll_shortcut(id)?;
        Ok(eval.to_string())
    }

    fn do_export(&mut self, rest: &str) -> SessionResult<String> {
        match rest.to_lowercase().as_str() {
            "" | "text" => Ok(self.history.export_text()),
            "markdown" | "md" => Ok(self.history.export_markdown()),
            other => Err(SessionError::InvalidChoice(format!(
                "unknown export format: {other} (try markdown or text)"
            ))),
        }
    }

    fn render_history(&self) -> String {
        if self.history.is_empty() {
            "History is empty.".to_string()
        } else {
            self.history.export_text()
        }
    }

    fn render_shortcut_list(&self) -> String {
        if self.shortcuts.is_empty() {
            return "No shortcuts registered.".to_string();
        }
        let mut out = String::from("Shortcuts:\n");
        for shortcut in self.shortcuts.all() {
            out.push_str(&format!("  {}  {}\n", shortcut.id, shortcut.expression));
        }
        out.push_str("Roll one by typing its handle, e.g. '#1'.");
        out
    }

    fn render_dice_list() -> String {
        let labels: Vec<String> = Die::STANDARD.iter().map(|d| format!("1{d}")).collect();
        format!("Standard dice: {}", labels.join(", "))
    }

    fn help() -> &'static str {
        "\
Dice Roller Commands:
  roll <expression>    Roll dice notation (e.g. 1d20+2d6+3)
  <expression>         Bare expressions roll too
  adv                  Roll 1d20 with advantage
  dis                  Roll 1d20 with disadvantage
  dice                 List the standard dice
  add <expression>     Save an expression as a shortcut
  #<n>                 Roll shortcut n
  remove <n>           Remove shortcut n
  shortcuts            List shortcuts
  history              Show roll history
  export [markdown|text]  Export roll history
  clear                Clear roll history
  help                 Show this help
  quit                 Exit"
    }
}

/// Parse a shortcut handle like "#1" or "1".
fn parse_handle(s: &str) -> SessionResult<ShortcutId> {
    s.trim_start_matches('#')
        .parse::<u32>()
        .map(ShortcutId)
        .map_err(|_| SessionError::InvalidChoice(format!("not a shortcut handle: {s}")))
}
