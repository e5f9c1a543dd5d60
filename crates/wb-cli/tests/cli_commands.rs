//! Integration tests for the wb binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn wb() -> Command {
    Command::cargo_bin("wb").unwrap()
}

#[test]
fn roll_prints_breakdown_and_result() {
    wb().args(["roll", "2d6+3", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2d6: "))
        .stdout(predicate::str::contains("Modifier: 3"))
        .stdout(predicate::str::contains("Final Result: "));
}

#[test]
fn roll_deterministic_with_seed() {
    let first = wb()
        .args(["roll", "3d20+1d6", "--seed", "7"])
        .output()
        .unwrap();
    let second = wb()
        .args(["roll", "3d20+1d6", "--seed", "7"])
        .output()
        .unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn roll_garbage_totals_zero() {
    wb().args(["roll", "banana", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Final Result: 0"));
}

#[test]
fn advantage_reports_both_dice() {
    wb().args(["adv", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1d20 with advantage"))
        .stdout(predicate::str::contains(" | "));
}

#[test]
fn disadvantage_reports_both_dice() {
    wb().args(["dis", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1d20 with disadvantage"));
}

#[test]
fn dice_lists_standard_set() {
    wb().arg("dice")
        .assert()
        .success()
        .stdout(predicate::str::contains("1d4"))
        .stdout(predicate::str::contains("1d20"))
        .stdout(predicate::str::contains("1d100"));
}

#[test]
fn play_rolls_and_quits() {
    wb().args(["play", "--seed", "42"])
        .write_stdin("roll 2d6+3\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Modifier: 3"))
        .stdout(predicate::str::contains("Final Result: "))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn play_bare_expression_rolls() {
    wb().args(["play", "--seed", "42"])
        .write_stdin("1d20\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1d20: "));
}

#[test]
fn play_unknown_command_is_reported() {
    wb().args(["play", "--seed", "42"])
        .write_stdin("frobnicate\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown command: frobnicate"));
}

#[test]
fn play_shortcut_lifecycle() {
    wb().args(["play", "--seed", "1"])
        .write_stdin("add 1d8+5\nshortcuts\n#1\nremove 1\nshortcuts\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added shortcut #1: 1d8+5"))
        .stdout(predicate::str::contains("Final Result: "))
        .stdout(predicate::str::contains("No shortcuts registered."));
}

#[test]
fn play_clear_history() {
    wb().args(["play", "--seed", "42"])
        .write_stdin("roll 1d6\nclear\nhistory\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("History cleared."))
        .stdout(predicate::str::contains("History is empty."));
}

#[test]
fn play_exits_on_eof() {
    wb().args(["play", "--seed", "42"])
        .write_stdin("roll 1d6\n")
        .assert()
        .success();
}
