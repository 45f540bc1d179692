//! Binary-level tests. The normal mode never exits on its own, so only the
//! help path is exercised end to end.

use predicates::prelude::*;

fn days2live() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("days2live"))
}

#[test]
fn long_help_exits_zero_with_usage() {
    days2live()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: days2live"))
        .stdout(predicate::str::contains("[YEARS_TO_LIFE]"))
        .stdout(predicate::str::contains("YYYY-MM-DD"))
        .stdout(predicate::str::contains("days2live 90 2000-01-01"));
}

#[test]
fn short_help_after_other_arguments_skips_everything_else() {
    days2live()
        .args(["notanumber", "notadate", "-h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: days2live"))
        .stdout(predicate::str::contains("\x1b[2J").not())
        .stderr(predicate::str::is_empty());
}
