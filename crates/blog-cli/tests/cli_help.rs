use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    cargo_bin_cmd!("blog")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("articles"))
        .stdout(predicate::str::contains("comments"))
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("logout"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn test_articles_help_shows_subcommands() {
    cargo_bin_cmd!("blog")
        .args(["articles", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("edit"))
        .stdout(predicate::str::contains("delete"));
}

#[test]
fn test_content_flags_conflict() {
    cargo_bin_cmd!("blog")
        .args([
            "articles",
            "create",
            "--title",
            "T",
            "--content",
            "x",
            "--content-file",
            "body.md",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("blog")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("blog"));
}
