use assert_cmd::Command;
use predicates::prelude::*;

fn bp() -> Command {
    let mut cmd = Command::cargo_bin("bp").unwrap();
    cmd.env_clear()
        .env("RUST_LOG", "error")
        .env("BIND_ADDR", "127.0.0.1:0")
        .timeout(std::time::Duration::from_secs(10));
    cmd
}

#[test]
fn exits_without_openai_key() {
    bp()
        .env("NEWSAPI_KEY", "news-key")
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn exits_without_news_key() {
    bp()
        .env("OPENAI_API_KEY", "sk-test")
        .assert()
        .failure()
        .stderr(predicate::str::contains("NEWSAPI_KEY"));
}

#[test]
fn exits_with_empty_keys() {
    bp()
        .env("OPENAI_API_KEY", "")
        .env("NEWSAPI_KEY", "")
        .assert()
        .failure()
        .stderr(predicate::str::contains("environment variable is not set"));
}
