//! Tests for CLI commands (validate, submit)

use std::process::{Command, Output};

fn psycenter() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_psycenter"));
    command
        .args(["--config", "config/missing.toml"])
        .env_remove("API_URL")
        .env_remove("CONFIG_PATH")
        .env("NO_PROXY", "*");

    command
}

fn run(args: &[&str]) -> anyhow::Result<Output> {
    Ok(psycenter().args(args).output()?)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_cli_help_shows_all_commands() -> anyhow::Result<()> {
    let output = run(&["--help"])?;
    let help_text = stdout(&output);

    assert!(output.status.success());
    assert!(help_text.contains("validate"), "validate command not in help");
    assert!(help_text.contains("submit"), "submit command not in help");

    Ok(())
}

#[test]
fn test_validate_reports_missing_fields() -> anyhow::Result<()> {
    let output = run(&["validate", "name=Aigerim", "email=a@test"])?;
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(text.contains("Email: Некорректный email"), "{text}");
    assert!(text.contains("Сообщение: Обязательное поле"), "{text}");
    assert!(!text.contains("Имя"), "{text}");

    Ok(())
}

#[test]
fn test_validate_in_kazakh() -> anyhow::Result<()> {
    let output = run(&["validate", "--lang", "kz"])?;
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(text.contains("Аты: Міндетті өріс"), "{text}");
    assert!(
        text.contains("Құпиялылық саясатымен келісім: Құпиялылық саясатымен келісу қажет"),
        "{text}"
    );

    Ok(())
}

#[test]
fn test_validate_accepts_complete_form() -> anyhow::Result<()> {
    let output = run(&[
        "validate",
        "name=Aigerim",
        "email=a@test.kz",
        "subject=question",
        "message=Hello",
        "privacy=on",
    ])?;

    assert!(output.status.success(), "{}", stdout(&output));
    assert!(stdout(&output).contains("Форма заполнена верно"));

    Ok(())
}

#[test]
fn test_unknown_field_is_an_error() -> anyhow::Result<()> {
    let output = run(&["validate", "age=42"])?;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("age"), "{}", stderr(&output));

    Ok(())
}

#[test]
fn test_submit_invalid_form_sends_nothing() -> anyhow::Result<()> {
    let output = run(&["submit", "name=Aigerim"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Обязательное поле"));

    Ok(())
}

#[test]
fn test_submit_to_unreachable_api() -> anyhow::Result<()> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);

    let output = psycenter()
        .env("API_URL", format!("http://{addr}"))
        .args([
            "submit",
            "name=Aigerim",
            "email=a@test.kz",
            "subject=consultation",
            "message=Hello",
            "privacy=yes",
        ])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).contains("⚠️ Ошибка соединения. Проверьте интернет."),
        "{}",
        stderr(&output)
    );

    Ok(())
}
