use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_get_prefers_default_locale() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = test.command().args(["get", "home.title"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    insta::assert_snapshot!(stdout(&output).trim(), @"Home");

    Ok(())
}

#[test]
fn test_get_with_locale_override() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = test
        .command()
        .args(["get", "home.title", "--locale", "fr"])
        .output()?;

    insta::assert_snapshot!(stdout(&output).trim(), @"Accueil");

    Ok(())
}

#[test]
fn test_get_with_locale_from_config() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file(".transkeyrc.json", r#"{"lang": "fr"}"#)?;

    let output = test.command().args(["get", "common.save"]).output()?;

    assert_eq!(stdout(&output).trim(), "Enregistrer");

    Ok(())
}

#[test]
fn test_get_falls_back_to_other_locale() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = test.command().args(["get", "common.cancel"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output).trim(), "Annuler");

    Ok(())
}

#[test]
fn test_get_truncates_to_hint_length() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file(".transkeyrc.json", r#"{"inlayHintLength": 12}"#)?;

    let output = test
        .command()
        .args(["get", "home.welcome", "--truncate"])
        .output()?;

    assert_eq!(stdout(&output).trim(), "Welcome back...");

    Ok(())
}

#[test]
fn test_get_unknown_key() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = test.command().args(["get", "home"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Unknown translation key: home"));

    Ok(())
}
