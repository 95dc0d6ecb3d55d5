use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["preferredLocale"], "en");
    assert_eq!(parsed["autoDiscovery"], true);
    assert_eq!(parsed["inlayHintLength"], 40);
    assert!(
        parsed["translationDirs"].as_array().is_some(),
        "Config should have 'translationDirs' field"
    );

    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Created .transkeyrc.json"));
    assert!(test.root().join(".transkeyrc.json").exists());
    assert_config_content(&test.read_file(".transkeyrc.json")?)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".transkeyrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".transkeyrc.json already exists"));
    assert_eq!(test.read_file(".transkeyrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_force_overwrites() -> Result<()> {
    let test = CliTest::with_file(".transkeyrc.json", "{}")?;

    let output = test.command().args(["init", "--force"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_config_content(&test.read_file(".transkeyrc.json")?)?;

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_translations()?;

    test.command().arg("init").output()?;

    let output = test.command().args(["get", "home.title"]).output()?;
    assert!(
        output.status.success(),
        "get should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert_eq!(stdout(&output).trim(), "Home");

    Ok(())
}
