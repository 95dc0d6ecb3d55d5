use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_scan_reports_discovered_directories() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file("node_modules/lib/i18n/en.json", r#"{"lib":"x"}"#)?;

    let output = test.command().arg("scan").output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(out.contains("src/assets/i18n  2 locale file(s)"));
    assert!(out.contains("Found 1 translation directory (2 locale files, 4 keys)"));
    assert!(!out.contains("node_modules"));

    Ok(())
}

#[test]
fn test_scan_runs_even_when_auto_discovery_disabled() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file(".transkeyrc.json", r#"{"autoDiscovery": false}"#)?;

    let output = test.command().arg("scan").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("4 keys"));

    Ok(())
}

#[test]
fn test_scan_skips_mixed_directories() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file("docs/en.json", r#"{"doc":"x"}"#)?;
    test.write_file("docs/README.md", "# Docs")?;

    let output = test.command().arg("scan").output()?;

    assert!(!stdout(&output).contains("docs"));

    Ok(())
}

#[test]
fn test_scan_without_translations() -> Result<()> {
    let test = CliTest::with_file("src/main.ts", "console.log('hi');")?;

    let output = test.command().arg("scan").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("warning: no translation directories found"));

    Ok(())
}

#[test]
fn test_scan_with_root_argument() -> Result<()> {
    let test = CliTest::with_translations()?;
    let root = test.root().to_path_buf();

    let output = test
        .command()
        .current_dir(std::env::temp_dir())
        .arg("scan")
        .arg("--root")
        .arg(&root)
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("src/assets/i18n"));

    Ok(())
}

#[test]
fn test_scan_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file(".transkeyrc.json", "{ invalid")?;

    let output = test.command().arg("scan").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse config file"));

    Ok(())
}
