use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_tree_lists_directories_and_files() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file("libs/ui/i18n/en.json", r#"{"ui":{"ok":"OK"}}"#)?;

    let output = test.command().arg("tree").output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "libs/ui/i18n\n└── en.json (en)\nsrc/assets/i18n\n├── en.json (en)\n└── fr.json (fr)\n"
    );

    Ok(())
}

#[test]
fn test_tree_uses_configured_directories() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file("locales/de.json", r#"{"a":"b"}"#)?;
    test.write_file(
        ".transkeyrc.json",
        r#"{"autoDiscovery": false, "translationDirs": ["locales"]}"#,
    )?;

    let output = test.command().arg("tree").output()?;

    assert_eq!(stdout(&output), "locales\n└── de.json (de)\n");

    Ok(())
}

#[test]
fn test_tree_without_directories() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("tree").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("no translation directories found"));

    Ok(())
}
