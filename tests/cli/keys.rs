use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

#[test]
fn test_keys_lists_union_sorted() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = test.command().arg("keys").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "common.cancel\ncommon.save\nhome.title\nhome.welcome\n"
    );

    Ok(())
}

#[test]
fn test_keys_with_prefix() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = test.command().args(["keys", "home."]).output()?;

    assert_eq!(stdout(&output), "home.title\nhome.welcome\n");

    Ok(())
}

#[test]
fn test_keys_without_match() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = test.command().args(["keys", "missing."]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());

    Ok(())
}

#[test]
fn test_keys_skips_unparseable_files() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file("src/assets/i18n/de.json", "{ broken")?;

    let output = test.command().arg("keys").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output).lines().count(), 4);

    Ok(())
}
