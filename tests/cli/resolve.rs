use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_resolve_prefers_default_locale_file() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = test.command().args(["resolve", "home.title"]).output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "src/assets/i18n/en.json:3:5  Home\n");

    Ok(())
}

#[test]
fn test_resolve_all_locations() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = test
        .command()
        .args(["resolve", "common.save", "--all"])
        .output()?;

    assert_eq!(
        stdout(&output),
        "src/assets/i18n/en.json:7:5  Save\nsrc/assets/i18n/fr.json:6:5  Enregistrer\n"
    );

    Ok(())
}

#[test]
fn test_resolve_falls_back_to_other_locale_file() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = test.command().args(["resolve", "common.cancel"]).output()?;

    assert_eq!(stdout(&output), "src/assets/i18n/fr.json:7:5  Annuler\n");

    Ok(())
}

#[test]
fn test_resolve_object_is_not_a_leaf() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = test.command().args(["resolve", "home"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown translation key: home"));

    Ok(())
}
