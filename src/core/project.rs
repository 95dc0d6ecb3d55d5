//! Detection of projects that use ngx-translate.
//!
//! Editor features only switch on for Angular or Nx workspaces depending on
//! `@ngx-translate/core`. Any failure to read or parse `package.json` means
//! "not eligible", never an error.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

const NGX_TRANSLATE_PACKAGE: &str = "@ngx-translate/core";
const ANGULAR_PACKAGES: &[&str] = &["@angular/core", "@nx/workspace"];
const WORKSPACE_FILES: &[&str] = &["angular.json", "nx.json"];

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageJson {
    #[serde(default)]
    dependencies: Map<String, Value>,
    #[serde(default)]
    dev_dependencies: Map<String, Value>,
    #[serde(default)]
    peer_dependencies: Map<String, Value>,
}

impl PackageJson {
    fn depends_on(&self, package: &str) -> bool {
        self.dependencies.contains_key(package)
            || self.dev_dependencies.contains_key(package)
            || self.peer_dependencies.contains_key(package)
    }
}

fn read_package_json(root: &Path) -> Result<PackageJson> {
    let path = root.join("package.json");
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))
}

/// Whether `root` is an Angular or Nx project using ngx-translate.
pub fn is_ngx_translate_project(root: &Path) -> bool {
    let package = match read_package_json(root) {
        Ok(package) => package,
        Err(e) => {
            debug!(error = %e, "project is not eligible");
            return false;
        }
    };

    if !package.depends_on(NGX_TRANSLATE_PACKAGE) {
        return false;
    }

    ANGULAR_PACKAGES.iter().any(|p| package.depends_on(p))
        || WORKSPACE_FILES.iter().any(|f| root.join(f).exists())
}
