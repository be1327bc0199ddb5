//! Dependency removal from the package manifest (`package.json`)

use serde_json::Value;

use crate::error::{Result, TailgraftError};
use crate::pipeline::RuleCtx;
use crate::rules::paths::PACKAGE_JSON;
use crate::tree::Tree;
use crate::ui;

/// Packages the installer registers and the uninstaller strips
pub const MANAGED_PACKAGES: [&str; 3] = ["tailwindcss", "autoprefixer", "postcss"];

/// Remove the managed packages from both dependency mappings
///
/// Absent packages and absent mappings are no-ops; the document is
/// persisted pretty-printed either way.
pub fn remove_tailwind_packages(tree: &mut Tree, _ctx: &mut RuleCtx) -> Result<()> {
    let Some(text) = tree.read(PACKAGE_JSON)? else {
        ui::warn("package.json not found, skipping dependency removal");
        return Ok(());
    };
    let mut doc: Value =
        serde_json::from_str(&text).map_err(|e| TailgraftError::ConfigParseFailed {
            path: PACKAGE_JSON.to_string(),
            reason: e.to_string(),
        })?;

    let mut removed = 0;
    for section in ["dependencies", "devDependencies"] {
        if let Some(map) = doc.get_mut(section).and_then(Value::as_object_mut) {
            for package in MANAGED_PACKAGES {
                if map.shift_remove(package).is_some() {
                    removed += 1;
                }
            }
        }
    }

    let text = serde_json::to_string_pretty(&doc).map_err(|e| TailgraftError::ConfigParseFailed {
        path: PACKAGE_JSON.to_string(),
        reason: e.to_string(),
    })?;
    tree.overwrite(PACKAGE_JSON, &text)?;

    if removed > 0 {
        ui::info(format!("Removed {removed} Tailwind package(s) from {PACKAGE_JSON}"));
    } else {
        ui::info(format!("No Tailwind packages found in {PACKAGE_JSON}"));
    }
    Ok(())
}
