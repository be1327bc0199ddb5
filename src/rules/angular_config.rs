//! JSON edits to the Angular workspace configuration (`angular.json`)
//!
//! The styles array of the first project (first key in insertion order of
//! the `projects` mapping, which is why serde_json's `preserve_order`
//! feature is required) is the only field these rules touch. Insertion is
//! idempotent; removal filters entries by substring and persists even when
//! nothing matched.

use serde_json::Value;

use crate::error::{Result, TailgraftError};
use crate::pipeline::RuleCtx;
use crate::rules::paths::ANGULAR_JSON;
use crate::tree::Tree;
use crate::ui;

/// Stylesheet entry registered by the base install
pub const BASE_STYLE_ENTRY: &str = "src/styles.css";

/// Stylesheet entry registered by the toastr add-on
pub const TOASTR_STYLE_ENTRY: &str = "node_modules/ngx-toastr/toastr.css";

/// Substring used to filter entries out on removal
const REMOVAL_NEEDLE: &str = "tailwind.config.js";

fn malformed(detail: &str) -> TailgraftError {
    TailgraftError::MalformedConfig {
        path: ANGULAR_JSON.to_string(),
        detail: detail.to_string(),
    }
}

fn load(tree: &Tree) -> Result<Option<Value>> {
    let Some(text) = tree.read(ANGULAR_JSON)? else {
        return Ok(None);
    };
    let doc = serde_json::from_str(&text).map_err(|e| TailgraftError::ConfigParseFailed {
        path: ANGULAR_JSON.to_string(),
        reason: e.to_string(),
    })?;
    Ok(Some(doc))
}

fn save(tree: &mut Tree, doc: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(doc).map_err(|e| TailgraftError::ConfigParseFailed {
        path: ANGULAR_JSON.to_string(),
        reason: e.to_string(),
    })?;
    tree.overwrite(ANGULAR_JSON, &text)
}

/// The styles array of the first project, by key insertion order
///
/// Any missing level of the expected nested shape is a `MalformedConfig`
/// error; this is the one place a run fails outright.
fn styles_array(doc: &mut Value) -> Result<&mut Vec<Value>> {
    let projects = doc
        .get_mut("projects")
        .and_then(Value::as_object_mut)
        .ok_or_else(|| malformed("projects"))?;
    let first = projects
        .values_mut()
        .next()
        .ok_or_else(|| malformed("projects (no project defined)"))?;
    first
        .pointer_mut("/architect/build/options/styles")
        .and_then(Value::as_array_mut)
        .ok_or_else(|| malformed("architect.build.options.styles"))
}

/// Ensure `src/styles.css` appears in the first project's styles array
pub fn register_base_stylesheet(tree: &mut Tree, _ctx: &mut RuleCtx) -> Result<()> {
    let Some(mut doc) = load(tree)? else {
        ui::warn("angular.json not found, skipping styles registration");
        return Ok(());
    };
    let styles = styles_array(&mut doc)?;
    let entry = Value::String(BASE_STYLE_ENTRY.to_string());
    if !styles.contains(&entry) {
        styles.push(entry);
    }
    save(tree, &doc)
}

/// Ensure the toastr stylesheet appears in the styles array
///
/// Unlike the base registration this persists only when the entry was
/// actually added.
pub fn register_toastr_stylesheet(tree: &mut Tree, _ctx: &mut RuleCtx) -> Result<()> {
    let Some(mut doc) = load(tree)? else {
        ui::warn("angular.json not found, skipping toastr styles registration");
        return Ok(());
    };
    let styles = styles_array(&mut doc)?;
    let entry = Value::String(TOASTR_STYLE_ENTRY.to_string());
    if styles.contains(&entry) {
        return Ok(());
    }
    styles.push(entry);
    save(tree, &doc)
}

/// Drop styles entries mentioning the Tailwind configuration file
pub fn unregister_tailwind_entries(tree: &mut Tree, _ctx: &mut RuleCtx) -> Result<()> {
    let Some(mut doc) = load(tree)? else {
        ui::info("angular.json not present, nothing to unregister");
        return Ok(());
    };
    let styles = styles_array(&mut doc)?;
    styles.retain(|entry| {
        !entry
            .as_str()
            .is_some_and(|s| s.contains(REMOVAL_NEEDLE))
    });
    save(tree, &doc)
}
