//! Tailwind marker directives in the project stylesheet
//!
//! Install appends the three-line directive block after whatever content is
//! already there, with no prior-presence check: re-running the installer
//! duplicates the block. Removal strips every occurrence of each directive
//! independently and trims the result, so duplicated blocks are cleaned up
//! in one pass.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::pipeline::RuleCtx;
use crate::rules::paths::STYLESHEET;
use crate::tree::Tree;
use crate::ui;

const DIRECTIVES: &str = "\n@tailwind base;\n@tailwind components;\n@tailwind utilities;\n";

static DIRECTIVE_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"@tailwind base;\s*").expect("pattern is valid"),
        Regex::new(r"@tailwind components;\s*").expect("pattern is valid"),
        Regex::new(r"@tailwind utilities;\s*").expect("pattern is valid"),
    ]
});

/// Append the directive block to the stylesheet, creating it if absent
pub fn append_directives(tree: &mut Tree, _ctx: &mut RuleCtx) -> Result<()> {
    match tree.read(STYLESHEET)? {
        Some(existing) => {
            tree.overwrite(STYLESHEET, &format!("{existing}{DIRECTIVES}"))?;
            ui::info(format!("Added Tailwind directives to {STYLESHEET}"));
        }
        None => {
            tree.create(STYLESHEET, DIRECTIVES)?;
            ui::info(format!("Created {STYLESHEET} with Tailwind directives"));
        }
    }
    Ok(())
}

/// Strip all occurrences of each directive and trim surrounding whitespace
pub fn strip_directives(tree: &mut Tree, _ctx: &mut RuleCtx) -> Result<()> {
    let Some(content) = tree.read(STYLESHEET)? else {
        ui::info(format!("{STYLESHEET} not present, nothing to strip"));
        return Ok(());
    };

    let mut stripped = content.clone();
    for pattern in DIRECTIVE_PATTERNS.iter() {
        stripped = pattern.replace_all(&stripped, "").into_owned();
    }
    let stripped = stripped.trim();

    tree.overwrite(STYLESHEET, stripped)?;
    if stripped == content.trim() {
        ui::info(format!("No Tailwind directives found in {STYLESHEET}"));
    } else {
        ui::info(format!("Removed Tailwind directives from {STYLESHEET}"));
    }
    Ok(())
}
