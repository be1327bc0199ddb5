//! Structural patches to generated Angular source files
//!
//! Install splices a well-known fragment at a literal anchor; when the
//! anchor is absent the file is left alone without a diagnostic. Removal
//! strips the inserted import and constructor lines by line-anchored
//! regexes and extracts the two injected method bodies with a brace-depth
//! scan, so a method containing its own `{ }` blocks is removed whole.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::pipeline::RuleCtx;
use crate::rules::paths::{APP_COMPONENT, APP_CONFIG};
use crate::tree::Tree;
use crate::ui;

const CLASS_ANCHOR: &str = "export class AppComponent {";

const THEME_HOOKS: &str = "import { OnInit } from '@angular/core';
import { ThemeService } from './services/theme.service';

export class AppComponent implements OnInit {
  constructor(private themeService: ThemeService) {}

  ngOnInit(): void {
    this.themeService.initializeTheme();
  }

  toggleTheme(): void {
    this.themeService.toggleTheme();
  }";

const PROVIDERS_ANCHOR: &str = "providers: [";

const PROVIDERS_SPLICE: &str = "providers: [\n    provideAnimations(), // required animations providers\n    provideToastr(), // Toastr providers\n";

const CORE_IMPORT: &str =
    "import { ApplicationConfig, provideZoneChangeDetection } from '@angular/core';";

const TOASTR_IMPORTS: &str = "import { ApplicationConfig, provideZoneChangeDetection } from '@angular/core';\nimport { provideAnimations } from '@angular/platform-browser/animations';\nimport { provideToastr } from 'ngx-toastr';";

// Each removal swallows the line terminator and at most one trailing blank
// line, restoring the spacing the install splice introduced.
static ONINIT_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^import \{ OnInit \} from '@angular/core';[ \t]*\r?\n?")
        .expect("pattern is valid")
});
static THEME_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^import \{ ThemeService \} from '\./services/theme\.service';(?:[ \t]*\r?\n){0,2}")
        .expect("pattern is valid")
});
static CTOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*constructor\(private themeService: ThemeService\) \{\}(?:[ \t]*\r?\n){0,2}")
        .expect("pattern is valid")
});

/// Inject the theme hooks into the root component
///
/// No-op (without diagnostic) when the class-declaration anchor is not
/// found in its exact expected form.
pub fn inject_theme_hooks(tree: &mut Tree, _ctx: &mut RuleCtx) -> Result<()> {
    let Some(content) = tree.read(APP_COMPONENT)? else {
        ui::warn(format!("{APP_COMPONENT} not found, skipping component patch"));
        return Ok(());
    };
    let updated = content.replacen(CLASS_ANCHOR, THEME_HOOKS, 1);
    if updated != content {
        tree.overwrite(APP_COMPONENT, &updated)?;
        ui::info(format!("Wired ThemeService into {APP_COMPONENT}"));
    }
    Ok(())
}

/// Strip the theme hooks from the root component
pub fn strip_theme_hooks(tree: &mut Tree, _ctx: &mut RuleCtx) -> Result<()> {
    let Some(content) = tree.read(APP_COMPONENT)? else {
        ui::info(format!("{APP_COMPONENT} not present, nothing to strip"));
        return Ok(());
    };

    let mut updated = ONINIT_IMPORT_RE.replace_all(&content, "").into_owned();
    updated = THEME_IMPORT_RE.replace_all(&updated, "").into_owned();
    updated = CTOR_RE.replace_all(&updated, "").into_owned();
    updated = remove_method_block(&updated, "ngOnInit");
    updated = remove_method_block(&updated, "toggleTheme");
    updated = updated.replacen(" implements OnInit", "", 1);

    if updated == content {
        ui::info(format!("No theme hooks found in {APP_COMPONENT}"));
        return Ok(());
    }
    tree.overwrite(APP_COMPONENT, &updated)?;
    ui::info(format!("Removed theme hooks from {APP_COMPONENT}"));
    Ok(())
}

/// Splice toastr providers and imports into the application configuration
///
/// Missing file: warn and skip. A file without the exact core-import line
/// still gets the provider entries, matching the unguarded behavior the
/// add-on has always had.
pub fn inject_toastr_providers(tree: &mut Tree, _ctx: &mut RuleCtx) -> Result<()> {
    let Some(content) = tree.read(APP_CONFIG)? else {
        ui::warn(
            "app.config.ts file not found. Ensure provideAnimations and provideToastr are manually added.",
        );
        return Ok(());
    };
    let updated = content
        .replacen(PROVIDERS_ANCHOR, PROVIDERS_SPLICE, 1)
        .replacen(CORE_IMPORT, TOASTR_IMPORTS, 1);
    tree.overwrite(APP_CONFIG, &updated)?;
    ui::info(format!("Registered toastr providers in {APP_CONFIG}"));
    Ok(())
}

/// Remove a whole method definition from a class body
///
/// Locates `name(` at the start of a line (ignoring indentation), then
/// walks braces to the matching close so nested blocks inside the body do
/// not cut the extraction short. Returns the input unchanged when the
/// method is not found. String literals containing braces are not
/// understood; the injected bodies never contain any.
fn remove_method_block(content: &str, name: &str) -> String {
    let Some(line_start) = find_method_line(content, name) else {
        return content.to_string();
    };
    let Some(open) = content[line_start..].find('{').map(|i| line_start + i) else {
        return content.to_string();
    };
    let Some(close) = matching_brace(content, open) else {
        return content.to_string();
    };

    let mut cut_end = consume_line_end(content, close + 1);
    cut_end = consume_blank_line(content, cut_end);
    format!("{}{}", &content[..line_start], &content[cut_end..])
}

/// Start of the line declaring `name(...)`, if any
fn find_method_line(content: &str, name: &str) -> Option<usize> {
    let needle = format!("{name}(");
    let mut from = 0;
    while let Some(pos) = content[from..].find(&needle).map(|i| from + i) {
        let line_start = content[..pos].rfind('\n').map_or(0, |i| i + 1);
        let prefix = &content[line_start..pos];
        // Indentation-only prefix distinguishes a declaration from a call
        // site such as `this.themeService.toggleTheme()`.
        if prefix.chars().all(|c| c == ' ' || c == '\t') {
            return Some(line_start);
        }
        from = pos + needle.len();
    }
    None
}

/// Index of the brace closing the block opened at `open`
fn matching_brace(content: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, b) in content.bytes().enumerate().skip(open) {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn consume_line_end(content: &str, mut idx: usize) -> usize {
    let bytes = content.as_bytes();
    while matches!(bytes.get(idx), Some(b' ' | b'\t' | b'\r')) {
        idx += 1;
    }
    if bytes.get(idx) == Some(&b'\n') {
        idx += 1;
    }
    idx
}

/// Consume one fully blank line, if the next line is blank
fn consume_blank_line(content: &str, idx: usize) -> usize {
    let rest = &content[idx..];
    let line_end = rest.find('\n').map_or(rest.len(), |i| i + 1);
    if rest[..line_end].trim().is_empty() && line_end > 0 {
        idx + line_end
    } else {
        idx
    }
}
