//! Ordered rule pipelines for install and removal
//!
//! A pipeline is an explicit list of named rules applied in declared order.
//! The add pipeline runs in two phases: the base rules stage their
//! mutations synchronously, then one confirmation step may append the
//! add-on rule group. The remove pipeline is a single unconditional phase.

use crate::error::Result;
use crate::rules::{angular_config, assets, component, manifest, stylesheet};
use crate::tasks::{InstallTask, TaskQueue};
use crate::tree::Tree;
use crate::ui;

/// Context shared by rules during one run
pub struct RuleCtx<'a> {
    pub tasks: &'a mut TaskQueue,
}

type RuleFn = fn(&mut Tree, &mut RuleCtx) -> Result<()>;

/// A named mutation step
pub struct Rule {
    pub name: &'static str,
    pub run: RuleFn,
}

impl Rule {
    const fn new(name: &'static str, run: RuleFn) -> Self {
        Self { name, run }
    }
}

/// Apply rules in declared order
pub fn apply(tree: &mut Tree, ctx: &mut RuleCtx, rules: &[Rule], verbose: bool) -> Result<()> {
    for rule in rules {
        if verbose {
            ui::info(format!("  rule: {}", rule.name));
        }
        (rule.run)(tree, ctx)?;
    }
    Ok(())
}

fn request_base_packages(_tree: &mut Tree, ctx: &mut RuleCtx) -> Result<()> {
    ctx.tasks
        .add(InstallTask::new(["tailwindcss", "postcss", "autoprefixer"]));
    Ok(())
}

fn request_toastr_packages(_tree: &mut Tree, ctx: &mut RuleCtx) -> Result<()> {
    ctx.tasks.add(InstallTask::new([
        "ngx-toastr",
        "@angular/animations",
        "sweetalert2",
    ]));
    Ok(())
}

/// Base install rules, in declared order
pub fn add_rules() -> Vec<Rule> {
    vec![
        Rule::new("register-base-stylesheet", angular_config::register_base_stylesheet),
        Rule::new("emit-tailwind-config", assets::emit_tailwind_config),
        Rule::new("emit-postcss-config", assets::emit_postcss_config),
        Rule::new("append-style-directives", stylesheet::append_directives),
        Rule::new("emit-theme-service", assets::emit_theme_service),
        Rule::new("inject-theme-hooks", component::inject_theme_hooks),
        Rule::new("request-base-packages", request_base_packages),
    ]
}

/// Add-on rules staged after an affirmative confirmation
pub fn toast_rules() -> Vec<Rule> {
    vec![
        Rule::new("register-toastr-stylesheet", angular_config::register_toastr_stylesheet),
        Rule::new("inject-toastr-providers", component::inject_toastr_providers),
        Rule::new("request-toastr-packages", request_toastr_packages),
    ]
}

/// Removal rules, in fixed order, no interactivity
pub fn remove_rules() -> Vec<Rule> {
    vec![
        Rule::new("strip-manifest-packages", manifest::remove_tailwind_packages),
        Rule::new("delete-tailwind-config", assets::delete_tailwind_config),
        Rule::new("delete-postcss-config", assets::delete_postcss_config),
        Rule::new("strip-style-directives", stylesheet::strip_directives),
        Rule::new("unregister-tailwind-entries", angular_config::unregister_tailwind_entries),
        Rule::new("strip-theme-hooks", component::strip_theme_hooks),
        Rule::new("delete-theme-service", assets::delete_theme_service),
    ]
}
