//! Remove command: strip Tailwind CSS wiring
//!
//! A single unconditional phase: every removal rule runs in fixed order and
//! logs when it found nothing to do.

use std::path::Path;

use crate::cli::RemoveArgs;
use crate::error::Result;
use crate::pipeline::{self, RuleCtx};
use crate::tasks::TaskQueue;
use crate::tree::Tree;
use crate::ui;

/// Run remove command
pub fn run(root: &Path, verbose: bool, args: RemoveArgs) -> Result<()> {
    let mut tree = Tree::open(root)?;
    let mut tasks = TaskQueue::default();
    let mut ctx = RuleCtx { tasks: &mut tasks };

    ui::info("Removing Tailwind CSS wiring...");
    pipeline::apply(&mut tree, &mut ctx, &pipeline::remove_rules(), verbose)?;

    if args.dry_run {
        ui::info("Dry run, nothing written. Staged changes:");
        for (path, kind) in tree.changes() {
            ui::info(format!("  {kind} {path}"));
        }
        return Ok(());
    }

    let changed = tree.commit()?;
    if changed.is_empty() {
        ui::info("Nothing to remove.");
    } else {
        ui::success(format!("Committed {} change(s)", changed.len()));
        ui::info("Run 'npm install' to prune removed packages from node_modules.");
    }
    Ok(())
}
