//! Add command: install Tailwind CSS wiring
//!
//! Two-phase pipeline: the base rules stage their mutations, then a single
//! confirmation step may append the toast add-on rules. Only after every
//! rule has staged its edits does the tree commit, and only after a commit
//! do the registered package installations run.

use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use inquire::Confirm;

use crate::cli::AddArgs;
use crate::error::Result;
use crate::pipeline::{self, RuleCtx};
use crate::tasks::TaskQueue;
use crate::tree::Tree;
use crate::ui;

/// Run add command
pub fn run(root: &Path, verbose: bool, args: AddArgs) -> Result<()> {
    let mut tree = Tree::open(root)?;
    let mut tasks = TaskQueue::default();
    let mut ctx = RuleCtx { tasks: &mut tasks };

    ui::info("Configuring Tailwind CSS...");
    pipeline::apply(&mut tree, &mut ctx, &pipeline::add_rules(), verbose)?;

    if resolve_toast_choice(&args)? {
        ui::info("Adding @kalees64/toast...");
        pipeline::apply(&mut tree, &mut ctx, &pipeline::toast_rules(), verbose)?;
        ui::info("Setup complete! Run the project to use ngx-toastr.");
    }

    if args.dry_run {
        report_dry_run(&tree, &tasks);
        return Ok(());
    }

    let changed = tree.commit()?;
    ui::success(format!("Committed {} change(s)", changed.len()));

    run_install_tasks(root, tasks, args.skip_install);
    Ok(())
}

/// The single suspension point of the whole pipeline
fn resolve_toast_choice(args: &AddArgs) -> Result<bool> {
    if args.toast {
        return Ok(true);
    }
    if args.no_toast {
        return Ok(false);
    }
    // Without a terminal there is nobody to ask; decline rather than hang.
    if !console::user_attended() {
        return Ok(false);
    }
    Confirm::new("Would you like to add @kalees64/toast?")
        .with_default(true)
        .prompt()
        .map_err(Into::into)
}

fn report_dry_run(tree: &Tree, tasks: &TaskQueue) {
    ui::info("Dry run, nothing written. Staged changes:");
    for (path, kind) in tree.changes() {
        ui::info(format!("  {kind} {path}"));
    }
    for task in tasks.iter() {
        ui::info(format!("  run    {}", task.command_line()));
    }
}

/// Execute deferred install tasks after the tree has committed
///
/// Fire-and-forget: a failed or missing package manager produces a warning
/// with the command to run by hand, never a run failure.
fn run_install_tasks(root: &Path, tasks: TaskQueue, skip_install: bool) {
    for task in tasks.into_tasks() {
        if skip_install {
            ui::info(format!("Skipped package installation: {}", task.command_line()));
            continue;
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(task.command_line());
        spinner.enable_steady_tick(Duration::from_millis(80));

        let status = Command::new("npm")
            .arg("install")
            .args(&task.packages)
            .current_dir(root)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        spinner.finish_and_clear();

        match status {
            Ok(exit) if exit.success() => {
                ui::info(format!("Installed {}", task.packages.join(" ")));
            }
            _ => {
                ui::warn(format!(
                    "Package installation did not complete. Run manually: {}",
                    task.command_line()
                ));
            }
        }
    }
}
