//! tailgraft - Tailwind CSS wiring for Angular workspaces
//!
//! A command line tool that installs or removes Tailwind CSS, a
//! theme-toggle helper service, and an optional toast add-on in an
//! existing Angular project, by staging file edits against the project
//! tree and committing them in one pass.

use clap::Parser;
use std::path::Path;

mod cli;
mod commands;
mod error;
mod pipeline;
mod rules;
mod tasks;
mod tree;
mod ui;

use cli::{Cli, Commands};
use error::{Result, TailgraftError};

/// Check that the target directory is an Angular workspace root
fn check_angular_project(root: &Path) -> Result<()> {
    if !root.join("angular.json").is_file() {
        return Err(TailgraftError::NotAnAngularProject {
            path: root.display().to_string(),
        });
    }

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        // The add command requires an Angular workspace; remove stays total
        // so it is a safe no-op against any directory.
        Commands::Add(args) => {
            let root = commands::resolve_project_root(cli.project)?;
            check_angular_project(&root)?;
            commands::add::run(&root, cli.verbose, args)
        }
        Commands::Remove(args) => {
            let root = commands::resolve_project_root(cli.project)?;
            commands::remove::run(&root, cli.verbose, args)
        }
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_check_angular_project_present() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("angular.json"), "{}").unwrap();

        assert!(check_angular_project(temp.path()).is_ok());
    }

    #[test]
    fn test_check_angular_project_absent() {
        let temp = TempDir::new().unwrap();

        let result = check_angular_project(temp.path());
        assert!(matches!(
            result.unwrap_err(),
            TailgraftError::NotAnAngularProject { .. }
        ));
    }
}
