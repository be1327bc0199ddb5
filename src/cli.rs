//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tailgraft - Tailwind CSS wiring for Angular workspaces
///
/// Add or remove Tailwind CSS, a theme-toggle helper service, and an
/// optional toast add-on in an existing Angular project.
#[derive(Parser, Debug)]
#[command(
    name = "tailgraft",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Tailwind CSS installer/uninstaller for Angular workspaces",
    long_about = "tailgraft wires Tailwind CSS into an existing Angular project: build \
                  configuration, PostCSS and Tailwind config files, stylesheet directives, \
                  and a small theme-toggle service. The remove command strips the same \
                  edits back out.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  tailgraft add\n    \
                  tailgraft add --no-toast --skip-install\n    \
                  tailgraft remove\n    \
                  tailgraft add --dry-run\n\n\
                  \x1b[1m\x1b[32mNote:\x1b[0m\n    \
                  All edits are staged and written in one pass at the end of a run."
)]
pub struct Cli {
    /// Angular project directory (defaults to current directory)
    #[arg(long, short = 'p', global = true)]
    pub project: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Wire Tailwind CSS and the theme helper into the project
    Add(AddArgs),

    /// Strip Tailwind CSS wiring from the project
    Remove(RemoveArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the add command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Add with interactive add-on prompt:\n    tailgraft add\n\n\
                  Add including the toast add-on, no prompt:\n    tailgraft add --toast\n\n\
                  Add without the toast add-on:\n    tailgraft add --no-toast\n\n\
                  Preview the staged changes:\n    tailgraft add --dry-run\n\n\
                  Skip the npm install step:\n    tailgraft add --skip-install")]
pub struct AddArgs {
    /// Add the @kalees64/toast add-on without prompting
    #[arg(long, conflicts_with = "no_toast")]
    pub toast: bool,

    /// Skip the @kalees64/toast add-on without prompting
    #[arg(long)]
    pub no_toast: bool,

    /// Stage and list changes without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Do not run the package manager after committing changes
    #[arg(long)]
    pub skip_install: bool,
}

/// Arguments for the remove command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Strip Tailwind wiring:\n    tailgraft remove\n\n\
                  Preview the staged removals:\n    tailgraft remove --dry-run")]
pub struct RemoveArgs {
    /// Stage and list changes without writing them
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    tailgraft completions --shell bash > ~/.bash_completion.d/tailgraft\n\n\
                  Generate zsh completions:\n    tailgraft completions --shell zsh > ~/.zfunc/_tailgraft")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
