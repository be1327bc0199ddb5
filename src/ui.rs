//! Leveled terminal output
//!
//! Rules report progress through these helpers instead of writing to the
//! terminal directly, so a missing-prerequisite warning looks the same no
//! matter which rule emits it.

use console::Style;

/// Informational line on stdout
pub fn info(message: impl AsRef<str>) {
    println!("{}", message.as_ref());
}

/// Highlighted success line on stdout
pub fn success(message: impl AsRef<str>) {
    println!("{}", Style::new().green().bold().apply_to(message.as_ref()));
}

/// Warning line on stderr
///
/// Warnings never affect control flow: a rule that warns has skipped its
/// mutation and the run still succeeds.
pub fn warn(message: impl AsRef<str>) {
    eprintln!(
        "{} {}",
        Style::new().yellow().bold().apply_to("warning:"),
        message.as_ref()
    );
}
