//! Pure formatting functions for UI output.
//!
//! Status and success lines go to stdout; errors and warnings go to stderr so
//! they show up in CI logs even when stdout is captured.

use crate::boundary::BoundaryWarning;
use crate::cli::orchestration::UpdateOutcome;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Display a boundary warning to the user.
///
/// Shows a yellow warning icon followed by the warning message.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("\x1b[33m⚠ WARNING:\x1b[0m {}", warning);
}

/// Render the summary block for a finished update.
pub fn format_update_summary(outcome: &UpdateOutcome) -> String {
    let mut lines = vec![
        format!("\x1b[1mFormula:\x1b[0m {}", outcome.formula_path.display()),
        format!(
            "  version: \x1b[32m{}\x1b[0m ({} replaced)",
            outcome.version, outcome.version_matches
        ),
        format!(
            "  sha256:  \x1b[32m{}\x1b[0m ({} replaced)",
            outcome.sha256, outcome.sha256_matches
        ),
    ];
    if !outcome.written {
        lines.push("  (dry run, formula not written)".to_string());
    }
    lines.join("\n")
}

/// Display the summary for a finished update.
pub fn display_update_summary(outcome: &UpdateOutcome) {
    println!("\n{}", format_update_summary(outcome));
}
