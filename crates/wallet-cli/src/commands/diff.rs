//! Unified diff output for dry runs.

use colored::Colorize;
use similar::TextDiff;

/// Render a unified diff of `old` against `new` with both sides labelled `path`.
pub fn unified_diff(path: &str, old: &str, new: &str) -> String {
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{path}"), &format!("b/{path}"))
        .to_string()
}

/// Print a unified diff, colouring added and removed lines.
pub fn print_diff(path: &str, old: &str, new: &str) {
    for line in unified_diff(path, old, new).lines() {
        if line.starts_with("+++") || line.starts_with("---") {
            println!("{}", line.bold());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else {
            println!("{line}");
        }
    }
}
