//! Status message helpers for terminal output.

use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;

static COLORS: AtomicBool = AtomicBool::new(false);

/// Decide color support once, honoring --no-color, NO_COLOR, and the
/// terminal's capabilities.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color
        && std::env::var_os("NO_COLOR").is_none()
        && console::Term::stderr().features().colors_supported();
    COLORS.store(enabled, Ordering::Relaxed);
}

fn colors() -> bool {
    COLORS.load(Ordering::Relaxed)
}

/// Print a success message to stderr.
pub fn success(message: &str) {
    if colors() {
        eprintln!("{} {}", "✓".green().bold(), message);
    } else {
        eprintln!("✓ {message}");
    }
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    if colors() {
        eprintln!("{} {}", "ℹ".blue().bold(), message);
    } else {
        eprintln!("ℹ {message}");
    }
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    if colors() {
        eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
    } else {
        eprintln!("⚠ {message}");
    }
}

/// Print an error message to stderr.
pub fn error(message: &str) {
    if colors() {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    } else {
        eprintln!("✗ {message}");
    }
}
