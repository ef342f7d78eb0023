//! Best-effort terminal control: clearing, cursor visibility, color reset.

use std::env;
use std::process::Command;

/// Clears the terminal between frames. With a terminal type advertised, try
/// `clear` and then `cls`; otherwise, or if both commands fail, scroll the
/// old frame out of view with blank lines. Never fails observably.
pub fn clear() {
    let term = env::var("TERM").ok();

    if terminal_present(term.as_deref()) && (run("clear") || run("cls")) {
        return;
    }
    print!("{}", blank_lines());
}

// Through the shell, so builtins like cmd.exe's `cls` still resolve.
fn run(command: &str) -> bool {
    let status = if cfg!(target_os = "windows") {
        Command::new("cmd").arg("/C").arg(command).status()
    } else {
        Command::new("sh").arg("-c").arg(command).status()
    };
    status.map(|status| status.success()).unwrap_or(false)
}

pub fn hide_cursor() {
    print!("\x1b[?25l");
}

pub fn show_cursor() {
    print!("\x1b[?25h");
}

pub fn reset_colors() {
    print!("\x1b[0m");
}

fn terminal_present(term: Option<&str>) -> bool {
    term.is_some_and(|value| !value.is_empty())
}

fn blank_lines() -> String {
    "\n".repeat(500)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_term_counts_as_no_terminal() {
        assert!(!terminal_present(None));
        assert!(!terminal_present(Some("")));
        assert!(terminal_present(Some("xterm-256color")));
    }

    #[test]
    fn fallback_scrolls_with_500_blank_lines() {
        assert_eq!(blank_lines().matches('\n').count(), 500);
    }
}
