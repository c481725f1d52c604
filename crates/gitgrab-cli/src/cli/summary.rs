//! End-of-run summary line.

use gitgrab_core::batch::RunSummary;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Wraps `text` in `color` when `enabled`, always closing with a reset.
pub fn paint(color: Color, text: &str, enabled: bool) -> String {
    if enabled {
        format!("{}{}{}", color.code(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Color only when stdout is a terminal and `NO_COLOR` is unset.
pub fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

pub fn render(summary: &RunSummary, color: bool) -> String {
    let noun = if summary.total() == 1 {
        "repository"
    } else {
        "repositories"
    };
    let head = format!("cloned {} of {} {}", summary.succeeded, summary.total(), noun);
    match (summary.succeeded, summary.failed) {
        (_, 0) => paint(Color::Green, &head, color),
        (0, failed) => paint(Color::Red, &format!("{}, {} failed", head, failed), color),
        (_, failed) => paint(Color::Yellow, &format!("{}, {} failed", head, failed), color),
    }
}
