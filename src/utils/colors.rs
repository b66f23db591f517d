/// ANSI color helper utilities for terminal output.
use std::fmt::Display;
use std::io::IsTerminal;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// True when stdout is a terminal; piped output stays plain.
pub fn enabled() -> bool {
    std::io::stdout().is_terminal()
}

/// Applies report colors, or passes text through when disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    pub enabled: bool,
}

impl Painter {
    pub const fn plain() -> Self {
        Self { enabled: false }
    }

    fn paint<T: Display>(&self, color: &str, v: T) -> String {
        if self.enabled {
            format!("{color}{v}{RESET}")
        } else {
            v.to_string()
        }
    }

    /// Key of a report line
    pub fn label(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }

    /// Computed value
    pub fn value<T: Display>(&self, v: T) -> String {
        self.paint(GREEN, v)
    }

    /// Placeholder text such as "--"
    pub fn muted(&self, text: &str) -> String {
        self.paint(GREY, text)
    }

    pub fn caution(&self, text: &str) -> String {
        self.paint(YELLOW, text)
    }
}
