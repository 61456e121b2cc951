//! Status-line formatting for the combiner's console output.
//!
//! Colour is a plain value passed to whoever prints, decided once at startup.

use std::env;
use std::io::IsTerminal;

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub const PLAIN: Palette = Palette { enabled: false };
    pub const ANSI: Palette = Palette { enabled: true };

    /// Colour when the stream is a terminal, `NO_COLOR` is unset and the
    /// caller did not opt out.
    pub fn detect(stream_is_terminal: bool, opt_out: bool) -> Self {
        let no_color = env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Palette {
            enabled: stream_is_terminal && !opt_out && !no_color,
        }
    }

    /// Detect for stderr, where status lines are written.
    pub fn for_stderr(opt_out: bool) -> Self {
        Self::detect(std::io::stderr().is_terminal(), opt_out)
    }

    pub fn found(&self, label: &str) -> String {
        format!("  {} {label}", self.paint(GREEN, "✓"))
    }

    pub fn not_found(&self, reference: &str) -> String {
        format!(
            "  {} Module not found: {reference}",
            self.paint(YELLOW, "⚠")
        )
    }

    pub fn heading(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    pub fn note(&self, text: &str) -> String {
        self.paint(BLUE, text)
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}
