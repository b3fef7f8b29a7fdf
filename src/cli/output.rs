//! Colored output helpers for the kiosk CLI.

use crate::faq::FaqTable;
use owo_colors::OwoColorize;

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print the startup banner
    pub fn banner(&self) {
        if self.colored {
            println!(
                "\n   {} {}",
                "Signbot — Open-House Kiosk Assistant".bright_cyan().bold(),
                format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
            );
        } else {
            println!(
                "\n   Signbot — Open-House Kiosk Assistant v{}",
                env!("CARGO_PKG_VERSION")
            );
        }
    }

    /// Print a key/value line
    pub fn kv(&self, key: &str, value: &str) {
        if self.colored {
            println!("   {} {}", format!("{}:", key).bright_white().bold(), value);
        } else {
            println!("   {}: {}", key, value);
        }
    }

    /// Print the canned question table
    pub fn question_table(&self, faq: &FaqTable) {
        if self.colored {
            println!("{}", "Canned questions".bright_white().bold());
        } else {
            println!("Canned questions");
        }

        for question in faq.questions() {
            if self.colored {
                println!("  {} {}", "?".green(), question);
            } else {
                println!("  ? {}", question);
            }
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("{} {}", "error:".bright_red().bold(), message);
        } else {
            eprintln!("error: {}", message);
        }
    }
}
