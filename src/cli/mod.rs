//! CLI module for the kiosk server binary.
//!
//! Uses clap for argument parsing and owo-colors for colored terminal output.

pub mod output;

use clap::{Parser, Subcommand};

/// Signbot - Open-House Kiosk Assistant
///
/// Serves the open-house kiosk page: canned school Q&A, hosted chat with
/// spoken answers, and camera snapshot interpretation.
#[derive(Parser, Debug)]
#[command(
    name = "signbot-server",
    version,
    about = "Signbot - Open-House Kiosk Assistant",
    long_about = "Serves the open-house kiosk page: canned school Q&A, hosted chat with\n\
                  spoken answers, and camera snapshot interpretation (room description,\n\
                  ASL letter, ASL word).",
    after_help = "EXAMPLES:\n    \
                  signbot-server                  # Start the kiosk (requires OPENAI_API_KEY)\n    \
                  signbot-server --port 8080      # Listen on a different port\n    \
                  signbot-server questions        # Print the canned question table"
)]
pub struct Cli {
    /// Host address to bind (overrides HOST)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Port to bind (overrides PORT)
    #[arg(short, long, global = true)]
    pub port: Option<u16>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the canned question table and exit
    Questions,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_port_override() {
        let cli = Cli::parse_from(["signbot-server", "--port", "8080"]);
        assert_eq!(cli.port, Some(8080));
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_questions_subcommand() {
        let cli = Cli::parse_from(["signbot-server", "questions"]);
        assert!(matches!(cli.command, Some(Commands::Questions)));
    }
}
