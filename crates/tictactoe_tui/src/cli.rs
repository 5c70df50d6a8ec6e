//! Command-line interface for the tic-tac-toe TUI.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with keyboard navigation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (key bindings, logging)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File to write logs to (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset, e.g. "debug" (overrides the config file)
    #[arg(long)]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_overrides_parse() {
        let cli = Cli::parse_from(["tictactoe", "--config", "ttt.toml", "--log-level", "debug"]);
        assert_eq!(cli.config, Some(PathBuf::from("ttt.toml")));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.log_file, None);
    }
}
