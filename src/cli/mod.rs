pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rsr")]
#[command(about = "Merge RSS/Atom feeds into one timeline", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/rsr/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// File with one feed URL per line
    #[arg(short, long, global = true)]
    pub feeds: Option<PathBuf>,

    /// Entries kept per feed
    #[arg(short = 'n', long, global = true)]
    pub max_entries: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch every feed and print the merged timeline
    Show {
        /// Print the timeline as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the configured source list
    Sources,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show_with_overrides() {
        let cli = Cli::parse_from(["rsr", "--feeds", "my.txt", "-n", "3", "show", "--json"]);
        assert_eq!(cli.feeds, Some(PathBuf::from("my.txt")));
        assert_eq!(cli.max_entries, Some(3));
        assert!(matches!(cli.command, Commands::Show { json: true }));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["rsr", "sources", "--config", "c.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        assert!(matches!(cli.command, Commands::Sources));
    }
}
