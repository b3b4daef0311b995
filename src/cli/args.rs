//! CLI argument parsing using clap

use crate::config::CONFIG_FILE_NAME;
use crate::types::RuleName;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for mojicount commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

/// mojicount CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "mojicount")]
#[command(about = "Count the visible characters of Japanese prose in markdown and plain text")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Path to the configuration file
    #[arg(long, global = true, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Output coloring (overrides the configuration file)
    #[arg(long, global = true)]
    pub color: Option<ColorChoice>,

    /// Show per-rule details and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Rule switches shared by counting commands
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleArgs {
    /// Disable a rule for this run (repeatable)
    #[arg(long = "disable", value_name = "RULE", value_parser = parse_rule_name)]
    pub disable: Vec<RuleName>,
}

fn parse_rule_name(s: &str) -> Result<RuleName, String> {
    s.parse::<RuleName>().map_err(|e| e.to_string())
}

/// Available mojicount subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Count markdown and plain text documents
    Count {
        /// Files or directories to count (defaults to current directory)
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Output format (overrides the configuration file)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        #[command(flatten)]
        rules: RuleArgs,
    },

    /// Print the status label for one document
    Status {
        /// Document to read, or "-" for standard input
        #[arg(default_value = "-")]
        file: PathBuf,

        /// Language identifier (detected from the file name when omitted)
        #[arg(short, long)]
        language: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,

        #[command(flatten)]
        rules: RuleArgs,
    },

    /// List exclusion rules in the order they are applied
    Rules {
        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,

        #[command(flatten)]
        rules: RuleArgs,
    },

    /// Write a default mojicount.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_count_default_args() {
        let cli = Cli::parse_from(["mojicount", "count"]);
        match cli.command {
            Command::Count {
                paths,
                format,
                rules,
            } => {
                assert_eq!(paths, vec![PathBuf::from(".")]);
                assert_eq!(format, None);
                assert!(rules.disable.is_empty());
            }
            _ => panic!("Expected Count command"),
        }
        assert_eq!(cli.config, PathBuf::from("mojicount.toml"));
        assert_eq!(cli.color, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_count_with_paths_and_disable() {
        let cli = Cli::parse_from([
            "mojicount",
            "count",
            "chapter1.md",
            "notes/",
            "--disable",
            "asciiCharacters",
            "--disable",
            "heading",
            "-f",
            "jsonl",
        ]);
        match cli.command {
            Command::Count {
                paths,
                format,
                rules,
            } => {
                assert_eq!(paths.len(), 2);
                assert_eq!(format, Some(OutputFormat::Jsonl));
                assert_eq!(
                    rules.disable,
                    vec![RuleName::AsciiCharacters, RuleName::Heading]
                );
            }
            _ => panic!("Expected Count command"),
        }
    }

    #[test]
    fn test_unknown_rule_rejected() {
        let result = Cli::try_parse_from(["mojicount", "count", "--disable", "ascii"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_status_defaults_to_stdin() {
        let cli = Cli::parse_from(["mojicount", "status", "--language", "markdown"]);
        match cli.command {
            Command::Status {
                file,
                language,
                format,
                ..
            } => {
                assert_eq!(file, PathBuf::from("-"));
                assert_eq!(language.as_deref(), Some("markdown"));
                assert_eq!(format, OutputFormat::Human);
            }
            _ => panic!("Expected Status command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "mojicount",
            "rules",
            "--config",
            "alt.toml",
            "--color",
            "never",
            "-v",
        ]);
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
        assert_eq!(cli.color, Some(ColorChoice::Never));
        assert!(cli.verbose);
    }

    #[test]
    fn test_init_with_force() {
        let cli = Cli::parse_from(["mojicount", "init", "--force"]);
        assert!(matches!(cli.command, Command::Init { force: true }));
    }
}
