//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - submit: submit a new tool to the catalog
//! - list: list submissions (optionally filtered by status)
//! - approve: approve a pending submission
//! - catalog: show the public approved catalog
//! - classify: classify a chat message into an intent

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// toolcat - catalog submission store and intent classifier
#[derive(Parser, Debug)]
#[command(name = "toolcat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a new tool to the catalog
    Submit {
        /// Tool name
        name: String,

        /// Category (e.g. dev-tools, databases)
        #[arg(short = 'C', long)]
        category: String,

        /// Pricing descriptor (free, freemium, paid)
        #[arg(short, long, default_value = "free")]
        pricing: String,

        /// Price amount, if any
        #[arg(long)]
        price: Option<f64>,

        /// Currency code (defaults to USD)
        #[arg(long)]
        currency: Option<String>,

        /// Short description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Comma-separated feature list
        #[arg(short, long, value_delimiter = ',')]
        features: Vec<String>,

        /// Comma-separated tags
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,

        /// Comma-separated compatibility list
        #[arg(long, value_delimiter = ',')]
        compatibility: Vec<String>,

        /// Website URL
        #[arg(short, long, default_value = "")]
        website: String,

        /// Logo path or URL
        #[arg(long)]
        logo: Option<String>,

        /// Name of the submitter
        #[arg(long = "by", default_value = "anonymous")]
        submitter: String,
    },

    /// List submissions, every status
    List {
        /// Filter by status (pending, approved, rejected)
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Approve a pending submission
    Approve {
        /// Submission ID to approve
        id: String,
    },

    /// Show the public approved catalog
    Catalog {
        /// Substring query over name, description, category and tags
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Classify a chat message into an intent category
    Classify {
        /// The message to classify
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_parses_list_args() {
        let cli = Cli::parse_from([
            "toolcat", "submit", "Acme", "--category", "dev-tools", "--features", "a, b", "--tags",
            "ai",
        ]);
        match cli.command {
            Commands::Submit { name, category, features, tags, .. } => {
                assert_eq!(name, "Acme");
                assert_eq!(category, "dev-tools");
                assert_eq!(features, vec!["a", " b"]);
                assert_eq!(tags, vec!["ai"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_list_with_status_filter() {
        let cli = Cli::parse_from(["toolcat", "list", "--status", "pending"]);
        match cli.command {
            Commands::List { status } => assert_eq!(status.as_deref(), Some("pending")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_classify_command() {
        let cli = Cli::parse_from(["toolcat", "classify", "compare a vs b"]);
        match cli.command {
            Commands::Classify { message } => assert_eq!(message, "compare a vs b"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["toolcat", "--verbose", "catalog"]);
        assert!(cli.is_verbose());
        assert!(cli.config.is_none());
    }
}
