//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::application::ViewKind;
use crate::config::OutputFormat;
use crate::domain::HeapStrategy;

/// Build and render level-order trees, max-heaps and binary search trees from integer sequences
#[derive(Parser, Debug)]
#[command(name = "treeviz")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file, layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the sequence as indexed cells
    Array {
        /// Numbers (whitespace or comma separated); read from stdin if omitted
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<String>,
    },

    /// Show the sequence as a level-order binary tree
    Tree {
        /// Numbers (whitespace or comma separated); read from stdin if omitted
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<String>,
    },

    /// Heapify the sequence into a max-heap and show it as a tree
    Heap {
        /// Heap construction: sift-up or sift-down
        #[arg(short, long)]
        strategy: Option<HeapStrategy>,
        /// Numbers (whitespace or comma separated); read from stdin if omitted
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<String>,
    },

    /// Insert the sequence into a binary search tree
    Bst {
        /// Numbers (whitespace or comma separated); read from stdin if omitted
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<String>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Commands {
    /// View and raw number tokens for the visualization subcommands.
    pub fn view(&self) -> Option<(ViewKind, &[String])> {
        match self {
            Commands::Array { numbers } => Some((ViewKind::Array, numbers.as_slice())),
            Commands::Tree { numbers } => Some((ViewKind::Tree, numbers.as_slice())),
            Commands::Heap { numbers, .. } => Some((ViewKind::Heap, numbers.as_slice())),
            Commands::Bst { numbers } => Some((ViewKind::Bst, numbers.as_slice())),
            Commands::Config { .. } | Commands::Completion { .. } => None,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,

    /// Create global config template
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn given_heap_args_when_parsing_then_reads_strategy_and_negative_numbers() {
        let cli = Cli::parse_from(["treeviz", "heap", "--strategy", "sift-down", "3", "-1", "7"]);
        match cli.command {
            Some(Commands::Heap { strategy, numbers }) => {
                assert_eq!(strategy, Some(HeapStrategy::SiftDown));
                assert_eq!(numbers, vec!["3", "-1", "7"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn given_global_flags_when_parsing_then_applies_to_subcommand() {
        let cli = Cli::parse_from(["treeviz", "bst", "-dd", "--format", "json", "5", "2"]);
        assert_eq!(cli.debug, 2);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        let (kind, numbers) = cli.command.as_ref().and_then(Commands::view).unwrap();
        assert_eq!(kind, ViewKind::Bst);
        assert_eq!(numbers, ["5", "2"]);
    }
}
