use clap::{Parser, Subcommand};

const AFTER_HELP: &str = "Snippets are stored in ~/.config/micro/snippets.json";

#[derive(Parser, Debug)]
#[command(
    name = "snipz",
    bin_name = "snipz",
    version,
    arg_required_else_help = true,
    disable_help_subcommand = true,
    after_help = AFTER_HELP
)]
#[command(about = "Manage code snippets for the micro editor", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List all snippets
    #[command(alias = "ls")]
    List,

    /// Add a snippet, reading its body from stdin until an empty line
    Add {
        /// Name of the snippet (an existing one is overwritten)
        name: String,
    },

    /// Show snippet content
    Show {
        /// Name of the snippet
        name: String,
    },

    /// Delete a snippet
    #[command(alias = "rm")]
    Delete {
        /// Name of the snippet
        name: String,
    },
}
