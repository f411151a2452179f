// src/cli/args.rs
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Memo collection endpoint, overrides the config file
    #[arg(short, long, value_name = "URL", global = true)]
    pub url: Option<String>,

    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Render the gallery of all memos
    Gallery {
        /// Write the page here instead of opening it in the browser
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// List memos with ID and title
    List {
        /// Optional search term to filter memos by title
        #[arg(value_name = "SEARCH")]
        search: Option<String>,
    },

    /// Show a memo in its edit form
    View {
        /// Memo ID to view
        #[arg(value_name = "MEMO_ID")]
        memo_id: i64,

        /// Output memo as JSON instead of rendering the page
        #[arg(long)]
        json: bool,

        /// Write the page here instead of opening it in the browser
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Show the enlarged image of a memo
    Zoom {
        /// Memo ID whose image to enlarge
        #[arg(value_name = "MEMO_ID")]
        memo_id: i64,

        /// Write the page here instead of opening it in the browser
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Create a new memo
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Change fields of an existing memo
    Edit {
        /// Memo ID to edit
        #[arg(value_name = "MEMO_ID")]
        memo_id: i64,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete a memo
    Delete {
        /// Memo ID to delete
        #[arg(value_name = "MEMO_ID")]
        memo_id: i64,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Form inputs; fields left out keep the value shown in the form.
#[derive(ClapArgs, Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldArgs {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Semicolon separated tags, e.g. "rust;cli"
    #[arg(long)]
    pub tags: Option<String>,

    /// Image link
    #[arg(long)]
    pub image: Option<String>,
}
