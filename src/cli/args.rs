// src/cli/args.rs
use crate::domain::{CollectionKind, SortKey};
use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Notes API base URL, overrides the config file
    #[arg(long, value_name = "URL", global = true)]
    pub server: Option<String>,

    /// Bearer token for the notes API
    #[arg(long, value_name = "TOKEN", env = "NOTIFY_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Directory holding the local note cache
    #[arg(long, value_name = "DIR", global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

// Token stays out of debug logs
impl fmt::Debug for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Args")
            .field("config", &self.config)
            .field("server", &self.server)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("cache_dir", &self.cache_dir)
            .field("verbose", &self.verbose)
            .field("command", &self.command)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Notes,
    Archive,
    Trash,
}

impl From<ViewArg> for CollectionKind {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::Notes => CollectionKind::Active,
            ViewArg::Archive => CollectionKind::Archived,
            ViewArg::Trash => CollectionKind::Trashed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Date,
    Content,
}

impl From<SortArg> for SortKey {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Date => SortKey::Date,
            SortArg::Content => SortKey::Content,
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List notes of one collection
    List {
        /// Collection to show
        #[arg(long, value_enum, default_value = "notes")]
        view: ViewArg,

        /// Sort order
        #[arg(short, long, value_enum)]
        sort: Option<SortArg>,

        /// Use cached notes without contacting the server
        #[arg(long)]
        offline: bool,

        /// Output notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a note
    Add {
        #[arg(value_name = "TITLE")]
        title: String,

        #[arg(value_name = "CONTENT")]
        content: String,
    },

    /// Replace the title and content of a note
    Edit {
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        #[arg(value_name = "TITLE")]
        title: String,

        #[arg(value_name = "CONTENT")]
        content: String,
    },

    /// Delete a note permanently
    Delete {
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },

    /// Move a note to the archive
    Archive {
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },

    /// Move a note to the trash
    Trash {
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },

    /// Search notes on the server
    Search {
        #[arg(value_name = "QUERY")]
        query: String,

        /// Sort order
        #[arg(short, long, value_enum)]
        sort: Option<SortArg>,

        /// Output notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Extract text from an image
    Ocr {
        #[arg(value_name = "IMAGE")]
        image: PathBuf,

        /// Run the extracted text through AI enhancement
        #[arg(short, long)]
        enhance: bool,
    },

    /// Clean up text with AI enhancement
    Enhance {
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Ask the AI assistant a question
    Ask {
        #[arg(value_name = "MESSAGE")]
        message: String,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
