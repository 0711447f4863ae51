use crate::types::{FilterArg, OutputFormat, StatusArg};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lista")]
#[command(about = "Track titled items with status tags, stored locally", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to LISTA_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new item
    Add {
        titulo: String,

        #[arg(long, default_value = "pendente")]
        status: StatusArg,
    },

    /// List items, optionally searched and filtered
    List {
        /// Case-insensitive substring match on the title
        #[arg(long)]
        search: Option<String>,

        #[arg(long, default_value = "todos")]
        status: FilterArg,
    },

    /// Edit an existing item's title and/or status
    Edit {
        id: String,

        #[arg(long)]
        titulo: Option<String>,

        #[arg(long)]
        status: Option<StatusArg>,
    },

    /// Delete an item (asks for confirmation)
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Interactive console mode
    Ui,
}
