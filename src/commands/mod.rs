pub mod add;
pub mod clear;
pub mod init;
pub mod list;
pub mod remove;
pub mod sync;
pub mod toggle;

use crate::{
    api::PlaceholderApi,
    db::blob_store::SqliteBlobStore,
    libs::{
        board::{Startup, TaskBoard},
        config::Config,
        messages::Message,
    },
    msg_debug, msg_error, msg_info,
};
use anyhow::Result;
use clap::{Parser, Subcommand};

/// Board wired to the on-disk store and the configured API.
pub type AppBoard = TaskBoard<SqliteBlobStore, PlaceholderApi>;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure the task source")]
    Init(init::InitArgs),
    #[command(about = "List tasks, optionally filtered by state")]
    List(list::ListArgs),
    #[command(about = "Add a new local task")]
    Add(add::AddArgs),
    #[command(about = "Toggle a task between pending and completed", arg_required_else_help = true)]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Remove a task", arg_required_else_help = true)]
    Remove(remove::RemoveArgs),
    #[command(about = "Replace the local list with the latest tasks from the API")]
    Sync,
    #[command(about = "Remove all locally saved tasks")]
    Clear(clear::ClearArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parses the process arguments and runs the chosen command.
    pub async fn menu() -> Result<()> {
        Self::parse().run().await
    }

    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Init(args) => init::cmd(args),
            Commands::List(args) => list::cmd(args).await,
            Commands::Add(args) => add::cmd(args).await,
            Commands::Toggle(args) => toggle::cmd(args).await,
            Commands::Remove(args) => remove::cmd(args).await,
            Commands::Sync => sync::cmd().await,
            Commands::Clear(args) => clear::cmd(args),
        }
    }
}

/// Opens the board from the stored configuration.
pub fn open_board() -> Result<AppBoard> {
    let source = Config::read()?.resolved_source();
    tracing::debug!(api_url = %source.api_url, limit = source.limit, "opening task board");

    let store = SqliteBlobStore::new()?;
    let api = PlaceholderApi::new(&source.api_url);
    Ok(TaskBoard::new(store, api).with_limit(source.limit))
}

/// Opens and initializes the board, reporting where the list came from.
///
/// An unreachable API on first run is shown as an error notice and the
/// command continues on the empty list.
pub async fn load_board() -> Result<AppBoard> {
    let mut board = open_board()?;

    msg_debug!(Message::LoadingTasks);
    match board.initialize().await? {
        Startup::Fetched => msg_info!(Message::TasksSynced(board.tasks().len())),
        Startup::Restored => msg_debug!(Message::TasksRestored(board.tasks().len())),
        Startup::Unavailable(error) => msg_error!(Message::TasksUnavailable(error)),
    }

    Ok(board)
}
