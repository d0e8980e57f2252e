use super::load_board;
use crate::{
    api::TaskSource,
    db::blob_store::BlobStore,
    libs::{board::TaskBoard, messages::Message, task::TaskFilter, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Which tasks to show
    #[arg(short, long, value_enum, default_value_t = TaskFilter::All)]
    filter: TaskFilter,
}

pub async fn cmd(args: ListArgs) -> Result<()> {
    let board = load_board().await?;
    render(&board, args.filter);
    Ok(())
}

/// Prints the header, the per-filter counters and the matching tasks.
pub fn render<S: BlobStore, R: TaskSource>(board: &TaskBoard<S, R>, filter: TaskFilter) {
    msg_print!(Message::TasksHeader);
    if let Some(at) = board.last_updated() {
        msg_print!(Message::LastSynced(View::local_time(&at)));
    }

    let counts = board.counts();
    msg_print!(Message::FilterCounts {
        all: counts.all,
        pending: counts.pending,
        completed: counts.completed,
    });

    let tasks = board.filtered(filter);
    if tasks.is_empty() {
        msg_info!(View::empty_notice(filter), true);
        return;
    }
    View::tasks(&tasks);
}
