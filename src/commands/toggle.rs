use super::load_board;
use crate::{libs::messages::Message, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Task id as shown by `list`
    id: u32,
}

pub async fn cmd(args: ToggleArgs) -> Result<()> {
    let mut board = load_board().await?;

    let task = board.toggle_task(args.id)?;
    if task.completed {
        msg_success!(Message::TaskCompleted(task.id));
    } else {
        msg_success!(Message::TaskReopened(task.id));
    }
    Ok(())
}
