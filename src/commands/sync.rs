use super::open_board;
use crate::{libs::messages::Message, msg_debug, msg_success};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let mut board = open_board()?;

    msg_debug!(Message::LoadingTasks);
    let count = board.fetch_tasks().await?;

    msg_success!(Message::TasksSynced(count));
    Ok(())
}
