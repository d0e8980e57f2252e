use super::load_board;
use crate::{
    libs::{error::TaskError, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Task id as shown by `list`
    id: u32,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(args: RemoveArgs) -> Result<()> {
    let mut board = load_board().await?;

    let title = board.get(args.id).map(|t| t.title.clone()).ok_or(TaskError::TaskNotFound(args.id))?;

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmRemoveTask(title).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let task = board.remove_task(args.id)?;
    msg_success!(Message::TaskRemoved(task.id));
    Ok(())
}
