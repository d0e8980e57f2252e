use super::load_board;
use crate::{
    libs::{messages::Message, task::validate_title},
    msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title; prompted for when omitted
    title: Option<String>,
}

pub async fn cmd(args: AddArgs) -> Result<()> {
    let title = match args.title {
        Some(title) => title,
        None => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskTitle.to_string())
            .validate_with(|input: &String| validate_title(input).map(|_| ()).map_err(|e| e.to_string()))
            .interact_text()?,
    };

    let mut board = load_board().await?;
    let task = board.add_task(&title)?;

    msg_success!(Message::TaskAddedWithId(task.id));
    Ok(())
}
