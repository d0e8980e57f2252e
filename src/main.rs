use mytasks::{
    commands::Cli,
    libs::{logging, messages::Message},
    msg_error,
};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Optional .env overrides (MYTASKS_API_URL, MYTASKS_LIMIT, MYTASKS_DEBUG)
    let _ = dotenv::dotenv();
    logging::init();

    match Cli::menu().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(Message::CommandFailed(format!("{e:#}")));
            ExitCode::FAILURE
        }
    }
}
