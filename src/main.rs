// src/main.rs
mod cli;
mod commands;
mod config;
mod constants;
mod display;
mod error;
mod logging;
mod record;
mod store;

use clap::Parser;
use cli::{Args, is_config_operation};
use commands::{handle_config_update_command, handle_list_config_command, run_command};
use error::AppError;
use logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Handle configuration operations without touching the store
    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_operation(&args) {
        return handle_config_update_command(&args).await;
    }

    run_command(args).await
}
