use clap::Parser;
use discocli::app_constants::log::{DEFAULT_LOG_LEVEL, VERBOSE_LOG_LEVEL};
use discocli::cli::{Cli, CommandHandler};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let handler = CommandHandler::new();
    if let Err(e) = handler.handle_command(cli.command).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
