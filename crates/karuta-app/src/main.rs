use anyhow::Result;
use clap::Parser;

pub mod cli;
pub mod commands;
pub mod logging;
pub mod state;

use self::cli::Cli;
use self::state::AppContext;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let cli = Cli::parse();
    let config = karuta_config::Config::new();
    let context = AppContext::init(&config).await?;

    commands::dispatch(&context, cli.command).await
}
