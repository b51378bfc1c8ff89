//! Estate Hub - real estate marketplace backend
//!
//! Serves the permission queries and listing API over HTTP

#![allow(missing_docs)]

use estate_hub::config::{Config, DEFAULT_CONFIG_PATH};
use estate_hub::server;
use estate_hub::utils::logging::init_logging;
use std::process::ExitCode;

async fn run() -> estate_hub::Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let config = Config::load(DEFAULT_CONFIG_PATH).await?;
    init_logging(config.logging())?;

    server::builder::serve(config).await
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
