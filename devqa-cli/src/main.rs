use clap::Parser;
use tracing::{debug, info};

mod browse;
mod cli;
mod client;
mod commands;
mod community;
mod error;
mod fallback;
mod logging;
mod mock_data;
mod render;

use cli::Cli;
use error::CliError;
use logging::init_logging;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    info!("devqa CLI starting");
    debug!("CLI arguments: {:?}", cli);

    match cli.run().await {
        Ok(_) => {
            info!("devqa CLI completed successfully");
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);
            tracing::error!("CLI error: {:?}", e);
            std::process::exit(e.exit_code());
        }
    }
}
