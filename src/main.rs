mod cli;

use bookproxy::{api, config::Config, observability};
use clap::Parser;
use cli::{Cli, Commands};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    observability::init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Server(args) => {
            let mut config = Config::load_with(args.config)?;
            if let Some(port) = args.port {
                config.server.port = port;
            }
            info!(port = config.server.port, "Configuration loaded");

            api::run(config).await?
        }
    }

    Ok(())
}
