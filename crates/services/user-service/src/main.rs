//! User Service - scripted user management over an in-memory store.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::io::{self, AsyncBufRead, BufReader};
use tracing::info;

use user_service_lib::config::UserServiceConfig;
use user_service_lib::in_memory_use_cases;
use user_service_lib::session::Session;

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "User management service")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a JSON-lines command script (stdin when FILE is omitted)
    Run {
        /// Script to execute
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = UserServiceConfig::from_env();

    common::init_tracing(&config.service.log_level, cli.verbose);

    match cli.command {
        Commands::Run { file } => {
            let reader: Box<dyn AsyncBufRead + Unpin> = match &file {
                Some(path) => Box::new(BufReader::new(tokio::fs::File::open(path).await?)),
                None => Box::new(BufReader::new(io::stdin())),
            };

            let session = Session::new(in_memory_use_cases(&config.hashing)?);
            let summary = session.run(reader, io::stdout()).await?;

            info!(
                service = %config.service.service_name,
                succeeded = summary.succeeded,
                failed = summary.failed,
                "Script finished"
            );
        }
    }

    Ok(())
}
