//! Usuarios Service - HTTP server for user accounts.

use clap::{Parser, Subcommand};

use common::cli::MigrateCommands;

#[derive(Parser)]
#[command(name = "usuarios-service")]
#[command(about = "User accounts microservice")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long, env = "USUARIOS_SERVICE_HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "USUARIOS_SERVICE_PORT", default_value = "8080")]
        port: u16,
    },
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::cli::init("info");

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            usuarios_service_lib::run_embedded(&host, port).await?;
        }
        Commands::Migrate { action } => {
            usuarios_service_lib::run_migrations(action.into()).await?;
        }
    }

    Ok(())
}
