//! Horas Service - HTTP server for appointment booking.

use clap::{Parser, Subcommand};

use common::cli::MigrateCommands;

#[derive(Parser)]
#[command(name = "horas-service")]
#[command(about = "Appointment booking microservice")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long, env = "HORAS_SERVICE_HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "HORAS_SERVICE_PORT", default_value = "8082")]
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
            horas_service_lib::run_embedded(&host, port).await?;
        }
        Commands::Migrate { action } => {
            horas_service_lib::run_migrations(action.into()).await?;
        }
    }

    Ok(())
}
