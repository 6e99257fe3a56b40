//! Combined binary for development - runs all three services in one process.

use clap::{Parser, Subcommand};
use tracing::{error, info};

use common::cli::MigrateCommands;
use common::MigrateAction;

#[derive(Parser)]
#[command(name = "appvet")]
#[command(about = "Usuarios, mascotas and horas agendadas in a single process")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all services in a single process (development mode)
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(long, default_value = "8080")]
        usuarios_port: u16,
        #[arg(long, default_value = "8081")]
        mascotas_port: u16,
        #[arg(long, default_value = "8082")]
        horas_port: u16,
    },
    /// Run database migrations for all services
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::cli::init("info,tower_http=debug");

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            usuarios_port,
            mascotas_port,
            horas_port,
        } => {
            info!("Starting combined services in development mode");
            info!("  Usuarios: http://{}:{}/api/usuarios", host, usuarios_port);
            info!("  Mascotas: http://{}:{}/api/mascotas", host, mascotas_port);
            info!("  Horas:    http://{}:{}/api/horas-agendadas", host, horas_port);

            // Each service tracks its own migrations, so start order does not matter
            let usuarios_host = host.clone();
            let usuarios_handle = tokio::spawn(async move {
                if let Err(e) =
                    usuarios_service_lib::run_embedded(&usuarios_host, usuarios_port).await
                {
                    error!("Usuarios service failed: {}", e);
                }
            });

            let mascotas_host = host.clone();
            let mascotas_handle = tokio::spawn(async move {
                if let Err(e) =
                    mascotas_service_lib::run_embedded(&mascotas_host, mascotas_port).await
                {
                    error!("Mascotas service failed: {}", e);
                }
            });

            let horas_handle = tokio::spawn(async move {
                if let Err(e) = horas_service_lib::run_embedded(&host, horas_port).await {
                    error!("Horas service failed: {}", e);
                }
            });

            // Wait for any service to exit (which would indicate an error)
            tokio::select! {
                _ = usuarios_handle => {
                    error!("Usuarios service exited unexpectedly");
                }
                _ = mascotas_handle => {
                    error!("Mascotas service exited unexpectedly");
                }
                _ = horas_handle => {
                    error!("Horas service exited unexpectedly");
                }
            }
        }
        Commands::Migrate { action } => {
            let action = MigrateAction::from(action);

            info!("Migrating usuarios database");
            usuarios_service_lib::run_migrations(action).await?;
            info!("Migrating mascotas database");
            mascotas_service_lib::run_migrations(action).await?;
            info!("Migrating horas database");
            horas_service_lib::run_migrations(action).await?;
        }
    }

    Ok(())
}
