//! Command-line plumbing shared by the service binaries.

use clap::Subcommand;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::db::MigrateAction;

/// `migrate` subcommands, the same for every binary.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Roll back this service's migrations and run them again
    Fresh,
}

impl From<MigrateCommands> for MigrateAction {
    fn from(command: MigrateCommands) -> Self {
        match command {
            MigrateCommands::Up => MigrateAction::Up,
            MigrateCommands::Down => MigrateAction::Down,
            MigrateCommands::Status => MigrateAction::Status,
            MigrateCommands::Fresh => MigrateAction::Fresh,
        }
    }
}

/// Load `.env` and install the fmt subscriber. `RUST_LOG` wins over
/// `default_filter` when set.
pub fn init(default_filter: &str) {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        action: MigrateCommands,
    }

    #[test]
    fn test_migrate_subcommands_parse() {
        let cli = TestCli::try_parse_from(["svc", "fresh"]).unwrap();
        assert_eq!(cli.action, MigrateCommands::Fresh);
        assert!(TestCli::try_parse_from(["svc", "sideways"]).is_err());
    }

    #[test]
    fn test_commands_map_to_actions() {
        assert_eq!(MigrateAction::from(MigrateCommands::Up), MigrateAction::Up);
        assert_eq!(MigrateAction::from(MigrateCommands::Down), MigrateAction::Down);
        assert_eq!(MigrateAction::from(MigrateCommands::Status), MigrateAction::Status);
        assert_eq!(MigrateAction::from(MigrateCommands::Fresh), MigrateAction::Fresh);
    }
}
