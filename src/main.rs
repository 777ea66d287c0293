//! Restaurant ordering server - menu, cart and image endpoints over SQLite

use clap::Parser;
use restaurant_orders::config::{load_config, Config};
use restaurant_orders::router::create_app_router_with_limit;
use restaurant_orders::state::AppState;
use restaurant_orders::Database;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "restaurant-orders")]
#[command(version)]
#[command(about = "Menu, cart and image service for restaurant ordering")]
struct Cli {
    /// Path to the TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the database file (overrides config)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn apply(&self, mut config: Config) -> Config {
        if let Some(database) = &self.database {
            config.database = database.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let config = cli.apply(load_config(cli.config.as_deref())?);

    // Initialize application state
    let db = Database::open(&config.database)?;
    let state = Arc::new(AppState::new(db));

    // Build application router with all routes and middleware
    let app = create_app_router_with_limit(state, config.max_upload_bytes);

    let addr = config.socket_addr();
    tracing::info!("Server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from(["restaurant-orders", "--port", "9000", "-d", "orders.db"]);
        let config = cli.apply(Config::default());

        assert_eq!(config.port, 9000);
        assert_eq!(config.database, PathBuf::from("orders.db"));
    }

    #[test]
    fn test_no_flags_keep_config() {
        let cli = Cli::parse_from(["restaurant-orders"]);
        assert_eq!(cli.apply(Config::default()), Config::default());
    }
}
