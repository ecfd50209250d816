//! Contact Book - Main entry point
//!
//! Serves the contact book over the Model Context Protocol on stdio.

use anyhow::Result;
use contact_book::repositories::{ContactRepository, JsonFileRepository};
use contact_book::{Config, ContactBook, ContactBookMcpServer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let repository: Arc<dyn ContactRepository> = if config.pretty_json {
        Arc::new(JsonFileRepository::pretty())
    } else {
        Arc::new(JsonFileRepository::new())
    };
    let mut book = ContactBook::new(repository);

    if config.autoload {
        match book.load_if_present(&config.data_file) {
            Ok(Some(count)) => info!(
                "Loaded {} contacts from {}",
                count,
                config.data_file.display()
            ),
            Ok(None) => info!(
                "No saved contacts found at {}, starting empty",
                config.data_file.display()
            ),
            Err(e) => {
                error!("Failed to load contacts: {}", e);
                return Err(e.into());
            }
        }
    }

    let server = ContactBookMcpServer::new(book, config.data_file.clone());

    info!("Starting MCP server with stdio transport");
    contact_book::server::run_server(server).await?;

    info!("Contact book shutdown complete");
    Ok(())
}
