#![allow(clippy::result_large_err)]

use bingo_banker::bot;
use bingo_banker::bot::connection::{self, ConnectionState};
use bingo_banker::config::Settings;
use bingo_banker::errors::{Error, Result};
use dotenvy::dotenv;
use std::{env, sync::Arc};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Make it non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Load settings (store paths, exchange rate, admin list)
    let settings = Arc::new(Settings::load_or_default());
    info!(
        "Settings loaded: ledger={}, bingo={}, exchange rate={}",
        settings.ledger_file.display(),
        settings.bingo_file.display(),
        settings.exchange_rate
    );

    // 4. The bot token is required before any command can be served
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {}", e))
        .map_err(Error::EnvVar)?;

    // 5. Drive the connection state machine until a clean shutdown or a
    //    fatal (non-retriable) outcome
    let mut state = ConnectionState::Connecting;
    loop {
        match state {
            ConnectionState::Connecting => {
                info!("Connecting to Discord...");
                match bot::run_bot(&token, Arc::clone(&settings)).await {
                    Ok(()) => {
                        info!("Client shut down cleanly.");
                        break;
                    }
                    Err(e) => {
                        error!("Session ended: {e}");
                        state = connection::classify_disconnect(&e);
                    }
                }
            }
            ConnectionState::Backoff(wait) => {
                warn!("Reconnecting in {} seconds...", wait.as_secs());
                tokio::time::sleep(wait).await;
                state = ConnectionState::Connecting;
            }
            ConnectionState::Fatal => {
                error!("Authentication failed - check DISCORD_BOT_TOKEN. Not retrying.");
                break;
            }
        }
    }

    Ok(())
}
