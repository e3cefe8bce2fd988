//! Bot layer - Discord-specific interface and command handlers.
//!
//! This module provides the Discord interface for the bingo banker: the five
//! slash commands, the shared command context, and client construction. All
//! user-facing text is Spanish, matching the community the bot serves.

/// Discord command implementations (account, bingo)
pub mod commands;
/// Connection lifecycle classification for the reconnect loop
pub mod connection;

use crate::config::Settings;
use crate::errors;
use crate::store::{LedgerStore, TicketStore};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// The two persistent stores, guarded together so each command's whole
/// load-mutate-persist sequence runs with no other command interleaved.
pub struct Stores {
    /// Balances and recovery phrases.
    pub ledger: LedgerStore,
    /// Card price and assignments.
    pub tickets: TicketStore,
}

/// Shared data available to all bot commands.
pub struct BotData {
    /// Startup settings (store paths, exchange rate).
    pub settings: Arc<Settings>,
    /// Store pair behind a single lock; hold it across the whole transaction.
    pub stores: Mutex<Stores>,
}

impl BotData {
    /// Creates the shared command context, wiring the stores to the document
    /// paths from the settings.
    #[must_use]
    pub fn new(settings: Arc<Settings>) -> Self {
        let stores = Stores {
            ledger: LedgerStore::new(&settings.ledger_file),
            tickets: TicketStore::new(&settings.bingo_file),
        };
        Self {
            settings,
            stores: Mutex::new(stores),
        }
    }
}

async fn on_error(error: poise::FrameworkError<'_, BotData, errors::Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            panic!("Failed to start bot: {error:?}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::error!("Error in command `{}`: {:?}", ctx.command().name, error);
            // Internal faults become a generic visible failure; the process
            // keeps serving commands.
            if let Err(e) = ctx.say("🔴 Ocurrió un error al procesar el comando").await {
                tracing::error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                tracing::error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Builds the Poise framework with the five commands and runs the client
/// until it disconnects. The caller (the reconnect loop in `main`) classifies
/// the returned error.
///
/// # Errors
/// Returns the serenity error that ended the session, including client
/// construction failures.
pub async fn run_bot(token: &str, settings: Arc<Settings>) -> Result<(), serenity::Error> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::crear_cuenta(),
                commands::saldo(),
                commands::comprar_carton(),
                commands::set_bingo_price(),
                commands::agregar_saldo(),
            ],
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(BotData::new(settings))
            })
        })
        .build();

    // Slash commands plus the DM channel used for card/phrase delivery.
    let intents = serenity::GatewayIntents::GUILD_MESSAGES | serenity::GatewayIntents::DIRECT_MESSAGES;

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::Client::builder(token, intents)
        .framework(framework)
        .await?;

    info!("Starting bot client...");
    client.start().await
}
