//! Account Discord commands - `crear_cuenta` and `saldo`.
//!
//! These commands go through the core account module for all ledger work;
//! this layer only handles Discord I/O (replies, embeds, DM delivery).

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        core::account,
        errors::{Error, Result},
    };
    use poise::CreateReply;
    use poise::serenity_prelude as serenity;
    use tracing::warn;

    /// Creates an account for the invoking user and delivers the recovery
    /// phrase by direct message.
    ///
    /// The phrase is shown exactly once, spoiler-tagged. If the user's DMs
    /// are closed the account still stands; the ephemeral reply says so.
    #[poise::command(slash_command)]
    pub async fn crear_cuenta(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let user_id = ctx.author().id.to_string();

        let created = {
            let stores = ctx.data().stores.lock().await;
            account::create_account(&stores.ledger, &user_id)
        };

        let new_account = match created {
            Ok(account) => account,
            Err(Error::AccountExists { .. }) => {
                ctx.send(
                    CreateReply::default()
                        .content("🔴 ¡Ya tienes una cuenta creada!")
                        .ephemeral(true),
                )
                .await?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let embed = serenity::CreateEmbed::default()
            .title("✅ Cuenta Creada")
            .description(format!(
                "**Frase de recuperación:** ||{}||\n\nGuárdala en un lugar seguro.",
                new_account.seed_phrase
            ))
            .colour(serenity::Colour::DARK_GREEN);

        let dm = ctx
            .author()
            .direct_message(ctx.http(), serenity::CreateMessage::new().embed(embed))
            .await;

        let reply = match dm {
            Ok(_) => "📩 Revisa tus mensajes privados.",
            Err(e) => {
                warn!("Could not DM recovery phrase to {user_id}: {e}");
                "🔴 No puedo enviarte mensajes privados, pero tu cuenta fue creada. \
                 ¡Habilita los DMs para recibir tu frase de recuperación!"
            }
        };
        ctx.send(CreateReply::default().content(reply).ephemeral(true))
            .await?;

        Ok(())
    }

    /// Shows the invoking user's balance in Bs. and its USD equivalent at
    /// the configured exchange rate.
    #[poise::command(slash_command)]
    pub async fn saldo(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let user_id = ctx.author().id.to_string();

        let found = {
            let stores = ctx.data().stores.lock().await;
            account::get_account(&stores.ledger, &user_id)
        };

        let Some(user_account) = found else {
            ctx.send(
                CreateReply::default()
                    .content("🔴 Primero crea una cuenta con /crear_cuenta")
                    .ephemeral(true),
            )
            .await?;
            return Ok(());
        };

        let rate = ctx.data().settings.exchange_rate;
        let usd_balance = user_account.balance / rate;

        let embed = serenity::CreateEmbed::default()
            .title("💰 Tu Saldo")
            .description(format!(
                "**Bs.** {:.2}\n**USD** ${usd_balance:.2}",
                user_account.balance
            ))
            .colour(serenity::Colour::BLUE)
            .footer(serenity::CreateEmbedFooter::new(format!(
                "Tasa de cambio: 1 USD = {rate} Bs."
            )));

        ctx.send(CreateReply::default().embed(embed)).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
