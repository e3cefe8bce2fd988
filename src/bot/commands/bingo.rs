//! Bingo Discord commands - `comprar_carton` plus the admin commands
//! `set_bingo_price` and `agregar_saldo`.
//!
//! Admin authorization goes through the reloadable policy in
//! [`crate::config::admins`]; rejections leak nothing beyond the denial.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        config::admins,
        core::{account, card, purchase},
        errors::{Error, Result},
    };
    use poise::CreateReply;
    use poise::serenity_prelude as serenity;
    use tracing::warn;

    /// Buys a bingo card: debits the current price and assigns a fresh 3×3 card.
    ///
    /// Overwrites any previous card.
    ///
    /// The card is delivered by DM. If the DM cannot be sent the purchase
    /// stands and the ephemeral reply carries the card instead, so the buyer
    /// always sees their numbers.
    #[poise::command(slash_command)]
    pub async fn comprar_carton(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let user_id = ctx.author().id.to_string();

        let outcome = {
            let stores = ctx.data().stores.lock().await;
            purchase::purchase_card(&stores.ledger, &stores.tickets, &user_id)
        };

        let receipt = match outcome {
            Ok(receipt) => receipt,
            Err(Error::AccountRequired) => {
                ctx.send(
                    CreateReply::default()
                        .content("🔴 Primero crea una cuenta con /crear_cuenta")
                        .ephemeral(true),
                )
                .await?;
                return Ok(());
            }
            Err(Error::InsufficientFunds { current, required }) => {
                ctx.send(
                    CreateReply::default()
                        .content(format!(
                            "🔴 Saldo insuficiente. El cartón cuesta Bs. {required:.2} y \
                             tu saldo es Bs. {current:.2} (te faltan Bs. {:.2}).",
                            required - current
                        ))
                        .ephemeral(true),
                )
                .await?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let rendered = card::format_card(&receipt.card);
        let embed = serenity::CreateEmbed::default()
            .title("🎟️ Cartón de Bingo")
            .description(format!("Comprado por Bs. {:.2}", receipt.price))
            .field("Tus números", format!("```\n{rendered}\n```"), false)
            .colour(serenity::Colour::GOLD)
            .footer(serenity::CreateEmbedFooter::new("¡Buena suerte!"));

        let dm = ctx
            .author()
            .direct_message(ctx.http(), serenity::CreateMessage::new().embed(embed))
            .await;

        let reply = match dm {
            Ok(_) => "✅ Cartón comprado. Revisa tus mensajes privados.".to_string(),
            Err(e) => {
                // The debit and the assignment stand; deliver in-channel.
                warn!("Could not DM card to {user_id}: {e}");
                format!(
                    "🔴 No puedo enviarte mensajes privados. Aquí está tu cartón:\n```\n{rendered}\n```"
                )
            }
        };
        ctx.send(CreateReply::default().content(reply).ephemeral(true))
            .await?;

        Ok(())
    }

    /// Sets the price of bingo cards. Administrators only.
    #[poise::command(slash_command)]
    pub async fn set_bingo_price(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Precio en Bs."] precio: f64,
    ) -> Result<()> {
        if !admins::is_admin(&ctx.author().id.to_string()) {
            ctx.send(
                CreateReply::default()
                    .content("🔴 ¡Solo un administrador puede usar este comando!")
                    .ephemeral(true),
            )
            .await?;
            return Ok(());
        }

        let updated = {
            let stores = ctx.data().stores.lock().await;
            purchase::set_card_price(&stores.tickets, precio)
        };

        match updated {
            Ok(price) => {
                ctx.say(format!("✅ Precio actualizado a **Bs. {price:.2}**"))
                    .await?;
            }
            Err(Error::InvalidAmount { .. }) => {
                ctx.send(
                    CreateReply::default()
                        .content("🔴 El precio debe ser mayor a cero")
                        .ephemeral(true),
                )
                .await?;
            }
            Err(e) => return Err(e),
        }

        Ok(())
    }

    /// Credits a user's balance by id. Administrators only.
    ///
    /// The target is notified by DM on a best-effort basis; the admin always
    /// gets a confirmation with the new balance.
    #[poise::command(slash_command)]
    pub async fn agregar_saldo(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "ID del usuario"] user_id: String,
        #[description = "Cantidad en Bs. a agregar"] cantidad: f64,
    ) -> Result<()> {
        if !admins::is_admin(&ctx.author().id.to_string()) {
            ctx.send(
                CreateReply::default()
                    .content("❌ **Acceso denegado:** Solo un administrador puede usar este comando.")
                    .ephemeral(true),
            )
            .await?;
            return Ok(());
        }

        let credited = {
            let stores = ctx.data().stores.lock().await;
            account::credit(&stores.ledger, &user_id, cantidad)
        };

        let updated = match credited {
            Ok(account) => account,
            Err(Error::AccountNotFound { .. }) => {
                ctx.send(
                    CreateReply::default()
                        .content(format!(
                            "❌ **Error:** No se encontró una cuenta con el ID `{user_id}`"
                        ))
                        .ephemeral(true),
                )
                .await?;
                return Ok(());
            }
            Err(Error::InvalidAmount { .. }) => {
                ctx.send(
                    CreateReply::default()
                        .content("❌ **Error:** La cantidad debe ser mayor a cero")
                        .ephemeral(true),
                )
                .await?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        // Best-effort notification; failure is not the admin's problem.
        // UserId::new rejects 0, so a "0" id simply skips the DM.
        if let Some(target_id) = user_id.parse::<u64>().ok().filter(|&id| id != 0) {
            let notify_embed = serenity::CreateEmbed::default()
                .title("💵 Saldo Actualizado")
                .description(format!(
                    "Se te ha agregado **Bs. {cantidad:.2}**\nNuevo saldo: **Bs. {:.2}**",
                    updated.balance
                ))
                .colour(serenity::Colour::DARK_GREEN);

            let target_id = serenity::UserId::new(target_id);
            match target_id.to_user(ctx.http()).await {
                Ok(target) => {
                    if let Err(e) = target
                        .direct_message(ctx.http(), serenity::CreateMessage::new().embed(notify_embed))
                        .await
                    {
                        warn!("Could not notify {user_id} of credit: {e}");
                    }
                }
                Err(e) => warn!("Could not fetch user {user_id} to notify: {e}"),
            }
        }

        let confirm = serenity::CreateEmbed::default()
            .title("✅ Saldo Agregado")
            .description(format!(
                "Se agregaron **Bs. {cantidad:.2}** al usuario con ID `{user_id}`\nNuevo saldo: **Bs. {:.2}**",
                updated.balance
            ))
            .colour(serenity::Colour::DARK_GREEN);
        ctx.send(CreateReply::default().embed(confirm)).await?;

        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
