//! Administrator authorization policy.
//!
//! The policy is a set of user ids, not a single hardcoded constant, and it
//! is re-read from config.toml on every check so admins can be added or
//! removed without restarting the bot. The `ADMIN_ID` environment variable
//! is honored as well for single-admin deployments that only use `.env`.

use crate::config::Settings;

/// Returns the current set of administrator user ids.
///
/// Combines the `admins` list from config.toml (reloaded from disk on each
/// call) with the optional `ADMIN_ID` environment variable.
#[must_use]
pub fn admin_ids() -> Vec<String> {
    let mut ids = Settings::load_or_default().admins;

    if let Ok(env_id) = std::env::var("ADMIN_ID") {
        if !env_id.is_empty() && !ids.contains(&env_id) {
            ids.push(env_id);
        }
    }

    ids
}

/// Whether the given user id may run admin commands.
#[must_use]
pub fn is_admin(user_id: &str) -> bool {
    admin_ids().iter().any(|id| id == user_id)
}
