//! Connection lifecycle classification for the reconnect loop.
//!
//! The top-level control structure is an explicit state machine rather than
//! nested error handling: `main` drives `Connecting -> Backoff -> Connecting`
//! until a clean shutdown or a `Fatal` outcome (invalid credentials, which no
//! amount of retrying fixes).

use poise::serenity_prelude as serenity;
use std::time::Duration;

/// Back-off after the gateway rejects us for rate limiting.
pub const RATE_LIMIT_BACKOFF: Duration = Duration::from_secs(60);
/// Back-off after other HTTP/gateway transport failures.
pub const TRANSPORT_BACKOFF: Duration = Duration::from_secs(30);
/// Back-off after anything unclassified.
pub const GENERAL_BACKOFF: Duration = Duration::from_secs(15);

/// State of the top-level connection loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Attempt (or re-attempt) a gateway session now.
    Connecting,
    /// Sleep for the given duration, then reconnect.
    Backoff(Duration),
    /// Stop retrying; the credentials are invalid.
    Fatal,
}

/// Maps the error that ended a session to the next loop state.
#[must_use]
pub fn classify_disconnect(error: &serenity::Error) -> ConnectionState {
    match error {
        serenity::Error::Gateway(serenity::GatewayError::InvalidAuthentication) => {
            ConnectionState::Fatal
        }
        serenity::Error::Http(serenity::HttpError::UnsuccessfulRequest(response))
            if response.status_code.as_u16() == 429 =>
        {
            ConnectionState::Backoff(RATE_LIMIT_BACKOFF)
        }
        serenity::Error::Http(_) | serenity::Error::Gateway(_) | serenity::Error::Tungstenite(_) => {
            ConnectionState::Backoff(TRANSPORT_BACKOFF)
        }
        _ => ConnectionState::Backoff(GENERAL_BACKOFF),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_are_fatal() {
        let error = serenity::Error::Gateway(serenity::GatewayError::InvalidAuthentication);
        assert_eq!(classify_disconnect(&error), ConnectionState::Fatal);
    }

    #[test]
    fn test_gateway_failure_gets_transport_backoff() {
        let error = serenity::Error::Gateway(serenity::GatewayError::ReconnectFailure);
        assert_eq!(
            classify_disconnect(&error),
            ConnectionState::Backoff(TRANSPORT_BACKOFF)
        );
    }

    #[test]
    fn test_unclassified_error_gets_short_backoff() {
        let error = serenity::Error::Other("boom");
        assert_eq!(
            classify_disconnect(&error),
            ConnectionState::Backoff(GENERAL_BACKOFF)
        );
    }
}
