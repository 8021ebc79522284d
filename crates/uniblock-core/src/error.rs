// ── Core error types ──
//
// Every way an invocation can end without a state change. The access
// workflow outcomes (not found, already blocked, ...) sit next to the
// collaborator tier, which the `From<uniblock_api::Error>` impl fills by
// translating transport-layer failures into domain-appropriate variants.

use thiserror::Error;

use crate::model::MacAddress;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Access workflow ──────────────────────────────────────────────
    #[error("Device '{identifier}' not found")]
    DeviceNotFound { identifier: String },

    #[error("Device MAC address not found for '{hostname}'")]
    InvalidDevice { hostname: String },

    #[error("Device {hostname} ({mac}) is already blocked")]
    AlreadyBlocked { hostname: String, mac: MacAddress },

    #[error("No blocking rule found for device {hostname} ({mac})")]
    NoRuleFound { hostname: String, mac: MacAddress },

    #[error("Invalid action: {action}. Use 'block', 'unblock' or 'status'")]
    InvalidAction { action: String },

    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to controller at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Controller request timed out")]
    Timeout,

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Client not found: {mac}")]
    ClientNotFound { mac: MacAddress },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Whether the error came from the controller collaborator rather than
    /// from the access workflow's own checks.
    pub fn is_collaborator(&self) -> bool {
        !matches!(
            self,
            Self::DeviceNotFound { .. }
                | Self::InvalidDevice { .. }
                | Self::AlreadyBlocked { .. }
                | Self::NoRuleFound { .. }
                | Self::InvalidAction { .. }
        )
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<uniblock_api::Error> for CoreError {
    fn from(err: uniblock_api::Error) -> Self {
        match err {
            uniblock_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            uniblock_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            uniblock_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            uniblock_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            uniblock_api::Error::LegacyApi { message } => CoreError::Api {
                message,
                status: None,
            },
            uniblock_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workflow_errors_are_not_collaborator_errors() {
        let err = CoreError::AlreadyBlocked {
            hostname: "laptop".into(),
            mac: MacAddress::new("AA:BB"),
        };
        assert!(!err.is_collaborator());
        assert!(err.to_string().contains("already blocked"));
    }

    #[test]
    fn api_auth_failure_maps_to_authentication_failed() {
        let err = CoreError::from(uniblock_api::Error::Authentication {
            message: "bad password".into(),
        });
        assert!(matches!(err, CoreError::AuthenticationFailed { ref message } if message == "bad password"));
        assert!(err.is_collaborator());
    }

    #[test]
    fn legacy_api_message_is_preserved() {
        let err = CoreError::from(uniblock_api::Error::LegacyApi {
            message: "api.err.NoSiteContext".into(),
        });
        assert_eq!(err.to_string(), "API error: api.err.NoSiteContext");
    }

    #[test]
    fn not_found_message_names_the_device() {
        let err = CoreError::DeviceNotFound {
            identifier: "ghost".into(),
        };
        assert_eq!(err.to_string(), "Device 'ghost' not found");
    }
}
