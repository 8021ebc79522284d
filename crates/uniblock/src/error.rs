//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use uniblock_config::ConfigError;
use uniblock_core::{ClientRecord, CoreError};

/// Process exit codes. Every failure, whatever its kind, exits 1.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Access workflow ──────────────────────────────────────────────
    #[error("Device '{identifier}' not found")]
    #[diagnostic(
        code(uniblock::not_found),
        help(
            "Match is by hostname (as the controller reports it) or MAC address.\n\
             Both are case-insensitive."
        )
    )]
    DeviceNotFound { identifier: String },

    #[error("Invalid action: {action}")]
    #[diagnostic(code(uniblock::invalid_action), help("Use 'block' or 'unblock'."))]
    InvalidAction { action: String },

    #[error("Device MAC address not found for '{hostname}'")]
    #[diagnostic(
        code(uniblock::invalid_device),
        help("The controller returned this client without a MAC address.")
    )]
    InvalidDevice { hostname: String },

    #[error("Device {device} is already blocked")]
    #[diagnostic(
        code(uniblock::already_blocked),
        help("Nothing to do. Run: uniblock {device_arg} unblock")
    )]
    AlreadyBlocked { device: String, device_arg: String },

    #[error("No blocking rule found for device {device}")]
    #[diagnostic(
        code(uniblock::no_rule_found),
        help("The device is not currently blocked.")
    )]
    NoRuleFound { device: String },

    // ── Controller ───────────────────────────────────────────────────
    #[error("Could not connect to controller at {url}")]
    #[diagnostic(
        code(uniblock::connection_failed),
        help(
            "Check that the controller is running and reachable.\n\
             Set UNIFI_HOST / UNIFI_PORT, or UNIFI_CONTROLLER for a full URL.\n\
             Cause: {reason}"
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(uniblock::auth_failed),
        help(
            "Verify UNIFI_USERNAME and UNIFI_PASSWORD (or the keyring entry).\n\
             UniFi OS consoles need a local account, not a UI.com login."
        )
    )]
    AuthFailed { message: String },

    #[error("Controller request timed out")]
    #[diagnostic(
        code(uniblock::timeout),
        help("Increase UNIFI_TIMEOUT or check controller responsiveness.")
    )]
    Timeout,

    #[error("An error occurred: {message}")]
    #[diagnostic(code(uniblock::api_error))]
    Api { message: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(
        code(uniblock::config),
        help("Check the config file and UNIFI_* environment variables.")
    )]
    Config(#[from] ConfigError),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        exit_code::FAILURE
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DeviceNotFound { identifier } => CliError::DeviceNotFound { identifier },

            CoreError::InvalidAction { action } => CliError::InvalidAction { action },

            CoreError::InvalidDevice { hostname } => CliError::InvalidDevice { hostname },

            CoreError::AlreadyBlocked { hostname, mac } => {
                let device = ClientRecord::new(hostname, mac.as_str(), true);
                CliError::AlreadyBlocked {
                    device_arg: if device.hostname.is_empty() {
                        device.mac.to_string()
                    } else {
                        device.hostname.clone()
                    },
                    device: device.to_string(),
                }
            }

            CoreError::NoRuleFound { hostname, mac } => CliError::NoRuleFound {
                device: ClientRecord::new(hostname, mac.as_str(), false).to_string(),
            },

            CoreError::ConnectionFailed { url, reason } => {
                CliError::ConnectionFailed { url, reason }
            }

            CoreError::AuthenticationFailed { message } => CliError::AuthFailed { message },

            CoreError::Timeout => CliError::Timeout,

            CoreError::Config { message } => CliError::Config(ConfigError::Validation {
                field: "controller".into(),
                reason: message,
            }),

            other @ (CoreError::ClientNotFound { .. }
            | CoreError::Api { .. }
            | CoreError::Internal(_)) => CliError::Api {
                message: other.to_string(),
            },
        }
    }
}
