//! Settings for uniblock.
//!
//! Layered defaults → TOML file → `UNIFI_*` environment, password
//! resolution (explicit value → system keyring → built-in default), and
//! translation to `uniblock_core::ControllerConfig`. Read once at startup;
//! nothing downstream looks at the environment again.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use uniblock_core::{ControllerConfig, TlsVerification};

/// Keyring service name; entries are keyed by username.
pub const KEYRING_SERVICE: &str = "uniblock";

/// Password used when nothing else supplies one.
const DEFAULT_PASSWORD: &str = "password";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Settings ────────────────────────────────────────────────────────

/// Controller connection settings, as read from file and environment.
///
/// Every field maps to a TOML key and to `UNIFI_<KEY>` in the environment
/// (`verify_tls` ↔ `UNIFI_VERIFY_TLS`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Controller host name or IP address.
    pub host: String,

    /// Controller HTTPS port.
    pub port: u16,

    /// Full controller URL; overrides `host` and `port` when set.
    pub controller: Option<String>,

    /// Username for the legacy session login.
    pub username: String,

    /// Password (plaintext -- prefer the keyring or `UNIFI_PASSWORD`).
    pub password: Option<String>,

    /// Controller-version tag: `UDMP-unifiOS`, `v5`, or `auto`.
    pub version: String,

    /// Site name.
    pub site: String,

    /// Verify the controller's TLS certificate.
    pub verify_tls: bool,

    /// Custom CA certificate, used when `verify_tls` is on.
    pub ca_cert: Option<PathBuf>,

    /// Request timeout in seconds.
    pub timeout: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "192.168.1.1".into(),
            port: 8443,
            controller: None,
            username: "admin".into(),
            password: None,
            version: "UDMP-unifiOS".into(),
            site: "default".into(),
            verify_tls: false,
            ca_cert: None,
            timeout: 30,
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "uniblock", "uniblock").map_or_else(
        || {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("uniblock");
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Loading ─────────────────────────────────────────────────────────

/// The provider stack: defaults, then the TOML file, then `UNIFI_*`.
/// A missing file is not an error.
pub fn figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Settings::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("UNIFI_"))
}

/// Load settings from `path` (or the default config path) plus environment.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let path = path.map_or_else(config_path, Path::to_path_buf);
    let settings: Settings = figment(&path).extract()?;
    Ok(settings)
}

impl Settings {
    /// The controller base URL: `controller` if set, else `https://{host}:{port}`.
    pub fn controller_url(&self) -> Result<Url, ConfigError> {
        let raw = match self.controller.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.to_owned(),
            _ => {
                let host = self.host.trim();
                if host.is_empty() {
                    return Err(ConfigError::Validation {
                        field: "host".into(),
                        reason: "must not be empty".into(),
                    });
                }
                // Bare IPv6 literals need brackets inside a URL.
                if host.contains(':') && !host.starts_with('[') {
                    format!("https://[{host}]:{}", self.port)
                } else {
                    format!("https://{host}:{}", self.port)
                }
            }
        };

        raw.parse().map_err(|e| ConfigError::Validation {
            field: "controller".into(),
            reason: format!("invalid URL {raw}: {e}"),
        })
    }

    /// TLS mode from `verify_tls` and `ca_cert`.
    pub fn tls(&self) -> TlsVerification {
        if !self.verify_tls {
            TlsVerification::DangerAcceptInvalid
        } else if let Some(ref ca_path) = self.ca_cert {
            TlsVerification::CustomCa(ca_path.clone())
        } else {
            TlsVerification::SystemDefaults
        }
    }

    /// Resolve the password: explicit setting, then the system keyring,
    /// then the built-in default.
    pub fn resolve_password(&self) -> SecretString {
        self.resolve_password_with(keyring_password)
    }

    /// [`resolve_password`](Self::resolve_password) with a pluggable
    /// keyring lookup (called with the username).
    pub fn resolve_password_with(
        &self,
        keyring_lookup: impl FnOnce(&str) -> Option<String>,
    ) -> SecretString {
        if let Some(ref pw) = self.password {
            return SecretString::from(pw.clone());
        }
        if let Some(pw) = keyring_lookup(&self.username) {
            return SecretString::from(pw);
        }
        SecretString::from(DEFAULT_PASSWORD.to_owned())
    }

    /// Build a `ControllerConfig`, validating along the way.
    pub fn to_controller_config(&self) -> Result<ControllerConfig, ConfigError> {
        self.to_controller_config_with(self.resolve_password())
    }

    fn to_controller_config_with(
        &self,
        password: SecretString,
    ) -> Result<ControllerConfig, ConfigError> {
        let url = self.controller_url()?;

        if self.timeout == 0 {
            return Err(ConfigError::Validation {
                field: "timeout".into(),
                reason: "must be at least 1 second".into(),
            });
        }

        let site = self.site.trim();
        if site.is_empty() {
            return Err(ConfigError::Validation {
                field: "site".into(),
                reason: "must not be empty".into(),
            });
        }

        Ok(ControllerConfig {
            url,
            username: self.username.clone(),
            password,
            version: self.version.clone(),
            site: site.to_owned(),
            tls: self.tls(),
            timeout: Duration::from_secs(self.timeout),
        })
    }
}

fn keyring_password(username: &str) -> Option<String> {
    keyring::Entry::new(KEYRING_SERVICE, username)
        .and_then(|entry| entry.get_password())
        .ok()
}
