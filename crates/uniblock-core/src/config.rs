// ── Runtime connection configuration ──
//
// Describes *how* to reach one controller. Carries credentials and
// connection tuning but never touches disk or the environment; the binary
// builds a `ControllerConfig` and hands it to `Controller::connect`.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed certs). Default for local controllers.
    #[default]
    DangerAcceptInvalid,
}

/// Configuration for connecting to a single controller.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Controller URL (e.g., `https://192.168.1.1:8443`).
    pub url: Url,
    /// Legacy session username.
    pub username: String,
    /// Legacy session password.
    pub password: SecretString,
    /// Controller-version tag: `UDMP-unifiOS`, `v5`, or `auto` to probe.
    pub version: String,
    /// Site to operate on.
    pub site: String,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: Duration,
}
