// ── Controller abstraction ──
//
// One authenticated legacy-API session for the duration of an invocation.
// Implements `ControllerClient` so the access workflow can run against it.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use uniblock_api::transport::{TlsMode, TransportConfig};
use uniblock_api::{ControllerPlatform, LegacyClient};

use crate::client::ControllerClient;
use crate::config::{ControllerConfig, TlsVerification};
use crate::error::CoreError;
use crate::model::{ClientRecord, MacAddress};

/// An authenticated session against one UniFi controller.
pub struct Controller {
    legacy: LegacyClient,
}

impl Controller {
    /// Resolve the platform, build the HTTP client, and log in.
    ///
    /// The platform comes from the controller-version tag; `auto` probes
    /// the controller's login endpoints first.
    pub async fn connect(config: &ControllerConfig) -> Result<Self, CoreError> {
        let transport = build_transport(config).with_cookie_jar();

        let platform = match ControllerPlatform::from_version_tag(&config.version) {
            Some(platform) => platform,
            None => LegacyClient::detect_platform(&config.url, &transport).await?,
        };
        debug!(?platform, version = %config.version, "controller platform");

        let legacy =
            LegacyClient::new(config.url.clone(), config.site.clone(), platform, &transport)?;

        legacy.login(&config.username, &config.password).await?;
        info!(url = %config.url, site = %config.site, "session established");

        Ok(Self { legacy })
    }

    /// End the session. Failures are logged, never returned: by the time
    /// this runs the invocation's outcome is already decided.
    pub async fn disconnect(&self) {
        if let Err(e) = self.legacy.logout().await {
            warn!(error = %e, "logout failed");
        }
    }
}

impl ControllerClient for Controller {
    /// Connected stations first, then known-but-offline clients, one
    /// record per MAC.
    async fn list_clients(&self) -> Result<Vec<ClientRecord>, CoreError> {
        let stations = self.legacy.list_clients().await?;
        let users = self.legacy.list_users().await?;
        debug!(
            stations = stations.len(),
            users = users.len(),
            "fetched client lists"
        );

        let mut seen = HashSet::new();
        let records = stations
            .into_iter()
            .map(ClientRecord::from)
            .chain(users.into_iter().map(ClientRecord::from))
            .filter(|record| record.mac.is_empty() || seen.insert(record.mac.clone()))
            .collect();
        Ok(records)
    }

    async fn get_client(&self, mac: &MacAddress) -> Result<ClientRecord, CoreError> {
        self.legacy
            .get_user(mac.as_str())
            .await?
            .map(ClientRecord::from)
            .ok_or_else(|| CoreError::ClientNotFound { mac: mac.clone() })
    }

    /// Known clients that carry a `blocked` flag, active or not.
    async fn list_blocked_clients(&self) -> Result<Vec<ClientRecord>, CoreError> {
        let users = self.legacy.list_users().await?;
        Ok(users
            .into_iter()
            .filter(|user| user.blocked.is_some())
            .map(ClientRecord::from)
            .collect())
    }

    async fn block_client(&self, mac: &MacAddress) -> Result<(), CoreError> {
        self.legacy.block_client(mac.as_str()).await?;
        Ok(())
    }

    async fn unblock_client(&self, mac: &MacAddress) -> Result<(), CoreError> {
        self.legacy.unblock_client(mac.as_str()).await?;
        Ok(())
    }
}

// ── Helpers ──────────────────────────────────────────────────────

/// Build a [`TransportConfig`] from the controller configuration.
fn build_transport(config: &ControllerConfig) -> TransportConfig {
    TransportConfig {
        tls: tls_to_transport(&config.tls),
        timeout: config.timeout,
        cookie_jar: None,
    }
}

fn tls_to_transport(tls: &TlsVerification) -> TlsMode {
    match tls {
        TlsVerification::SystemDefaults => TlsMode::System,
        TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
        TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn tls_modes_map_one_to_one() {
        assert!(matches!(
            tls_to_transport(&TlsVerification::SystemDefaults),
            TlsMode::System
        ));
        assert!(matches!(
            tls_to_transport(&TlsVerification::DangerAcceptInvalid),
            TlsMode::DangerAcceptInvalid
        ));
        let ca = PathBuf::from("/etc/uniblock/ca.pem");
        assert!(matches!(
            tls_to_transport(&TlsVerification::CustomCa(ca.clone())),
            TlsMode::CustomCa(ref p) if *p == ca
        ));
    }
}
