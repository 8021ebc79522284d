// Legacy API client (station) endpoints
//
// Reads via stat/sta, rest/user and stat/user; commands via cmd/stamgr.

use serde_json::json;
use tracing::debug;

use crate::error::Error;
use crate::legacy::client::LegacyClient;
use crate::legacy::models::{LegacyClientEntry, LegacyUserEntry};

impl LegacyClient {
    /// List all currently connected clients (stations).
    ///
    /// `GET /api/s/{site}/stat/sta`
    pub async fn list_clients(&self) -> Result<Vec<LegacyClientEntry>, Error> {
        let url = self.site_url("stat/sta")?;
        debug!("listing connected clients");
        self.get(url).await
    }

    /// List every client the controller knows about, online or not.
    ///
    /// `GET /api/s/{site}/rest/user`
    pub async fn list_users(&self) -> Result<Vec<LegacyUserEntry>, Error> {
        let url = self.site_url("rest/user")?;
        debug!("listing known clients");
        self.get(url).await
    }

    /// Fetch a single known client by MAC address.
    ///
    /// `GET /api/s/{site}/stat/user/{mac}`. Returns `Ok(None)` when the
    /// controller doesn't know the MAC.
    pub async fn get_user(&self, mac: &str) -> Result<Option<LegacyUserEntry>, Error> {
        let url = self.site_url(&format!("stat/user/{mac}"))?;
        debug!(mac, "fetching known client");
        match self.get::<LegacyUserEntry>(url).await {
            Ok(users) => Ok(users.into_iter().next()),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Block a client by MAC address.
    ///
    /// `POST /api/s/{site}/cmd/stamgr` with `{"cmd": "block-sta", "mac": "..."}`
    pub async fn block_client(&self, mac: &str) -> Result<(), Error> {
        debug!(mac, "blocking client");
        self.stamgr("block-sta", mac).await
    }

    /// Unblock a client by MAC address.
    ///
    /// `POST /api/s/{site}/cmd/stamgr` with `{"cmd": "unblock-sta", "mac": "..."}`
    pub async fn unblock_client(&self, mac: &str) -> Result<(), Error> {
        debug!(mac, "unblocking client");
        self.stamgr("unblock-sta", mac).await
    }

    async fn stamgr(&self, cmd: &str, mac: &str) -> Result<(), Error> {
        let url = self.site_url("cmd/stamgr")?;
        let _: Vec<serde_json::Value> = self
            .post(
                url,
                &json!({
                    "cmd": cmd,
                    "mac": mac,
                }),
            )
            .await?;
        Ok(())
    }
}
