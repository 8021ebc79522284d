// ── Device access workflow ──
//
// resolve → current_state → block/unblock. Every read goes to the
// controller; nothing is cached between steps or invocations.

use tracing::{debug, info};

use crate::client::ControllerClient;
use crate::error::CoreError;
use crate::model::{Action, BlockState, ClientRecord, Effect, Intent, MacAddress};

/// Resolves devices and toggles their block state through a
/// [`ControllerClient`].
pub struct AccessManager<C> {
    client: C,
}

impl<C: ControllerClient> AccessManager<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// The underlying controller client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Resolve `intent.target` and apply `intent.action`.
    pub async fn apply(&self, intent: &Intent) -> Result<Effect, CoreError> {
        let record = self.resolve(&intent.target).await?;
        debug!(device = %record, action = %intent.action, "resolved device");
        match intent.action {
            Action::Block => self.block(record).await,
            Action::Unblock => self.unblock(record).await,
        }
    }

    /// Find a client by hostname, falling back to MAC.
    ///
    /// Both passes are case-insensitive and scan the full list in
    /// controller order. A hostname match anywhere beats a MAC match
    /// anywhere, and the first match of the winning pass is returned.
    pub async fn resolve(&self, identifier: &str) -> Result<ClientRecord, CoreError> {
        let wanted = identifier.trim();
        let not_found = || CoreError::DeviceNotFound {
            identifier: identifier.to_owned(),
        };
        if wanted.is_empty() {
            return Err(not_found());
        }

        let clients = self.client.list_clients().await?;

        let wanted_host = wanted.to_lowercase();
        if let Some(record) = clients
            .iter()
            .find(|c| !c.hostname.is_empty() && c.hostname.to_lowercase() == wanted_host)
        {
            return Ok(record.clone());
        }

        let wanted_mac = MacAddress::new(wanted);
        clients
            .into_iter()
            .find(|c| c.mac == wanted_mac)
            .ok_or_else(not_found)
    }

    /// Read the blocking state the controller holds for `mac`.
    pub async fn current_state(&self, mac: &MacAddress) -> Result<BlockState, CoreError> {
        let entries = self.client.list_blocked_clients().await?;
        let state = match entries.iter().find(|entry| entry.mac == *mac) {
            Some(entry) if entry.blocked => BlockState::Blocked,
            Some(_) => BlockState::Unblocked,
            None => BlockState::NoRuleFound,
        };
        debug!(%mac, %state, "current block state");
        Ok(state)
    }

    /// Disable internet access for `record`.
    ///
    /// Refuses when an active block already exists; otherwise issues one
    /// `block_client` call and reports whether it created a new block or
    /// re-activated an inactive one.
    pub async fn block(&self, record: ClientRecord) -> Result<Effect, CoreError> {
        require_mac(&record)?;

        match self.current_state(&record.mac).await? {
            BlockState::Blocked => Err(CoreError::AlreadyBlocked {
                hostname: record.hostname,
                mac: record.mac,
            }),
            BlockState::Unblocked => {
                self.client.block_client(&record.mac).await?;
                info!(device = %record, "re-activated block");
                Ok(Effect::Reblocked { device: record })
            }
            BlockState::NoRuleFound => {
                self.client.block_client(&record.mac).await?;
                info!(device = %record, "created block");
                Ok(Effect::Blocked { device: record })
            }
        }
    }

    /// Restore internet access for `record`.
    ///
    /// Only an active block can be lifted; an inactive entry or no entry
    /// at all is reported as [`CoreError::NoRuleFound`] without mutating.
    pub async fn unblock(&self, record: ClientRecord) -> Result<Effect, CoreError> {
        require_mac(&record)?;

        match self.current_state(&record.mac).await? {
            BlockState::Blocked => {
                self.client.unblock_client(&record.mac).await?;
                info!(device = %record, "lifted block");
                Ok(Effect::Unblocked { device: record })
            }
            BlockState::Unblocked | BlockState::NoRuleFound => Err(CoreError::NoRuleFound {
                hostname: record.hostname,
                mac: record.mac,
            }),
        }
    }
}

fn require_mac(record: &ClientRecord) -> Result<(), CoreError> {
    if record.mac.is_empty() {
        return Err(CoreError::InvalidDevice {
            hostname: record.hostname.clone(),
        });
    }
    Ok(())
}
