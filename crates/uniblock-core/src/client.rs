// ── Controller seam ──
//
// The access workflow only needs five calls from a controller. Keeping
// them behind a trait lets `AccessManager` run against the real
// `Controller` or an in-memory fake.

use std::future::Future;

use crate::error::CoreError;
use crate::model::{ClientRecord, MacAddress};

/// Authenticated access to a network controller's client records.
pub trait ControllerClient {
    /// Every client the controller knows about, in controller order.
    fn list_clients(&self) -> impl Future<Output = Result<Vec<ClientRecord>, CoreError>> + Send;

    /// A single client by MAC. Fails with [`CoreError::ClientNotFound`]
    /// when the controller has no record for it.
    fn get_client(
        &self,
        mac: &MacAddress,
    ) -> impl Future<Output = Result<ClientRecord, CoreError>> + Send;

    /// Clients with a blocking entry. Entries may carry `blocked: false`
    /// when the block was lifted but the record kept.
    fn list_blocked_clients(
        &self,
    ) -> impl Future<Output = Result<Vec<ClientRecord>, CoreError>> + Send;

    /// Create or re-activate the block for `mac`.
    fn block_client(&self, mac: &MacAddress) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Lift the block for `mac`.
    fn unblock_client(
        &self,
        mac: &MacAddress,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
