// Legacy API client modules
//
// Hand-written client for the UniFi controller's legacy endpoints used to
// manage client access: session auth, stat/ and rest/ reads, and cmd/stamgr
// commands, all wrapped in the `{ meta: { rc, msg }, data: [...] }` envelope.

pub mod auth;
pub mod client;
pub mod clients;
pub mod models;

pub use client::LegacyClient;
