//! Device access workflow for a UniFi controller.
//!
//! - **[`AccessManager`]** resolves a device by hostname or MAC, reads its
//!   current [`BlockState`], and applies a block/unblock [`Action`] with the
//!   idempotence checks that keep repeated invocations harmless.
//!
//! - **[`ControllerClient`]** is the seam to the controller. [`Controller`]
//!   implements it over `uniblock_api::LegacyClient`; tests substitute an
//!   in-memory fake.
//!
//! - **[`ControllerConfig`]** is built by the binary and handed in; this
//!   crate never reads files or environment variables.

pub mod access;
pub mod client;
pub mod config;
pub mod controller;
pub mod convert;
pub mod error;
pub mod model;

// ── Primary re-exports ──────────────────────────────────────────────
pub use access::AccessManager;
pub use client::ControllerClient;
pub use config::{ControllerConfig, TlsVerification};
pub use controller::Controller;
pub use error::CoreError;
pub use model::{Action, BlockState, ClientRecord, Effect, Intent, MacAddress};
