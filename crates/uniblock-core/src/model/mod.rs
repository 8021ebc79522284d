// ── Domain model ──
//
// Per-invocation types only: nothing here outlives a single run.

pub mod access;
pub mod client;
pub mod mac;

pub use access::{Action, BlockState, Effect, Intent};
pub use client::ClientRecord;
pub use mac::MacAddress;
