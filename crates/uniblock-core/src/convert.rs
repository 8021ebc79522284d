// ── Legacy API → domain conversions ──

use uniblock_api::{LegacyClientEntry, LegacyUserEntry};

use crate::model::ClientRecord;

/// Prefer the device-reported hostname, then the user-assigned name.
fn display_hostname(hostname: Option<String>, name: Option<String>) -> String {
    hostname
        .filter(|h| !h.is_empty())
        .or(name)
        .unwrap_or_default()
}

impl From<LegacyClientEntry> for ClientRecord {
    fn from(entry: LegacyClientEntry) -> Self {
        Self::new(
            display_hostname(entry.hostname, entry.name),
            entry.mac,
            entry.blocked.unwrap_or(false),
        )
    }
}

impl From<LegacyUserEntry> for ClientRecord {
    fn from(entry: LegacyUserEntry) -> Self {
        Self::new(
            display_hostname(entry.hostname, entry.name),
            entry.mac,
            entry.blocked.unwrap_or(false),
        )
    }
}
