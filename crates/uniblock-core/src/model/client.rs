use std::fmt;

use serde::{Deserialize, Serialize};

use super::mac::MacAddress;

/// A controller's view of one device, keyed by MAC address.
///
/// `hostname` is a convenience alias and may be empty or shared by
/// several records; `mac` is the identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub hostname: String,
    pub mac: MacAddress,
    pub blocked: bool,
}

impl ClientRecord {
    pub fn new(hostname: impl Into<String>, mac: impl AsRef<str>, blocked: bool) -> Self {
        Self {
            hostname: hostname.into(),
            mac: MacAddress::new(mac),
            blocked,
        }
    }
}

impl fmt::Display for ClientRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hostname.is_empty() {
            write!(f, "({})", self.mac)
        } else {
            write!(f, "{} ({})", self.hostname, self.mac)
        }
    }
}
