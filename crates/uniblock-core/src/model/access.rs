// ── Access intents and outcomes ──

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::client::ClientRecord;
use crate::error::CoreError;

/// What the caller wants done to a device's internet access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Block,
    Unblock,
}

impl Action {
    /// Parse a user-supplied action, mapping anything unknown to
    /// [`CoreError::InvalidAction`].
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        Self::from_str(raw.trim()).map_err(|_| CoreError::InvalidAction {
            action: raw.to_owned(),
        })
    }
}

/// One requested transition: a device identifier (hostname or MAC) and
/// the action to apply. Created from process input, consumed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    pub target: String,
    pub action: Action,
}

impl Intent {
    pub fn new(target: impl Into<String>, action: Action) -> Self {
        Self {
            target: target.into(),
            action,
        }
    }
}

/// Controller-side blocking state for one MAC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BlockState {
    /// A blocking entry exists and is active.
    Blocked,
    /// A blocking entry exists but is inactive.
    Unblocked,
    /// The controller has no blocking entry for the MAC.
    NoRuleFound,
}

/// Successful outcome of an invocation.
///
/// `Blocked` and `Reblocked` come from the same `block_client` call;
/// they differ only in what the controller held beforehand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Effect {
    /// A new block was created.
    Blocked { device: ClientRecord },
    /// An inactive blocking entry was re-activated.
    Reblocked { device: ClientRecord },
    /// An active block was lifted.
    Unblocked { device: ClientRecord },
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blocked { device } => {
                write!(f, "Internet access disabled for device {device}")
            }
            Self::Reblocked { device } => {
                write!(f, "Internet access re-disabled for device {device}")
            }
            Self::Unblocked { device } => {
                write!(f, "Internet access enabled for device {device}")
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn action_parses_case_insensitively() {
        assert_eq!(Action::parse("block").unwrap(), Action::Block);
        assert_eq!(Action::parse("UNBLOCK").unwrap(), Action::Unblock);
        assert_eq!(Action::parse(" Block ").unwrap(), Action::Block);
    }

    #[test]
    fn unknown_action_is_invalid() {
        let err = Action::parse("nuke").unwrap_err();
        assert!(matches!(err, CoreError::InvalidAction { ref action } if action == "nuke"));
    }

    #[test]
    fn status_is_not_an_action() {
        let err = Action::parse("status").unwrap_err();
        assert!(matches!(err, CoreError::InvalidAction { ref action } if action == "status"));
    }

    #[test]
    fn action_display_is_lowercase() {
        assert_eq!(Action::Unblock.to_string(), "unblock");
    }

    #[test]
    fn effect_messages_name_the_device() {
        let device = ClientRecord::new("laptop", "AA:BB", false);
        let effect = Effect::Reblocked { device };
        assert_eq!(
            effect.to_string(),
            "Internet access re-disabled for device laptop (aa:bb)"
        );
    }

    #[test]
    fn effect_serializes_with_outcome_tag() {
        let effect = Effect::Unblocked {
            device: ClientRecord::new("tv", "aa:bb", true),
        };
        let json = serde_json::to_value(&effect).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "outcome": "unblocked",
                "device": { "hostname": "tv", "mac": "aa:bb", "blocked": true }
            })
        );
    }
}
