//! Quick connect pairing types

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether quick connect is usable on the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuickConnectState {
    /// Quick connect is disabled server-side
    Unavailable,
    /// Enabled, no pairing attempt in flight
    Available,
    /// Enabled and actively pairing
    Active,
}

impl QuickConnectState {
    /// Wire name of this state
    pub fn as_str(&self) -> &'static str {
        match self {
            QuickConnectState::Unavailable => "Unavailable",
            QuickConnectState::Available => "Available",
            QuickConnectState::Active => "Active",
        }
    }
}

impl fmt::Display for QuickConnectState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of one quick connect pairing attempt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct QuickConnectResult {
    /// True once an authorized device approved the code
    pub authenticated: bool,
    /// Private identifier the initiating device polls with
    pub secret: Option<String>,
    /// Short code shown to the user for approval
    pub code: Option<String>,
    pub date_added: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_wire_names() {
        assert_eq!(QuickConnectState::Active.to_string(), "Active");
        let parsed: QuickConnectState = serde_json::from_str("\"Available\"").unwrap();
        assert_eq!(parsed, QuickConnectState::Available);
    }

    #[test]
    fn test_result_deserializes() {
        let json = r#"{
            "Authenticated": false,
            "Secret": "s3cret",
            "Code": "123456",
            "DateAdded": "2021-05-06T07:08:09.0000000Z"
        }"#;
        let result: QuickConnectResult = serde_json::from_str(json).unwrap();
        assert!(!result.authenticated);
        assert_eq!(result.code.as_deref(), Some("123456"));
        assert!(result.date_added.is_some());
    }
}
