//! Actions understood by the dispatcher.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Something the application should do.
///
/// Actions are built by the router, by view handlers, or parsed from a
/// key binding. `Unknown` carries the type of an action this build does not
/// handle; dispatching it logs and changes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAction", into = "RawAction")]
pub enum Action {
    AppInit,
    EnterHotelList,
    Unknown { kind: String },
}

impl Action {
    pub const APP_INIT: &'static str = "APP_INIT";
    pub const ENTER_HOTEL_LIST: &'static str = "ENTER_HOTEL_LIST";

    /// Build an action from its type tag.
    pub fn from_type(kind: &str) -> Self {
        match kind {
            Self::APP_INIT => Action::AppInit,
            Self::ENTER_HOTEL_LIST => Action::EnterHotelList,
            other => Action::Unknown {
                kind: other.to_string(),
            },
        }
    }

    /// The type tag, as it appears on the wire.
    pub fn kind(&self) -> &str {
        match self {
            Action::AppInit => Self::APP_INIT,
            Action::EnterHotelList => Self::ENTER_HOTEL_LIST,
            Action::Unknown { kind } => kind,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

/// Wire form: `{"type": "...", "payload": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payload: Option<serde_json::Value>,
}

impl TryFrom<RawAction> for Action {
    type Error = String;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        if raw.kind.is_empty() {
            return Err("action type must not be empty".to_string());
        }
        // No current action reads its payload.
        Ok(Action::from_type(&raw.kind))
    }
}

impl From<Action> for RawAction {
    fn from(action: Action) -> Self {
        RawAction {
            kind: action.kind().to_string(),
            payload: None,
        }
    }
}
