//! Application state shape.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mvi::UiState;

/// Root application state. Owned by the [`Store`](crate::store::Store).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppState {
    /// Hotels in the order the server returned them.
    #[serde(default)]
    pub hotels: Vec<Hotel>,
    #[serde(default)]
    pub auth: AuthState,
    #[serde(default)]
    pub ui: UiSlice,
}

impl UiState for AppState {}

impl AppState {
    /// The state the application boots with: no hotels, anonymous, loading.
    pub fn initial() -> Self {
        Self::default()
    }
}

/// A hotel as listed by `GET /hotels`.
///
/// Only `name` and `city` are required; the rest is whatever the server
/// chose to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out_until: Option<String>,
}

impl Hotel {
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            city: city.into(),
            description: None,
            email: None,
            phone: None,
            address_line: None,
            zip: None,
            country: None,
            check_in_from: None,
            check_out_until: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthRole {
    #[default]
    Anonymous,
    Authenticated,
}

/// Who is using the application. Nothing authenticates yet, so this stays
/// anonymous for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    #[serde(default)]
    pub role: AuthRole,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

/// Which screen the application shows once data is ready.
///
/// `Unrecognized` keeps the raw text of a mode this build does not know,
/// so the selector can report it instead of failing to load the state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UiMode {
    #[default]
    HotelList,
    Unrecognized(String),
}

impl UiMode {
    pub fn as_str(&self) -> &str {
        match self {
            UiMode::HotelList => "HOTEL_LIST",
            UiMode::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for UiMode {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "HOTEL_LIST" => UiMode::HotelList,
            _ => UiMode::Unrecognized(raw),
        }
    }
}

impl From<UiMode> for String {
    fn from(mode: UiMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for UiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Load status of the application.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UiStatus {
    #[default]
    Loading,
    Ready,
    Error,
    Unrecognized(String),
}

impl UiStatus {
    pub fn as_str(&self) -> &str {
        match self {
            UiStatus::Loading => "LOADING",
            UiStatus::Ready => "READY",
            UiStatus::Error => "ERROR",
            UiStatus::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for UiStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "LOADING" => UiStatus::Loading,
            "READY" => UiStatus::Ready,
            "ERROR" => UiStatus::Error,
            _ => UiStatus::Unrecognized(raw),
        }
    }
}

impl From<UiStatus> for String {
    fn from(status: UiStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for UiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
}

/// UI slice of the state.
///
/// `error_message` is `Some` exactly when `status` is [`UiStatus::Error`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSlice {
    #[serde(default)]
    pub mode: UiMode,
    #[serde(default)]
    pub status: UiStatus,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub notification: Option<Notification>,
}
