//! Skill request wire definitions.
//!
//! The voice platform posts one JSON envelope per interaction. Only the
//! `request` object is modelled here; sibling fields such as `session`,
//! `context` and `version` are ignored on deserialization.
//!
//! ```json
//! { "request": { "type": "IntentRequest",
//!                "intent": { "name": "Stop", "slots": { ... } } } }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ── Entity resolution status codes ───────────────────────────────────────────

pub mod status_codes {
    pub const ER_SUCCESS_MATCH: &str = "ER_SUCCESS_MATCH";
    pub const ER_SUCCESS_NO_MATCH: &str = "ER_SUCCESS_NO_MATCH";
    pub const ER_ERROR_TIMEOUT: &str = "ER_ERROR_TIMEOUT";
    pub const ER_ERROR_EXCEPTION: &str = "ER_ERROR_EXCEPTION";
}

// ── Error codes ──────────────────────────────────────────────────────────────

pub mod error_codes {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const MALFORMED_RESOLUTION: &str = "MALFORMED_RESOLUTION";
    pub const MISSING_INTENT: &str = "MISSING_INTENT";
    pub const HANDLER_FAILED: &str = "HANDLER_FAILED";
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
}

/// Message reported when no route accepted the event.
pub const ROUTE_NOT_FOUND: &str = "Route not found";

// ── Error shape ──────────────────────────────────────────────────────────────

/// Client-facing error body. `status` is the HTTP-equivalent code the
/// transport should answer with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorShape {
    pub code: String,
    pub message: String,
    pub status: u16,
}

impl ErrorShape {
    pub fn new(code: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            status,
        }
    }

    pub fn not_found() -> Self {
        Self::new(error_codes::NOT_FOUND, ROUTE_NOT_FOUND, 404)
    }
}

// ── Request ──────────────────────────────────────────────────────────────────

/// The closed set of request kinds a skill backend receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestKind {
    #[serde(rename = "LaunchRequest")]
    Launch,
    #[serde(rename = "IntentRequest")]
    Intent,
    #[serde(rename = "SessionEndedRequest")]
    SessionEnded,
}

impl RequestKind {
    pub const ALL: &'static [RequestKind] = &[Self::Launch, Self::Intent, Self::SessionEnded];

    /// The wire name used in the `type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Launch => "LaunchRequest",
            Self::Intent => "IntentRequest",
            Self::SessionEnded => "SessionEndedRequest",
        }
    }
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed interaction event. Built once per request and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub request: Request,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    #[serde(rename = "type")]
    pub kind: RequestKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slots: Option<HashMap<String, Slot>>,
}

/// Raw slot as delivered by the platform. `value` is absent when the user
/// did not fill the slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolutions: Option<Resolutions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resolutions {
    #[serde(rename = "resolutionsPerAuthority", default)]
    pub resolutions_per_authority: Vec<Authority>,
}

/// One entity-resolution source's verdict on a slot value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Authority {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authority: Option<String>,
    pub status: Status,
    #[serde(default)]
    pub values: Vec<ResolvedValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedValue {
    pub value: Entity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub name: String,
}

impl Event {
    pub fn new(kind: RequestKind) -> Self {
        Self {
            request: Request { kind, intent: None },
        }
    }

    pub fn intent(name: impl Into<String>, slots: Option<HashMap<String, Slot>>) -> Self {
        Self {
            request: Request {
                kind: RequestKind::Intent,
                intent: Some(Intent {
                    name: name.into(),
                    slots,
                }),
            },
        }
    }

    pub fn kind(&self) -> RequestKind {
        self.request.kind
    }

    /// Intent name, when the event carries one.
    pub fn intent_name(&self) -> Option<&str> {
        self.request.intent.as_ref().map(|i| i.name.as_str())
    }

    pub fn slots(&self) -> Option<&HashMap<String, Slot>> {
        self.request.intent.as_ref().and_then(|i| i.slots.as_ref())
    }
}
