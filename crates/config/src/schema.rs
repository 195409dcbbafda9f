//! Config schema types (server, slots, logging).

use {
    serde::{Deserialize, Serialize},
    skillroute_slots::ResolutionPolicy,
};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillrouteConfig {
    pub server: ServerConfig,
    pub slots: SlotsConfig,
    pub logging: LoggingConfig,
}

impl SkillrouteConfig {
    /// Slot resolution policy derived from `[slots]`.
    pub fn resolution_policy(&self) -> ResolutionPolicy {
        ResolutionPolicy::new(self.slots.no_match_code.clone())
    }
}

/// Where the HTTP adapter listens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    /// Path the skill endpoint is mounted at.
    pub path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".into(),
            port: 3000,
            path: "/".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotsConfig {
    /// Status code an authority reports when it found no entity.
    pub no_match_code: String,
}

impl Default for SlotsConfig {
    fn default() -> Self {
        Self {
            no_match_code: ResolutionPolicy::default().no_match_code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            json: false,
        }
    }
}
