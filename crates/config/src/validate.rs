//! Semantic checks on a loaded configuration.

use std::fmt;

use crate::schema::SkillrouteConfig;

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

/// A single validation diagnostic.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Dotted path, e.g. "server.port"
    pub path: &'static str,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.path, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    fn push(&mut self, severity: Severity, path: &'static str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic {
            severity,
            path,
            message: message.into(),
        });
    }
}

pub fn validate(config: &SkillrouteConfig) -> ValidationResult {
    let mut result = ValidationResult::default();

    if config.slots.no_match_code.trim().is_empty() {
        result.push(
            Severity::Error,
            "slots.no_match_code",
            "must not be empty; every unmatched slot would be treated as resolved",
        );
    }

    if config.server.port == 0 {
        result.push(Severity::Error, "server.port", "must be non-zero");
    }

    if !config.server.path.starts_with('/') {
        result.push(
            Severity::Error,
            "server.path",
            format!("'{}' must start with '/'", config.server.path),
        );
    }

    if config.server.bind.is_empty() {
        result.push(Severity::Error, "server.bind", "must not be empty");
    } else if config.server.bind == "0.0.0.0" {
        result.push(
            Severity::Warning,
            "server.bind",
            "listening on all interfaces",
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let result = validate(&SkillrouteConfig::default());
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn empty_no_match_code_is_error() {
        let mut cfg = SkillrouteConfig::default();
        cfg.slots.no_match_code = "  ".into();
        let result = validate(&cfg);
        assert!(result.has_errors());
        assert_eq!(result.diagnostics[0].path, "slots.no_match_code");
    }

    #[test]
    fn relative_path_and_zero_port() {
        let mut cfg = SkillrouteConfig::default();
        cfg.server.port = 0;
        cfg.server.path = "skill".into();
        let paths: Vec<_> = validate(&cfg).diagnostics.iter().map(|d| d.path).collect();
        assert_eq!(paths, vec!["server.port", "server.path"]);
    }

    #[test]
    fn wildcard_bind_is_only_a_warning() {
        let mut cfg = SkillrouteConfig::default();
        cfg.server.bind = "0.0.0.0".into();
        let result = validate(&cfg);
        assert!(!result.has_errors());
        assert_eq!(
            result.diagnostics[0].to_string(),
            "warning: server.bind: listening on all interfaces"
        );
    }
}
