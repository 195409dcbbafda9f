use std::fmt;

use skillroute_protocol::{Event, RequestKind};

/// A side-effect-free test on an event.
pub trait Predicate: Send + Sync {
    fn matches(&self, event: &Event) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&Event) -> bool + Send + Sync,
{
    fn matches(&self, event: &Event) -> bool {
        self(event)
    }
}

/// Built-in predicates on the request kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestMatcher {
    Launch,
    SessionEnded,
    /// Intent request whose intent name equals the given one exactly.
    Intent(String),
}

impl Predicate for RequestMatcher {
    fn matches(&self, event: &Event) -> bool {
        match self {
            Self::Launch => event.kind() == RequestKind::Launch,
            Self::SessionEnded => event.kind() == RequestKind::SessionEnded,
            Self::Intent(name) => {
                event.kind() == RequestKind::Intent && event.intent_name() == Some(name.as_str())
            },
        }
    }
}

impl fmt::Display for RequestMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Launch => f.write_str("launch"),
            Self::SessionEnded => f.write_str("session_ended"),
            Self::Intent(name) => write!(f, "intent:{name}"),
        }
    }
}
