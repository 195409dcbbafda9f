use {async_trait::async_trait, skillroute_protocol::Event, tracing::trace};

use crate::{
    Result,
    handler::{Handler, Outcome},
    predicate::{Predicate, RequestMatcher},
};

/// A handler that only runs when its predicate accepts the event.
///
/// When the predicate rejects, the inner handler is never touched and the
/// result is [`Outcome::Skipped`]. Otherwise the inner result is returned
/// as-is, including its own `Skipped`.
pub struct Guarded<P, H> {
    predicate: P,
    handler: H,
}

impl<P, H> Guarded<P, H> {
    pub fn predicate(&self) -> &P {
        &self.predicate
    }
}

pub fn guard<P, H>(predicate: P, handler: H) -> Guarded<P, H> {
    Guarded { predicate, handler }
}

pub fn launch<H>(handler: H) -> Guarded<RequestMatcher, H> {
    guard(RequestMatcher::Launch, handler)
}

pub fn session_ended<H>(handler: H) -> Guarded<RequestMatcher, H> {
    guard(RequestMatcher::SessionEnded, handler)
}

pub fn intent<H>(name: impl Into<String>, handler: H) -> Guarded<RequestMatcher, H> {
    guard(RequestMatcher::Intent(name.into()), handler)
}

#[async_trait]
impl<P, H, R> Handler<R> for Guarded<P, H>
where
    P: Predicate,
    H: Handler<R>,
    R: Send + 'static,
{
    async fn handle(&self, event: &Event) -> Result<Outcome<R>> {
        if !self.predicate.matches(event) {
            trace!(kind = %event.kind(), "predicate rejected event");
            return Ok(Outcome::Skipped);
        }
        self.handler.handle(event).await
    }
}
