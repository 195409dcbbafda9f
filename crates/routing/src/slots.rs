use {
    async_trait::async_trait,
    skillroute_protocol::Event,
    skillroute_slots::{ResolutionPolicy, SlotMap, normalize_slots},
};

use crate::{
    Error, Result,
    handler::{Handler, Outcome},
};

/// Handler that receives the intent's slots already normalized.
///
/// A fresh [`SlotMap`] is built for every call and handed to the closure by
/// value. An intent without slots yields an empty map; an event without an
/// intent fails with [`Error::MissingIntent`].
pub struct SlotHandler<F> {
    policy: ResolutionPolicy,
    f: F,
}

/// Wrap `f` so it is called with `(event, slots)`, using the default
/// no-match code.
pub fn with_slots<F, Fut, R>(f: F) -> SlotHandler<F>
where
    F: Fn(Event, SlotMap) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<Outcome<R>>> + Send,
{
    with_slots_policy(ResolutionPolicy::default(), f)
}

pub fn with_slots_policy<F, Fut, R>(policy: ResolutionPolicy, f: F) -> SlotHandler<F>
where
    F: Fn(Event, SlotMap) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<Outcome<R>>> + Send,
{
    SlotHandler { policy, f }
}

#[async_trait]
impl<F, Fut, R> Handler<R> for SlotHandler<F>
where
    F: Fn(Event, SlotMap) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<Outcome<R>>> + Send,
    R: Send + 'static,
{
    async fn handle(&self, event: &Event) -> Result<Outcome<R>> {
        let intent = event.request.intent.as_ref().ok_or(Error::MissingIntent)?;
        let slots = match &intent.slots {
            Some(raw) => normalize_slots(raw, &self.policy)?,
            None => SlotMap::default(),
        };
        Ok((self.f)(event.clone(), slots).await?)
    }
}
