use std::sync::Arc;

use {async_trait::async_trait, skillroute_protocol::Event};

use crate::Result;

// ── Outcome ─────────────────────────────────────────────────────────────────

/// What a handler did with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<R> {
    /// The handler produced the response; dispatch stops here.
    Matched(R),
    /// The handler declined; dispatch moves to the next route.
    Skipped,
}

impl<R> Outcome<R> {
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    pub fn into_option(self) -> Option<R> {
        match self {
            Self::Matched(r) => Some(r),
            Self::Skipped => None,
        }
    }
}

impl<R> From<Option<R>> for Outcome<R> {
    fn from(value: Option<R>) -> Self {
        match value {
            Some(r) => Self::Matched(r),
            None => Self::Skipped,
        }
    }
}

// ── Handler trait ───────────────────────────────────────────────────────────

/// Anything the dispatcher can offer an event to.
///
/// Implementations must not assume they run at all: a dispatcher stops at the
/// first handler returning [`Outcome::Matched`].
#[async_trait]
pub trait Handler<R>: Send + Sync {
    async fn handle(&self, event: &Event) -> Result<Outcome<R>>;
}

#[async_trait]
impl<R, H> Handler<R> for Arc<H>
where
    H: Handler<R> + ?Sized,
    R: Send + 'static,
{
    async fn handle(&self, event: &Event) -> Result<Outcome<R>> {
        (**self).handle(event).await
    }
}

// ── Closure adapter ─────────────────────────────────────────────────────────

/// Handler backed by an async closure. See [`handler_fn`].
pub struct FnHandler<F> {
    f: F,
}

/// Wrap an async closure as a [`Handler`]. The closure receives its own
/// copy of the event.
pub fn handler_fn<F, Fut, R>(f: F) -> FnHandler<F>
where
    F: Fn(Event) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<Outcome<R>>> + Send,
{
    FnHandler { f }
}

#[async_trait]
impl<F, Fut, R> Handler<R> for FnHandler<F>
where
    F: Fn(Event) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<Outcome<R>>> + Send,
    R: Send + 'static,
{
    async fn handle(&self, event: &Event) -> Result<Outcome<R>> {
        Ok((self.f)(event.clone()).await?)
    }
}
